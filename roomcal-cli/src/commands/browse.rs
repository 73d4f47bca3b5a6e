use anyhow::Result;
use dialoguer::Select;
use roomcal_core::{BookingFile, BookingSource, CalendarSession, Locale, NavigationState, SystemClock};

use crate::render::CalendarViewRender;

#[derive(Clone, Copy)]
enum Action {
    NextMonth,
    PreviousMonth,
    NextYear,
    PreviousYear,
    Today,
    Reload,
    Quit,
}

const ACTIONS: [(Action, &str); 7] = [
    (Action::NextMonth, "Next month"),
    (Action::PreviousMonth, "Previous month"),
    (Action::NextYear, "Next year"),
    (Action::PreviousYear, "Previous year"),
    (Action::Today, "Today"),
    (Action::Reload, "Reload bookings"),
    (Action::Quit, "Quit"),
];

pub fn run(source: &BookingFile, resource: Option<String>, locale: Locale) -> Result<()> {
    let mut session = CalendarSession::new(NavigationState::from_clock(&SystemClock), source.snapshot()?)
        .with_resource_filter(resource)
        .with_locale(locale);

    let items: Vec<&str> = ACTIONS.iter().map(|(_, label)| *label).collect();
    let mut last = 0;

    loop {
        println!("{}\n", session.view().render(locale));

        last = Select::new()
            .with_prompt("  Go to")
            .items(&items)
            .default(last)
            .interact()?;

        match ACTIONS[last].0 {
            Action::NextMonth => session.navigation_mut().next_month(),
            Action::PreviousMonth => session.navigation_mut().previous_month(),
            Action::NextYear => session.navigation_mut().next_year(),
            Action::PreviousYear => session.navigation_mut().previous_year(),
            Action::Today => session.navigation_mut().reset_to_today(),
            Action::Reload => session.refresh(source)?,
            Action::Quit => return Ok(()),
        }
    }
}
