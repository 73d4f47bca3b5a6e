//! Terminal rendering for roomcal-core types.
//!
//! Extension traits that add colored output to the core types using
//! owo_colors.

use chrono::Datelike;
use owo_colors::OwoColorize;
use roomcal_core::{Booking, CalendarView, DayCell, Locale};

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for DayCell {
    /// Day number plus a `*` marker when booked.
    fn render(&self) -> String {
        let day = format!("{:>2}", self.day_of_month());
        let mut text = if !self.is_current_month() {
            day.dimmed().to_string()
        } else if self.is_busy() {
            day.yellow().bold().to_string()
        } else if self.is_weekend() {
            day.red().to_string()
        } else {
            day
        };

        if self.is_today() {
            text = text.reversed().to_string();
        }

        let marker = if self.is_busy() { "*" } else { " " };
        format!("{}{}", text, marker.yellow())
    }
}

impl Render for Booking {
    fn render(&self) -> String {
        let owner = match self.public_owner() {
            Some(name) => name.to_string(),
            None => "(private)".dimmed().to_string(),
        };
        format!("{}  {}", self.resource_name.bold(), owner)
    }
}

/// Month rendering needs the locale for weekday headers.
pub trait CalendarViewRender {
    fn render(&self, locale: Locale) -> String;
}

impl CalendarViewRender for CalendarView {
    fn render(&self, locale: Locale) -> String {
        let mut lines = Vec::new();

        let title = format!("{} {}", self.month_name(), self.year());
        lines.push(format!("     {}", title.bold()));

        let headers: Vec<String> = locale
            .weekday_abbreviations()
            .iter()
            .map(|abbr| format!("{:>2} ", abbr))
            .collect();
        lines.push(
            format!("{:>3}  {}", locale.week_label(), headers.join(" "))
                .dimmed()
                .to_string(),
        );

        for week in self.weeks() {
            let days: Vec<String> = week.days().iter().map(Render::render).collect();
            let number = format!("{:>3}", week.week_number());
            lines.push(format!("{}  {}", number.dimmed(), days.join(" ")));
        }

        lines.push(String::new());
        lines.extend(render_booking_list(self, locale));

        lines.join("\n")
    }
}

/// One line per booking on a day of the displayed month.
fn render_booking_list(view: &CalendarView, locale: Locale) -> Vec<String> {
    let busy: Vec<&DayCell> = view
        .current_month_days()
        .filter(|cell| cell.is_busy())
        .collect();

    if busy.is_empty() {
        return vec!["   No bookings this month".dimmed().to_string()];
    }

    let weekdays = locale.weekday_abbreviations();
    let mut lines = Vec::new();
    for cell in busy {
        let weekday = weekdays[cell.date().weekday().num_days_from_monday() as usize];
        let label = format!("{} {:>2}", weekday, cell.day_of_month());
        for booking in cell.bookings() {
            lines.push(format!("   {}  {}", label.bold(), booking.render()));
        }
    }
    lines
}
