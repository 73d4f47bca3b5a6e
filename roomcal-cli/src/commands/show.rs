use anyhow::{Context, Result};
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use roomcal_core::calendar_math::supported_years;
use roomcal_core::{
    BookingFile, BookingSource, Clock, Locale, SystemClock, YearMonth,
    build_calendar_view_localized,
};

use crate::render::CalendarViewRender;

pub fn run(
    source: &BookingFile,
    year: Option<i32>,
    month: Option<i32>,
    resource: Option<String>,
    locale: Locale,
    json: bool,
) -> Result<()> {
    let today = SystemClock.today();
    let displayed = resolve_month(year, month, today)?;

    let bookings = source.snapshot()?;
    let view = build_calendar_view_localized(
        displayed.year(),
        displayed.month() as i32,
        &bookings,
        resource.as_deref(),
        today,
        locale,
    );

    if json {
        let out = serde_json::to_string_pretty(&view).context("Could not serialize calendar")?;
        println!("{}", out);
        return Ok(());
    }

    if let Some(name) = &resource {
        println!("{}", format!("Resource: {}", name).dimmed());
    }
    println!("{}", view.render(locale));

    Ok(())
}

/// The month to show: the requested parts, falling back to today's.
/// Out-of-range values are rejected rather than rolled over.
fn resolve_month(year: Option<i32>, month: Option<i32>, today: NaiveDate) -> Result<YearMonth> {
    let current = YearMonth::from_date(today);
    let year = year.unwrap_or(current.year());
    let month = month.unwrap_or(current.month() as i32);

    if !(1..=12).contains(&month) {
        anyhow::bail!("Month must be between 1 and 12, got {}", month);
    }

    match YearMonth::try_new(year, month) {
        Some(ym) => Ok(ym),
        None => {
            let years = supported_years();
            anyhow::bail!(
                "Year must be between {} and {}, got {}",
                years.start(),
                years.end(),
                year
            );
        }
    }
}
