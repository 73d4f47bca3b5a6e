//! Proleptic Gregorian calendar arithmetic.
//!
//! Every function here is total: month and day arguments outside their
//! usual ranges roll over into neighbouring months and years, so callers
//! doing navigation arithmetic never have to normalize first.

use std::fmt;
use std::ops::RangeInclusive;

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::locale::Locale;

/// Returns true for Gregorian leap years.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`. The month is normalized first,
/// so `days_in_month(2025, 0)` is the length of December 2024.
pub fn days_in_month(year: i32, month: i32) -> u32 {
    let ym = YearMonth::new(year, month);
    month_length(ym.year, ym.month)
}

fn month_length(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Builds a date from possibly out-of-range parts, rolling over like a
/// wall calendar: day 0 is the last day of the previous month and
/// `resolve_date(2025, 13, 1)` is 2026-01-01.
pub fn resolve_date(year: i32, month: i32, day: i32) -> NaiveDate {
    let first = YearMonth::new(year, month).first_day();
    let offset = Duration::days(i64::from(day) - 1);
    first.checked_add_signed(offset).unwrap_or(if offset > Duration::zero() {
        NaiveDate::MAX
    } else {
        NaiveDate::MIN
    })
}

/// ISO weekday of the given date, 1 = Monday through 7 = Sunday.
pub fn iso_weekday(year: i32, month: i32, day: i32) -> u32 {
    resolve_date(year, month, day).weekday().number_from_monday()
}

/// ISO-8601 week number of the given date.
///
/// Week 1 is the week holding the year's first Thursday, so early January
/// can belong to week 52 or 53 and late December to week 1.
pub fn iso_week_number(year: i32, month: i32, day: i32) -> u32 {
    resolve_date(year, month, day).iso_week().week()
}

/// Full, localized name of the (normalized) month.
pub fn month_name(year: i32, month: i32, locale: Locale) -> &'static str {
    locale.month_name(YearMonth::new(year, month).month)
}

/// Years a [`YearMonth`] can hold: chrono's range minus one year at each
/// end, so the padding days of the grid stay representable.
pub fn supported_years() -> RangeInclusive<i32> {
    (NaiveDate::MIN.year() + 1)..=(NaiveDate::MAX.year() - 1)
}

/// A normalized (year, month) pair.
///
/// Years are clamped so that the whole month, plus the week before and
/// after it, stays inside chrono's representable range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Normalizes `month` into 1..=12, carrying whole years into `year`.
    pub fn new(year: i32, month: i32) -> Self {
        Self::from_index(i64::from(year) * 12 + i64::from(month) - 1)
    }

    /// Like [`YearMonth::new`] but without rollover or clamping: `None`
    /// unless `month` is 1..=12 and `year` is in [`supported_years`].
    pub fn try_new(year: i32, month: i32) -> Option<Self> {
        let valid = (1..=12).contains(&month) && supported_years().contains(&year);
        valid.then(|| YearMonth::new(year, month))
    }

    pub fn from_date(date: NaiveDate) -> Self {
        YearMonth {
            year: date.year(),
            month: date.month(),
        }
    }

    fn from_index(index: i64) -> Self {
        let years = supported_years();
        let year = index
            .div_euclid(12)
            .clamp(i64::from(*years.start()), i64::from(*years.end()));
        let month = index.rem_euclid(12) + 1;

        YearMonth {
            year: year as i32,
            month: month as u32,
        }
    }

    fn index(self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month) - 1
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    pub fn offset_months(self, delta: i32) -> Self {
        Self::from_index(self.index() + i64::from(delta))
    }

    pub fn offset_years(self, delta: i32) -> Self {
        Self::from_index(self.index() + i64::from(delta) * 12)
    }

    pub fn previous(self) -> Self {
        self.offset_months(-1)
    }

    pub fn next(self) -> Self {
        self.offset_months(1)
    }

    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .expect("year is clamped to chrono's supported range")
    }

    pub fn days_in_month(self) -> u32 {
        month_length(self.year, self.month)
    }

    /// Weekday of the 1st with Monday = 0 through Sunday = 6.
    pub fn starting_weekday(self) -> u32 {
        self.first_day().weekday().num_days_from_monday()
    }

    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
