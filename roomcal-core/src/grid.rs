//! Month grid construction.
//!
//! A [`CalendarView`] is a pure function of the displayed month, a bookings
//! snapshot, an optional resource filter and the reference "today" date.
//! Rows are Monday-first weeks; days outside the displayed month pad the
//! first and last row.

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

use crate::booking::Booking;
use crate::calendar_math::{YearMonth, resolve_date};
use crate::locale::Locale;

/// Columns 5 and 6 (Saturday, Sunday) are weekend days.
const WEEKEND_COLUMNS: std::ops::RangeInclusive<u32> = 5..=6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    date: NaiveDate,
    day_of_month: u32,
    is_current_month: bool,
    is_today: bool,
    is_weekend: bool,
    is_busy: bool,
    bookings: Vec<Booking>,
}

impl DayCell {
    fn new(
        date: NaiveDate,
        is_current_month: bool,
        column: u32,
        today: NaiveDate,
        bookings: Vec<Booking>,
    ) -> Self {
        DayCell {
            date,
            day_of_month: date.day(),
            is_current_month,
            is_today: date == today,
            is_weekend: WEEKEND_COLUMNS.contains(&column),
            is_busy: !bookings.is_empty(),
            bookings,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn day_of_month(&self) -> u32 {
        self.day_of_month
    }

    pub fn is_current_month(&self) -> bool {
        self.is_current_month
    }

    pub fn is_today(&self) -> bool {
        self.is_today
    }

    pub fn is_weekend(&self) -> bool {
        self.is_weekend
    }

    pub fn is_busy(&self) -> bool {
        self.is_busy
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekRow {
    week_number: u32,
    days: [DayCell; 7],
}

impl WeekRow {
    /// ISO-8601 week number of this row.
    pub fn week_number(&self) -> u32 {
        self.week_number
    }

    /// The seven days of the week, Monday first.
    pub fn days(&self) -> &[DayCell; 7] {
        &self.days
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarView {
    year: i32,
    month: u32,
    month_name: String,
    weeks: Vec<WeekRow>,
}

impl CalendarView {
    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn month_name(&self) -> &str {
        &self.month_name
    }

    pub fn weeks(&self) -> &[WeekRow] {
        &self.weeks
    }

    /// All cells in row-major order.
    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flat_map(|week| week.days.iter())
    }

    /// Cells belonging to the displayed month.
    pub fn current_month_days(&self) -> impl Iterator<Item = &DayCell> {
        self.days().filter(|cell| cell.is_current_month)
    }

    /// Bookings attached to days of the displayed month, in date order.
    pub fn bookings(&self) -> impl Iterator<Item = &Booking> {
        self.current_month_days().flat_map(|cell| cell.bookings.iter())
    }

    pub fn today(&self) -> Option<&DayCell> {
        self.days().find(|cell| cell.is_today)
    }
}

/// Builds the month grid with English month names.
pub fn build_calendar_view(
    year: i32,
    month: i32,
    bookings: &[Booking],
    resource_filter: Option<&str>,
    today: NaiveDate,
) -> CalendarView {
    build_calendar_view_localized(year, month, bookings, resource_filter, today, Locale::default())
}

/// Builds the month grid for `month` of `year`.
///
/// `month` may lie outside 1..=12 and is rolled over into the neighbouring
/// years. A booking is attached to a cell when it falls on the cell's date
/// and, if `resource_filter` is given and non-empty, is for that resource.
pub fn build_calendar_view_localized(
    year: i32,
    month: i32,
    bookings: &[Booking],
    resource_filter: Option<&str>,
    today: NaiveDate,
    locale: Locale,
) -> CalendarView {
    let displayed = YearMonth::new(year, month);
    let previous = displayed.previous();
    let next = displayed.next();

    let days_in_month = displayed.days_in_month();
    let starting_weekday = displayed.starting_weekday();
    let previous_month_days = previous.days_in_month();
    let rows = (days_in_month + starting_weekday).div_ceil(7);

    // Narrow the snapshot once instead of rescanning it for every cell.
    let grid_start = displayed.first_day() - Days::new(u64::from(starting_weekday));
    let grid_end = grid_start + Days::new(u64::from(rows * 7 - 1));
    let relevant: Vec<&Booking> = bookings
        .iter()
        .filter(|b| (grid_start..=grid_end).contains(&b.date))
        .collect();
    let bookings_on = |date: NaiveDate| -> Vec<Booking> {
        relevant
            .iter()
            .filter(|b| b.matches(date, resource_filter))
            .map(|b| (*b).clone())
            .collect()
    };

    let mut day = 1;
    let weeks: Vec<WeekRow> = (0..rows)
        .map(|row| {
            let mut week_number = None;
            let days: [DayCell; 7] = std::array::from_fn(|column| {
                let column = column as u32;
                let (date, is_current_month) = if row == 0 && column < starting_weekday {
                    let leading = previous_month_days - (starting_weekday - column - 1);
                    (date_in(previous, leading), false)
                } else if day > days_in_month {
                    let trailing = date_in(next, day - days_in_month);
                    day += 1;
                    (trailing, false)
                } else {
                    let current = date_in(displayed, day);
                    week_number = Some(current.iso_week().week());
                    day += 1;
                    (current, true)
                };
                DayCell::new(date, is_current_month, column, today, bookings_on(date))
            });

            // Every row holds at least one day of the displayed month, and all
            // seven days of a Monday-first row share one ISO week anyway.
            let week_number = week_number.unwrap_or_else(|| days[0].date.iso_week().week());
            WeekRow { week_number, days }
        })
        .collect();

    tracing::debug!(
        month = %displayed,
        rows,
        in_range = relevant.len(),
        filter = resource_filter.unwrap_or(""),
        "built calendar view"
    );

    CalendarView {
        year: displayed.year(),
        month: displayed.month(),
        month_name: locale.month_name(displayed.month()).to_string(),
        weeks,
    }
}

fn date_in(ym: YearMonth, day: u32) -> NaiveDate {
    resolve_date(ym.year(), ym.month() as i32, day as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_bookings() -> Vec<Booking> {
        vec![
            Booking::new(date(2025, 1, 1), "Veslestua", "Ola Nordmann", false),
            Booking::new(date(2025, 1, 31), "Fellesrommet", "Kari Nordmann", true),
        ]
    }

    fn cell(view: &CalendarView, d: NaiveDate) -> &DayCell {
        view.days().find(|c| c.date() == d).unwrap()
    }

    // --- layout ---

    #[test]
    fn january_2025_layout() {
        let view = build_calendar_view(2025, 1, &[], None, date(2025, 1, 15));

        assert_eq!(view.month_name(), "January");
        assert_eq!(view.year(), 2025);
        assert_eq!(view.month(), 1);
        assert_eq!(view.weeks().len(), 5);

        let first = &view.weeks()[0];
        assert_eq!(first.week_number(), 1);
        let numbers: Vec<u32> = first.days().iter().map(|c| c.day_of_month()).collect();
        assert_eq!(numbers, vec![30, 31, 1, 2, 3, 4, 5]);
        let current: Vec<bool> = first.days().iter().map(|c| c.is_current_month()).collect();
        assert_eq!(current, vec![false, false, true, true, true, true, true]);
        assert_eq!(first.days()[0].date(), date(2024, 12, 30));
    }

    #[test]
    fn trailing_days_roll_into_next_year() {
        // December 2024 starts on a Sunday and needs six rows
        let view = build_calendar_view(2024, 12, &[], None, date(2024, 12, 1));
        assert_eq!(view.weeks().len(), 6);

        let first = &view.weeks()[0];
        assert_eq!(first.days()[0].date(), date(2024, 11, 25));
        assert_eq!(first.days()[6].date(), date(2024, 12, 1));
        assert_eq!(first.week_number(), 48);

        let last = &view.weeks()[5];
        let numbers: Vec<u32> = last.days().iter().map(|c| c.day_of_month()).collect();
        assert_eq!(numbers, vec![30, 31, 1, 2, 3, 4, 5]);
        assert_eq!(last.days()[2].date(), date(2025, 1, 1));
        assert_eq!(last.week_number(), 1);
    }

    #[test]
    fn february_starting_on_monday_has_four_rows() {
        let view = build_calendar_view(2021, 2, &[], None, date(2021, 2, 1));
        assert_eq!(view.weeks().len(), 4);
        assert!(view.days().all(|c| c.is_current_month()));
    }

    #[test]
    fn january_2021_first_row_is_week_53() {
        let view = build_calendar_view(2021, 1, &[], None, date(2021, 1, 1));
        assert_eq!(view.weeks()[0].week_number(), 53);
        assert_eq!(view.weeks()[1].week_number(), 1);
    }

    #[test]
    fn leap_february_leading_days() {
        // March 2024 starts on a Friday; the leading days end at Feb 29
        let view = build_calendar_view(2024, 3, &[], None, date(2024, 3, 1));
        let leading: Vec<u32> = view.weeks()[0]
            .days()
            .iter()
            .take_while(|c| !c.is_current_month())
            .map(|c| c.day_of_month())
            .collect();
        assert_eq!(leading, vec![26, 27, 28, 29]);
    }

    #[test]
    fn month_arguments_roll_over() {
        let today = date(2025, 6, 1);
        assert_eq!(
            build_calendar_view(2025, 0, &[], None, today),
            build_calendar_view(2024, 12, &[], None, today)
        );
        assert_eq!(
            build_calendar_view(2025, 13, &[], None, today),
            build_calendar_view(2026, 1, &[], None, today)
        );
    }

    #[test]
    fn localized_month_name() {
        let view = build_calendar_view_localized(
            2025,
            5,
            &[],
            None,
            date(2025, 5, 1),
            Locale::NorwegianBokmal,
        );
        assert_eq!(view.month_name(), "mai");
    }

    // --- invariants over many months ---

    #[test]
    fn every_grid_is_well_formed() {
        let today = date(2000, 1, 1);
        for year in 1890..=2110 {
            for month in 1..=12 {
                let view = build_calendar_view(year, month, &[], None, today);
                let rows = view.weeks().len();
                assert!((4..=6).contains(&rows), "{year}-{month}: {rows} rows");

                let current: Vec<u32> = view.current_month_days().map(|c| c.day_of_month()).collect();
                let expected: Vec<u32> = (1..=YearMonth::new(year, month).days_in_month()).collect();
                assert_eq!(current, expected, "{year}-{month}");

                // cells are consecutive calendar days
                let dates: Vec<NaiveDate> = view.days().map(|c| c.date()).collect();
                for pair in dates.windows(2) {
                    assert_eq!(pair[0].succ_opt(), Some(pair[1]), "{year}-{month}");
                }

                for week in view.weeks() {
                    assert!(
                        week.days().iter().any(|c| c.is_current_month()),
                        "{year}-{month}: row without a day of the month"
                    );
                    assert_eq!(week.week_number(), week.days()[0].date().iso_week().week());
                    assert_eq!(week.days()[0].date().weekday(), chrono::Weekday::Mon);
                    for (column, c) in week.days().iter().enumerate() {
                        assert_eq!(c.is_weekend(), column == 5 || column == 6);
                    }
                }
            }
        }
    }

    // --- today ---

    #[test]
    fn exactly_one_today_inside_displayed_month() {
        let view = build_calendar_view(2025, 1, &[], None, date(2025, 1, 15));
        let todays: Vec<&DayCell> = view.days().filter(|c| c.is_today()).collect();
        assert_eq!(todays.len(), 1);
        assert_eq!(todays[0].day_of_month(), 15);
        assert!(todays[0].is_current_month());
        assert_eq!(view.today().map(|c| c.date()), Some(date(2025, 1, 15)));
    }

    #[test]
    fn no_today_when_outside_grid() {
        let view = build_calendar_view(2025, 1, &[], None, date(2025, 6, 15));
        assert_eq!(view.days().filter(|c| c.is_today()).count(), 0);
        assert!(view.today().is_none());
    }

    #[test]
    fn today_on_leading_padding_day() {
        let view = build_calendar_view(2025, 1, &[], None, date(2024, 12, 31));
        let marked: Vec<(NaiveDate, bool)> = view
            .days()
            .filter(|c| c.is_today())
            .map(|c| (c.date(), c.is_current_month()))
            .collect();
        assert_eq!(marked, vec![(date(2024, 12, 31), false)]);
    }

    #[test]
    fn today_on_trailing_padding_day() {
        let view = build_calendar_view(2024, 12, &[], None, date(2025, 1, 2));
        let marked: Vec<(NaiveDate, bool)> = view
            .days()
            .filter(|c| c.is_today())
            .map(|c| (c.date(), c.is_current_month()))
            .collect();
        assert_eq!(marked, vec![(date(2025, 1, 2), false)]);
    }

    // --- bookings ---

    #[test]
    fn resource_filter_excludes_other_rooms() {
        let bookings = sample_bookings();
        let today = date(2025, 1, 15);

        let filtered = build_calendar_view(2025, 1, &bookings, Some("Veslestua"), today);
        let jan31 = cell(&filtered, date(2025, 1, 31));
        assert!(jan31.bookings().is_empty());
        assert!(!jan31.is_busy());

        for filter in [None, Some("Fellesrommet")] {
            let view = build_calendar_view(2025, 1, &bookings, filter, today);
            let jan31 = cell(&view, date(2025, 1, 31));
            assert_eq!(jan31.bookings().len(), 1);
            assert_eq!(jan31.bookings()[0].owner_name, "Kari Nordmann");
            assert!(jan31.is_busy());
        }
    }

    #[test]
    fn busy_mirrors_bookings() {
        let bookings = sample_bookings();
        let view = build_calendar_view(2025, 1, &bookings, None, date(2025, 1, 15));
        for c in view.days() {
            assert_eq!(c.is_busy(), !c.bookings().is_empty());
        }
        assert_eq!(view.days().filter(|c| c.is_busy()).count(), 2);
        assert_eq!(view.bookings().count(), 2);
    }

    #[test]
    fn bookings_attach_to_padding_days() {
        let bookings = sample_bookings();
        // February 2025 starts on a Saturday, so Jan 27-31 pad the first row
        let view = build_calendar_view(2025, 2, &bookings, None, date(2025, 2, 1));
        let jan31 = cell(&view, date(2025, 1, 31));
        assert!(!jan31.is_current_month());
        assert!(jan31.is_busy());
        // padding bookings are not listed as bookings of the month
        assert_eq!(view.bookings().count(), 0);
    }

    #[test]
    fn bookings_keep_snapshot_order() {
        let day = date(2025, 3, 10);
        let bookings = vec![
            Booking::new(day, "Veslestua", "B", false),
            Booking::new(day, "Fellesrommet", "A", false),
            Booking::new(day, "Veslestua", "C", true),
        ];
        let view = build_calendar_view(2025, 3, &bookings, None, day);
        let owners: Vec<&str> = cell(&view, day)
            .bookings()
            .iter()
            .map(|b| b.owner_name.as_str())
            .collect();
        assert_eq!(owners, vec!["B", "A", "C"]);

        let view = build_calendar_view(2025, 3, &bookings, Some("Veslestua"), day);
        assert_eq!(cell(&view, day).bookings().len(), 2);
    }

    #[test]
    fn same_day_in_other_year_does_not_attach() {
        let bookings = vec![Booking::new(date(2024, 1, 31), "Fellesrommet", "X", false)];
        let view = build_calendar_view(2025, 1, &bookings, None, date(2025, 1, 1));
        assert!(!cell(&view, date(2025, 1, 31)).is_busy());
    }

    #[test]
    fn empty_filter_behaves_like_no_filter() {
        let bookings = sample_bookings();
        let today = date(2025, 1, 15);
        assert_eq!(
            build_calendar_view(2025, 1, &bookings, Some(""), today),
            build_calendar_view(2025, 1, &bookings, None, today)
        );
    }
}
