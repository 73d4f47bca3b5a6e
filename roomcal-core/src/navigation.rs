//! The month currently on display and the moves between months.

use chrono::NaiveDate;

use crate::calendar_math::YearMonth;
use crate::clock::Clock;

/// Which month the calendar shows.
///
/// "Today" is sampled once when the state is created, so jumping back to
/// it always lands on the same month for the lifetime of the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    displayed: YearMonth,
    today: NaiveDate,
}

impl NavigationState {
    /// Starts on the month containing `today`.
    pub fn new(today: NaiveDate) -> Self {
        NavigationState {
            displayed: YearMonth::from_date(today),
            today,
        }
    }

    pub fn from_clock(clock: &impl Clock) -> Self {
        Self::new(clock.today())
    }

    /// Starts on an arbitrary month, keeping `today` for [`reset_to_today`].
    ///
    /// [`reset_to_today`]: NavigationState::reset_to_today
    pub fn starting_at(year: i32, month: i32, today: NaiveDate) -> Self {
        NavigationState {
            displayed: YearMonth::new(year, month),
            today,
        }
    }

    pub fn year(&self) -> i32 {
        self.displayed.year()
    }

    pub fn month(&self) -> u32 {
        self.displayed.month()
    }

    pub fn displayed(&self) -> YearMonth {
        self.displayed
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Moves by `delta` months, carrying into the year at either end.
    pub fn advance_month(&mut self, delta: i32) {
        self.displayed = self.displayed.offset_months(delta);
        tracing::trace!(displayed = %self.displayed, delta, "advanced month");
    }

    /// Moves by `delta` years; the month stays the same.
    pub fn advance_year(&mut self, delta: i32) {
        self.displayed = self.displayed.offset_years(delta);
        tracing::trace!(displayed = %self.displayed, delta, "advanced year");
    }

    pub fn next_month(&mut self) {
        self.advance_month(1);
    }

    pub fn previous_month(&mut self) {
        self.advance_month(-1);
    }

    pub fn next_year(&mut self) {
        self.advance_year(1);
    }

    pub fn previous_year(&mut self) {
        self.advance_year(-1);
    }

    pub fn reset_to_today(&mut self) {
        self.displayed = YearMonth::from_date(self.today);
    }
}
