//! A navigable calendar whose month view is cached between reads.

use crate::booking::Booking;
use crate::booking_source::BookingSource;
use crate::calendar_math::YearMonth;
use crate::error::RoomCalResult;
use crate::grid::{CalendarView, build_calendar_view_localized};
use crate::locale::Locale;
use crate::navigation::NavigationState;

/// Everything the month view depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ViewKey {
    displayed: YearMonth,
    resource_filter: Option<String>,
    bookings_revision: u64,
    locale: Locale,
}

/// Navigation state, a bookings snapshot and the display options, with the
/// resulting [`CalendarView`] memoized on all of them.
///
/// Reading [`view`](CalendarSession::view) twice without changing anything
/// returns the same view without rebuilding it; any change to the inputs
/// makes the next read rebuild.
#[derive(Debug, Clone)]
pub struct CalendarSession {
    navigation: NavigationState,
    bookings: Vec<Booking>,
    bookings_revision: u64,
    resource_filter: Option<String>,
    locale: Locale,
    cached: Option<(ViewKey, CalendarView)>,
    rebuilds: u64,
}

impl CalendarSession {
    pub fn new(navigation: NavigationState, bookings: Vec<Booking>) -> Self {
        CalendarSession {
            navigation,
            bookings,
            bookings_revision: 0,
            resource_filter: None,
            locale: Locale::default(),
            cached: None,
            rebuilds: 0,
        }
    }

    pub fn with_resource_filter(mut self, resource_filter: Option<String>) -> Self {
        self.set_resource_filter(resource_filter);
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn navigation_mut(&mut self) -> &mut NavigationState {
        &mut self.navigation
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn resource_filter(&self) -> Option<&str> {
        self.resource_filter.as_deref()
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Replaces the bookings snapshot.
    pub fn set_bookings(&mut self, bookings: Vec<Booking>) {
        self.bookings = bookings;
        self.bookings_revision += 1;
    }

    /// Re-reads the whole snapshot from `source`.
    pub fn refresh(&mut self, source: &impl BookingSource) -> RoomCalResult<()> {
        let bookings = source.snapshot()?;
        self.set_bookings(bookings);
        Ok(())
    }

    /// Sets the resource filter; an empty name clears it.
    pub fn set_resource_filter(&mut self, resource_filter: Option<String>) {
        self.resource_filter = resource_filter.filter(|name| !name.is_empty());
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    /// How many times the view has been built. Reads served from the
    /// cache do not count.
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }

    fn key(&self) -> ViewKey {
        ViewKey {
            displayed: self.navigation.displayed(),
            resource_filter: self.resource_filter.clone(),
            bookings_revision: self.bookings_revision,
            locale: self.locale,
        }
    }

    /// The month view for the current inputs.
    pub fn view(&mut self) -> &CalendarView {
        let key = self.key();
        if self.cached.as_ref().is_some_and(|(cached_key, _)| *cached_key != key) {
            self.cached = None;
        }

        let (_, view) = self.cached.get_or_insert_with(|| {
            self.rebuilds += 1;
            tracing::trace!(displayed = %key.displayed, "rebuilding calendar view");
            let view = build_calendar_view_localized(
                key.displayed.year(),
                key.displayed.month() as i32,
                &self.bookings,
                key.resource_filter.as_deref(),
                self.navigation.today(),
                key.locale,
            );
            (key, view)
        });
        view
    }
}
