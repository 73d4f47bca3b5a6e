//! Core types for roomcal.
//!
//! - [`grid`] builds the Monday-first month grid with bookings attached
//! - [`navigation`] tracks which month is on display
//! - [`calendar_math`] holds the Gregorian and ISO-week arithmetic
//! - [`session`] ties the two together with a cached view

pub mod booking;
pub mod booking_source;
pub mod calendar_math;
pub mod clock;
pub mod config;
pub mod error;
pub mod grid;
pub mod locale;
pub mod navigation;
pub mod session;

pub use booking::Booking;
pub use booking_source::{BookingFile, BookingSource, InMemoryBookings};
pub use calendar_math::YearMonth;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{RoomCalError, RoomCalResult};
pub use grid::{CalendarView, DayCell, WeekRow, build_calendar_view, build_calendar_view_localized};
pub use locale::Locale;
pub use navigation::NavigationState;
pub use session::CalendarSession;
