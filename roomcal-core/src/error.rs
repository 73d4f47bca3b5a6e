//! Error types for roomcal.
//!
//! Only the edges that touch the filesystem can fail. Grid building,
//! calendar math and navigation are infallible.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading configuration or bookings.
#[derive(Error, Debug)]
pub enum RoomCalError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Could not read bookings from {}: {message}", path.display())]
    BookingSource { path: PathBuf, message: String },

    #[error("Unknown locale '{0}'. Expected one of: en, nb")]
    UnknownLocale(String),
}

/// Result type alias for roomcal operations.
pub type RoomCalResult<T> = Result<T, RoomCalError>;
