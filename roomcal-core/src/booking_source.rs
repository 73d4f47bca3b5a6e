//! Read-only sources of booking snapshots.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::booking::Booking;
use crate::error::{RoomCalError, RoomCalResult};

/// Supplies the full set of bookings to display.
///
/// Implementations reject malformed records; everything they return is
/// taken at face value by the grid.
pub trait BookingSource {
    fn snapshot(&self) -> RoomCalResult<Vec<Booking>>;
}

/// Bookings held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBookings(pub Vec<Booking>);

impl BookingSource for InMemoryBookings {
    fn snapshot(&self) -> RoomCalResult<Vec<Booking>> {
        Ok(self.0.clone())
    }
}

/// On-disk layout of a bookings file.
#[derive(Deserialize, Default)]
struct BookingDocument {
    #[serde(default)]
    bookings: Vec<Booking>,
}

/// Bookings stored in a TOML file (`[[bookings]]` tables) or, when the
/// extension is `.json`, a JSON object with a `bookings` array.
#[derive(Debug, Clone)]
pub struct BookingFile {
    path: PathBuf,
}

impl BookingFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        BookingFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_json(&self) -> bool {
        self.path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
    }

    fn error(&self, message: impl ToString) -> RoomCalError {
        RoomCalError::BookingSource {
            path: self.path.clone(),
            message: message.to_string(),
        }
    }
}

impl BookingSource for BookingFile {
    /// A missing file means nothing is booked yet.
    fn snapshot(&self) -> RoomCalResult<Vec<Booking>> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "bookings file not found, using empty snapshot");
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| self.error(e))?;

        let document: BookingDocument = if self.is_json() {
            serde_json::from_str(&content).map_err(|e| self.error(e))?
        } else {
            toml::from_str(&content).map_err(|e| self.error(e))?
        };

        tracing::debug!(
            path = %self.path.display(),
            count = document.bookings.len(),
            "loaded bookings"
        );
        Ok(document.bookings)
    }
}
