//! Bookings of shared resources (rooms, halls, ...).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single-day reservation of a named resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Booking {
    pub date: NaiveDate,
    #[serde(rename = "resource")]
    pub resource_name: String,
    #[serde(rename = "owner")]
    pub owner_name: String,
    #[serde(rename = "private", default)]
    pub is_private: bool,
}

impl Booking {
    pub fn new(
        date: NaiveDate,
        resource_name: impl Into<String>,
        owner_name: impl Into<String>,
        is_private: bool,
    ) -> Self {
        Booking {
            date,
            resource_name: resource_name.into(),
            owner_name: owner_name.into(),
            is_private,
        }
    }

    /// Whether this booking should be shown on `date` under `resource_filter`.
    ///
    /// An absent or empty filter matches every resource.
    pub fn matches(&self, date: NaiveDate, resource_filter: Option<&str>) -> bool {
        self.date == date && self.is_for_resource(resource_filter)
    }

    pub fn is_for_resource(&self, resource_filter: Option<&str>) -> bool {
        match resource_filter {
            Some(name) if !name.is_empty() => self.resource_name == name,
            _ => true,
        }
    }

    /// Owner name, or `None` when the booking is private.
    pub fn public_owner(&self) -> Option<&str> {
        (!self.is_private).then_some(self.owner_name.as_str())
    }
}
