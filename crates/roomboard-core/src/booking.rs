//! Booking types.
//!
//! A [`Booking`] is the canonical representation of an occupied time slot
//! after normalization from the backend's wire format. Bookings are
//! received read-only per fetch and replaced wholesale on the next
//! refresh; nothing here mutates or persists them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::status::TimeStatus;

/// A reserved time interval in a room, with event and assignee metadata.
///
/// `start_time <= end_time` is trusted input from the backend and is not
/// enforced client-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// The event title.
    pub event_name: String,
    /// Who the room is booked for.
    pub booking_name: String,
    /// When the booking starts.
    pub start_time: DateTime<Utc>,
    /// When the booking ends.
    pub end_time: DateTime<Utc>,
    /// Free-form comment; empty when none was given.
    #[serde(default)]
    pub comment: String,
}

impl Booking {
    /// Creates a booking with an empty comment.
    pub fn new(
        event_name: impl Into<String>,
        booking_name: impl Into<String>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Self {
        Self {
            event_name: event_name.into(),
            booking_name: booking_name.into(),
            start_time,
            end_time,
            comment: String::new(),
        }
    }

    /// Builder method to set the comment.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Returns `true` if the booking carries a non-empty comment.
    pub fn has_comment(&self) -> bool {
        !self.comment.is_empty()
    }

    /// Returns the booking duration in minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }

    /// Classifies this booking's interval against `now`.
    pub fn status_at(&self, now: DateTime<Utc>) -> TimeStatus {
        TimeStatus::classify(now, self.start_time, self.end_time)
    }
}
