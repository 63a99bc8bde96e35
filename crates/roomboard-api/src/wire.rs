//! Wire types for the booking backend's JSON contract.
//!
//! The backend serves two endpoints:
//! - `GET /roomInfo/?roomNumber={int}&reservationDate={iso}` →
//!   [`RoomInfoResponse`]
//! - `GET /get_message_info?messageId={id}` → [`MessageInfoResponse`]
//!
//! Booking bounds arrive as strings in a handful of historical formats;
//! [`parse_timestamp_in`] normalizes them into UTC instants.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::Deserialize;

use roomboard_core::Booking;

use crate::error::{ApiError, ApiResult};

/// Response body for the room availability endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RoomInfoResponse {
    /// Occupied slots in backend order. Empty means "nothing booked",
    /// which is a valid state, not a failure.
    pub occupied_times: Vec<WireBooking>,
}

/// A booking as the backend serializes it.
#[derive(Debug, Clone, Deserialize)]
pub struct WireBooking {
    pub event_name: String,
    pub booking_name: String,
    pub start_time: String,
    pub end_time: String,
    /// Absent in some backend payloads.
    #[serde(default)]
    pub comment: String,
}

/// Response body for the message endpoint. The content is opaque.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageInfoResponse {
    pub message: serde_json::Value,
}

/// Offset-less timestamp formats the backend is known to emit.
///
/// The room endpoint writes naive local stamps without a date/time
/// separator (`%Y-%m-%d%H:%M`); the ISO-8601 variants cover older
/// payloads.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d%H:%M",
];

/// Parses a backend timestamp into a UTC instant.
///
/// RFC 3339 stamps keep their own offset; offset-less stamps are
/// interpreted in `tz`.
pub fn parse_timestamp_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> ApiResult<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return tz
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc))
                .ok_or_else(|| {
                    ApiError::invalid_response(format!("nonexistent local timestamp: {raw:?}"))
                });
        }
    }
    Err(ApiError::invalid_response(format!(
        "unparseable timestamp: {raw:?}"
    )))
}

impl WireBooking {
    /// Normalizes this wire record into a [`Booking`], interpreting
    /// offset-less bounds in `tz`.
    pub fn into_booking<Tz: TimeZone>(self, tz: &Tz) -> ApiResult<Booking> {
        let start_time = parse_timestamp_in(&self.start_time, tz)?;
        let end_time = parse_timestamp_in(&self.end_time, tz)?;
        Ok(Booking {
            event_name: self.event_name,
            booking_name: self.booking_name,
            start_time,
            end_time,
            comment: self.comment,
        })
    }
}
