//! In-memory provider fakes for controller tests.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};

use roomboard_api::{ApiError, ApiResult, AvailabilityProvider, BoxFuture};
use roomboard_core::{Booking, Room};

/// Scripted outcome for a fetch.
#[derive(Debug, Clone)]
pub enum Outcome {
    Bookings(Vec<Booking>),
    Message(serde_json::Value),
    Fail,
}

/// Provider fake returning scripted outcomes and logging room queries.
///
/// Unscripted rooms resolve to an empty booking list; unscripted
/// messages fail.
#[derive(Debug, Default)]
pub struct FakeProvider {
    rooms: Mutex<HashMap<usize, Outcome>>,
    messages: Mutex<HashMap<String, Outcome>>,
    queried: Mutex<Vec<(usize, DateTime<Utc>)>>,
}

impl FakeProvider {
    pub fn set_room(&self, room: Room, outcome: Outcome) {
        self.rooms.lock().unwrap().insert(room.index(), outcome);
    }

    pub fn set_message(&self, id: &str, outcome: Outcome) {
        self.messages.lock().unwrap().insert(id.to_string(), outcome);
    }

    /// Returns every `(room index, date)` pair queried so far, in order.
    pub fn queried(&self) -> Vec<(usize, DateTime<Utc>)> {
        self.queried.lock().unwrap().clone()
    }
}

impl AvailabilityProvider for FakeProvider {
    fn fetch_room(
        &self,
        room: Room,
        date: DateTime<Utc>,
    ) -> BoxFuture<'_, ApiResult<Vec<Booking>>> {
        self.queried.lock().unwrap().push((room.index(), date));
        let outcome = self
            .rooms
            .lock()
            .unwrap()
            .get(&room.index())
            .cloned()
            .unwrap_or(Outcome::Bookings(Vec::new()));
        Box::pin(async move {
            match outcome {
                Outcome::Bookings(bookings) => Ok(bookings),
                Outcome::Message(_) => Ok(Vec::new()),
                Outcome::Fail => Err(ApiError::network("scripted failure")),
            }
        })
    }

    fn fetch_message<'a>(
        &'a self,
        message_id: &'a str,
    ) -> BoxFuture<'a, ApiResult<serde_json::Value>> {
        let outcome = self
            .messages
            .lock()
            .unwrap()
            .get(message_id)
            .cloned()
            .unwrap_or(Outcome::Fail);
        Box::pin(async move {
            match outcome {
                Outcome::Message(value) => Ok(value),
                Outcome::Bookings(_) => Err(ApiError::invalid_response("scripted shape mismatch")),
                Outcome::Fail => Err(ApiError::network("scripted failure")),
            }
        })
    }
}
