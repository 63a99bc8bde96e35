//! AvailabilityProvider trait definition.
//!
//! The trait is the seam between the controllers and the backend: the
//! production implementation is [`HttpAvailabilityClient`], and tests
//! substitute in-memory fakes.
//!
//! [`HttpAvailabilityClient`]: crate::client::HttpAvailabilityClient

use std::future::Future;
use std::pin::Pin;

use chrono::{DateTime, Utc};

use roomboard_core::{Booking, Room};

use crate::error::ApiResult;

/// A boxed future for async trait methods.
///
/// Boxed futures keep the trait object-safe, so controllers can hold an
/// `Arc<dyn AvailabilityProvider>`.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The abstraction over the booking backend.
///
/// Implementations issue one best-effort request per invocation: no
/// retries, no caller-visible timeout knobs. Failures are returned, never
/// swallowed here; the swallow-and-keep-prior-content policy belongs to
/// the callers.
pub trait AvailabilityProvider: Send + Sync {
    /// Fetches the occupied slots for one room on one date.
    ///
    /// A date with nothing booked resolves to `Ok` with an empty list,
    /// distinct from a failure.
    fn fetch_room(
        &self,
        room: Room,
        date: DateTime<Utc>,
    ) -> BoxFuture<'_, ApiResult<Vec<Booking>>>;

    /// Fetches a message body by identifier.
    fn fetch_message<'a>(
        &'a self,
        message_id: &'a str,
    ) -> BoxFuture<'a, ApiResult<serde_json::Value>>;
}
