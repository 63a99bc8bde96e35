//! HTTP boundary for the booking backend.
//!
//! This crate owns everything that touches the wire: the backend's JSON
//! contract ([`wire`]), timestamp normalization, the object-safe
//! [`AvailabilityProvider`] abstraction, and the `reqwest`-based
//! [`HttpAvailabilityClient`].

pub mod client;
pub mod error;
pub mod provider;
pub mod wire;

pub use client::HttpAvailabilityClient;
pub use error::{ApiError, ApiErrorCode, ApiResult};
pub use provider::{AvailabilityProvider, BoxFuture};
pub use wire::{MessageInfoResponse, RoomInfoResponse, WireBooking, parse_timestamp_in};
