//! Core types: rooms, bookings, time status, display formatting

pub mod booking;
pub mod format;
pub mod room;
pub mod status;
pub mod tracing;

pub use booking::Booking;
pub use format::{
    BookingEntry, BookingFormatter, FormatOptions, JsonBoard, JsonBookingEntry, JsonRoom,
    OutputFormat, TimeFormat,
};
pub use room::Room;
pub use status::{StatusColor, TimeStatus};
pub use tracing::{init_tracing, TracingConfig, TracingError, TracingOutputFormat};
