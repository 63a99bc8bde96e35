//! Display formatting for room bookings.
//!
//! This module turns [`Booking`]s into display-ready records and renders
//! them for two outputs:
//! - **TTY**: indented per-room sections with ANSI-colored time ranges
//! - **JSON**: machine-readable board output
//!
//! Formatting is pure: the same booking and the same "now" always produce
//! the same record. The status color is the only time-dependent field and
//! is recomputed at render time.

use std::fmt;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::booking::Booking;
use crate::room::Room;
use crate::status::{ANSI_RESET, StatusColor, TimeStatus};

/// Time format preference for range labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeFormat {
    /// 24-hour format (e.g., "14:30").
    #[default]
    H24,
    /// 12-hour format with AM/PM (e.g., "02:30 PM").
    H12,
}

impl TimeFormat {
    fn strftime(&self) -> &'static str {
        match self {
            Self::H24 => "%H:%M",
            Self::H12 => "%I:%M %p",
        }
    }
}

/// The output format for board display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable terminal output.
    #[default]
    Tty,
    /// Machine-readable JSON output.
    Json,
}

/// Configuration options for display formatting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatOptions {
    /// Time format for range labels (hour and minute, no seconds).
    pub time_format: TimeFormat,
    /// strftime pattern for the date label (date only, no time component).
    pub date_format: String,
    /// Text shown when a room has no bookings.
    pub no_bookings_text: String,
    /// Whether TTY output carries ANSI colors.
    pub color: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            time_format: TimeFormat::H24,
            date_format: "%Y-%m-%d".to_string(),
            no_bookings_text: "No bookings.".to_string(),
            color: true,
        }
    }
}

/// A display-ready record for one booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingEntry {
    /// The event title.
    pub event_name: String,
    /// Who the room is booked for.
    pub booking_name: String,
    /// `"{start} - {end}"`, hour:minute in the display timezone.
    pub time_range: String,
    /// Status color derived from the interval and the render-time clock.
    pub color: StatusColor,
    /// Comment payload; `Some` iff the booking carries a non-empty comment.
    /// Drives the info affordance in the view layer.
    pub comment: Option<String>,
}

impl BookingEntry {
    /// Returns `true` if this entry carries a comment payload.
    pub fn has_comment(&self) -> bool {
        self.comment.is_some()
    }
}

/// Formats bookings into display records and terminal lines.
#[derive(Debug, Clone, Default)]
pub struct BookingFormatter {
    options: FormatOptions,
}

impl BookingFormatter {
    /// Creates a formatter with the given options.
    pub fn new(options: FormatOptions) -> Self {
        Self { options }
    }

    /// Returns the formatter options.
    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Builds the display record for one booking.
    ///
    /// Times are rendered in `tz`; the status color is classified against
    /// `now`.
    pub fn entry<Tz: TimeZone>(&self, booking: &Booking, now: DateTime<Utc>, tz: &Tz) -> BookingEntry
    where
        Tz::Offset: fmt::Display,
    {
        let pattern = self.options.time_format.strftime();
        let start = booking.start_time.with_timezone(tz).format(pattern);
        let end = booking.end_time.with_timezone(tz).format(pattern);
        BookingEntry {
            event_name: booking.event_name.clone(),
            booking_name: booking.booking_name.clone(),
            time_range: format!("{} - {}", start, end),
            color: booking.status_at(now).into(),
            comment: booking.has_comment().then(|| booking.comment.clone()),
        }
    }

    /// Builds display records for a room's bookings, classifying each one
    /// against a fresh wall-clock "now".
    ///
    /// Order is preserved: entries come out the way the backend returned
    /// the bookings.
    pub fn entries<Tz: TimeZone>(&self, bookings: &[Booking], tz: &Tz) -> Vec<BookingEntry>
    where
        Tz::Offset: fmt::Display,
    {
        bookings
            .iter()
            .map(|b| self.entry(b, Utc::now(), tz))
            .collect()
    }

    /// Builds display records against a fixed "now".
    ///
    /// This variant is useful for testing with a fixed time.
    pub fn entries_at<Tz: TimeZone>(
        &self,
        bookings: &[Booking],
        now: DateTime<Utc>,
        tz: &Tz,
    ) -> Vec<BookingEntry>
    where
        Tz::Offset: fmt::Display,
    {
        bookings.iter().map(|b| self.entry(b, now, tz)).collect()
    }

    /// Renders the TTY lines for one room's section.
    ///
    /// An empty entry list renders the room header plus exactly one
    /// empty-state line. Commented entries carry an `(i)` marker on the
    /// title line.
    pub fn room_lines(&self, room: Room, entries: &[BookingEntry]) -> Vec<String> {
        let mut lines = Vec::with_capacity(entries.len() * 3 + 1);
        lines.push(format!("{}:", room.name()));
        if entries.is_empty() {
            lines.push(format!("  {}", self.options.no_bookings_text));
            return lines;
        }
        for entry in entries {
            let marker = if entry.has_comment() { " (i)" } else { "" };
            lines.push(format!("  {}{}", entry.event_name, marker));
            lines.push(format!("    {}", self.paint(&entry.time_range, entry.color)));
            lines.push(format!("    booked for {}", entry.booking_name));
        }
        lines
    }

    /// Renders the date label for the viewed date (no time component).
    pub fn date_label<Tz: TimeZone>(&self, viewed: DateTime<Tz>) -> String
    where
        Tz::Offset: fmt::Display,
    {
        viewed.format(&self.options.date_format).to_string()
    }

    /// Builds the JSON record for one booking.
    pub fn json_entry<Tz: TimeZone>(
        &self,
        booking: &Booking,
        now: DateTime<Utc>,
        tz: &Tz,
    ) -> JsonBookingEntry
    where
        Tz::Offset: fmt::Display,
    {
        let entry = self.entry(booking, now, tz);
        JsonBookingEntry {
            event_name: entry.event_name,
            booking_name: entry.booking_name,
            start_time: booking.start_time.to_rfc3339(),
            end_time: booking.end_time.to_rfc3339(),
            time_range: entry.time_range,
            status: booking.status_at(now),
            color: entry.color,
            comment: entry.comment,
        }
    }

    /// Builds the JSON section for one room.
    pub fn json_room<Tz: TimeZone>(
        &self,
        room: Room,
        bookings: &[Booking],
        now: DateTime<Utc>,
        tz: &Tz,
    ) -> JsonRoom
    where
        Tz::Offset: fmt::Display,
    {
        JsonRoom {
            room: room.index(),
            name: room.name().to_string(),
            bookings: bookings
                .iter()
                .map(|b| self.json_entry(b, now, tz))
                .collect(),
        }
    }

    fn paint(&self, text: &str, color: StatusColor) -> String {
        if self.options.color {
            format!("{}{}{}", color.ansi(), text, ANSI_RESET)
        } else {
            text.to_string()
        }
    }
}

/// Machine-readable board output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonBoard {
    /// The viewed date label.
    pub date: String,
    /// Per-room sections, in backend index order. Rooms whose fetch
    /// failed are absent.
    pub rooms: Vec<JsonRoom>,
}

/// One room's section in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRoom {
    /// The backend room index.
    pub room: usize,
    /// The room display name.
    pub name: String,
    /// Bookings in backend order.
    pub bookings: Vec<JsonBookingEntry>,
}

/// A single booking in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonBookingEntry {
    /// The event title.
    pub event_name: String,
    /// Who the room is booked for.
    pub booking_name: String,
    /// Start time in RFC 3339.
    pub start_time: String,
    /// End time in RFC 3339.
    pub end_time: String,
    /// Formatted range label for display.
    pub time_range: String,
    /// Temporal status at format time.
    pub status: TimeStatus,
    /// Status color at format time.
    pub color: StatusColor,
    /// Comment payload, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use insta::assert_snapshot;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    fn plain_formatter() -> BookingFormatter {
        BookingFormatter::new(FormatOptions {
            color: false,
            ..FormatOptions::default()
        })
    }

    fn sample_booking() -> Booking {
        Booking::new(
            "Team sync",
            "Anna Schmidt",
            utc(2024, 1, 1, 10, 0, 0),
            utc(2024, 1, 1, 11, 0, 0),
        )
    }

    mod entry {
        use super::*;

        #[test]
        fn active_booking_is_orange() {
            let formatter = plain_formatter();
            let entry = formatter.entry(&sample_booking(), utc(2024, 1, 1, 10, 30, 0), &Utc);
            assert_eq!(entry.color, StatusColor::Orange);
            assert_eq!(entry.time_range, "10:00 - 11:00");
        }

        #[test]
        fn past_booking_is_red() {
            let formatter = plain_formatter();
            let entry = formatter.entry(&sample_booking(), utc(2024, 1, 1, 12, 0, 0), &Utc);
            assert_eq!(entry.color, StatusColor::Red);
        }

        #[test]
        fn future_booking_is_green() {
            let formatter = plain_formatter();
            let entry = formatter.entry(&sample_booking(), utc(2024, 1, 1, 9, 0, 0), &Utc);
            assert_eq!(entry.color, StatusColor::Green);
        }

        #[test]
        fn comment_payload_only_when_present() {
            let formatter = plain_formatter();
            let now = utc(2024, 1, 1, 10, 30, 0);

            let entry = formatter.entry(&sample_booking(), now, &Utc);
            assert!(!entry.has_comment());

            let commented = sample_booking().with_comment("projector needed");
            let entry = formatter.entry(&commented, now, &Utc);
            assert_eq!(entry.comment.as_deref(), Some("projector needed"));
        }

        #[test]
        fn twelve_hour_labels() {
            let formatter = BookingFormatter::new(FormatOptions {
                time_format: TimeFormat::H12,
                color: false,
                ..FormatOptions::default()
            });
            let booking = Booking::new(
                "Afternoon call",
                "Pavel Orlov",
                utc(2024, 1, 1, 13, 0, 0),
                utc(2024, 1, 1, 14, 30, 0),
            );
            let entry = formatter.entry(&booking, utc(2024, 1, 1, 9, 0, 0), &Utc);
            assert_eq!(entry.time_range, "01:00 PM - 02:30 PM");
        }

        #[test]
        fn times_render_in_display_timezone() {
            let formatter = plain_formatter();
            let tz = chrono::FixedOffset::east_opt(3 * 3600).unwrap();
            let entry = formatter.entry(&sample_booking(), utc(2024, 1, 1, 9, 0, 0), &tz);
            assert_eq!(entry.time_range, "13:00 - 14:00");
        }

        #[test]
        fn deterministic_for_fixed_now() {
            let formatter = plain_formatter();
            let booking = sample_booking().with_comment("note");
            let now = utc(2024, 1, 1, 10, 30, 0);
            assert_eq!(
                formatter.entry(&booking, now, &Utc),
                formatter.entry(&booking, now, &Utc)
            );
        }
    }

    mod room_lines {
        use super::*;

        #[test]
        fn golden_section() {
            let formatter = plain_formatter();
            let now = utc(2024, 1, 1, 10, 30, 0);
            let bookings = vec![
                sample_booking().with_comment("projector needed"),
                Booking::new(
                    "Budget review",
                    "Pavel Orlov",
                    utc(2024, 1, 1, 11, 30, 0),
                    utc(2024, 1, 1, 12, 0, 0),
                ),
            ];
            let entries = formatter.entries_at(&bookings, now, &Utc);
            let lines = formatter.room_lines(Room::Conference, &entries);
            assert_snapshot!(lines.join("\n"), @r"
Conference:
  Team sync (i)
    10:00 - 11:00
    booked for Anna Schmidt
  Budget review
    11:30 - 12:00
    booked for Pavel Orlov
");
        }

        #[test]
        fn empty_room_renders_single_empty_state_line() {
            let formatter = plain_formatter();
            let lines = formatter.room_lines(Room::Computer, &[]);
            assert_eq!(lines, vec!["Computer:", "  No bookings."]);
        }

        #[test]
        fn entries_keep_backend_order() {
            let formatter = plain_formatter();
            let now = utc(2024, 1, 1, 9, 0, 0);
            // Deliberately out of chronological order; no client-side sort.
            let bookings = vec![
                Booking::new("Later", "B", utc(2024, 1, 1, 15, 0, 0), utc(2024, 1, 1, 16, 0, 0)),
                Booking::new("Earlier", "A", utc(2024, 1, 1, 10, 0, 0), utc(2024, 1, 1, 11, 0, 0)),
            ];
            let entries = formatter.entries_at(&bookings, now, &Utc);
            assert_eq!(entries[0].event_name, "Later");
            assert_eq!(entries[1].event_name, "Earlier");
        }

        #[test]
        fn colored_range_is_wrapped_in_ansi() {
            let formatter = BookingFormatter::new(FormatOptions::default());
            let now = utc(2024, 1, 1, 10, 30, 0);
            let entries = formatter.entries_at(&[sample_booking()], now, &Utc);
            let lines = formatter.room_lines(Room::Conference, &entries);
            // lines: header, title, time range, booked-for.
            assert!(lines[2].contains("\x1b[33m"));
            assert!(lines[2].ends_with(ANSI_RESET));
        }
    }

    mod labels {
        use super::*;

        #[test]
        fn date_label_has_no_time_component() {
            let formatter = plain_formatter();
            let label = formatter.date_label(utc(2024, 3, 7, 23, 59, 0));
            assert_eq!(label, "2024-03-07");
        }

        #[test]
        fn date_label_honors_custom_pattern() {
            let formatter = BookingFormatter::new(FormatOptions {
                date_format: "%d.%m.%Y".to_string(),
                ..FormatOptions::default()
            });
            assert_eq!(formatter.date_label(utc(2024, 3, 7, 0, 0, 0)), "07.03.2024");
        }
    }

    mod json {
        use super::*;

        #[test]
        fn json_room_shape() {
            let formatter = plain_formatter();
            let now = utc(2024, 1, 1, 10, 30, 0);
            let bookings = vec![sample_booking().with_comment("note")];
            let json_room = formatter.json_room(Room::Presentation, &bookings, now, &Utc);

            assert_eq!(json_room.room, 2);
            assert_eq!(json_room.name, "Presentation");
            assert_eq!(json_room.bookings.len(), 1);

            let entry = &json_room.bookings[0];
            assert_eq!(entry.status, TimeStatus::Active);
            assert_eq!(entry.color, StatusColor::Orange);
            assert_eq!(entry.start_time, "2024-01-01T10:00:00+00:00");
            assert_eq!(entry.comment.as_deref(), Some("note"));
        }

        #[test]
        fn comment_is_omitted_from_json_when_absent() {
            let formatter = plain_formatter();
            let now = utc(2024, 1, 1, 10, 30, 0);
            let entry = formatter.json_entry(&sample_booking(), now, &Utc);
            let value = serde_json::to_value(&entry).unwrap();
            assert!(value.get("comment").is_none());
            assert_eq!(value["status"], "active");
            assert_eq!(value["color"], "orange");
        }
    }
}
