//! Room availability rendering.
//!
//! [`RoomView`] is the seam between the controllers and whatever surface
//! displays the board. The production implementation is [`ConsoleView`];
//! tests use a recording double so controller logic runs headlessly.

use roomboard_core::{BookingEntry, BookingFormatter, Room};

/// Rendering surface for the board.
pub trait RoomView: Send {
    /// Updates the date label.
    fn show_date(&mut self, label: &str);

    /// Replaces a room's rendered booking list wholesale.
    ///
    /// Every refresh is a full re-render: implementations must drop the
    /// room's previous content so stale entries never persist, and an
    /// empty list must render as a single "no bookings" state.
    fn render_room(&mut self, room: Room, entries: Vec<BookingEntry>);

    /// Overwrites the single shared message panel.
    fn show_message(&mut self, content: &str);
}

/// Terminal view: prints sections to stdout.
///
/// Keeps the last rendered entries per room so the watch loop can reveal
/// a comment behind an entry's `(i)` affordance. Because the per-room
/// slot is replaced on every render, each affordance exists exactly once
/// per render cycle.
#[derive(Debug, Default)]
pub struct ConsoleView {
    formatter: BookingFormatter,
    rooms: [Vec<BookingEntry>; 6],
}

impl ConsoleView {
    /// Creates a console view rendering with the given formatter.
    pub fn new(formatter: BookingFormatter) -> Self {
        Self {
            formatter,
            rooms: Default::default(),
        }
    }

    /// Returns the comment payload behind an entry's info affordance.
    ///
    /// `None` when the slot does not exist or the booking carried no
    /// comment.
    pub fn comment_at(&self, room: Room, slot: usize) -> Option<&str> {
        self.rooms[room.index()]
            .get(slot)
            .and_then(|entry| entry.comment.as_deref())
    }

    /// Returns the last rendered entries for a room.
    pub fn entries(&self, room: Room) -> &[BookingEntry] {
        &self.rooms[room.index()]
    }
}

impl RoomView for ConsoleView {
    fn show_date(&mut self, label: &str) {
        println!();
        println!("=== {} ===", label);
    }

    fn render_room(&mut self, room: Room, entries: Vec<BookingEntry>) {
        for line in self.formatter.room_lines(room, &entries) {
            println!("{}", line);
        }
        self.rooms[room.index()] = entries;
    }

    fn show_message(&mut self, content: &str) {
        println!("message: {}", content);
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use roomboard_core::{Booking, FormatOptions};

    use chrono::{TimeZone, Utc};

    fn entries(formatter: &BookingFormatter, bookings: &[Booking]) -> Vec<BookingEntry> {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 10, 30, 0).unwrap();
        formatter.entries_at(bookings, now, &Utc)
    }

    fn plain_formatter() -> BookingFormatter {
        BookingFormatter::new(FormatOptions {
            color: false,
            ..FormatOptions::default()
        })
    }

    fn commented_booking() -> Booking {
        Booking::new(
            "Sync",
            "Anna Schmidt",
            Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 1, 1, 11, 0, 0).unwrap(),
        )
        .with_comment("projector")
    }

    #[test]
    fn render_replaces_previous_content() {
        let formatter = plain_formatter();
        let mut view = ConsoleView::new(formatter.clone());

        view.render_room(
            Room::Conference,
            entries(&formatter, &[commented_booking(), commented_booking()]),
        );
        assert_eq!(view.entries(Room::Conference).len(), 2);

        view.render_room(Room::Conference, Vec::new());
        assert!(view.entries(Room::Conference).is_empty());
    }

    #[test]
    fn comment_lookup() {
        let formatter = plain_formatter();
        let mut view = ConsoleView::new(formatter.clone());
        view.render_room(Room::Training, entries(&formatter, &[commented_booking()]));

        assert_eq!(view.comment_at(Room::Training, 0), Some("projector"));
        assert_eq!(view.comment_at(Room::Training, 1), None);
        assert_eq!(view.comment_at(Room::Conference, 0), None);
    }

    #[test]
    fn rooms_are_independent() {
        let formatter = plain_formatter();
        let mut view = ConsoleView::new(formatter.clone());
        view.render_room(Room::Computer, entries(&formatter, &[commented_booking()]));

        assert_eq!(view.entries(Room::Computer).len(), 1);
        assert!(view.entries(Room::Multimedia).is_empty());
    }
}
