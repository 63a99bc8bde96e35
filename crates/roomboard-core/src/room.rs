//! The fixed set of rooms served by the booking backend.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A bookable room.
///
/// The backend addresses rooms by a stable integer index (0..=5). The set
/// and its display names are fixed at startup and never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Room {
    Conference,
    Computer,
    Presentation,
    Auditorium,
    Multimedia,
    Training,
}

impl Room {
    /// All rooms, in backend index order.
    pub const ALL: [Room; 6] = [
        Room::Conference,
        Room::Computer,
        Room::Presentation,
        Room::Auditorium,
        Room::Multimedia,
        Room::Training,
    ];

    /// Returns the backend index for this room.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Looks up a room by its backend index.
    ///
    /// Returns `None` for indices outside 0..=5.
    pub fn from_index(index: usize) -> Option<Room> {
        Self::ALL.get(index).copied()
    }

    /// Returns the human-readable room name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Conference => "Conference",
            Self::Computer => "Computer",
            Self::Presentation => "Presentation",
            Self::Auditorium => "Auditorium",
            Self::Multimedia => "Multimedia",
            Self::Training => "Training",
        }
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
