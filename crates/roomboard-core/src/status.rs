//! Time-status classification for booking intervals.
//!
//! This module provides [`TimeStatus`], the temporal relationship of a
//! booking interval to "now", and [`StatusColor`], its fixed visual
//! encoding.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// ANSI reset sequence for terminal output.
pub const ANSI_RESET: &str = "\x1b[0m";

/// The temporal relationship of a booking interval to a reference instant.
///
/// Always derived at render time, never stored, so it reflects the real
/// wall-clock moment of rendering rather than the moment of fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeStatus {
    /// The interval ended before `now`.
    Past,
    /// `now` falls inside the interval, both ends inclusive.
    Active,
    /// The interval starts after `now`.
    Future,
}

impl TimeStatus {
    /// Classifies the interval `[start, end]` against `now`.
    ///
    /// Both ends are inclusive: a booking is `Active` from its exact start
    /// instant through its exact end instant. The three outcomes partition
    /// the timeline with no gap or overlap.
    pub fn classify(now: DateTime<Utc>, start: DateTime<Utc>, end: DateTime<Utc>) -> TimeStatus {
        if now < start {
            TimeStatus::Future
        } else if now > end {
            TimeStatus::Past
        } else {
            TimeStatus::Active
        }
    }

    /// Returns the snake_case name of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Past => "past",
            Self::Active => "active",
            Self::Future => "future",
        }
    }
}

/// Visual encoding of a booking's temporal status.
///
/// The mapping from [`TimeStatus`] is fixed and exhaustive: adding a new
/// status without extending the `From` impl is a compile error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusColor {
    Red,
    Orange,
    Green,
}

impl From<TimeStatus> for StatusColor {
    fn from(status: TimeStatus) -> Self {
        match status {
            TimeStatus::Active => StatusColor::Orange,
            TimeStatus::Past => StatusColor::Red,
            TimeStatus::Future => StatusColor::Green,
        }
    }
}

impl StatusColor {
    /// Returns the color name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Green => "green",
        }
    }

    /// Returns the ANSI foreground escape for terminal rendering.
    pub fn ansi(&self) -> &'static str {
        match self {
            Self::Red => "\x1b[31m",
            Self::Orange => "\x1b[33m",
            Self::Green => "\x1b[32m",
        }
    }
}
