//! Date navigation and board refresh.
//!
//! [`BoardController`] owns the viewed date — the only state shared
//! across refresh cycles — and drives fetch+render cycles over all six
//! rooms. The date is never read from ambient scope: it is snapshotted
//! here and passed explicitly into every fetch.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Duration, Local, Utc};
use futures_util::future::join_all;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use roomboard_api::AvailabilityProvider;
use roomboard_core::{BookingFormatter, Room};

use crate::view::RoomView;

/// Owns the viewed date and refreshes the board on navigation.
pub struct BoardController<V: RoomView> {
    provider: Arc<dyn AvailabilityProvider>,
    view: Arc<Mutex<V>>,
    formatter: BookingFormatter,
    viewed: DateTime<Local>,
    cycle: AtomicU64,
}

impl<V: RoomView> BoardController<V> {
    /// Creates a controller viewing "now".
    pub fn new(
        provider: Arc<dyn AvailabilityProvider>,
        view: Arc<Mutex<V>>,
        formatter: BookingFormatter,
    ) -> Self {
        Self {
            provider,
            view,
            formatter,
            viewed: Local::now(),
            cycle: AtomicU64::new(0),
        }
    }

    /// Builder method to start from a specific viewed date.
    pub fn with_viewed_date(mut self, viewed: DateTime<Local>) -> Self {
        self.viewed = viewed;
        self
    }

    /// Returns the currently viewed date.
    pub fn viewed_date(&self) -> DateTime<Local> {
        self.viewed
    }

    /// Initial render: date label plus a full refresh.
    pub async fn start(&mut self) {
        self.show_date().await;
        self.refresh_all().await;
    }

    /// Steps the viewed date back one day and refreshes every room.
    pub async fn previous_day(&mut self) {
        self.shift_days(-1).await;
    }

    /// Steps the viewed date forward one day and refreshes every room.
    pub async fn next_day(&mut self) {
        self.shift_days(1).await;
    }

    async fn shift_days(&mut self, days: i64) {
        self.viewed = self.viewed + Duration::days(days);
        self.show_date().await;
        self.refresh_all().await;
    }

    async fn show_date(&self) {
        let label = self.formatter.date_label(self.viewed);
        self.view.lock().await.show_date(&label);
    }

    /// Refreshes every room for the current viewed date.
    ///
    /// The date is snapshotted once so all six fetches of the cycle query
    /// the same day. Fetches are initiated together and polled
    /// cooperatively; completions arrive in any order and each room
    /// renders independently of the others.
    pub async fn refresh_all(&mut self) {
        let date = self.viewed.with_timezone(&Utc);
        let cycle = self.cycle.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("refresh cycle {} for {}", cycle, date);
        join_all(Room::ALL.map(|room| self.refresh_room(room, date, cycle))).await;
    }

    /// Fetches and renders one room.
    ///
    /// On failure the room's previous content stays untouched. A
    /// completion belonging to a superseded cycle is discarded, so a slow
    /// response can never overwrite data from a newer refresh.
    async fn refresh_room(&self, room: Room, date: DateTime<Utc>, cycle: u64) {
        let bookings = match self.provider.fetch_room(room, date).await {
            Ok(bookings) => bookings,
            Err(e) => {
                warn!("room {} refresh failed: {}", room.index(), e);
                return;
            }
        };
        if self.cycle.load(Ordering::SeqCst) != cycle {
            debug!(
                "room {}: dropping stale response from cycle {}",
                room.index(),
                cycle
            );
            return;
        }
        let entries = self.formatter.entries(&bookings, &Local);
        self.view.lock().await.render_room(room, entries);
    }
}
