//! One-shot board rendering.

use std::sync::Arc;

use chrono::{DateTime, Local, Utc};
use futures_util::future::join_all;
use tokio::sync::Mutex;
use tracing::warn;

use roomboard_api::AvailabilityProvider;
use roomboard_core::{BookingFormatter, JsonBoard, OutputFormat, Room};

use crate::controller::BoardController;
use crate::error::AppResult;
use crate::view::ConsoleView;

/// Renders the board for one date and exits.
pub async fn run(
    provider: Arc<dyn AvailabilityProvider>,
    formatter: BookingFormatter,
    viewed: DateTime<Local>,
    format: OutputFormat,
) -> AppResult<()> {
    match format {
        OutputFormat::Tty => {
            let view = Arc::new(Mutex::new(ConsoleView::new(formatter.clone())));
            let mut controller =
                BoardController::new(provider, view, formatter).with_viewed_date(viewed);
            controller.start().await;
            Ok(())
        }
        OutputFormat::Json => print_json(provider, formatter, viewed).await,
    }
}

async fn print_json(
    provider: Arc<dyn AvailabilityProvider>,
    formatter: BookingFormatter,
    viewed: DateTime<Local>,
) -> AppResult<()> {
    let date = viewed.with_timezone(&Utc);
    let results = join_all(Room::ALL.map(|room| {
        let provider = provider.clone();
        async move { (room, provider.fetch_room(room, date).await) }
    }))
    .await;

    let now = Utc::now();
    let mut rooms = Vec::new();
    for (room, result) in results {
        match result {
            Ok(bookings) => rooms.push(formatter.json_room(room, &bookings, now, &Local)),
            // A failed room is absent from the output rather than
            // conflated with "no bookings".
            Err(e) => warn!("room {} fetch failed: {}", room.index(), e),
        }
    }

    let board = JsonBoard {
        date: formatter.date_label(viewed),
        rooms,
    };
    println!("{}", serde_json::to_string_pretty(&board)?);
    Ok(())
}
