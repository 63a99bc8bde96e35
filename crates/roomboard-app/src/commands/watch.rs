//! Interactive watch mode.
//!
//! The terminal rendition of the page's event surface: date-navigation
//! buttons become `n`/`p`, per-entry info popovers become
//! `i <room> <slot>`, message buttons become `m <id>`.

use std::sync::Arc;

use chrono::{DateTime, Local};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::Mutex;

use roomboard_api::AvailabilityProvider;
use roomboard_core::{BookingFormatter, Room};

use crate::controller::BoardController;
use crate::error::AppResult;
use crate::message::MessagePanelController;
use crate::view::ConsoleView;

/// Runs the interactive loop until `q` or end of input.
pub async fn run(
    provider: Arc<dyn AvailabilityProvider>,
    formatter: BookingFormatter,
    viewed: DateTime<Local>,
) -> AppResult<()> {
    let view = Arc::new(Mutex::new(ConsoleView::new(formatter.clone())));
    let mut controller =
        BoardController::new(provider.clone(), view.clone(), formatter).with_viewed_date(viewed);
    let messages = MessagePanelController::new(provider, view.clone());

    controller.start().await;
    print_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("n") => controller.next_day().await,
            Some("p") => controller.previous_day().await,
            Some("r") => controller.refresh_all().await,
            Some("i") => reveal_info(&view, parts.next(), parts.next()).await,
            Some("m") => match parts.next() {
                Some(id) => messages.show_message(id).await,
                None => println!("usage: m <message-id>"),
            },
            Some("q") => break,
            Some(_) => print_help(),
            None => {}
        }
    }
    Ok(())
}

async fn reveal_info(view: &Arc<Mutex<ConsoleView>>, room: Option<&str>, slot: Option<&str>) {
    let parsed = room
        .and_then(|r| r.parse::<usize>().ok())
        .and_then(Room::from_index)
        .zip(slot.and_then(|s| s.parse::<usize>().ok()));
    let Some((room, slot)) = parsed else {
        println!("usage: i <room 0-5> <entry>");
        return;
    };
    match view.lock().await.comment_at(room, slot) {
        Some(comment) => println!("info: {}", comment),
        None => println!("no comment for {} entry {}", room, slot),
    }
}

fn print_help() {
    println!();
    println!(
        "commands: n next day, p previous day, r refresh, \
         i <room> <slot> info, m <id> message, q quit"
    );
}
