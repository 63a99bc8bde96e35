//! One-shot message fetch.

use roomboard_api::HttpAvailabilityClient;

use crate::error::AppResult;
use crate::message::render_content;

/// Fetches one message and prints its content.
pub async fn run(client: &HttpAvailabilityClient, message_id: &str) -> AppResult<()> {
    let content = client.message_info(message_id).await?;
    println!("{}", render_content(&content));
    Ok(())
}
