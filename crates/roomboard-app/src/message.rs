//! Message panel control.
//!
//! One shared panel, last fetch wins. A failed fetch is logged and the
//! panel keeps whatever it showed before.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::warn;

use roomboard_api::AvailabilityProvider;

use crate::view::RoomView;

/// Fetches messages on demand and renders them into the shared panel.
pub struct MessagePanelController<V: RoomView> {
    provider: Arc<dyn AvailabilityProvider>,
    view: Arc<Mutex<V>>,
}

impl<V: RoomView> MessagePanelController<V> {
    /// Creates a controller rendering into `view`.
    pub fn new(provider: Arc<dyn AvailabilityProvider>, view: Arc<Mutex<V>>) -> Self {
        Self { provider, view }
    }

    /// Fetches a message by identifier and overwrites the panel.
    pub async fn show_message(&self, message_id: &str) {
        match self.provider.fetch_message(message_id).await {
            Ok(content) => {
                self.view.lock().await.show_message(&render_content(&content));
            }
            Err(e) => warn!("message {} fetch failed: {}", message_id, e),
        }
    }
}

/// Renders opaque message content: strings bare, other JSON compact.
pub fn render_content(content: &serde_json::Value) -> String {
    match content {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
