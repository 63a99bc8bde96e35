//! HTTP client for the booking backend.
//!
//! Builds the two backend queries, classifies transport and parse
//! failures separately, and normalizes wire bookings into [`Booking`]s.

use std::time::Duration;

use chrono::{DateTime, Local, SecondsFormat, Utc};
use tracing::debug;
use url::Url;

use roomboard_core::{Booking, Room};

use crate::error::{ApiError, ApiResult};
use crate::provider::{AvailabilityProvider, BoxFuture};
use crate::wire::{MessageInfoResponse, RoomInfoResponse};

/// HTTP client for the booking backend.
#[derive(Debug, Clone)]
pub struct HttpAvailabilityClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl HttpAvailabilityClient {
    /// Creates a client for the backend at `base_url`.
    ///
    /// The timeout applies per request; there is no retry layer.
    pub fn new(base_url: &str, timeout: Duration) -> ApiResult<Self> {
        Url::parse(base_url)
            .map_err(|e| ApiError::configuration(format!("invalid base URL {base_url:?}: {e}")))?;
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::configuration(format!("failed to create HTTP client: {e}")))?;
        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetches and normalizes the occupied slots for one room on `date`.
    pub async fn room_info(&self, room: Room, date: DateTime<Utc>) -> ApiResult<Vec<Booking>> {
        let url = self.room_info_url(room, date);
        let response: RoomInfoResponse = self.get_json(&url).await?;
        let bookings = response
            .occupied_times
            .into_iter()
            .map(|wire| wire.into_booking(&Local))
            .collect::<ApiResult<Vec<_>>>()?;
        debug!("room {} ({}): {} bookings", room.index(), room, bookings.len());
        Ok(bookings)
    }

    /// Fetches a message body by identifier.
    pub async fn message_info(&self, message_id: &str) -> ApiResult<serde_json::Value> {
        let url = self.message_info_url(message_id);
        let response: MessageInfoResponse = self.get_json(&url).await?;
        Ok(response.message)
    }

    /// Formats the reservation date the way the backend parses it:
    /// ISO-8601 with fractional seconds and a literal `Z`.
    fn reservation_date(date: DateTime<Utc>) -> String {
        date.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    fn room_info_url(&self, room: Room, date: DateTime<Utc>) -> String {
        format!(
            "{}/roomInfo/?roomNumber={}&reservationDate={}",
            self.base_url,
            room.index(),
            urlencoding::encode(&Self::reservation_date(date))
        )
    }

    fn message_info_url(&self, message_id: &str) -> String {
        format!(
            "{}/get_message_info?messageId={}",
            self.base_url,
            urlencoding::encode(message_id)
        )
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        debug!("GET {}", url);
        let response = self.http_client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::network("request timeout")
            } else if e.is_connect() {
                ApiError::network(format!("connection failed: {e}"))
            } else {
                ApiError::network(format!("request failed: {e}"))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::server(format!("unexpected status {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::network(format!("failed to read response body: {e}")))?;
        serde_json::from_str(&body)
            .map_err(|e| ApiError::invalid_response(format!("malformed response: {e}")))
    }
}

impl AvailabilityProvider for HttpAvailabilityClient {
    fn fetch_room(
        &self,
        room: Room,
        date: DateTime<Utc>,
    ) -> BoxFuture<'_, ApiResult<Vec<Booking>>> {
        Box::pin(async move { self.room_info(room, date).await })
    }

    fn fetch_message<'a>(
        &'a self,
        message_id: &'a str,
    ) -> BoxFuture<'a, ApiResult<serde_json::Value>> {
        Box::pin(async move { self.message_info(message_id).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn client() -> HttpAvailabilityClient {
        HttpAvailabilityClient::new("http://127.0.0.1:5000", Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn rejects_invalid_base_url() {
        let err = HttpAvailabilityClient::new("not a url", Duration::from_secs(5)).unwrap_err();
        assert_eq!(err.code(), crate::error::ApiErrorCode::ConfigurationError);
    }

    #[test]
    fn trailing_slash_is_normalized() {
        let client =
            HttpAvailabilityClient::new("http://127.0.0.1:5000/", Duration::from_secs(5)).unwrap();
        let url = client.message_info_url("7");
        assert_eq!(url, "http://127.0.0.1:5000/get_message_info?messageId=7");
    }

    #[test]
    fn reservation_date_carries_millis_and_z() {
        let date = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
        assert_eq!(
            HttpAvailabilityClient::reservation_date(date),
            "2024-01-01T10:00:00.000Z"
        );
    }

    #[test]
    fn room_info_url_shape() {
        let date = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
        let url = client().room_info_url(Room::Presentation, date);
        assert_eq!(
            url,
            "http://127.0.0.1:5000/roomInfo/?roomNumber=2\
             &reservationDate=2024-01-01T10%3A00%3A00.000Z"
        );
    }

    #[test]
    fn message_id_is_percent_encoded() {
        let url = client().message_info_url("id with spaces");
        assert!(url.ends_with("messageId=id%20with%20spaces"));
    }
}
