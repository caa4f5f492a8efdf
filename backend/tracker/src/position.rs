//! Position Fetcher
//!
//! Pulls the station's current position from the open-notify API.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use issbot_core::{Coordinates, IssBotError, PositionSource};

use crate::extract::extract_coordinates;

/// Public endpoint reporting the ISS position. No auth, no parameters.
pub const DEFAULT_ENDPOINT: &str = "http://api.open-notify.org/iss-now.json";

/// HTTP client for the station position endpoint.
pub struct OpenNotifyClient {
    http: reqwest::Client,
    endpoint: String,
}

impl OpenNotifyClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// GET the endpoint and return the raw JSON body.
    ///
    /// Transport failures and non-success statuses surface as
    /// `SourceUnreachable`; a body that is not JSON at all surfaces as
    /// `CoordsUnavailable` (the endpoint answered, the payload is broken).
    pub async fn fetch_raw(&self) -> Result<Value, IssBotError> {
        let response = self
            .http
            .get(&self.endpoint)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|err| IssBotError::SourceUnreachable(err.into()))?;

        debug!(endpoint = %self.endpoint, "position endpoint answered");

        response.json::<Value>().await.map_err(|err| {
            IssBotError::CoordsUnavailable(format!("position payload is not valid JSON: {err}"))
        })
    }
}

impl Default for OpenNotifyClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

#[async_trait]
impl PositionSource for OpenNotifyClient {
    async fn current_position(&self) -> Result<Coordinates, IssBotError> {
        let body = self.fetch_raw().await?;
        extract_coordinates(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unreachable_endpoint_is_source_unreachable() {
        // Discard port; nothing listens there.
        let client = OpenNotifyClient::new("http://127.0.0.1:9/iss-now.json");
        let err = client.fetch_raw().await.unwrap_err();
        assert!(matches!(err, IssBotError::SourceUnreachable(_)));
    }
}
