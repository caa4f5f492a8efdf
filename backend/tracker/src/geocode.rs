//! Place Resolver
//!
//! Reverse-geocodes coordinates through Nominatim. A lookup that finds no
//! match (the station is usually over open water) yields a fixed placeholder
//! instead of failing; only service faults surface as errors.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use issbot_core::{Coordinates, IssBotError, ReverseGeocoder};

/// Returned when the geocoder has no name for the spot below the station.
pub const FALLBACK_ADDRESS: &str = "Ph’nglui mglw’nafh Cthulhu R’lyeh wgah’nagl fhtagn";

pub const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

// Nominatim's usage policy requires an identifying User-Agent.
const USER_AGENT: &str = "issbot/0.1";

/// Reverse-geocode response. `error` is set instead of `display_name` when
/// Nominatim cannot resolve the point ("Unable to geocode").
#[derive(Debug, Deserialize)]
struct ReverseResponse {
    display_name: Option<String>,
    error: Option<String>,
}

fn address_from_response(response: ReverseResponse) -> String {
    if let Some(reason) = response.error {
        debug!(reason = %reason, "geocoder found no match");
        return FALLBACK_ADDRESS.to_string();
    }
    response
        .display_name
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| FALLBACK_ADDRESS.to_string())
}

/// HTTP client for the Nominatim reverse endpoint.
pub struct NominatimClient {
    http: reqwest::Client,
    base_url: String,
}

impl NominatimClient {
    pub fn new(base_url: impl Into<String>) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    async fn reverse_raw(
        &self,
        latitude: &str,
        longitude: &str,
        language: &str,
    ) -> anyhow::Result<ReverseResponse> {
        let url = format!("{}/reverse", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("format", "jsonv2"),
                ("lat", latitude),
                ("lon", longitude),
                ("accept-language", language),
            ])
            .send()
            .await?
            .error_for_status()?
            .json::<ReverseResponse>()
            .await?;
        Ok(response)
    }
}

#[async_trait]
impl ReverseGeocoder for NominatimClient {
    async fn reverse(
        &self,
        coords: &Coordinates,
        language: Option<&str>,
    ) -> Result<String, IssBotError> {
        let language = language.unwrap_or("en");
        let response = self
            .reverse_raw(&coords.latitude, &coords.longitude, language)
            .await?;
        Ok(address_from_response(response))
    }
}
