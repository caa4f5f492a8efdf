use async_trait::async_trait;

use crate::error::IssBotError;
use crate::types::Coordinates;

/// Gateway to the station position source.
#[async_trait]
pub trait PositionSource: Send + Sync {
    /// Fetch the station's current coordinates.
    ///
    /// Fails with `SourceUnreachable` when the endpoint cannot be reached
    /// and `CoordsUnavailable` when its payload has the wrong shape.
    async fn current_position(&self) -> Result<Coordinates, IssBotError>;
}

/// Gateway to a reverse-geocoding service.
#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    /// Resolve coordinates into a human-readable address.
    ///
    /// A lookup that finds no match still succeeds with a fixed placeholder
    /// string; only service faults surface as errors.
    async fn reverse(
        &self,
        coords: &Coordinates,
        language: Option<&str>,
    ) -> Result<String, IssBotError>;
}
