//! Coordinate Extractor
//!
//! Pulls latitude/longitude strings out of the position payload. Parsing is
//! defensive: every shape mismatch is reported as `CoordsUnavailable` instead
//! of surfacing as an unrelated fault.

use serde_json::Value;

use issbot_core::{Coordinates, IssBotError};

/// Extract `iss_position.latitude` / `iss_position.longitude` from the raw
/// body. The string values pass through unmodified.
pub fn extract_coordinates(body: &Value) -> Result<Coordinates, IssBotError> {
    let position = body
        .get("iss_position")
        .and_then(Value::as_object)
        .ok_or_else(|| {
            IssBotError::CoordsUnavailable("payload has no iss_position object".into())
        })?;

    let latitude = position
        .get("latitude")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            IssBotError::CoordsUnavailable("iss_position.latitude is missing or not a string".into())
        })?;
    let longitude = position
        .get("longitude")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            IssBotError::CoordsUnavailable("iss_position.longitude is missing or not a string".into())
        })?;

    Ok(Coordinates::new(latitude, longitude))
}
