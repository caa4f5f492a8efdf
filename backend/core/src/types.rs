use serde::{Deserialize, Serialize};

use crate::error::IssBotError;

/// A station position as reported by the source API.
///
/// Latitude and longitude stay in their textual form to preserve the
/// source's precision; conversion happens only when a map pin is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: String,
    pub longitude: String,
}

impl Coordinates {
    pub fn new(latitude: impl Into<String>, longitude: impl Into<String>) -> Self {
        Self {
            latitude: latitude.into(),
            longitude: longitude.into(),
        }
    }

    /// Numeric form for the location reply.
    pub fn as_floats(&self) -> Result<(f64, f64), IssBotError> {
        let latitude = self.latitude.trim().parse::<f64>().map_err(|err| {
            IssBotError::CoordsUnavailable(format!(
                "latitude {:?} is not numeric: {err}",
                self.latitude
            ))
        })?;
        let longitude = self.longitude.trim().parse::<f64>().map_err(|err| {
            IssBotError::CoordsUnavailable(format!(
                "longitude {:?} is not numeric: {err}",
                self.longitude
            ))
        })?;
        Ok((latitude, longitude))
    }
}

/// Targeting data of an inbound trigger: where the reply goes and which
/// language the caller prefers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerEvent {
    pub conversation_id: i64,
    pub language: Option<String>,
}

/// An outbound reply produced by the report pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Reply {
    Text(String),
    Location { latitude: f64, longitude: f64 },
}
