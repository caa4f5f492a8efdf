//! Station tracking gateways: position fetch, coordinate extraction, and
//! reverse geocoding.

pub mod extract;
pub mod geocode;
pub mod position;

pub use extract::extract_coordinates;
pub use geocode::{NominatimClient, FALLBACK_ADDRESS};
pub use position::OpenNotifyClient;
