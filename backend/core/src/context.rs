use std::sync::Arc;

use crate::traits::{PositionSource, ReverseGeocoder};

/// Shared handles for the report pipeline, built once at startup and
/// injected into handlers. Read-only after construction.
#[derive(Clone)]
pub struct BotContext {
    pub position: Arc<dyn PositionSource>,
    pub geocoder: Arc<dyn ReverseGeocoder>,
}

impl BotContext {
    pub fn new(position: Arc<dyn PositionSource>, geocoder: Arc<dyn ReverseGeocoder>) -> Self {
        Self { position, geocoder }
    }
}
