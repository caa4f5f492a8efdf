pub mod context;
pub mod error;
pub mod traits;
pub mod types;

pub use context::BotContext;
pub use error::IssBotError;
pub use traits::{PositionSource, ReverseGeocoder};
pub use types::{Coordinates, Reply, TriggerEvent};
