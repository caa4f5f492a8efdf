use thiserror::Error;

/// Top-level error type for the ISS tracker bot.
#[derive(Debug, Error)]
pub enum IssBotError {
    /// The position endpoint could not be reached, or answered with a
    /// non-success status. Carries the underlying transport error.
    #[error("position source unreachable: {0}")]
    SourceUnreachable(#[source] anyhow::Error),

    /// The position payload is missing the expected fields or has the
    /// wrong shape.
    #[error("coordinates unavailable: {0}")]
    CoordsUnavailable(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
