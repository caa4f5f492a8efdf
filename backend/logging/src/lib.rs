//! Logging setup for the ISS tracker bot.
//!
//! Provides tracing initialization with rolling file output and a redaction
//! helper that scrubs bot tokens before they reach the log.

pub mod logger;
pub mod redact;

pub use logger::init_logger;
pub use redact::redact_bot_token;
