//! Log Redaction
//!
//! Scrubs Telegram bot tokens from strings prior to logging.

use regex::Regex;
use std::sync::LazyLock;

// Telegram bot tokens look like `<bot id>:<35-char secret>`.
static BOT_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{6,}:[A-Za-z0-9_-]{30,}").unwrap());

/// Replaces bot tokens in a string with a placeholder.
pub fn redact_bot_token(input: &str) -> String {
    BOT_TOKEN_RE.replace_all(input, "[REDACTED_TOKEN]").to_string()
}
