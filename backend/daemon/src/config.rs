use std::collections::HashMap;

use issbot_core::IssBotError;
use issbot_tracker::{geocode, position};

/// Bot runtime configuration, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Telegram bot token
    pub bot_token: String,
    /// Station position endpoint
    pub iss_endpoint: String,
    /// Reverse-geocoding base URL
    pub nominatim_url: String,
    /// Directory for rolling log files
    pub log_dir: String,
    /// Log level when RUST_LOG is not set
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables with sensible defaults.
    /// Only `BOT_TOKEN` is required.
    pub fn from_env() -> Result<Self, IssBotError> {
        Self::from_vars(&std::env::vars().collect())
    }

    fn from_vars(vars: &HashMap<String, String>) -> Result<Self, IssBotError> {
        let bot_token = vars
            .get("BOT_TOKEN")
            .filter(|token| !token.is_empty())
            .ok_or_else(|| IssBotError::Config("BOT_TOKEN is not set".into()))?
            .clone();

        Ok(Self {
            bot_token,
            iss_endpoint: var_or(vars, "ISS_ENDPOINT", position::DEFAULT_ENDPOINT),
            nominatim_url: var_or(vars, "NOMINATIM_URL", geocode::DEFAULT_BASE_URL),
            log_dir: var_or(vars, "LOG_DIR", "logs"),
            log_level: var_or(vars, "LOG_LEVEL", "info"),
        })
    }
}

fn var_or(vars: &HashMap<String, String>, name: &str, default: &str) -> String {
    vars.get(name)
        .filter(|value| !value.is_empty())
        .cloned()
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn token_only_env_gets_defaults() {
        let config = Config::from_vars(&vars(&[("BOT_TOKEN", "123:abc")])).unwrap();
        assert_eq!(config.bot_token, "123:abc");
        assert_eq!(config.iss_endpoint, position::DEFAULT_ENDPOINT);
        assert_eq!(config.nominatim_url, geocode::DEFAULT_BASE_URL);
        assert_eq!(config.log_dir, "logs");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn missing_token_is_a_config_error() {
        let err = Config::from_vars(&vars(&[])).unwrap_err();
        assert!(matches!(err, IssBotError::Config(_)));
    }

    #[test]
    fn empty_token_is_a_config_error() {
        let err = Config::from_vars(&vars(&[("BOT_TOKEN", "")])).unwrap_err();
        assert!(matches!(err, IssBotError::Config(_)));
    }

    #[test]
    fn overrides_win_over_defaults() {
        let config = Config::from_vars(&vars(&[
            ("BOT_TOKEN", "123:abc"),
            ("ISS_ENDPOINT", "http://localhost:8080/iss-now.json"),
            ("LOG_LEVEL", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.iss_endpoint, "http://localhost:8080/iss-now.json");
        assert_eq!(config.log_level, "debug");
    }
}
