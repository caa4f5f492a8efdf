mod config;

use std::sync::Arc;

use anyhow::Result;
use dotenv::dotenv;
use tracing::info;

use issbot_channels::{ChannelAdapter, TelegramAdapter};
use issbot_core::BotContext;
use issbot_tracker::{NominatimClient, OpenNotifyClient};
use logging::redact_bot_token;

use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let config = Config::from_env()?;

    logging::init_logger(&config.log_dir, &config.log_level);
    info!(
        config = %redact_bot_token(&format!("{config:?}")),
        "loaded configuration"
    );

    let position = OpenNotifyClient::new(config.iss_endpoint.clone());
    let geocoder = NominatimClient::new(config.nominatim_url.clone())?;
    let ctx = Arc::new(BotContext::new(Arc::new(position), Arc::new(geocoder)));

    let adapter = TelegramAdapter::new(&config.bot_token, ctx);
    info!(adapter = adapter.name(), "starting channel adapter");
    adapter.start().await
}
