use async_trait::async_trait;

pub mod report;
pub mod telegram;

pub use telegram::TelegramAdapter;

/// All channel adapters implement this trait.
#[async_trait]
pub trait ChannelAdapter: Send + Sync {
    /// Human-readable adapter name for logging.
    fn name(&self) -> &str;

    /// Start the adapter's background work (polling loop etc.). Runs until
    /// the process is shut down.
    async fn start(&self) -> anyhow::Result<()>;
}
