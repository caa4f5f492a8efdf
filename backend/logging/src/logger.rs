//! Logger setup
//!
//! Console output plus a daily-rolling plain-text log file, with
//! environment-based level control.

use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILE_PREFIX: &str = "issbot.log";

/// Initialize the global logger.
///
/// Writes to stdout and to `<log_dir>/<binary>.log.YYYY-MM-DD`. `level` is
/// the fallback when `RUST_LOG` is not set.
pub fn init_logger<P: AsRef<Path>>(log_dir: P, level: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, log_file_prefix());
    let file_layer = fmt::layer().with_writer(file_appender).with_ansi(false);

    let console_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(false)
        .with_ansi(true);

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

/// Log file prefix named after the running binary, e.g. `issbot.log`.
fn log_file_prefix() -> String {
    std::env::current_exe()
        .ok()
        .and_then(|path| {
            path.file_stem()
                .map(|stem| format!("{}.log", stem.to_string_lossy()))
        })
        .unwrap_or_else(|| DEFAULT_FILE_PREFIX.to_string())
}
