use anyhow::{Result, anyhow};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;

use crate::config::Config;

/// Installs the global subscriber: daily rolling file under `config.log_dir`.
///
/// Keep the returned guard alive for as long as logs should be flushed.
pub fn init(config: &Config) -> Result<WorkerGuard> {
    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, &config.log_file);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(config.log_level)
        .with_ansi(false)
        .with_target(false) // removes module path
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))?;

    info!(log_dir = %config.log_dir, level = %config.log_level, "logging initialised");

    Ok(guard)
}
