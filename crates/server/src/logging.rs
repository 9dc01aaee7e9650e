//! Subscriber setup for the binaries.

use crate::config::LoggingConfig;
use anyhow::{anyhow, Result};
use std::fs;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` if set, otherwise the configured level.
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Install the global fmt subscriber.
///
/// With a log file configured, output goes through a non-blocking file
/// writer without ANSI colors. The returned guard flushes that writer on
/// drop and must be held for the life of the process.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let builder = tracing_subscriber::fmt();

    let Some(log_file) = &config.log_file else {
        builder.with_env_filter(env_filter(&config.level)).init();
        return Ok(None);
    };

    if let Some(parent) = log_file.parent() {
        fs::create_dir_all(parent)?;
    }
    let file_name = log_file
        .file_name()
        .ok_or_else(|| anyhow!("Invalid log file name: {}", log_file.display()))?
        .to_string_lossy()
        .to_string();
    let directory = log_file
        .parent()
        .unwrap_or(Path::new("."))
        .to_path_buf();

    let file_appender = tracing_appender::rolling::never(directory, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    builder
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_env_filter(env_filter(&config.level))
        .init();
    Ok(Some(guard))
}
