//! Logging Bootstrap Module
//! Installs the process-wide subscriber: debug-level file sink plus
//! info-level console sink.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::config::DEFAULT_LOG_FILE;

/// Where the file sink writes.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub log_file: PathBuf,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

/// Set up the two sinks and install them as the global subscriber.
///
/// Returns `Ok(true)` on first installation and `Ok(false)` when a global
/// subscriber is already in place; repeat calls attach nothing, so a second
/// initialization never duplicates log lines. Failure to create the log
/// directory or open the log file propagates to the caller.
pub fn init(config: &LogConfig) -> io::Result<bool> {
    if let Some(dir) = config.log_file.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(dir)?;
        }
    }

    // Append so the file survives across runs.
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)?;

    let file_sink = fmt::layer()
        .with_ansi(false)
        .with_writer(Mutex::new(log_file))
        .with_filter(LevelFilter::DEBUG);
    let console_sink = fmt::layer()
        .with_writer(io::stderr)
        .with_filter(LevelFilter::INFO);

    Ok(tracing_subscriber::registry()
        .with(file_sink)
        .with(console_sink)
        .try_init()
        .is_ok())
}
