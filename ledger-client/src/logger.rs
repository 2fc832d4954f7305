//! Logging Infrastructure
//!
//! Console logging, or a daily rolling file when a log directory exists.

use std::path::{Path, PathBuf};

/// Log file prefix inside the log directory
pub const LOG_FILE_PREFIX: &str = "ledger-client";

/// Initialize the logger with optional file output
///
/// Only the first call installs a subscriber; later calls are ignored.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level.parse().unwrap_or(tracing::Level::INFO))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = existing_log_dir(log_dir) {
        let file_appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
        let _ = subscriber.with_ansi(false).with_writer(file_appender).try_init();
        return;
    }

    let _ = subscriber.try_init();
}

/// The configured log directory, if it exists
pub fn existing_log_dir(log_dir: Option<&str>) -> Option<PathBuf> {
    let dir = log_dir.map(str::trim).filter(|d| !d.is_empty())?;
    let path = Path::new(dir);
    path.is_dir().then(|| path.to_path_buf())
}
