//! Logging Infrastructure
//!
//! Structured logging setup. Logs go to stderr (stdout carries query output)
//! or to a daily rolling file when a log directory is configured.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize the logger
pub fn init_logger() {
    init_logger_with_file(None, false, None);
}

/// Initialize the logger with optional JSON formatting and file output
///
/// `RUST_LOG` takes precedence over `log_level` when set.
pub fn init_logger_with_file(log_level: Option<&str>, json: bool, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    let file_appender = log_dir
        .map(Path::new)
        .filter(|dir| dir.is_dir())
        .map(|dir| tracing_appender::rolling::daily(dir, "catalog-engine"));

    let result = match (json, file_appender) {
        (true, Some(appender)) => subscriber.json().with_writer(appender).try_init(),
        (true, None) => subscriber.json().with_writer(std::io::stderr).try_init(),
        (false, Some(appender)) => subscriber.with_ansi(false).with_writer(appender).try_init(),
        (false, None) => subscriber.with_writer(std::io::stderr).try_init(),
    };

    if let Err(e) = result {
        eprintln!("Logger already initialized: {e}");
    }
}
