//! Logging infrastructure for the stream selector.
//!
//! This module provides:
//! - Global `tracing` subscriber setup honoring `RUST_LOG`
//! - Optional daily-rolling log file in the configured logs folder
//!
//! # Example
//!
//! ```no_run
//! use vcut_core::logging::{init_tracing_with_file, LogLevel};
//!
//! let _guard = init_tracing_with_file(LogLevel::Info, ".logs");
//! tracing::info!("Starting");
//! ```

mod types;

use std::path::Path;

pub use types::LogLevel;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log file name prefix inside the logs folder.
const LOG_FILE_PREFIX: &str = "vcut-streams.log";

/// Initialize global tracing subscriber for application-wide logging.
///
/// This sets up a subscriber that:
/// - Respects RUST_LOG environment variable
/// - Falls back to the provided default level
/// - Outputs to stderr with timestamps
///
/// Should be called once at application startup.
pub fn init_tracing(default_level: LogLevel) {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(env_filter(default_level))
        .init();
}

/// Initialize tracing to stderr plus a daily log file in `logs_dir`.
///
/// The returned guard flushes the file writer when dropped; keep it alive
/// for the lifetime of the application.
pub fn init_tracing_with_file(default_level: LogLevel, logs_dir: impl AsRef<Path>) -> WorkerGuard {
    let appender = tracing_appender::rolling::daily(logs_dir.as_ref(), LOG_FILE_PREFIX);
    let (file_writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(file_writer),
        )
        .with(env_filter(default_level))
        .init();

    guard
}

/// Initialize tracing for tests (only logs warnings and above).
#[cfg(test)]
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
}

fn env_filter(default_level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.as_filter_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_to_filter_works() {
        init_test_tracing();
        assert_eq!(LogLevel::Debug.as_filter_str(), "debug");
        assert_eq!(LogLevel::Info.as_filter_str(), "info");
    }

    #[test]
    fn level_parses_from_str() {
        assert_eq!("WARNING".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert_eq!("trace".parse::<LogLevel>(), Ok(LogLevel::Trace));
        assert!("loud".parse::<LogLevel>().is_err());
    }
}
