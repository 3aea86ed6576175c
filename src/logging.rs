//! Structured JSONL logging plus human-readable stderr output.
//!
//! Dual-output logging in the same shape the rest of our tooling expects:
//! - JSONL to a file under the log directory, for machine parsing
//! - Pretty output to stderr for developers
//!
//! Call [`init`] once at startup and keep the returned guard alive; dropping
//! it flushes and closes the log file.

use std::fs;
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const LOG_FILE: &str = "omnibar.jsonl";

/// Guard that must be kept alive for the duration of the program.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

/// Initialize dual-output logging.
///
/// `log_dir` overrides the default location (`<data dir>/omnibar/logs`).
/// Filtering honors `RUST_LOG`; the default level is `info`.
pub fn init(log_dir: Option<PathBuf>) -> LoggingGuard {
    let dir = log_dir.unwrap_or_else(default_log_dir);
    if let Err(e) = fs::create_dir_all(&dir) {
        eprintln!("[omnibar] failed to create log directory: {e}");
    }

    let appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (file_writer, file_guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .json()
        .with_writer(file_writer)
        .with_target(true)
        .with_current_span(false);

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();

    tracing::info!(log_dir = %dir.display(), "logging initialized");

    LoggingGuard {
        _file_guard: file_guard,
    }
}

/// Default log directory: `<data dir>/omnibar/logs`.
pub fn default_log_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("omnibar")
        .join("logs")
}
