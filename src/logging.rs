//! Structured logging setup for hosts embedding the shortcut registry.
//!
//! The registry itself only emits `tracing` events (target
//! `shortcut_context::shortcuts::context`). This module wires a subscriber:
//! - **Pretty to stderr** - human-readable for developers
//! - **JSONL to file** (optional) - one JSON object per line
//!
//! # Usage
//!
//! ```rust,ignore
//! use shortcut_context::logging;
//!
//! // Keep the guard alive for the duration of the program
//! let _guard = logging::init_with_jsonl(&logging::default_log_dir().join("shortcuts.jsonl"));
//!
//! tracing::info!(event_type = "app_start", "Application started");
//! ```

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::DEFAULT_LOG_FILTER;

/// Guard that must be kept alive for the duration of the program.
/// Dropping this guard will flush and close the log file.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

/// Build the filter: RUST_LOG wins, then `fallback`.
pub fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Initialize stderr-only logging.
///
/// Safe to call more than once; later calls are ignored.
pub fn init() {
    init_with_filter(DEFAULT_LOG_FILTER);
}

/// Initialize stderr-only logging with a fallback filter directive
/// (typically `Config::get_log_filter()`).
pub fn init_with_filter(filter: &str) {
    let pretty_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .compact();

    let _ = tracing_subscriber::registry()
        .with(env_filter(filter))
        .with(pretty_layer)
        .try_init();
}

/// Initialize dual-output logging: stderr plus a JSONL file at `log_path`.
///
/// Returns a guard that MUST be kept alive; dropping it flushes the file.
pub fn init_with_jsonl(log_path: &Path) -> io::Result<LoggingGuard> {
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;

    // Non-blocking so registry mutations never wait on disk
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file);

    let json_layer = fmt::layer()
        .json()
        .with_writer(non_blocking_file)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false);

    let pretty_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .compact();

    let _ = tracing_subscriber::registry()
        .with(env_filter(DEFAULT_LOG_FILTER))
        .with(json_layer)
        .with(pretty_layer)
        .try_init();

    tracing::info!(
        event_type = "logging",
        log_path = %log_path.display(),
        "JSONL logging initialized"
    );

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

/// Get the log directory path (~/.local/share/shortcut-context/logs on Linux)
pub fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("shortcut-context").join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("shortcut-context-logs"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_log_dir_is_namespaced() {
        let dir = default_log_dir();
        let rendered = dir.to_string_lossy();
        assert!(rendered.contains("shortcut-context"));
    }

    #[test]
    fn init_with_jsonl_creates_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("nested").join("shortcuts.jsonl");

        let guard = init_with_jsonl(&log_path).unwrap();
        drop(guard);

        assert!(log_path.is_file());
    }

    #[test]
    fn init_with_jsonl_reports_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be cannot be opened for append
        assert!(init_with_jsonl(dir.path()).is_err());
    }

    #[test]
    fn init_is_idempotent() {
        init();
        init_with_filter("debug");
    }
}
