//! File-based logging for the TUI.
//!
//! The terminal owns stdout/stderr while the screen is active, so logs go to
//! a daily-rolled file under ${GATEHOUSE_HOME}/logs. Filtering follows
//! RUST_LOG; nothing is logged by default.

use std::fs;

use anyhow::{Context, Result};
use gatehouse_core::config::paths;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// The returned guard flushes buffered log lines on drop; keep it alive for
/// the lifetime of the program.
///
/// # Errors
/// Returns an error if the log directory cannot be created.
pub fn init() -> Result<WorkerGuard> {
    let dir = paths::logs_dir();
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::daily(dir, "gatehouse.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
