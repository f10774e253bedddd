//! Logging setup
//
// The interactive UI owns the terminal, so events go to a log file under the
// local data directory: <data_local_dir>/rgn-showcase/logs/<timestamp>.log
//
// Call `logging::init(filter)` once at startup and keep the returned guard
// alive for the duration of the program.

use std::fs;
use std::path::PathBuf;

use chrono::Local;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Flushes buffered log lines when dropped
#[allow(dead_code)]
pub struct LogGuard(tracing_appender::non_blocking::WorkerGuard);

/// Directory holding the log files
pub fn log_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|p| p.join("rgn-showcase").join("logs"))
}

/// Resolve the active filter: `RUST_LOG`, then `fallback`, then `info`
pub fn env_filter(fallback: Option<&str>) -> EnvFilter {
    match std::env::var("RUST_LOG") {
        Ok(val) if !val.is_empty() => EnvFilter::new(val),
        _ => EnvFilter::new(fallback.unwrap_or("info")),
    }
}

/// Initializes file logging.
///
/// Returns `None` when no log file can be opened; the program runs on without
/// logging in that case.
pub fn init(filter: Option<&str>) -> Option<LogGuard> {
    let dir = log_dir()?;
    fs::create_dir_all(&dir).ok()?;

    let path = dir.join(format!("{}.log", Local::now().format("%Y-%m-%d_%H-%M-%S")));
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    let installed = tracing_subscriber::registry()
        .with(env_filter(filter))
        .with(file_layer)
        .try_init();

    if installed.is_err() {
        return None;
    }

    tracing::info!(path = %path.display(), "logging initialized");
    Some(LogGuard(guard))
}
