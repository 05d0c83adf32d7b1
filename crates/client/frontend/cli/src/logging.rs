//! File logging for the terminal client.
//!
//! The TUI owns stdout/stderr, so records go only to a per-session file.
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE: &str = "client.log";

/// Installs the global subscriber writing to `<log dir>/<session>/client.log`.
///
/// The returned guard flushes buffered records on drop; keep it alive for the
/// whole process.
pub fn setup_logging(session_id: &str) -> Result<WorkerGuard> {
    let session_log_dir = log_directory().join(session_id);
    std::fs::create_dir_all(&session_log_dir).with_context(|| {
        format!(
            "Failed to create log directory {}",
            session_log_dir.display()
        )
    })?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}/{}", session_log_dir.display(), LOG_FILE);

    Ok(guard)
}

/// Platform cache directory, falling back to the system temp dir.
fn log_directory() -> PathBuf {
    ProjectDirs::from("", "", "initiative-tracker")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("initiative-tracker").join("logs"))
}
