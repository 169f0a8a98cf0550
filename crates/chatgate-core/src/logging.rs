//! Tracing subscriber setup.
//!
//! The TUI owns stdout/stderr while it runs, so interactive sessions log to a
//! daily-rolling file under `${CHATGATE_HOME}/logs`. One-shot CLI commands
//! log to stderr instead.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "CHATGATE_LOG";

const LOG_FILE_PREFIX: &str = "chatgate.log";

/// Builds the filter: `CHATGATE_LOG` wins, then the configured level.
///
/// # Errors
/// Returns an error if neither source yields a valid directive.
pub fn env_filter(default_level: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        return Ok(filter);
    }
    EnvFilter::try_new(default_level)
        .with_context(|| format!("Invalid log level: {default_level}"))
}

/// Installs a subscriber that writes to a daily-rolling file in `dir`.
///
/// Keep the returned guard alive for the whole session; dropping it flushes
/// and stops the background writer.
///
/// # Errors
/// Returns an error if the log directory cannot be created, the filter is
/// invalid, or a global subscriber is already installed.
pub fn init_file(dir: &Path, default_level: &str) -> Result<WorkerGuard> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level)?)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install file logger: {e}"))?;

    Ok(guard)
}

/// Installs a compact stderr subscriber for non-interactive commands.
///
/// # Errors
/// Returns an error if the filter is invalid or a global subscriber is
/// already installed.
pub fn init_stderr(default_level: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level)?)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install stderr logger: {e}"))
}
