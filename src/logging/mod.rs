//! Diagnostic logging to disk.
//!
//! The terminal belongs to the UI while the app runs, so tracing output goes
//! to a daily file named `lapwatch_<date>.log` in the configured log
//! directory (default: `~/.local/share/lapwatch/logs/`). Nothing is installed
//! when logging is disabled.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Expand a leading `~` to the user's home directory.
pub fn expand_log_dir(log_dir: &str) -> PathBuf {
    if let Some(rest) = log_dir.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    } else if log_dir == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    PathBuf::from(log_dir)
}

pub fn log_file_name(date: chrono::NaiveDate) -> String {
    format!("lapwatch_{}.log", date.format("%Y-%m-%d"))
}

/// Install the global subscriber. Returns the log file path when logging is
/// enabled, `None` otherwise.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let log_dir = expand_log_dir(&config.log_dir);
    let path = open_target(&log_dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .with_context(|| format!("Invalid log level '{}'", config.level))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init()
        .with_context(|| "Failed to install tracing subscriber")?;

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(Some(path))
}

fn open_target(log_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;
    let date = chrono::Local::now().date_naive();
    Ok(log_dir.join(log_file_name(date)))
}
