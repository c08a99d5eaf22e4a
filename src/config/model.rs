//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Shortest and longest refresh interval accepted for the periodic tick.
pub const MIN_TICK_INTERVAL_MS: u64 = 1;
pub const MAX_TICK_INTERVAL_MS: u64 = 1_000;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("ui.tick_interval_ms must be between {min} and {max}, got {value}")]
    TickInterval { value: u64, min: u64, max: u64 },

    #[error("logging.level is not a valid filter: {0}")]
    LogLevel(String),
}

/// Root application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let tick = self.ui.tick_interval_ms;
        if !(MIN_TICK_INTERVAL_MS..=MAX_TICK_INTERVAL_MS).contains(&tick) {
            return Err(ConfigError::TickInterval {
                value: tick,
                min: MIN_TICK_INTERVAL_MS,
                max: MAX_TICK_INTERVAL_MS,
            });
        }
        if EnvFilter::try_new(&self.logging.level).is_err() {
            return Err(ConfigError::LogLevel(self.logging.level.clone()));
        }
        Ok(())
    }
}

/// Display settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Refresh period while the watch is running.
    #[serde(default = "default_tick_interval")]
    pub tick_interval_ms: u64,
    /// Show key hints in the status bar.
    #[serde(default = "default_true")]
    pub show_hints: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval(),
            show_hints: true,
        }
    }
}

/// Diagnostic log file settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_tick_interval() -> u64 {
    10
}
fn default_log_dir() -> String {
    "~/.local/share/lapwatch/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.ui.tick_interval_ms, 10);
        assert!(cfg.ui.show_hints);
        assert!(!cfg.logging.enabled);
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let cfg: AppConfig = toml::from_str("[ui]\ntick_interval_ms = 50\n").unwrap();
        assert_eq!(cfg.ui.tick_interval_ms, 50);
        assert!(cfg.ui.show_hints);
        assert_eq!(cfg.logging, LoggingConfig::default());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn test_rejects_zero_tick() {
        let mut cfg = AppConfig::default();
        cfg.ui.tick_interval_ms = 0;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::TickInterval { value: 0, .. })
        ));
    }

    #[test]
    fn test_rejects_slow_tick() {
        let mut cfg = AppConfig::default();
        cfg.ui.tick_interval_ms = 5_000;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_level() {
        let mut cfg = AppConfig::default();
        cfg.logging.level = "lapwatch=loud".to_string();
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::LogLevel("lapwatch=loud".to_string()))
        );
    }
}
