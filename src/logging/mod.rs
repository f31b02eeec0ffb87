//! Diagnostic logging to a file.
//!
//! The terminal belongs to the UI, so `tracing` output is only ever written
//! to a file. Logging is off unless `logging.enabled` is set in the config or
//! `PROFILECOUNTER_LOG` names a log file, which also overrides the configured
//! path.

use crate::config::LoggingConfig;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_ENV: &str = "PROFILECOUNTER_LOG";

/// Install the global subscriber. Returns the log file path when enabled.
pub fn init_tracing(config: &LoggingConfig) -> Option<PathBuf> {
    let path = log_path(config, std::env::var(LOG_ENV).ok())?;

    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: failed to open log file {}: {}", path.display(), e);
            return None;
        }
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    Some(path)
}

/// Resolve the log file: the environment override wins, otherwise the
/// configured path when logging is enabled.
fn log_path(config: &LoggingConfig, env_override: Option<String>) -> Option<PathBuf> {
    match env_override {
        Some(p) if !p.trim().is_empty() => Some(expand_home(p.trim())),
        _ if config.enabled => Some(expand_home(&config.log_file)),
        _ => None,
    }
}

fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_without_override() {
        let config = LoggingConfig::default();
        assert_eq!(log_path(&config, None), None);
        assert_eq!(log_path(&config, Some("  ".into())), None);
    }

    #[test]
    fn test_env_override_wins() {
        let config = LoggingConfig {
            enabled: true,
            log_file: "/var/tmp/configured.log".into(),
            level: "info".into(),
        };
        assert_eq!(
            log_path(&config, Some("/tmp/pc.log".into())),
            Some(PathBuf::from("/tmp/pc.log"))
        );
        assert_eq!(
            log_path(&config, None),
            Some(PathBuf::from("/var/tmp/configured.log"))
        );
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("/abs/file.log"), PathBuf::from("/abs/file.log"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/x/y.log"), home.join("x/y.log"));
        }
    }
}
