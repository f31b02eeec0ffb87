//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a default so the application works without a config file.

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show key hints in the status bar.
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Border colour of the focused control.
    #[serde(default)]
    pub accent: Accent,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_key_hints: true,
            accent: Accent::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    #[default]
    Cyan,
    Green,
    Yellow,
    Magenta,
    Blue,
}

/// File logging. Output never goes to the terminal, which is owned by the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    /// Log file path. A leading `~` expands to the home directory.
    #[serde(default = "default_log_file")]
    pub log_file: String,
    /// `EnvFilter` directive; `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_file: default_log_file(),
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_log_file() -> String {
    "~/.local/share/profilecounter/profilecounter.log".into()
}

fn default_log_level() -> String {
    "info".into()
}
