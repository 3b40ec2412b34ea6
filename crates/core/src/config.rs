use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Top-level configuration loaded from `stratus.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Transcript panel settings
    #[serde(default)]
    pub panel: PanelConfig,

    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Panel-facing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PanelConfig {
    /// Optional title shown in the header bar
    #[serde(default)]
    pub title: Option<String>,

    /// Follow the newest content unless the user scrolls away (default: true)
    #[serde(default = "default_autoscroll")]
    pub autoscroll: bool,

    /// Let the panel take the full terminal height (default: false)
    #[serde(default)]
    pub fullscreen: bool,

    /// Keep the panel visible in compact terminals (default: false)
    #[serde(default)]
    pub compact_visible: bool,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self { title: None, autoscroll: default_autoscroll(), fullscreen: false, compact_visible: false }
    }
}

fn default_autoscroll() -> bool {
    true
}

/// Snapshot export settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExportConfig {
    /// Directory snapshots are written to (default: current directory)
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

/// Logging settings as declared in the config file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingSettings {
    /// Default log level for stderr output
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format for stderr: "pretty", "json", or "compact"
    #[serde(default = "default_log_format")]
    pub format: String,

    /// File logging settings
    #[serde(default)]
    pub file: FileLoggingSettings,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self { level: default_log_level(), format: default_log_format(), file: FileLoggingSettings::default() }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

/// File logging settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileLoggingSettings {
    /// Enable daily-rolling file output under the log directory
    #[serde(default)]
    pub enabled: bool,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(ConfigError::from(e).to_string()))
    }

    /// Get example configuration (as a string)
    pub fn example() -> &'static str {
        r#"# Stratus Configuration Example
# Copy this file to stratus.toml and customize as needed

[panel]
# Title shown in the header bar (optional)
# title = "AgentSession"
# Follow the newest content unless the user scrolls away
autoscroll = true
# Let the panel take the full terminal height
fullscreen = false
# Keep the panel visible in compact terminals (< 80 columns)
compact_visible = false

[export]
# Directory snapshot files are written to (default: current directory)
# directory = "/path/to/exports"

[logging]
# Log level: "error", "warn", "info", "debug", "trace"
level = "warn"
# Output format: "pretty", "json", or "compact"
format = "pretty"

[logging.file]
# Enable daily-rolling file output under ~/.stratus/logs
enabled = false
"#
    }
}

/// Configuration-specific errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse error
    #[error("TOML parse error: {0}")]
    TomlParse(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::TomlParse(err.to_string())
    }
}
