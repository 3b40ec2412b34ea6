//! Logging setup built on the tracing ecosystem.
//!
//! # Environment Variables
//!
//! - `STRATUS_LOG`: Filter directive (like `RUST_LOG`), e.g., `stratus=debug`
//! - `STRATUS_LOG_FORMAT`: Output format for stderr: `pretty`, `json`, `compact`
//! - `STRATUS_LOG_DIR`: Override the file logging directory
//!
//! File output is opt-in via the `[logging.file]` section of `stratus.toml`
//! and rolls daily under `~/.stratus/logs/`.

use crate::Error;
use crate::config::LoggingSettings;
use std::env;
use std::io;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log output format for stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Pretty, human-readable output with colors (default for TTY)
    #[default]
    Pretty,
    /// JSON output (one line per event)
    Json,
    /// Compact, single-line output
    Compact,
}

impl LogFormat {
    /// All available log formats.
    pub const VALUES: &[LogFormat] = &[LogFormat::Pretty, LogFormat::Json, LogFormat::Compact];

    /// Parse a log format from a string.
    pub fn parse_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pretty" => Some(LogFormat::Pretty),
            "json" => Some(LogFormat::Json),
            "compact" => Some(LogFormat::Compact),
            _ => None,
        }
    }

    /// Get the string representation of this format.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
            LogFormat::Compact => "compact",
        }
    }
}

/// Runtime logging configuration derived from [`LoggingSettings`].
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default log level for stderr output.
    pub level: String,
    /// Output format for stderr.
    pub format: LogFormat,
    /// Whether file logging is enabled.
    pub file_enabled: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "warn".to_string(), format: LogFormat::default(), file_enabled: false }
    }
}

impl From<LoggingSettings> for LoggingConfig {
    fn from(settings: LoggingSettings) -> Self {
        let format = LogFormat::parse_str(&settings.format).unwrap_or_default();
        Self { level: settings.level, format, file_enabled: settings.file.enabled }
    }
}

impl LoggingConfig {
    /// Create a new logging config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the log level.
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Set the output format.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Enable file logging.
    pub fn with_file_logging(mut self) -> Self {
        self.file_enabled = true;
        self
    }

    /// Build an EnvFilter from this config and environment variables.
    fn build_env_filter(&self) -> EnvFilter {
        let filter = env::var("STRATUS_LOG")
            .ok()
            .or_else(|| env::var("RUST_LOG").ok())
            .unwrap_or_else(|| self.level.clone());

        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter))
    }

    /// Detect if stderr is a TTY for pretty formatting.
    fn is_tty() -> bool {
        atty::is(atty::Stream::Stderr)
    }

    /// Determine the appropriate format for stderr output.
    fn detect_format(&self) -> LogFormat {
        if let Ok(fmt_str) = env::var("STRATUS_LOG_FORMAT")
            && let Some(fmt) = LogFormat::parse_str(&fmt_str)
        {
            return fmt;
        }

        if Self::is_tty() { self.format } else { LogFormat::Compact }
    }

    /// Get the log directory path.
    fn get_log_dir() -> Result<PathBuf, Error> {
        if let Ok(custom_dir) = env::var("STRATUS_LOG_DIR") {
            return Ok(PathBuf::from(custom_dir));
        }

        let home = env::var("HOME")
            .or_else(|_| env::var("USERPROFILE"))
            .map_err(|_| Error::Config("could not determine home directory".to_string()))?;

        Ok(PathBuf::from(home).join(".stratus").join("logs"))
    }
}

/// Initialize the tracing subscriber with the given configuration.
///
/// Sets up an environment-based filter (`STRATUS_LOG` / `RUST_LOG`),
/// formatted stderr output, and optional daily-rolling file output. The
/// returned guard must be held for the lifetime of the process when file
/// logging is enabled; dropping it flushes and stops the writer.
pub fn init_logging(config: Option<LoggingConfig>) -> Result<Option<WorkerGuard>, Error> {
    let config = config.unwrap_or_default();
    let env_filter = config.build_env_filter();
    let format = config.detect_format();

    let registry = Registry::default().with(env_filter);

    if config.file_enabled {
        let log_dir = LoggingConfig::get_log_dir()?;
        std::fs::create_dir_all(&log_dir)
            .map_err(|e| Error::Config(format!("failed to create log directory: {}", e)))?;

        let file_appender = tracing_appender::rolling::daily(log_dir, "stratus.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        match format {
            LogFormat::Pretty => {
                registry
                    .with(fmt::layer().pretty().with_writer(io::stderr).with_ansi(true))
                    .with(fmt::layer().json().with_writer(non_blocking))
                    .init();
            }
            LogFormat::Json => {
                registry
                    .with(fmt::layer().json().with_writer(io::stderr))
                    .with(fmt::layer().json().with_writer(non_blocking))
                    .init();
            }
            LogFormat::Compact => {
                registry
                    .with(fmt::layer().compact().with_writer(io::stderr))
                    .with(fmt::layer().json().with_writer(non_blocking))
                    .init();
            }
        }

        Ok(Some(guard))
    } else {
        match format {
            LogFormat::Pretty => {
                registry
                    .with(fmt::layer().pretty().with_writer(io::stderr).with_ansi(true))
                    .init();
            }
            LogFormat::Json => {
                registry.with(fmt::layer().json().with_writer(io::stderr)).init();
            }
            LogFormat::Compact => {
                registry.with(fmt::layer().compact().with_writer(io::stderr)).init();
            }
        }

        Ok(None)
    }
}
