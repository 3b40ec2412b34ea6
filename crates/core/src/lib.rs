//! Core types for the Stratus transcript panel: the task model, the JSONL
//! task feed, configuration, logging, and error types.

pub mod config;
pub mod error;
pub mod feed;
pub mod logging;
pub mod task;

pub use config::{Config, ExportConfig, FileLoggingSettings, LoggingSettings, PanelConfig};
pub use error::{Error, FeedError, Result};
pub use feed::{FeedTailer, TaskFeed};
pub use logging::{LogFormat, LoggingConfig, init_logging};
pub use task::{TaskEntry, TaskStatus};
