use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for stratus-core
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for the Stratus transcript panel
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error for file operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Task feed errors
    #[error("feed error: {0}")]
    Feed(#[from] FeedError),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Parse/serialization errors
    #[error("parse error: {0}")]
    Parse(String),

    /// Snapshot export errors
    #[error("export error: {0}")]
    Export(String),

    /// Clipboard errors
    #[error("clipboard error: {0}")]
    Clipboard(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

/// Task-feed-specific errors
#[derive(Debug, Error)]
pub enum FeedError {
    /// Feed file not found
    #[error("feed file not found: {0}")]
    NotFound(PathBuf),

    /// Invalid task record in JSONL
    #[error("invalid task record at line {line}: {reason}")]
    InvalidRecord { line: usize, reason: String },
}
