//! Task feed: JSONL records produced by the agent engine.
//!
//! Each line of a feed file is one serialized [`TaskEntry`]. The panel
//! reads the whole file on startup and, in follow mode, tails the file for
//! appended records so the transcript updates live.

use crate::error::{FeedError, Result};
use crate::task::TaskEntry;

use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Poll interval for follow mode
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Channel capacity for tailed entries
const TAIL_CHANNEL_CAPACITY: usize = 64;

/// An ordered sequence of task entries read from a feed file
#[derive(Debug, Clone, Default)]
pub struct TaskFeed {
    entries: Vec<TaskEntry>,
    /// Byte offset of the parsed prefix, used to resume tailing
    offset: usize,
}

impl TaskFeed {
    /// Create an empty feed
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a feed file, parsing every non-blank line as a task record
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(FeedError::NotFound(path.to_path_buf()).into());
        }

        let content = std::fs::read_to_string(path)?;
        let entries = Self::parse_lines(&content)?;
        Ok(Self { entries, offset: content.len() })
    }

    /// Parse JSONL content into task entries
    ///
    /// Blank lines are skipped; a malformed line fails the whole parse with
    /// its 1-based line number.
    pub fn parse_lines(content: &str) -> Result<Vec<TaskEntry>> {
        let mut entries = Vec::new();

        for (idx, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let entry: TaskEntry = serde_json::from_str(line)
                .map_err(|e| FeedError::InvalidRecord { line: idx + 1, reason: e.to_string() })?;
            entries.push(entry);
        }

        Ok(entries)
    }

    /// Get all entries
    pub fn entries(&self) -> &[TaskEntry] {
        &self.entries
    }

    /// Consume the feed, returning its entries
    pub fn into_entries(self) -> Vec<TaskEntry> {
        self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the feed is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Byte offset at which tailing should resume
    pub fn offset(&self) -> usize {
        self.offset
    }
}

/// Tails a feed file for appended task records
///
/// Spawns a background task that polls the file and delivers each newly
/// appended, complete record through a channel. Malformed appended lines
/// are logged and skipped rather than tearing down the tail; a truncated
/// file restarts the tail from the beginning.
pub struct FeedTailer {
    path: PathBuf,
    offset: usize,
}

impl FeedTailer {
    /// Create a tailer resuming at the given byte offset
    pub fn new(path: impl Into<PathBuf>, offset: usize) -> Self {
        Self { path: path.into(), offset }
    }

    /// Spawn the tail loop, returning the receiving end of the channel
    ///
    /// The loop runs until the cancellation token fires or the receiver is
    /// dropped.
    pub fn spawn(self, cancel: CancellationToken) -> mpsc::Receiver<TaskEntry> {
        let (tx, rx) = mpsc::channel(TAIL_CHANNEL_CAPACITY);
        let FeedTailer { path, mut offset } = self;

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = cancel.cancelled() => break,
                    _ = tokio::time::sleep(POLL_INTERVAL) => {}
                }

                let content = match tokio::fs::read_to_string(&path).await {
                    Ok(content) => content,
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "failed to read feed file");
                        continue;
                    }
                };

                if content.len() < offset {
                    tracing::debug!(path = %path.display(), "feed file truncated, restarting tail");
                    offset = 0;
                }

                // Only consume up to the last complete line; a writer may
                // still be mid-record on the final one.
                let appended = &content[offset..];
                let consumed = match appended.rfind('\n') {
                    Some(idx) => idx + 1,
                    None => continue,
                };

                for (idx, line) in appended[..consumed].lines().enumerate() {
                    if line.trim().is_empty() {
                        continue;
                    }

                    match serde_json::from_str::<TaskEntry>(line) {
                        Ok(entry) => {
                            if tx.send(entry).await.is_err() {
                                return;
                            }
                        }
                        Err(e) => {
                            tracing::warn!(line = idx + 1, error = %e, "skipping malformed task record");
                        }
                    }
                }

                offset += consumed;
            }
        });

        rx
    }
}
