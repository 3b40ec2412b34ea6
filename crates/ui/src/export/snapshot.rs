use std::fs;
use std::path::{Path, PathBuf};
use stratus_core::Result;

/// Fixed filename snapshots are written to
pub const SNAPSHOT_FILENAME: &str = "stratus-output.txt";

/// Writes the full transcript rendering to a snapshot file
///
/// The snapshot always contains the complete transcript, not just the
/// rows visible in the viewport, and always lands at the same filename
/// inside the configured directory.
#[derive(Debug, Clone)]
pub struct SnapshotWriter {
    directory: PathBuf,
}

impl SnapshotWriter {
    /// Create a writer targeting the given directory
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self { directory: directory.into() }
    }

    /// Create a writer targeting the current directory
    pub fn current_dir() -> Self {
        Self::new(".")
    }

    /// The directory snapshots are written to
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// The full path of the snapshot file
    pub fn path(&self) -> PathBuf {
        self.directory.join(SNAPSHOT_FILENAME)
    }

    /// Write the transcript content, creating the directory if needed
    pub fn write(&self, content: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.directory)?;

        let path = self.path();
        fs::write(&path, content)?;

        tracing::info!(path = %path.display(), bytes = content.len(), "wrote transcript snapshot");
        Ok(path)
    }
}
