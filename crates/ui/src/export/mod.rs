mod clipboard;
mod snapshot;

pub use clipboard::{ClipboardProvider, CommandClipboard, SystemClipboard, copy_text, copy_with};
pub use snapshot::{SNAPSHOT_FILENAME, SnapshotWriter};
