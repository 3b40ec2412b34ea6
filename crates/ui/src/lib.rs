pub mod app;
pub mod components;
pub mod event_handler;
pub mod export;
pub mod layout;
pub mod state;
pub mod theme;
pub mod transcript;

pub use app::{App, DEFAULT_EXPORT_WIDTH, PanelOptions, RunCallback, SAVE_FORMAT, SaveCallback};
pub use event_handler::{EventHandler, KeyAction};
pub use export::{SNAPSHOT_FILENAME, SnapshotWriter, copy_text};
pub use layout::{LayoutMode, PanelLayout};
pub use state::{EXAMPLE_PROMPTS, ExamplePrompt, ExportItem, PanelState, ScrollState};
pub use theme::Theme;
pub use transcript::TranscriptRenderer;
