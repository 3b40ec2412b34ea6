mod menu;
mod prompts;
mod scroll;

pub use menu::{ExportItem, ExportMenuState};
pub use prompts::{EMPTY_STATE_MESSAGE, EXAMPLE_PROMPTS, ExamplePrompt, PromptSelection};
pub use scroll::{BOTTOM_TOLERANCE, ScrollState};

/// Mutable state owned by the transcript panel
///
/// Everything else the panel shows is caller-supplied data rendered as-is.
#[derive(Debug, Clone, Default)]
pub struct PanelState {
    /// Scroll position and follow tracking
    pub scroll: ScrollState,
    /// Export menu state
    pub menu: ExportMenuState,
    /// Example prompt selection (empty state only)
    pub prompts: PromptSelection,
    /// Transient user-facing alert, dismissed by any key
    alert: Option<String>,
}

impl PanelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a user-facing alert until the next key press
    pub fn show_alert(&mut self, message: impl Into<String>) {
        self.alert = Some(message.into());
    }

    /// Get the current alert, if any
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    /// Dismiss the current alert
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }
}
