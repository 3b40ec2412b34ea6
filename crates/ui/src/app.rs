use crate::{
    components::{Header, MessageList},
    event_handler::{EventHandler, KeyAction},
    export::{SnapshotWriter, copy_text},
    layout::{PanelLayout, WINDOW_HEIGHT},
    state::PanelState,
    theme::Theme,
    transcript::TranscriptRenderer,
};

use crossterm::event::Event;
use ratatui::{Terminal, backend::{Backend, CrosstermBackend}, widgets::Block};
use std::io::Result;
use std::time::Duration;
use stratus_core::{PanelConfig, TaskEntry};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Format string passed to the save callback
pub const SAVE_FORMAT: &str = "db";

/// Width used for export rendering before the first draw
pub const DEFAULT_EXPORT_WIDTH: u16 = 80;

/// Save callback supplied by the caller; receives a format string
pub type SaveCallback = Box<dyn FnMut(&str) + Send>;

/// Run callback supplied by the caller; receives (name, goal)
pub type RunCallback = Box<dyn FnMut(&str, &str) + Send>;

/// Caller-facing panel flags
#[derive(Debug, Clone)]
pub struct PanelOptions {
    /// Optional title shown in the header
    pub title: Option<String>,
    /// Take the full terminal height instead of the capped window
    pub fullscreen: bool,
    /// Follow the newest content unless the user scrolls away
    pub autoscroll: bool,
    /// Keep the panel visible in compact terminals
    pub compact_visible: bool,
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self { title: None, fullscreen: false, autoscroll: true, compact_visible: false }
    }
}

impl From<&PanelConfig> for PanelOptions {
    fn from(config: &PanelConfig) -> Self {
        Self {
            title: config.title.clone(),
            fullscreen: config.fullscreen,
            autoscroll: config.autoscroll,
            compact_visible: config.compact_visible,
        }
    }
}

/// Transcript panel application
///
/// Owns the entry snapshot, the panel state, and the caller-supplied
/// callbacks, and drives rendering and event handling.
pub struct App {
    entries: Vec<TaskEntry>,
    state: PanelState,
    options: PanelOptions,
    snapshot: SnapshotWriter,
    on_save: Option<SaveCallback>,
    on_run: Option<RunCallback>,
    feed_rx: Option<mpsc::Receiver<TaskEntry>>,
    cancel: CancellationToken,
    should_exit: bool,
    /// Last drawn message area (width, height); zero before the first draw
    viewport: (u16, u16),
}

impl App {
    /// Create a new panel over the given entry snapshot
    pub fn new(entries: Vec<TaskEntry>, options: PanelOptions) -> Self {
        Self {
            entries,
            state: PanelState::new(),
            options,
            snapshot: SnapshotWriter::current_dir(),
            on_save: None,
            on_run: None,
            feed_rx: None,
            cancel: CancellationToken::new(),
            should_exit: false,
            viewport: (0, 0),
        }
    }

    /// Supply a save callback; enables the header save action
    pub fn with_save_callback(mut self, callback: SaveCallback) -> Self {
        self.on_save = Some(callback);
        self
    }

    /// Supply a run callback for the empty-state example prompts
    pub fn with_run_callback(mut self, callback: RunCallback) -> Self {
        self.on_run = Some(callback);
        self
    }

    /// Receive appended task entries from a feed tailer
    pub fn with_feed_updates(mut self, rx: mpsc::Receiver<TaskEntry>) -> Self {
        self.feed_rx = Some(rx);
        self
    }

    /// Write snapshots into the given directory instead of the current one
    pub fn with_export_directory(mut self, directory: impl Into<std::path::PathBuf>) -> Self {
        self.snapshot = SnapshotWriter::new(directory);
        self
    }

    /// Cancellation token shared with background tasks
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// The current entry snapshot
    pub fn entries(&self) -> &[TaskEntry] {
        &self.entries
    }

    /// Append an entry delivered by the engine
    pub fn push_entry(&mut self, entry: TaskEntry) {
        self.entries.push(entry);
    }

    /// Panel state
    pub fn state(&self) -> &PanelState {
        &self.state
    }

    /// Panel state, mutable
    pub fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    /// Whether the application has been asked to exit
    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    /// The full transcript rendered as plain text at the last drawn width
    ///
    /// This is the content both export actions operate on: every row, not
    /// just the visible viewport.
    pub fn transcript_text(&self) -> String {
        let width = if self.viewport.0 >= 4 { self.viewport.0 } else { DEFAULT_EXPORT_WIDTH };
        TranscriptRenderer::new(&self.entries).plain_text(width.saturating_sub(2) as usize)
    }

    /// Draw the panel
    pub fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> std::result::Result<(), B::Error> {
        terminal.draw(|frame| {
            let area = frame.area();
            frame.render_widget(Block::default().style(Theme::base()), area);

            let layout = PanelLayout::calculate(area, self.options.fullscreen);
            if layout.mode.is_compact() && !self.options.compact_visible {
                self.viewport = (0, 0);
                return;
            }

            let content_width = MessageList::content_width(layout.messages);
            let content_height = TranscriptRenderer::new(&self.entries).content_height(content_width) as u16;
            self.state
                .scroll
                .follow(self.options.autoscroll, content_height, layout.messages.height);
            self.viewport = (layout.messages.width, layout.messages.height);

            let header = Header::new(self.options.title.as_deref(), self.on_save.is_some(), &self.state.menu);
            header.render(frame, &layout);

            let list = MessageList::new(&self.entries, &self.state);
            list.render(frame, layout.messages);
        })?;

        Ok(())
    }

    /// Handle a terminal event
    pub fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            let action = EventHandler::handle_key(key, &self.state, self.entries.is_empty());
            self.apply_action(action);
        }
    }

    /// Apply a panel action
    pub fn apply_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::ScrollUp => self.scroll_by(-1),
            KeyAction::ScrollDown => self.scroll_by(1),
            KeyAction::PageUp => self.scroll_by(-i32::from(self.viewport_height())),
            KeyAction::PageDown => self.scroll_by(i32::from(self.viewport_height())),
            KeyAction::ScrollToTop => {
                let (content, viewport) = self.scroll_metrics();
                self.state.scroll.scroll_to_top(content, viewport);
            }
            KeyAction::ScrollToBottom => {
                let (content, viewport) = self.scroll_metrics();
                self.state.scroll.scroll_to_bottom(content, viewport);
            }
            KeyAction::ToggleExportMenu => self.state.menu.toggle(),
            KeyAction::MenuNext => self.state.menu.select_next(),
            KeyAction::MenuPrev => self.state.menu.select_prev(),
            KeyAction::CloseMenu => self.state.menu.close(),
            KeyAction::MenuSelect => {
                let item = self.state.menu.selected_item();
                self.state.menu.close();
                match item {
                    crate::state::ExportItem::Snapshot => self.export_snapshot(),
                    crate::state::ExportItem::Copy => self.copy_transcript(),
                }
            }
            KeyAction::Save => {
                if let Some(callback) = self.on_save.as_mut() {
                    callback(SAVE_FORMAT);
                }
            }
            KeyAction::PromptNext => self.state.prompts.select_next(),
            KeyAction::PromptPrev => self.state.prompts.select_prev(),
            KeyAction::RunPrompt => {
                if let Some(callback) = self.on_run.as_mut() {
                    let prompt = self.state.prompts.current();
                    callback(prompt.name, prompt.goal);
                }
            }
            KeyAction::DismissAlert => self.state.dismiss_alert(),
            KeyAction::Exit => self.should_exit = true,
            KeyAction::NoOp => {}
        }
    }

    /// Write the full transcript to the snapshot file
    ///
    /// A no-op when nothing is rendered; failure raises a user-facing
    /// alert in the panel.
    fn export_snapshot(&mut self) {
        let text = self.transcript_text();
        if text.is_empty() {
            tracing::debug!("snapshot export skipped: transcript is empty");
            return;
        }

        if let Err(e) = self.snapshot.write(&text) {
            tracing::warn!(error = %e, "snapshot export failed");
            self.state.show_alert(format!("Failed to write snapshot: {}", e));
        }
    }

    /// Copy the full transcript text to the clipboard
    ///
    /// A no-op when nothing is rendered; failures are logged, never shown.
    fn copy_transcript(&mut self) {
        let text = self.transcript_text();
        if text.is_empty() {
            tracing::debug!("copy skipped: transcript is empty");
            return;
        }

        copy_text(&text);
    }

    fn scroll_by(&mut self, delta: i32) {
        let (content, viewport) = self.scroll_metrics();
        self.state.scroll.scroll_by(delta, content, viewport);
    }

    fn viewport_height(&self) -> u16 {
        if self.viewport.1 > 0 { self.viewport.1 } else { WINDOW_HEIGHT - 1 }
    }

    fn scroll_metrics(&self) -> (u16, u16) {
        let width = if self.viewport.0 >= 4 { self.viewport.0 } else { DEFAULT_EXPORT_WIDTH };
        let content_width = width.saturating_sub(2) as usize;
        let content_height = TranscriptRenderer::new(&self.entries).content_height(content_width) as u16;
        (content_height, self.viewport_height())
    }

    /// Run the interactive panel until exit
    pub async fn run(&mut self) -> Result<()> {
        crossterm::terminal::enable_raw_mode()?;
        crossterm::execute!(std::io::stdout(), crossterm::terminal::EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(std::io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let backend = CrosstermBackend::new(std::io::stdout());
            if let Ok(mut terminal) = Terminal::new(backend) {
                let _ = terminal.show_cursor();
            }
            let _ = crossterm::terminal::disable_raw_mode();
            let _ = crossterm::execute!(std::io::stdout(), crossterm::terminal::LeaveAlternateScreen);
            original_hook(panic_info);
        }));

        terminal.clear()?;
        self.draw(&mut terminal)?;

        while !self.should_exit {
            let input_poll = async {
                tokio::time::sleep(Duration::from_millis(100)).await;
                EventHandler::read()
            };

            tokio::select! {
                maybe_event = input_poll => {
                    if let Some(event) = maybe_event {
                        self.handle_event(event);
                    }
                    self.draw(&mut terminal)?;
                }
                maybe_entry = async {
                    if let Some(ref mut rx) = self.feed_rx {
                        rx.recv().await
                    } else {
                        std::future::pending().await
                    }
                } => {
                    match maybe_entry {
                        Some(entry) => {
                            self.push_entry(entry);
                            self.draw(&mut terminal)?;
                        }
                        None => self.feed_rx = None,
                    }
                }
            }
        }

        self.cancel.cancel();

        terminal.show_cursor()?;
        crossterm::terminal::disable_raw_mode()?;
        crossterm::execute!(std::io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;

        Ok(())
    }
}
