use crate::state::PanelState;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// Actions that can be triggered by key events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Scroll transcript up by one line
    ScrollUp,
    /// Scroll transcript down by one line
    ScrollDown,
    /// Page up in transcript
    PageUp,
    /// Page down in transcript
    PageDown,
    /// Jump to top of transcript
    ScrollToTop,
    /// Jump to bottom of transcript
    ScrollToBottom,
    /// Open or close the export menu
    ToggleExportMenu,
    /// Move the export menu highlight down
    MenuNext,
    /// Move the export menu highlight up
    MenuPrev,
    /// Run the highlighted export action
    MenuSelect,
    /// Close the export menu without running anything
    CloseMenu,
    /// Trigger the save callback
    Save,
    /// Select the next example prompt (empty state)
    PromptNext,
    /// Select the previous example prompt (empty state)
    PromptPrev,
    /// Run the selected example prompt (empty state)
    RunPrompt,
    /// Dismiss the current alert
    DismissAlert,
    /// Exit the application
    Exit,
    /// No action
    NoOp,
}

/// Maps terminal events to panel actions
pub struct EventHandler;

impl EventHandler {
    /// Read the next pending terminal event, if any
    pub fn read() -> Option<Event> {
        if event::poll(Duration::ZERO).unwrap_or(false) {
            event::read().ok()
        } else {
            None
        }
    }

    /// Translate a key event into a panel action
    ///
    /// Precedence: a visible alert swallows the key, then an open menu,
    /// then empty-state prompt navigation, then global bindings.
    pub fn handle_key(key: KeyEvent, state: &PanelState, transcript_empty: bool) -> KeyAction {
        if key.kind != KeyEventKind::Press {
            return KeyAction::NoOp;
        }

        if state.alert().is_some() {
            return KeyAction::DismissAlert;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Exit;
        }

        if state.menu.is_open() {
            return match key.code {
                KeyCode::Up => KeyAction::MenuPrev,
                KeyCode::Down => KeyAction::MenuNext,
                KeyCode::Enter => KeyAction::MenuSelect,
                KeyCode::Esc | KeyCode::Char('e') => KeyAction::CloseMenu,
                KeyCode::Char('q') => KeyAction::Exit,
                _ => KeyAction::NoOp,
            };
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => KeyAction::Exit,
            KeyCode::Char('e') => KeyAction::ToggleExportMenu,
            KeyCode::Char('s') => KeyAction::Save,
            KeyCode::Tab | KeyCode::Right if transcript_empty => KeyAction::PromptNext,
            KeyCode::BackTab | KeyCode::Left if transcript_empty => KeyAction::PromptPrev,
            KeyCode::Enter if transcript_empty => KeyAction::RunPrompt,
            KeyCode::Up => KeyAction::ScrollUp,
            KeyCode::Down => KeyAction::ScrollDown,
            KeyCode::PageUp => KeyAction::PageUp,
            KeyCode::PageDown => KeyAction::PageDown,
            KeyCode::Home => KeyAction::ScrollToTop,
            KeyCode::End => KeyAction::ScrollToBottom,
            _ => KeyAction::NoOp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_scroll_keys() {
        let state = PanelState::new();
        assert_eq!(EventHandler::handle_key(key(KeyCode::Up), &state, false), KeyAction::ScrollUp);
        assert_eq!(EventHandler::handle_key(key(KeyCode::Down), &state, false), KeyAction::ScrollDown);
        assert_eq!(EventHandler::handle_key(key(KeyCode::PageUp), &state, false), KeyAction::PageUp);
        assert_eq!(EventHandler::handle_key(key(KeyCode::End), &state, false), KeyAction::ScrollToBottom);
    }

    #[test]
    fn test_exit_keys() {
        let state = PanelState::new();
        assert_eq!(EventHandler::handle_key(key(KeyCode::Char('q')), &state, false), KeyAction::Exit);
        assert_eq!(EventHandler::handle_key(key(KeyCode::Esc), &state, false), KeyAction::Exit);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(EventHandler::handle_key(ctrl_c, &state, false), KeyAction::Exit);
    }

    #[test]
    fn test_save_and_export_keys() {
        let state = PanelState::new();
        assert_eq!(EventHandler::handle_key(key(KeyCode::Char('s')), &state, false), KeyAction::Save);
        assert_eq!(
            EventHandler::handle_key(key(KeyCode::Char('e')), &state, false),
            KeyAction::ToggleExportMenu
        );
    }

    #[test]
    fn test_menu_navigation_when_open() {
        let mut state = PanelState::new();
        state.menu.toggle();

        assert_eq!(EventHandler::handle_key(key(KeyCode::Up), &state, false), KeyAction::MenuPrev);
        assert_eq!(EventHandler::handle_key(key(KeyCode::Down), &state, false), KeyAction::MenuNext);
        assert_eq!(EventHandler::handle_key(key(KeyCode::Enter), &state, false), KeyAction::MenuSelect);
        assert_eq!(EventHandler::handle_key(key(KeyCode::Esc), &state, false), KeyAction::CloseMenu);
        assert_eq!(EventHandler::handle_key(key(KeyCode::Char('x')), &state, false), KeyAction::NoOp);
    }

    #[test]
    fn test_prompt_navigation_only_in_empty_state() {
        let state = PanelState::new();
        assert_eq!(EventHandler::handle_key(key(KeyCode::Tab), &state, true), KeyAction::PromptNext);
        assert_eq!(EventHandler::handle_key(key(KeyCode::Left), &state, true), KeyAction::PromptPrev);
        assert_eq!(EventHandler::handle_key(key(KeyCode::Enter), &state, true), KeyAction::RunPrompt);

        assert_eq!(EventHandler::handle_key(key(KeyCode::Tab), &state, false), KeyAction::NoOp);
        assert_eq!(EventHandler::handle_key(key(KeyCode::Enter), &state, false), KeyAction::NoOp);
    }

    #[test]
    fn test_alert_swallows_any_key() {
        let mut state = PanelState::new();
        state.show_alert("boom");

        assert_eq!(
            EventHandler::handle_key(key(KeyCode::Char('q')), &state, false),
            KeyAction::DismissAlert
        );
        assert_eq!(EventHandler::handle_key(key(KeyCode::Up), &state, false), KeyAction::DismissAlert);
    }

    #[test]
    fn test_release_events_ignored() {
        let state = PanelState::new();
        let mut release = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;

        assert_eq!(EventHandler::handle_key(release, &state, false), KeyAction::NoOp);
    }
}
