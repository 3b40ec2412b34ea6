//! End-to-end tests for the transcript panel: rendering, scroll-follow
//! behavior, empty-state prompts, and export actions driven through real
//! key events against a test backend.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};
use std::sync::{Arc, Mutex};
use stratus_core::{TaskEntry, TaskStatus};
use stratus_ui::{App, PanelOptions, SNAPSHOT_FILENAME};

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    let mut out = String::new();
    for y in area.y..area.bottom() {
        for x in area.x..area.right() {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(100, 24)).unwrap()
}

fn tasks(count: usize) -> Vec<TaskEntry> {
    (0..count)
        .map(|i| {
            TaskEntry::new(format!("task-{}", i), format!("goal number {}", i))
                .with_status(TaskStatus::Completed)
        })
        .collect()
}

#[test]
fn executing_entries_never_render_and_order_is_preserved() {
    let entries = vec![
        TaskEntry::new("task-a", "alpha goal").with_status(TaskStatus::Started),
        TaskEntry::new("task-b", "beta goal").with_status(TaskStatus::Executing),
        TaskEntry::new("task-c", "gamma goal").with_status(TaskStatus::Completed),
    ];

    let mut app = App::new(entries, PanelOptions::default());
    let mut term = terminal();
    app.draw(&mut term).unwrap();
    let text = buffer_text(&term);

    assert!(text.contains("task-a"));
    assert!(text.contains("task-c"));
    assert!(!text.contains("task-b"));
    assert!(!text.contains("beta goal"));
    assert!(text.find("alpha goal").unwrap() < text.find("gamma goal").unwrap());
}

#[test]
fn empty_sequence_renders_placeholder_and_three_prompts() {
    let mut app = App::new(Vec::new(), PanelOptions::default());
    let mut term = terminal();
    app.draw(&mut term).unwrap();
    let text = buffer_text(&term);

    assert!(text.contains("Create an agent"));
    assert!(text.contains("PlatformerGPT 🎮"));
    assert!(text.contains("TravelGPT 🌴"));
    assert!(text.contains("ResearchGPT 📜"));
}

#[test]
fn sequence_of_only_executing_entries_is_not_the_empty_state() {
    let entries = vec![TaskEntry::new("task-x", "goal").with_status(TaskStatus::Executing)];
    let mut app = App::new(entries, PanelOptions::default());
    let mut term = terminal();
    app.draw(&mut term).unwrap();
    let text = buffer_text(&term);

    assert!(!text.contains("task-x"));
    assert!(!text.contains("PlatformerGPT"));
}

#[test]
fn activating_example_prompt_invokes_run_callback_with_literal_pair() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = calls.clone();

    let mut app = App::new(Vec::new(), PanelOptions::default()).with_run_callback(Box::new(
        move |name, goal| {
            sink.lock().unwrap().push((name.to_string(), goal.to_string()));
        },
    ));

    // Move the selection to the second prompt, then activate it
    app.handle_event(key(KeyCode::Tab));
    app.handle_event(key(KeyCode::Enter));

    let calls = calls.lock().unwrap();
    assert_eq!(
        calls.as_slice(),
        [("TravelGPT 🌴".to_string(), "Plan a detailed trip to Hawaii.".to_string())]
    );
}

#[test]
fn prompt_keys_do_nothing_once_entries_exist() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = calls.clone();

    let mut app = App::new(tasks(1), PanelOptions::default()).with_run_callback(Box::new(
        move |name, goal| {
            sink.lock().unwrap().push((name.to_string(), goal.to_string()));
        },
    ));

    app.handle_event(key(KeyCode::Enter));
    assert!(calls.lock().unwrap().is_empty());
}

#[test]
fn scrolled_away_offset_survives_redraws_until_back_at_bottom() {
    let mut app = App::new(tasks(40), PanelOptions::default());
    let mut term = terminal();

    // First draw pins to the bottom
    app.draw(&mut term).unwrap();
    let pinned = app.state().scroll.offset();
    assert!(pinned > 0);

    // Scroll events past the tolerance suppress following
    app.handle_event(key(KeyCode::PageUp));
    let scrolled = app.state().scroll.offset();
    assert!(scrolled < pinned);

    app.draw(&mut term).unwrap();
    app.draw(&mut term).unwrap();
    assert_eq!(app.state().scroll.offset(), scrolled);

    // Scrolling back to the bottom re-enables following
    app.handle_event(key(KeyCode::End));
    app.draw(&mut term).unwrap();
    assert_eq!(app.state().scroll.offset(), pinned);

    // New content pins again on the next draw
    app.push_entry(TaskEntry::new("task-extra", "late goal"));
    app.draw(&mut term).unwrap();
    assert!(app.state().scroll.offset() > pinned);
}

#[test]
fn scroll_within_tolerance_still_follows() {
    let mut app = App::new(tasks(40), PanelOptions::default());
    let mut term = terminal();
    app.draw(&mut term).unwrap();
    let pinned = app.state().scroll.offset();

    // One row up is within the tolerance; the next draw re-pins
    app.handle_event(key(KeyCode::Up));
    assert!(!app.state().scroll.user_scrolled());
    app.draw(&mut term).unwrap();
    assert_eq!(app.state().scroll.offset(), pinned);
}

#[test]
fn autoscroll_disabled_never_pins() {
    let options = PanelOptions { autoscroll: false, ..PanelOptions::default() };
    let mut app = App::new(tasks(40), options);
    let mut term = terminal();

    app.draw(&mut term).unwrap();
    assert_eq!(app.state().scroll.offset(), 0);

    app.push_entry(TaskEntry::new("task-extra", "late goal"));
    app.draw(&mut term).unwrap();
    assert_eq!(app.state().scroll.offset(), 0);
}

#[test]
fn save_key_invokes_callback_with_db_only_when_present() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = calls.clone();

    let mut app = App::new(tasks(2), PanelOptions::default()).with_save_callback(Box::new(
        move |format| {
            sink.lock().unwrap().push(format.to_string());
        },
    ));
    app.handle_event(key(KeyCode::Char('s')));
    assert_eq!(calls.lock().unwrap().as_slice(), ["db"]);

    // Without a callback the header offers no save action
    let mut app = App::new(tasks(2), PanelOptions::default());
    let mut term = terminal();
    app.draw(&mut term).unwrap();
    assert!(!buffer_text(&term).contains("save"));
}

#[test]
fn export_menu_snapshot_writes_full_transcript_file() {
    let temp = tempfile::TempDir::new().unwrap();
    let mut app = App::new(tasks(40), PanelOptions::default()).with_export_directory(temp.path());
    let mut term = terminal();
    app.draw(&mut term).unwrap();

    // Open the export menu and pick the first item (Snapshot)
    app.handle_event(key(KeyCode::Char('e')));
    app.handle_event(key(KeyCode::Enter));

    let path = temp.path().join(SNAPSHOT_FILENAME);
    let content = std::fs::read_to_string(&path).unwrap();

    // The snapshot ignores viewport clipping: rows scrolled out of view
    // are present alongside the visible tail
    assert!(content.contains("task-0"));
    assert!(content.contains("task-39"));
}

#[test]
fn snapshot_failure_shows_alert_and_any_key_dismisses_it() {
    let temp = tempfile::TempDir::new().unwrap();
    let blocker = temp.path().join("occupied");
    std::fs::write(&blocker, "a file, not a directory").unwrap();

    let mut app = App::new(tasks(3), PanelOptions::default()).with_export_directory(&blocker);
    let mut term = terminal();

    app.handle_event(key(KeyCode::Char('e')));
    app.handle_event(key(KeyCode::Enter));
    assert!(app.state().alert().is_some());

    app.draw(&mut term).unwrap();
    assert!(buffer_text(&term).contains("Failed to write snapshot"));

    app.handle_event(key(KeyCode::Char('x')));
    assert!(app.state().alert().is_none());
}

#[test]
fn copy_action_without_clipboard_does_not_panic() {
    let mut app = App::new(tasks(3), PanelOptions::default());

    app.handle_event(key(KeyCode::Char('e')));
    app.handle_event(key(KeyCode::Down));
    app.handle_event(key(KeyCode::Enter));

    // Headless environments have no clipboard; the action degrades to a
    // logged failure and the panel keeps running
    assert!(!app.should_exit());
    assert!(app.state().alert().is_none());
}

#[test]
fn quit_key_requests_exit() {
    let mut app = App::new(tasks(1), PanelOptions::default());
    app.handle_event(key(KeyCode::Char('q')));
    assert!(app.should_exit());
}

#[test]
fn rendering_does_not_mutate_the_entry_snapshot() {
    let entries = vec![
        TaskEntry::new("task-a", "alpha goal").with_status(TaskStatus::Started),
        TaskEntry::new("task-b", "beta goal").with_status(TaskStatus::Executing),
    ];
    let before = entries.clone();

    let mut app = App::new(entries, PanelOptions::default());
    let mut term = terminal();
    app.draw(&mut term).unwrap();
    app.draw(&mut term).unwrap();

    assert_eq!(app.entries(), before.as_slice());
}

#[test]
fn home_and_end_jump_between_extremes() {
    let mut app = App::new(tasks(40), PanelOptions::default());
    let mut term = terminal();
    app.draw(&mut term).unwrap();
    let pinned = app.state().scroll.offset();
    assert!(pinned > 0);

    app.handle_event(key(KeyCode::Home));
    assert_eq!(app.state().scroll.offset(), 0);
    assert!(app.state().scroll.user_scrolled());

    app.handle_event(key(KeyCode::End));
    assert!(!app.state().scroll.user_scrolled());
    assert_eq!(app.state().scroll.offset(), pinned);
}
