use crate::{
    state::{EMPTY_STATE_MESSAGE, EXAMPLE_PROMPTS, PanelState},
    theme::Theme,
    transcript::TranscriptRenderer,
};

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Paragraph},
};
use stratus_core::TaskEntry;

/// Horizontal padding inside the message area
const PADDING_X: u16 = 1;

/// Message list body of the transcript panel
///
/// Renders one row per visible task entry in order, or the empty state
/// (system placeholder plus example prompts) when the entry sequence is
/// empty. A transient alert, when present, overlays the bottom row.
pub struct MessageList<'a> {
    entries: &'a [TaskEntry],
    state: &'a PanelState,
}

impl<'a> MessageList<'a> {
    pub fn new(entries: &'a [TaskEntry], state: &'a PanelState) -> Self {
        Self { entries, state }
    }

    /// Content width available for transcript rows in the given area
    pub fn content_width(area: Rect) -> usize {
        area.width.saturating_sub(PADDING_X * 2) as usize
    }

    /// Render the message list to the given frame
    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        frame.render_widget(Block::default().style(Theme::base()), area);

        let inner = Rect {
            x: area.x + PADDING_X,
            width: area.width.saturating_sub(PADDING_X * 2),
            ..area
        };

        if self.entries.is_empty() {
            self.render_empty_state(frame, inner);
        } else {
            let lines = TranscriptRenderer::new(self.entries).lines(inner.width as usize);
            let paragraph = Paragraph::new(Text::from(lines))
                .style(Theme::base())
                .scroll((self.state.scroll.offset(), 0));
            frame.render_widget(paragraph, inner);
        }

        if let Some(alert) = self.state.alert() {
            self.render_alert(frame, area, alert);
        }
    }

    /// Empty state: system placeholder plus the fixed example prompts
    fn render_empty_state(&self, frame: &mut Frame<'_>, area: Rect) {
        let mut lines = Vec::new();

        lines.push(Line::from(vec![
            Span::styled("• ", Style::default().fg(Theme::MUTED)),
            Span::styled(
                "System",
                Style::default().fg(Theme::MUTED).add_modifier(Modifier::BOLD),
            ),
        ]));

        let message_width = area.width.saturating_sub(2) as usize;
        for wrapped in textwrap::wrap(EMPTY_STATE_MESSAGE, message_width.max(1)) {
            lines.push(Line::from(vec![
                Span::styled("│ ", Style::default().fg(Theme::CYAN)),
                Span::styled(wrapped.into_owned(), Style::default().fg(Theme::FG)),
            ]));
        }
        lines.push(Line::default());

        for (idx, prompt) in EXAMPLE_PROMPTS.iter().enumerate() {
            let selected = idx == self.state.prompts.selected();
            let (marker, name_style, card_style) = if selected {
                (
                    "▸ ",
                    Style::default().fg(Theme::BLUE).add_modifier(Modifier::BOLD),
                    Style::default().fg(Theme::FG),
                )
            } else {
                (
                    "  ",
                    Style::default().fg(Theme::FG).add_modifier(Modifier::BOLD),
                    Style::default().fg(Theme::MUTED),
                )
            };

            lines.push(Line::from(vec![
                Span::styled(marker, Style::default().fg(Theme::BLUE)),
                Span::styled(prompt.name, name_style),
            ]));

            let goal_width = area.width.saturating_sub(4) as usize;
            for wrapped in textwrap::wrap(prompt.goal, goal_width.max(1)) {
                lines.push(Line::from(vec![
                    Span::styled("    ", Style::default()),
                    Span::styled(wrapped.into_owned(), card_style),
                ]));
            }
            lines.push(Line::default());
        }

        lines.push(Line::from(Span::styled(
            "tab select · enter run",
            Style::default().fg(Theme::MUTED),
        )));

        let paragraph = Paragraph::new(Text::from(lines)).style(Theme::base());
        frame.render_widget(paragraph, area);
    }

    /// Bottom-row alert overlay
    fn render_alert(&self, frame: &mut Frame<'_>, area: Rect, alert: &str) {
        let row = Rect {
            x: area.x,
            y: area.bottom().saturating_sub(1),
            width: area.width,
            height: 1,
        };

        let line = Line::from(vec![
            Span::styled(" ⚠ ", Style::default().fg(Theme::RED).bg(Theme::PANEL_BG)),
            Span::styled(
                alert.to_string(),
                Style::default().fg(Theme::RED).bg(Theme::PANEL_BG),
            ),
        ]);
        frame.render_widget(
            Paragraph::new(line).block(Block::default().style(Style::default().bg(Theme::PANEL_BG))),
            row,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};
    use stratus_core::TaskStatus;

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

    fn draw(entries: &[TaskEntry], state: &PanelState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal
            .draw(|frame| {
                MessageList::new(entries, state).render(frame, frame.area());
            })
            .unwrap();
        buffer_text(&terminal)
    }

    #[test]
    fn test_renders_visible_entries_in_order() {
        let entries = vec![
            TaskEntry::new("task-1", "first goal").with_status(TaskStatus::Completed),
            TaskEntry::new("task-2", "second goal").with_status(TaskStatus::Started),
        ];
        let state = PanelState::new();
        let text = draw(&entries, &state);

        assert!(text.contains("task-1"));
        assert!(text.contains("Goal: first goal"));
        assert!(text.find("task-1").unwrap() < text.find("task-2").unwrap());
    }

    #[test]
    fn test_executing_entries_hidden() {
        let entries = vec![
            TaskEntry::new("task-1", "visible goal"),
            TaskEntry::new("task-2", "invisible goal").with_status(TaskStatus::Executing),
        ];
        let state = PanelState::new();
        let text = draw(&entries, &state);

        assert!(text.contains("visible goal"));
        assert!(!text.contains("invisible goal"));
        assert!(!text.contains("task-2"));
    }

    #[test]
    fn test_empty_state_shows_placeholder_and_prompts() {
        let state = PanelState::new();
        let text = draw(&[], &state);

        assert!(text.contains("Create an agent"));
        assert!(text.contains("PlatformerGPT"));
        assert!(text.contains("TravelGPT"));
        assert!(text.contains("ResearchGPT"));
    }

    #[test]
    fn test_executing_only_sequence_is_not_empty_state() {
        let entries = vec![TaskEntry::new("task-1", "goal").with_status(TaskStatus::Executing)];
        let state = PanelState::new();
        let text = draw(&entries, &state);

        assert!(!text.contains("PlatformerGPT"));
        assert!(!text.contains("task-1"));
    }

    #[test]
    fn test_selected_prompt_marker_moves() {
        let mut state = PanelState::new();
        let before = draw(&[], &state);
        let platformer_row = before.lines().find(|l| l.contains("PlatformerGPT")).unwrap();
        assert!(platformer_row.contains("▸"));

        state.prompts.select_next();
        let after = draw(&[], &state);
        let travel_row = after.lines().find(|l| l.contains("TravelGPT")).unwrap();
        assert!(travel_row.contains("▸"));
    }

    #[test]
    fn test_alert_overlay_rendered() {
        let mut state = PanelState::new();
        state.show_alert("Failed to write snapshot");
        let text = draw(&[], &state);

        assert!(text.contains("Failed to write snapshot"));
    }
}
