use crate::theme::Theme;

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use stratus_core::TaskEntry;

/// Renders task entries to transcript lines
///
/// One row per visible entry, in sequence order. Entries whose derived
/// status is `executing` are suppressed entirely. The renderer never
/// mutates the entries it is given.
pub struct TranscriptRenderer<'a> {
    entries: &'a [TaskEntry],
}

impl<'a> TranscriptRenderer<'a> {
    /// Create a new renderer over the given entry snapshot
    pub fn new(entries: &'a [TaskEntry]) -> Self {
        Self { entries }
    }

    /// Render every visible entry into styled lines at the given width
    pub fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        for entry in self.entries.iter().filter(|e| e.is_visible()) {
            if !lines.is_empty() {
                lines.push(Line::default());
            }
            self.render_entry(entry, width, &mut lines);
        }

        lines
    }

    /// Total rendered height in rows at the given width
    pub fn content_height(&self, width: usize) -> usize {
        self.lines(width).len()
    }

    /// The transcript as plain text, matching the rendered rows without
    /// the decorative accents (used for clipboard and snapshot export)
    pub fn plain_text(&self, width: usize) -> String {
        let mut out = Vec::new();

        for entry in self.entries.iter().filter(|e| e.is_visible()) {
            if !out.is_empty() {
                out.push(String::new());
            }
            out.push(format!("{} [{}]", entry.id, entry.status.as_str()));
            out.extend(wrap_field("Goal", &entry.input, width));
            if !entry.output.is_empty() {
                out.extend(wrap_field("Output", &entry.output, width));
            }
        }

        out.join("\n")
    }

    fn render_entry(&self, entry: &TaskEntry, width: usize, lines: &mut Vec<Line<'static>>) {
        let accent = Theme::status_color(entry.status);

        lines.push(Line::from(vec![
            Span::styled("● ", Style::default().fg(accent)),
            Span::styled(
                entry.id.clone(),
                Style::default().fg(Theme::FG).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", entry.status.as_str()),
                Style::default().fg(Theme::MUTED),
            ),
        ]));

        let bar = Span::styled("┃ ", Style::default().fg(accent).bg(Theme::BG));
        let content_style = Style::default().fg(Theme::FG).bg(Theme::BG);
        let content_width = width.saturating_sub(2);

        for wrapped in wrap_field("Goal", &entry.input, content_width) {
            lines.push(Line::from(vec![bar.clone(), Span::styled(wrapped, content_style)]));
        }

        if !entry.output.is_empty() {
            for wrapped in wrap_field("Output", &entry.output, content_width) {
                lines.push(Line::from(vec![bar.clone(), Span::styled(wrapped, content_style)]));
            }
        }
    }
}

/// Wrap a labelled field ("Goal: ...", "Output: ...") to the given width
fn wrap_field(label: &str, value: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    if width == 0 {
        return out;
    }

    if value.is_empty() {
        out.push(format!("{}:", label));
        return out;
    }

    let mut first = true;
    for source_line in value.lines() {
        let text = if first {
            format!("{}: {}", label, source_line)
        } else {
            source_line.to_string()
        };
        first = false;

        if text.is_empty() {
            out.push(String::new());
            continue;
        }

        for wrapped in textwrap::wrap(&text, width) {
            out.push(wrapped.into_owned());
        }
    }

    out
}
