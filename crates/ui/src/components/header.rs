use crate::{
    layout::PanelLayout,
    state::{ExportItem, ExportMenuState},
    theme::Theme,
};

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use unicode_width::UnicodeWidthStr;

/// Header bar for the transcript panel
///
/// Shows the three decorative status dots, the optional title, a save hint
/// when the caller supplied a save callback, and the export menu.
pub struct Header<'a> {
    title: Option<&'a str>,
    has_save: bool,
    menu: &'a ExportMenuState,
}

impl<'a> Header<'a> {
    pub fn new(title: Option<&'a str>, has_save: bool, menu: &'a ExportMenuState) -> Self {
        Self { title, has_save, menu }
    }

    /// Render the header bar and, when open, the export menu popup
    pub fn render(&self, frame: &mut Frame<'_>, layout: &PanelLayout) {
        let area = layout.header;
        if area.height == 0 || area.width == 0 {
            return;
        }

        let mut spans = vec![
            Span::styled(" ● ", Style::default().fg(Theme::RED).bg(Theme::BG)),
            Span::styled("● ", Style::default().fg(Theme::YELLOW).bg(Theme::BG)),
            Span::styled("● ", Style::default().fg(Theme::GREEN).bg(Theme::BG)),
        ];

        if let Some(title) = self.title {
            spans.push(Span::styled(
                title.to_string(),
                Style::default().fg(Theme::MUTED).bg(Theme::BG).add_modifier(Modifier::BOLD),
            ));
        }

        let mut line = Line::from(spans);

        let hints = self.hints();
        let left_width = line.spans.iter().map(|s| s.content.width()).sum::<usize>() as u16;
        let right_width = hints.iter().map(|s| s.content.width()).sum::<usize>() as u16;
        let pad = area.width.saturating_sub(left_width + right_width + 1);
        if pad > 0 {
            line.spans.push(Span::styled(
                " ".repeat(pad as usize),
                Style::default().bg(Theme::BG),
            ));
            line.spans.extend(hints);
        }

        let paragraph = Paragraph::new(line).block(Block::default().style(Style::default().bg(Theme::BG)));
        frame.render_widget(paragraph, area);

        if self.menu.is_open() {
            self.render_menu(frame, layout.menu_anchor(ExportItem::VALUES.len() as u16));
        }
    }

    fn hints(&self) -> Vec<Span<'static>> {
        let mut hints = Vec::new();

        if self.has_save {
            hints.push(Span::styled("s", Style::default().fg(Theme::BLUE).bg(Theme::BG)));
            hints.push(Span::styled(" save", Style::default().fg(Theme::MUTED).bg(Theme::BG)));
            hints.push(Span::styled("  ", Style::default().bg(Theme::BG)));
        }

        hints.push(Span::styled("e", Style::default().fg(Theme::BLUE).bg(Theme::BG)));
        hints.push(Span::styled(" export", Style::default().fg(Theme::MUTED).bg(Theme::BG)));
        hints
    }

    fn render_menu(&self, frame: &mut Frame<'_>, area: Rect) {
        if area.width < 4 || area.height < 3 {
            return;
        }

        frame.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::border())
            .style(Theme::panel())
            .title("export");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        for (idx, item) in ExportItem::VALUES.iter().enumerate() {
            if idx as u16 >= inner.height {
                break;
            }

            let row = Rect { x: inner.x, y: inner.y + idx as u16, width: inner.width, height: 1 };
            let style = if idx == self.menu.selected() { Theme::active() } else { Theme::panel() };
            let label = format!(" {:<width$}", item.label(), width = inner.width.saturating_sub(1) as usize);
            frame.render_widget(Paragraph::new(Line::from(Span::styled(label, style))), row);
        }
    }
}
