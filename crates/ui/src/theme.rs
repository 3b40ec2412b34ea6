use ratatui::style::{Color, Style};
use stratus_core::TaskStatus;

/// Iceberg color theme for the Stratus panel
///
/// Based on iceberg.vim color scheme (https://github.com/cocopon/iceberg.vim)
/// Bluish dark theme designed for extended sessions with eye-friendly colors.
#[derive(Debug, Clone, Copy)]
pub struct Theme;

impl Theme {
    /// Primary background: deep blue-black (fills terminal)
    pub const BG: Color = Color::Rgb(22, 24, 33);

    /// Foreground: light blue-gray (primary text)
    pub const FG: Color = Color::Rgb(198, 200, 209);

    /// Secondary background: lighter blue-black (panels, cards, menu)
    pub const PANEL_BG: Color = Color::Rgb(30, 33, 50);

    /// Hover/active states: visual selection
    pub const ACTIVE: Color = Color::Rgb(39, 44, 66);

    /// Primary accent: blue
    pub const BLUE: Color = Color::Rgb(132, 160, 198);

    /// Secondary accent: cyan
    pub const CYAN: Color = Color::Rgb(137, 184, 194);

    /// Tertiary accent: purple
    pub const PURPLE: Color = Color::Rgb(160, 147, 199);

    /// Completed tasks: green (also the third header dot)
    pub const GREEN: Color = Color::Rgb(180, 190, 130);

    /// Second header dot: yellow
    pub const YELLOW: Color = Color::Rgb(226, 164, 120);

    /// Errors and the first header dot: red
    pub const RED: Color = Color::Rgb(226, 120, 120);

    /// Muted text: dimmed foreground
    pub const MUTED: Color = Color::Rgb(107, 112, 137);

    /// Border color
    pub const BORDER: Color = Color::Rgb(60, 65, 90);

    /// Base style for all text
    pub fn base() -> Style {
        Style::default().fg(Self::FG).bg(Self::BG)
    }

    /// Primary accent style
    pub fn primary() -> Style {
        Style::default().fg(Self::BLUE).bg(Self::BG)
    }

    /// Error style
    pub fn error() -> Style {
        Style::default().fg(Self::RED).bg(Self::BG)
    }

    /// Muted style (for secondary text)
    pub fn muted() -> Style {
        Style::default().fg(Self::MUTED).bg(Self::BG)
    }

    /// Panel style
    pub fn panel() -> Style {
        Style::default().fg(Self::FG).bg(Self::PANEL_BG)
    }

    /// Border style
    pub fn border() -> Style {
        Style::default().fg(Self::BORDER)
    }

    /// Active (selected) style
    pub fn active() -> Style {
        Style::default().fg(Self::FG).bg(Self::ACTIVE)
    }

    /// Accent color for a task row by its derived status
    pub fn status_color(status: TaskStatus) -> Color {
        match status {
            TaskStatus::Started => Self::BLUE,
            TaskStatus::Executing => Self::MUTED,
            TaskStatus::Completed => Self::GREEN,
            TaskStatus::Final => Self::PURPLE,
        }
    }
}
