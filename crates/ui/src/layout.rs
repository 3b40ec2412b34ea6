use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout breakpoints for responsive terminals
///
/// Based on terminal width, we render different layouts:
/// - >= 100 cols: Full layout
/// - 80-99 cols: Medium layout
/// - < 80 cols: Compact layout; the panel hides unless configured visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Full layout (>= 100 columns)
    Full,
    /// Medium layout (80-99 columns)
    Medium,
    /// Compact layout (<= 79 columns)
    Compact,
}

impl From<u16> for LayoutMode {
    fn from(width: u16) -> Self {
        match width {
            w if w >= 100 => Self::Full,
            w if w >= 80 => Self::Medium,
            _ => Self::Compact,
        }
    }
}

impl LayoutMode {
    /// Check if this is the compact breakpoint
    pub fn is_compact(&self) -> bool {
        matches!(self, Self::Compact)
    }
}

/// Panel height cap when not running fullscreen
pub const WINDOW_HEIGHT: u16 = 24;

/// Export menu popup width
pub const MENU_WIDTH: u16 = 16;

/// Calculated layout for the transcript panel
#[derive(Debug, Clone)]
pub struct PanelLayout {
    /// Layout mode based on terminal width
    pub mode: LayoutMode,
    /// Header bar (1 line)
    pub header: Rect,
    /// Message list area
    pub messages: Rect,
}

impl PanelLayout {
    /// Calculate layout based on terminal size and the fullscreen flag
    ///
    /// Fullscreen panels take the whole terminal; otherwise the panel is
    /// capped at [`WINDOW_HEIGHT`] rows, anchored to the top.
    pub fn calculate(area: Rect, fullscreen: bool) -> Self {
        let mode = LayoutMode::from(area.width);

        let panel = if fullscreen {
            area
        } else {
            Rect { height: area.height.min(WINDOW_HEIGHT), ..area }
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(panel);

        Self { mode, header: chunks[0], messages: chunks[1] }
    }

    /// Anchor rect for the export menu popup, below the right end of the header
    pub fn menu_anchor(&self, item_count: u16) -> Rect {
        let width = MENU_WIDTH.min(self.messages.width);
        let height = (item_count + 2).min(self.messages.height);
        Rect {
            x: self.messages.right().saturating_sub(width),
            y: self.messages.y,
            width,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_mode_from_width() {
        assert_eq!(LayoutMode::from(120), LayoutMode::Full);
        assert_eq!(LayoutMode::from(100), LayoutMode::Full);
        assert_eq!(LayoutMode::from(99), LayoutMode::Medium);
        assert_eq!(LayoutMode::from(80), LayoutMode::Medium);
        assert_eq!(LayoutMode::from(79), LayoutMode::Compact);
        assert_eq!(LayoutMode::from(40), LayoutMode::Compact);
    }

    #[test]
    fn test_layout_mode_is_compact() {
        assert!(LayoutMode::Compact.is_compact());
        assert!(!LayoutMode::Medium.is_compact());
        assert!(!LayoutMode::Full.is_compact());
    }

    #[test]
    fn test_panel_layout_fullscreen() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = PanelLayout::calculate(area, true);

        assert_eq!(layout.header.height, 1);
        assert_eq!(layout.messages.height, 39);
        assert_eq!(layout.messages.width, 120);
    }

    #[test]
    fn test_panel_layout_windowed_caps_height() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = PanelLayout::calculate(area, false);

        assert_eq!(layout.header.height, 1);
        assert_eq!(layout.messages.height, WINDOW_HEIGHT - 1);
    }

    #[test]
    fn test_panel_layout_small_terminal() {
        let area = Rect::new(0, 0, 60, 10);
        let layout = PanelLayout::calculate(area, false);

        assert_eq!(layout.mode, LayoutMode::Compact);
        assert_eq!(layout.messages.height, 9);
    }

    #[test]
    fn test_menu_anchor_within_bounds() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = PanelLayout::calculate(area, true);
        let anchor = layout.menu_anchor(2);

        assert_eq!(anchor.width, MENU_WIDTH);
        assert_eq!(anchor.height, 4);
        assert_eq!(anchor.right(), layout.messages.right());
        assert_eq!(anchor.y, layout.messages.y);
    }

    #[test]
    fn test_menu_anchor_clamped_on_tiny_terminal() {
        let area = Rect::new(0, 0, 10, 3);
        let layout = PanelLayout::calculate(area, true);
        let anchor = layout.menu_anchor(2);

        assert!(anchor.width <= layout.messages.width);
        assert!(anchor.height <= layout.messages.height);
    }
}
