/// Rows of slack before the panel counts the user as scrolled away
///
/// Distance-from-bottom greater than this means the user has scrolled up
/// and auto-follow is suppressed until they return to the bottom.
pub const BOTTOM_TOLERANCE: u16 = 1;

/// Scroll position for the message list
///
/// Tracks the vertical offset (in rows from the top of the rendered
/// content) and a single derived flag: whether the user has scrolled away
/// from the bottom. The flag is recomputed on every scroll event from the
/// scroll geometry and is consulted before each draw-time pin-to-bottom.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    offset: u16,
    user_scrolled: bool,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current scroll offset in rows
    pub fn offset(&self) -> u16 {
        self.offset
    }

    /// Whether the user has scrolled away from the bottom
    pub fn user_scrolled(&self) -> bool {
        self.user_scrolled
    }

    /// Maximum scroll offset for the given geometry
    pub fn max_offset(content_height: u16, viewport_height: u16) -> u16 {
        content_height.saturating_sub(viewport_height)
    }

    /// Handle a scroll event moving by `delta` rows (negative is up)
    pub fn scroll_by(&mut self, delta: i32, content_height: u16, viewport_height: u16) {
        let max = Self::max_offset(content_height, viewport_height);
        let next = (i32::from(self.offset) + delta).clamp(0, i32::from(max)) as u16;
        self.set_offset(next, content_height, viewport_height);
    }

    /// Handle a scroll event jumping to the top
    pub fn scroll_to_top(&mut self, content_height: u16, viewport_height: u16) {
        self.set_offset(0, content_height, viewport_height);
    }

    /// Handle a scroll event jumping to the bottom
    pub fn scroll_to_bottom(&mut self, content_height: u16, viewport_height: u16) {
        let max = Self::max_offset(content_height, viewport_height);
        self.set_offset(max, content_height, viewport_height);
    }

    /// Set the offset and recompute the scrolled-away flag from geometry
    fn set_offset(&mut self, offset: u16, content_height: u16, viewport_height: u16) {
        let max = Self::max_offset(content_height, viewport_height);
        self.offset = offset.min(max);
        self.user_scrolled = max.saturating_sub(self.offset) > BOTTOM_TOLERANCE;
    }

    /// Draw-time pin: force the offset to the bottom unless following is
    /// disabled or the user has scrolled away
    ///
    /// Runs on every draw without change detection; rapid redraws while at
    /// the bottom keep re-pinning, which is what a live transcript wants.
    /// The offset is always clamped so content shrinking cannot leave it
    /// past the end.
    pub fn follow(&mut self, autoscroll: bool, content_height: u16, viewport_height: u16) {
        let max = Self::max_offset(content_height, viewport_height);
        self.offset = self.offset.min(max);

        if autoscroll && !self.user_scrolled {
            self.offset = max;
        }
    }
}
