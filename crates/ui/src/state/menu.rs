/// Actions offered by the header's export menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportItem {
    /// Write the full transcript to the snapshot file
    Snapshot,
    /// Copy the transcript text to the system clipboard
    Copy,
}

impl ExportItem {
    pub const VALUES: &[ExportItem] = &[ExportItem::Snapshot, ExportItem::Copy];

    /// Menu label for this item
    pub fn label(&self) -> &'static str {
        match self {
            ExportItem::Snapshot => "Snapshot",
            ExportItem::Copy => "Copy",
        }
    }
}

/// State of the header's export menu
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportMenuState {
    open: bool,
    selected: usize,
}

impl ExportMenuState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the menu popup is showing
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Index of the highlighted item
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Open or close the menu; opening resets the highlight
    pub fn toggle(&mut self) {
        self.open = !self.open;
        if self.open {
            self.selected = 0;
        }
    }

    /// Close the menu
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Move the highlight down, wrapping
    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % ExportItem::VALUES.len();
    }

    /// Move the highlight up, wrapping
    pub fn select_prev(&mut self) {
        let len = ExportItem::VALUES.len();
        self.selected = (self.selected + len - 1) % len;
    }

    /// Currently highlighted item
    pub fn selected_item(&self) -> ExportItem {
        ExportItem::VALUES[self.selected]
    }
}
