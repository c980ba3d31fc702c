use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Stacked layout for the guess prompt
pub struct AppLayout {
    pub input_area: Rect,
    pub suggestions_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Create stacked layout:
    /// - Input box: 3 rows (top)
    /// - Suggestions: remaining rows
    /// - Status bar: bottom row
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Input box with border
                Constraint::Min(0),    // Suggestions list
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self { input_area: chunks[0], suggestions_area: chunks[1], status_area: chunks[2] }
    }
}
