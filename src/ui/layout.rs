use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions, top to bottom: header, input pane, action row,
/// output pane, footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect, Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(3),
        ])
        .split(area);
    (rows[0], rows[1], rows[2], rows[3], rows[4])
}
