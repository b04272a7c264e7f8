//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Areas of the table screen, top to bottom
pub struct TableLayout {
    pub title: Option<Rect>,
    /// Page-size control and filter input
    pub tools: Rect,
    pub table: Rect,
    /// Entry summary and page navigation
    pub footer: Rect,
}

/// Width reserved for the filter input on the tools row
const FILTER_WIDTH: u16 = 36;

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Split the whole screen into content and a one-line key hint bar
pub fn split_hint_bar(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    (chunks[0], chunks[1])
}

pub fn calculate_table_layout(area: Rect, has_title: bool) -> TableLayout {
    let mut constraints = Vec::with_capacity(5);
    if has_title {
        constraints.push(Constraint::Length(2));
    }
    constraints.extend([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
    ]);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let offset = usize::from(has_title);
    TableLayout {
        title: has_title.then(|| chunks[0]),
        tools: chunks[offset],
        table: chunks[offset + 2],
        footer: chunks[offset + 3],
    }
}

/// Split the tools row into page-size control (left) and filter input (right)
pub fn split_tools(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(FILTER_WIDTH)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Split the footer into summary (left) and a right-aligned navigation of `nav_width`
pub fn split_footer(area: Rect, nav_width: u16) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(nav_width)])
        .split(area);
    (chunks[0], chunks[1])
}
