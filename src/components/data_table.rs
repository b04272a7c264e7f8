//! DataTable component
//!
//! Renders validated host data as a paginated table with per-column sorting
//! and a free-text filter. The rows shown are always recomputed from the
//! [`ViewState`] through [`compute_view`]; handlers only touch that state.
//!
//! Invalid or missing input is rendered as a single message and accepts no
//! further interaction.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::{calculate_table_layout, centered_popup, split_footer, split_tools};
use crate::components::{FilterInput, PageSizeSelector};
use crate::model::pagination::{navigate, page_buttons};
use crate::model::{
    compute_view, DataError, PageNav, PageSize, SortDirection, Table, TableData, TableView, Theme,
    ViewState,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row as TableRow, Table as TableWidget},
    Frame,
};
use tracing::{debug, info, warn};
use unicode_width::UnicodeWidthStr;

/// Widest a column is allowed to grow
const MAX_COLUMN_WIDTH: usize = 40;
/// Header marker for a column that is not the current sort
const SORT_IDLE: &str = "⇅";
/// Base fill under the table so the dark default text stays readable on any terminal
const SURFACE: Color = Color::White;

/// Everything the host supplies besides headers and rows
#[derive(Debug, Clone, Default)]
pub struct TableOptions {
    pub title: Option<String>,
    pub page_size: PageSize,
    pub first_sort: SortDirection,
    pub theme: Theme,
}

/// Clickable regions recorded by the last draw
#[derive(Debug, Default)]
struct HitMap {
    filter: Rect,
    headers: Vec<(Rect, usize)>,
    navigation: Vec<(Rect, Action)>,
}

pub struct DataTableComponent {
    title: Option<String>,
    content: Result<Table, DataError>,
    state: ViewState,
    theme: Theme,
    column_widths: Vec<u16>,
    focused_column: usize,
    filter_input: FilterInput,
    page_size_selector: PageSizeSelector,
    hits: HitMap,
}

impl DataTableComponent {
    pub fn new(data: TableData, options: TableOptions) -> Self {
        let content = data.validate();
        match &content {
            Ok(table) => info!(
                columns = table.column_count(),
                rows = table.rows().len(),
                "table ready"
            ),
            Err(DataError::InvalidShape {
                row,
                expected,
                found,
            }) => warn!(
                row = *row,
                expected = *expected,
                found = *found,
                "row width does not match header count"
            ),
            Err(DataError::Missing) => warn!("no headers or rows supplied"),
        }

        let column_widths = content.as_ref().map(column_widths).unwrap_or_default();
        Self {
            title: options.title,
            content,
            state: ViewState::new(options.page_size, options.first_sort),
            theme: options.theme,
            column_widths,
            focused_column: 0,
            filter_input: FilterInput::new(options.theme),
            page_size_selector: PageSizeSelector::new(options.page_size, options.theme),
            hits: HitMap::default(),
        }
    }

    pub fn error(&self) -> Option<&DataError> {
        self.content.as_ref().err()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Current derived view, `None` in a placeholder state
    pub fn view(&self) -> Option<TableView<'_>> {
        self.content
            .as_ref()
            .ok()
            .map(|table| compute_view(table, &self.state))
    }

    pub fn focused_column(&self) -> usize {
        self.focused_column
    }

    /// Whether key presses go to the filter input or the page-size selector
    pub fn is_capturing_input(&self) -> bool {
        self.filter_input.is_focused() || self.page_size_selector.is_open()
    }

    fn sort_column(&mut self, column: usize) {
        let Some(kind) = self
            .content
            .as_ref()
            .ok()
            .and_then(|table| table.column_kind(column))
        else {
            return;
        };

        let key = self.state.sort.sort_column(column, kind);
        self.focused_column = column;
        debug!(column, direction = ?key.direction, kind = ?key.kind, "sorted");
    }

    fn go_to_page(&mut self, nav: PageNav) {
        if let Some(pages) = self.view().map(|view| view.page_count) {
            self.state.active_page = navigate(self.state.active_page, nav, pages);
        }
    }

    /// Pull the active page back into range after any state change
    fn clamp_active_page(&mut self) {
        if let Some(active) = self.view().map(|view| view.active_page) {
            if active != self.state.active_page {
                debug!(from = self.state.active_page, to = active, "clamped active page");
                self.state.active_page = active;
            }
        }
    }
}

impl Component for DataTableComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.content.is_err() {
            return Ok(None);
        }
        if self.filter_input.is_focused() {
            return self.filter_input.handle_key_event(key);
        }
        if self.page_size_selector.is_open() {
            return self.page_size_selector.handle_key_event(key);
        }

        let action = match key.code {
            KeyCode::Left | KeyCode::Char('h') => Some(Action::FocusPrevColumn),
            KeyCode::Right | KeyCode::Char('l') => Some(Action::FocusNextColumn),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::SortFocusedColumn),
            KeyCode::Char('/') => Some(Action::EnterFilterMode),
            KeyCode::Char('s') => Some(Action::TogglePageSizeSelector),
            KeyCode::Home | KeyCode::Char('g') => Some(Action::FirstPage),
            KeyCode::PageUp | KeyCode::Char('p') => Some(Action::PreviousPage),
            KeyCode::PageDown | KeyCode::Char('n') => Some(Action::NextPage),
            KeyCode::End | KeyCode::Char('G') => Some(Action::LastPage),
            KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| Action::GoToPage(d as usize)),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if self.content.is_err() || mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(None);
        }

        if let Some(action) = self.page_size_selector.handle_mouse_event(mouse)? {
            self.filter_input.blur();
            return Ok(Some(action));
        }
        // Any other click dismisses an open dropdown
        if self.page_size_selector.is_open() {
            return Ok(Some(Action::TogglePageSizeSelector));
        }

        let at = Position::new(mouse.column, mouse.row);
        if self.hits.filter.contains(at) {
            return Ok(Some(Action::EnterFilterMode));
        }

        let action = self
            .hits
            .headers
            .iter()
            .find(|(rect, _)| rect.contains(at))
            .map(|(_, column)| Action::SortColumn(*column))
            .or_else(|| {
                self.hits
                    .navigation
                    .iter()
                    .find(|(rect, _)| rect.contains(at))
                    .map(|(_, action)| action.clone())
            });
        if action.is_some() {
            self.filter_input.blur();
        }
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let column_count = match &self.content {
            Ok(table) => table.column_count(),
            Err(_) => return Ok(None),
        };
        debug!(%action, "table update");

        let mut follow_up = None;
        match action {
            Action::FocusNextColumn => {
                self.focused_column = (self.focused_column + 1).min(column_count.saturating_sub(1));
            }
            Action::FocusPrevColumn => {
                self.focused_column = self.focused_column.saturating_sub(1);
            }
            Action::SortFocusedColumn => follow_up = Some(Action::SortColumn(self.focused_column)),
            Action::SortColumn(column) => self.sort_column(column),
            Action::EnterFilterMode | Action::ExitFilterMode => {
                self.page_size_selector.update(action.clone())?;
                self.filter_input.update(action)?;
            }
            Action::FilterInput(_)
            | Action::FilterBackspace
            | Action::FilterCursorLeft
            | Action::FilterCursorRight
            | Action::ClearFilter => {
                self.filter_input.update(action)?;
                if self.state.filter_text != self.filter_input.text() {
                    self.state.filter_text = self.filter_input.text().to_string();
                }
            }
            Action::TogglePageSizeSelector
            | Action::SelectorUp
            | Action::SelectorDown
            | Action::ConfirmPageSize => {
                self.filter_input.blur();
                follow_up = self.page_size_selector.update(action)?;
            }
            Action::SelectPageSize(size) => {
                self.state.page_size = size;
                self.page_size_selector.update(action)?;
            }
            Action::FirstPage => self.go_to_page(PageNav::First),
            Action::PreviousPage => self.go_to_page(PageNav::Previous),
            Action::NextPage => self.go_to_page(PageNav::Next),
            Action::LastPage => self.go_to_page(PageNav::Last),
            Action::GoToPage(page) => self.go_to_page(PageNav::GoTo(page)),
            _ => {}
        }

        self.clamp_active_page();
        Ok(follow_up)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(Block::default().style(Style::default().bg(SURFACE)), area);

        let table = match &self.content {
            Ok(table) => table,
            Err(error) => {
                draw_placeholder(frame, area, error, &self.theme);
                return Ok(());
            }
        };

        let view = compute_view(table, &self.state);
        let layout = calculate_table_layout(area, self.title.is_some());
        let text_style = Style::default().fg(self.theme.primary);

        // Title with an accent underline
        if let (Some(title_area), Some(title)) = (layout.title, &self.title) {
            let title_widget = Paragraph::new(vec![
                Line::styled(title.clone(), text_style.add_modifier(Modifier::BOLD)),
                Line::styled(
                    "─".repeat(title.width()),
                    Style::default().fg(self.theme.accent),
                ),
            ]);
            frame.render_widget(title_widget, title_area);
        }

        // Tools row
        let (size_area, filter_area) = split_tools(layout.tools);
        self.page_size_selector.draw(frame, size_area)?;
        self.filter_input.draw(frame, filter_area)?;
        self.hits.filter = filter_area;

        // Table
        let primary_key = self.state.sort.primary();
        let header_cells = table.headers().iter().enumerate().map(|(i, header)| {
            let (indicator, indicator_style) = match primary_key {
                Some(key) if key.column == i => (
                    key.direction.indicator(),
                    Style::default()
                        .fg(self.theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                _ => (SORT_IDLE, Style::default().fg(Color::DarkGray)),
            };
            let mut header_style = text_style.add_modifier(Modifier::BOLD);
            if i == self.focused_column {
                header_style = header_style.add_modifier(Modifier::UNDERLINED);
            }
            Cell::from(Line::from(vec![
                Span::styled(header.clone(), header_style),
                Span::raw(" "),
                Span::styled(indicator, indicator_style),
            ]))
        });

        let body = view.displayed.iter().enumerate().map(|(i, row)| {
            let style = if i % 2 == 1 {
                text_style.bg(self.theme.background)
            } else {
                text_style
            };
            TableRow::new(row.iter().map(|cell| Cell::from(cell.as_str()))).style(style)
        });

        let widths: Vec<Constraint> = self
            .column_widths
            .iter()
            .map(|w| Constraint::Length(*w))
            .collect();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(text_style);
        let inner = block.inner(layout.table);

        let table_widget = TableWidget::new(body, widths.clone())
            .header(TableRow::new(header_cells))
            .block(block)
            .column_spacing(1)
            .flex(Flex::Start);
        frame.render_widget(table_widget, layout.table);

        let columns = Layout::horizontal(widths)
            .spacing(1)
            .flex(Flex::Start)
            .split(inner);
        self.hits.headers = columns
            .iter()
            .enumerate()
            .filter(|(_, rect)| rect.width > 0 && inner.height > 0)
            .map(|(i, rect)| (Rect::new(rect.x, inner.y, rect.width, 1), i))
            .collect();

        // Footer
        let (nav_line, nav_hits) = navigation_line(&view, &self.theme);
        let nav_width = u16::try_from(nav_line.width()).unwrap_or(u16::MAX);
        let (summary_area, nav_area) = split_footer(layout.footer, nav_width);
        frame.render_widget(
            Paragraph::new(view.summary().to_string()).style(text_style),
            summary_area,
        );
        frame.render_widget(Paragraph::new(nav_line), nav_area);
        self.hits.navigation = nav_hits
            .into_iter()
            .map(|(offset, width, action)| {
                let rect = Rect::new(nav_area.x.saturating_add(offset), nav_area.y, width, 1);
                (rect.intersection(nav_area), action)
            })
            .filter(|(rect, _)| !rect.is_empty())
            .collect();

        self.page_size_selector.draw_dropdown(frame, area);
        Ok(())
    }
}

/// Column widths from header and cell content, header leaving room for the sort marker
fn column_widths(table: &Table) -> Vec<u16> {
    table
        .headers()
        .iter()
        .enumerate()
        .map(|(i, header)| {
            let widest_cell = table
                .rows()
                .iter()
                .map(|row| row.get(i).map_or(0, |cell| cell.width()))
                .max()
                .unwrap_or(0);
            let width = (header.width() + 2).max(widest_cell).min(MAX_COLUMN_WIDTH);
            width as u16
        })
        .collect()
}

/// `|<  <  1 2 3  >  >|` with the offset and width of every button
fn navigation_line(view: &TableView, theme: &Theme) -> (Line<'static>, Vec<(u16, u16, Action)>) {
    let control = Style::default()
        .fg(theme.primary)
        .add_modifier(Modifier::BOLD);
    let button = Style::default().fg(theme.primary).bg(theme.background);
    let active_button = Style::default()
        .fg(Color::White)
        .bg(theme.accent)
        .add_modifier(Modifier::BOLD);

    let mut items: Vec<(String, Style, Action)> = vec![
        ("|<".to_string(), control, Action::FirstPage),
        ("<".to_string(), control, Action::PreviousPage),
    ];
    items.extend(page_buttons(view.page_count).map(|page| {
        let style = if page == view.active_page {
            active_button
        } else {
            button
        };
        (format!(" {} ", page), style, Action::GoToPage(page))
    }));
    items.push((">".to_string(), control, Action::NextPage));
    items.push((">|".to_string(), control, Action::LastPage));

    let mut spans = Vec::with_capacity(items.len() * 2);
    let mut hits = Vec::with_capacity(items.len());
    let mut offset: u16 = 0;
    for (i, (label, style, action)) in items.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
            offset = offset.saturating_add(1);
        }
        let width = u16::try_from(label.width()).unwrap_or(u16::MAX);
        hits.push((offset, width, action));
        offset = offset.saturating_add(width);
        spans.push(Span::styled(label, style));
    }
    (Line::from(spans), hits)
}

fn draw_placeholder(frame: &mut Frame, area: Rect, error: &DataError, theme: &Theme) {
    let message = Paragraph::new(Line::styled(
        error.to_string(),
        Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(message, centered_popup(area, area.width, 1));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    fn demo_table() -> DataTableComponent {
        DataTableComponent::new(sample::employees(), TableOptions::default())
    }

    fn apply(table: &mut DataTableComponent, action: Action) {
        let mut next = Some(action);
        while let Some(action) = next {
            next = table.update(action).unwrap();
        }
    }

    fn press(table: &mut DataTableComponent, code: KeyCode) {
        press_with(table, code, KeyModifiers::NONE);
    }

    fn press_with(table: &mut DataTableComponent, code: KeyCode, modifiers: KeyModifiers) {
        if let Some(action) = table
            .handle_key_event(KeyEvent::new(code, modifiers))
            .unwrap()
        {
            apply(table, action);
        }
    }

    fn type_text(table: &mut DataTableComponent, text: &str) {
        for c in text.chars() {
            press(table, KeyCode::Char(c));
        }
    }

    fn click(table: &mut DataTableComponent, x: u16, y: u16) -> Option<Action> {
        table
            .handle_mouse_event(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: x,
                row: y,
                modifiers: KeyModifiers::NONE,
            })
            .unwrap()
    }

    fn displayed_first_names(table: &DataTableComponent) -> Vec<String> {
        table
            .view()
            .map(|view| view.displayed.iter().map(|row| row[0].clone()).collect())
            .unwrap_or_default()
    }

    fn render(table: &mut DataTableComponent, width: u16, height: u16) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| table.draw(frame, frame.area()).unwrap())
            .unwrap();
        terminal
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|cells| cells.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_initial_view() {
        let table = demo_table();
        let view = table.view().unwrap();
        assert_eq!(view.displayed.len(), 10);
        assert_eq!(view.page_count, 2);
        assert_eq!(view.active_page, 1);
    }

    #[test]
    fn test_page_size_option_shows_all_rows() {
        let mut table = demo_table();
        press(&mut table, KeyCode::Char('s'));
        assert!(table.is_capturing_input());
        press(&mut table, KeyCode::Char('3'));

        assert!(!table.is_capturing_input());
        assert_eq!(table.state().page_size, PageSize::Fifty);
        let view = table.view().unwrap();
        assert_eq!(view.displayed.len(), 12);
        assert_eq!(view.page_count, 1);
    }

    #[test]
    fn test_page_size_selector_keyboard_confirm() {
        let mut table = demo_table();
        press(&mut table, KeyCode::Char('s'));
        press(&mut table, KeyCode::Down);
        press(&mut table, KeyCode::Enter);
        assert_eq!(table.state().page_size, PageSize::TwentyFive);
        assert!(!table.is_capturing_input());
    }

    #[test]
    fn test_filter_typing_scenario() {
        let mut table = demo_table();
        press(&mut table, KeyCode::Char('/'));
        assert!(table.is_capturing_input());

        type_text(&mut table, "J");
        assert_eq!(table.view().unwrap().displayed.len(), 4);

        type_text(&mut table, "o");
        assert_eq!(displayed_first_names(&table), vec!["John", "Bob"]);

        press_with(&mut table, KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert_eq!(table.state().filter_text, "");
        assert_eq!(table.view().unwrap().displayed.len(), 10);
    }

    #[test]
    fn test_filter_keys_do_not_navigate() {
        let mut table = demo_table();
        press(&mut table, KeyCode::Char('/'));
        type_text(&mut table, "n");
        assert_eq!(table.state().active_page, 1);
        assert_eq!(table.state().filter_text, "n");

        press(&mut table, KeyCode::Esc);
        assert!(!table.is_capturing_input());
        assert_eq!(table.state().filter_text, "n");
    }

    #[test]
    fn test_sort_toggles_direction() {
        let mut table = demo_table();

        press(&mut table, KeyCode::Enter);
        let names = displayed_first_names(&table);
        assert_eq!(names.first().map(String::as_str), Some("John"));

        press(&mut table, KeyCode::Enter);
        let names = displayed_first_names(&table);
        assert_eq!(names.first().map(String::as_str), Some("Alice"));
        assert_eq!(names.last().map(String::as_str), Some("Jack"));
    }

    #[test]
    fn test_sort_date_column_ascending() {
        let mut table = DataTableComponent::new(
            sample::employees(),
            TableOptions {
                first_sort: SortDirection::Ascending,
                ..TableOptions::default()
            },
        );
        apply(&mut table, Action::SortColumn(3));

        let view = table.view().unwrap();
        let dates: Vec<&str> = view.displayed.iter().map(|row| row[3].as_str()).collect();
        assert_eq!(dates[0], "2019-04-14");
        assert_eq!(dates[1], "2019-11-08");
        assert_eq!(dates[2], "2020-01-15");
        assert_eq!(table.focused_column(), 3);
    }

    #[test]
    fn test_sort_out_of_range_column_ignored() {
        let mut table = demo_table();
        apply(&mut table, Action::SortColumn(9));
        assert!(table.state().sort.primary().is_none());
    }

    #[test]
    fn test_column_focus_bounds() {
        let mut table = demo_table();
        press(&mut table, KeyCode::Left);
        assert_eq!(table.focused_column(), 0);
        for _ in 0..10 {
            press(&mut table, KeyCode::Right);
        }
        assert_eq!(table.focused_column(), 3);
    }

    #[test]
    fn test_navigation_scenarios() {
        let mut table = demo_table();

        press(&mut table, KeyCode::Char('p'));
        assert_eq!(table.state().active_page, 1);

        press(&mut table, KeyCode::Char('n'));
        assert_eq!(table.state().active_page, 2);
        assert_eq!(table.view().unwrap().displayed.len(), 2);

        press(&mut table, KeyCode::Char('n'));
        assert_eq!(table.state().active_page, 2);

        press(&mut table, KeyCode::Char('p'));
        assert_eq!(table.view().unwrap().displayed.len(), 10);

        press(&mut table, KeyCode::End);
        assert_eq!(table.state().active_page, 2);

        press(&mut table, KeyCode::Home);
        assert_eq!(table.state().active_page, 1);

        press(&mut table, KeyCode::Char('9'));
        assert_eq!(table.state().active_page, 2);
    }

    #[test]
    fn test_page_size_change_clamps_active_page() {
        let mut table = demo_table();
        apply(&mut table, Action::LastPage);
        assert_eq!(table.state().active_page, 2);

        apply(&mut table, Action::SelectPageSize(PageSize::Fifty));
        assert_eq!(table.state().active_page, 1);
        assert_eq!(table.view().unwrap().displayed.len(), 12);
    }

    #[test]
    fn test_filter_change_clamps_active_page() {
        let mut table = demo_table();
        apply(&mut table, Action::GoToPage(2));
        apply(&mut table, Action::FilterInput('J'));
        assert_eq!(table.state().active_page, 1);
        assert_eq!(table.view().unwrap().displayed.len(), 4);
    }

    #[test]
    fn test_invalid_data_renders_message_only() {
        let data = TableData::new(
            sample::employee_headers(),
            vec![vec!["John".to_string(), "Doe".to_string()]],
        );
        let mut table = DataTableComponent::new(data, TableOptions::default());
        assert!(matches!(table.error(), Some(DataError::InvalidShape { .. })));

        let text = screen_text(&render(&mut table, 60, 10));
        assert!(text.contains("Invalid data"));
        assert!(!text.contains("First Name"));
        assert!(!text.contains("Showing"));

        assert_eq!(
            table
                .handle_key_event(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE))
                .unwrap(),
            None
        );
        assert!(table.view().is_none());
    }

    #[test]
    fn test_missing_data_renders_message() {
        let mut table = DataTableComponent::new(TableData::default(), TableOptions::default());
        let text = screen_text(&render(&mut table, 60, 10));
        assert!(text.contains("Missing data"));
        assert_eq!(table.update(Action::NextPage).unwrap(), None);
    }

    #[test]
    fn test_render_full_table() {
        let mut table = DataTableComponent::new(
            sample::employees(),
            TableOptions {
                title: Some(sample::DEMO_TITLE.to_string()),
                ..TableOptions::default()
            },
        );
        let text = screen_text(&render(&mut table, 100, 30));

        assert!(text.contains("Employee Directory"));
        assert!(text.contains("Show"));
        assert!(text.contains("entries"));
        assert!(text.contains("Search: filter"));
        assert!(text.contains("First Name"));
        assert!(text.contains("Start Date"));
        assert!(text.contains("Alice"));
        assert!(!text.contains("Ivy"));
        assert!(text.contains("Showing 1 to 10 of 12 entries"));
        assert!(text.contains("|<"));
        assert!(text.contains(" 1 "));
        assert!(text.contains(" 2 "));
        assert!(text.contains(">|"));
    }

    #[test]
    fn test_render_sort_indicator() {
        let mut table = demo_table();
        apply(&mut table, Action::SortColumn(1));
        let text = screen_text(&render(&mut table, 100, 20));
        assert!(text.contains("Last Name ▼"));
        assert!(text.contains("First Name ⇅"));
    }

    #[test]
    fn test_render_fills_light_surface() {
        let mut table = demo_table();
        let terminal = render(&mut table, 100, 20);
        let buffer = terminal.backend().buffer();
        let bg_at = |x: u16, y: u16| buffer.content[buffer.index_of(x, y)].bg;

        // Table block starts at y=2: border, header, then body rows
        assert_eq!(bg_at(0, 0), SURFACE);
        assert_eq!(bg_at(2, 4), SURFACE);
        assert_eq!(bg_at(2, 5), Theme::default().background);
        assert_eq!(bg_at(99, 19), SURFACE);
    }

    #[test]
    fn test_placeholder_fills_light_surface() {
        let mut table = DataTableComponent::new(TableData::default(), TableOptions::default());
        let terminal = render(&mut table, 40, 6);
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer.content[buffer.index_of(0, 0)].bg, SURFACE);
    }

    #[test]
    fn test_mouse_header_click_sorts() {
        let mut table = demo_table();
        render(&mut table, 100, 20);

        let (rect, _) = *table
            .hits
            .headers
            .iter()
            .find(|(_, column)| *column == 1)
            .unwrap();
        let action = click(&mut table, rect.x, rect.y);
        assert_eq!(action, Some(Action::SortColumn(1)));

        apply(&mut table, Action::SortColumn(1));
        assert_eq!(table.state().sort.primary().map(|key| key.column), Some(1));
    }

    #[test]
    fn test_mouse_page_buttons() {
        let mut table = demo_table();
        render(&mut table, 100, 20);

        let (rect, _) = table
            .hits
            .navigation
            .iter()
            .find(|(_, action)| *action == Action::GoToPage(2))
            .cloned()
            .unwrap();
        let action = click(&mut table, rect.x + 1, rect.y).unwrap();
        apply(&mut table, action);
        assert_eq!(table.state().active_page, 2);

        render(&mut table, 100, 20);
        let (rect, _) = table
            .hits
            .navigation
            .iter()
            .find(|(_, action)| *action == Action::FirstPage)
            .cloned()
            .unwrap();
        let action = click(&mut table, rect.x, rect.y).unwrap();
        apply(&mut table, action);
        assert_eq!(table.state().active_page, 1);
    }

    #[test]
    fn test_mouse_page_size_selection() {
        let mut table = demo_table();
        render(&mut table, 100, 20);

        // "Show " label is five cells wide, the value button follows
        let action = click(&mut table, 6, 0);
        assert_eq!(action, Some(Action::TogglePageSizeSelector));
        apply(&mut table, Action::TogglePageSizeSelector);

        render(&mut table, 100, 20);
        let action = click(&mut table, 7, 4);
        assert_eq!(action, Some(Action::SelectPageSize(PageSize::Fifty)));
        apply(&mut table, Action::SelectPageSize(PageSize::Fifty));
        assert_eq!(table.view().unwrap().displayed.len(), 12);
        assert!(!table.is_capturing_input());
    }

    #[test]
    fn test_mouse_filter_click_focuses_input() {
        let mut table = demo_table();
        render(&mut table, 100, 20);
        let filter = table.hits.filter;
        let action = click(&mut table, filter.x + 2, filter.y);
        assert_eq!(action, Some(Action::EnterFilterMode));
    }
}
