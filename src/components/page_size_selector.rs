//! "Show [N] entries" control
//!
//! A value button plus a dropdown with the four page-size choices. Opening
//! and closing the dropdown has no effect beyond its visibility.

use crate::action::Action;
use crate::component::Component;
use crate::model::{PageSize, Theme};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

const DROPDOWN_WIDTH: u16 = 9;

#[derive(Debug)]
pub struct PageSizeSelector {
    selected: PageSize,
    open: bool,
    list_state: ListState,
    theme: Theme,
    /// Where the value button was last drawn
    value_area: Rect,
    /// Where each option was last drawn, only while open
    option_areas: Vec<(Rect, PageSize)>,
}

impl PageSizeSelector {
    pub fn new(selected: PageSize, theme: Theme) -> Self {
        Self {
            selected,
            open: false,
            list_state: ListState::default(),
            theme,
            value_area: Rect::default(),
            option_areas: Vec::new(),
        }
    }

    pub fn selected(&self) -> PageSize {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Choice under the highlight
    pub fn highlighted(&self) -> PageSize {
        self.list_state
            .selected()
            .and_then(|i| PageSize::ALL.get(i).copied())
            .unwrap_or(self.selected)
    }

    fn toggle(&mut self) {
        self.open = !self.open;
        if self.open {
            self.list_state.select(Some(self.selected.index()));
        } else {
            self.option_areas.clear();
        }
    }

    fn close(&mut self) {
        self.open = false;
        self.option_areas.clear();
    }

    fn move_highlight(&mut self, delta: isize) {
        let current = self.list_state.selected().unwrap_or(self.selected.index());
        let last = PageSize::ALL.len() - 1;
        let next = current.saturating_add_signed(delta).min(last);
        self.list_state.select(Some(next));
    }

    /// Dropdown overlay, drawn after everything else so it sits on top
    pub fn draw_dropdown(&mut self, frame: &mut Frame, bounds: Rect) {
        if !self.open {
            return;
        }

        let height = PageSize::ALL.len() as u16 + 2;
        let area = Rect::new(
            self.value_area.x,
            self.value_area.y.saturating_add(1),
            DROPDOWN_WIDTH,
            height,
        )
        .intersection(bounds);
        if area.is_empty() {
            return;
        }

        let items: Vec<ListItem> = PageSize::ALL
            .iter()
            .map(|size| ListItem::new(format!(" {:>3}", size.value())))
            .collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.theme.primary)),
            )
            .style(Style::default().fg(self.theme.primary).bg(self.theme.background))
            .highlight_style(
                Style::default()
                    .bg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            );

        frame.render_widget(Clear, area);
        frame.render_stateful_widget(list, area, &mut self.list_state);

        let inner = Rect::new(
            area.x + 1,
            area.y + 1,
            area.width.saturating_sub(2),
            area.height.saturating_sub(2),
        );
        self.option_areas = PageSize::ALL
            .iter()
            .enumerate()
            .map(|(i, size)| (Rect::new(inner.x, inner.y + i as u16, inner.width, 1), *size))
            .filter(|(rect, _)| rect.intersects(inner))
            .collect();
    }
}

impl Component for PageSizeSelector {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectorUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::SelectorDown),
            KeyCode::Enter => Some(Action::ConfirmPageSize),
            KeyCode::Esc | KeyCode::Char('s') => Some(Action::TogglePageSizeSelector),
            KeyCode::Char(c @ '1'..='4') => c
                .to_digit(10)
                .and_then(|d| PageSize::ALL.get(d as usize - 1).copied())
                .map(Action::SelectPageSize),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(None);
        }
        let at = Position::new(mouse.column, mouse.row);

        if self.value_area.contains(at) {
            return Ok(Some(Action::TogglePageSizeSelector));
        }
        Ok(self
            .option_areas
            .iter()
            .find(|(rect, _)| rect.contains(at))
            .map(|(_, size)| Action::SelectPageSize(*size)))
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::TogglePageSizeSelector => self.toggle(),
            Action::SelectorUp => self.move_highlight(-1),
            Action::SelectorDown => self.move_highlight(1),
            Action::ConfirmPageSize => {
                return Ok(Some(Action::SelectPageSize(self.highlighted())));
            }
            Action::SelectPageSize(size) => {
                self.selected = size;
                self.close();
            }
            Action::EnterFilterMode => self.close(),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let text_style = Style::default().fg(self.theme.primary);
        let value = format!(" {:>3} {} ", self.selected.value(), if self.open { "▴" } else { "▾" });
        let value_style = Style::default()
            .fg(self.theme.primary)
            .bg(self.theme.background)
            .add_modifier(Modifier::BOLD);

        let label = "Show ";
        self.value_area = Rect::new(
            area.x.saturating_add(label.len() as u16),
            area.y,
            value.chars().count() as u16,
            1,
        )
        .intersection(area);

        let line = Line::from(vec![
            Span::styled(label, text_style),
            Span::styled(value, value_style),
            Span::styled(" entries", text_style),
        ]);
        frame.render_widget(Paragraph::new(line), area);
        Ok(())
    }
}
