//! Help dialog component
//!
//! Lists the keyboard and mouse controls of the table.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use crate::model::Theme;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

const DIALOG_WIDTH: u16 = 56;

/// Help dialog showing every control
#[derive(Debug, Default)]
pub struct HelpDialog {
    pub scroll_offset: usize,
    theme: Theme,
}

impl HelpDialog {
    pub fn new(theme: Theme) -> Self {
        Self {
            scroll_offset: 0,
            theme,
        }
    }
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Some(Action::CloseModal),
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action == Action::OpenHelp {
            self.scroll_offset = 0;
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let content = build_help_content(&self.theme);
        let total = content.len();

        let height = (total as u16).saturating_add(2).min(area.height.saturating_sub(2));
        let dialog_area = centered_popup(area, DIALOG_WIDTH, height);
        let visible_height = dialog_area.height.saturating_sub(2) as usize;

        let max_scroll = total.saturating_sub(visible_height);
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }

        frame.render_widget(Clear, dialog_area);
        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Controls ")
                    .title_style(
                        Style::default()
                            .fg(self.theme.accent)
                            .add_modifier(Modifier::BOLD),
                    )
                    .border_style(Style::default().fg(self.theme.accent)),
            )
            .scroll((self.scroll_offset as u16, 0));
        frame.render_widget(paragraph, dialog_area);

        if total > visible_height {
            let mut scrollbar_state =
                ScrollbarState::new(total.saturating_sub(visible_height)).position(self.scroll_offset);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                dialog_area.inner(Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}

fn build_help_content(theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let accent = theme.accent;

    let add_section = |lines: &mut Vec<Line<'static>>, title: &str| {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {} ", title),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", "─".repeat(title.len() + 2)),
            Style::default().fg(Color::DarkGray),
        )));
    };

    let add_shortcut = |lines: &mut Vec<Line<'static>>, key: &str, description: &str| {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:14}", key),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
            Span::raw(description.to_string()),
        ]));
    };

    add_section(&mut lines, "Sorting");
    add_shortcut(&mut lines, "← / h", "Focus previous column");
    add_shortcut(&mut lines, "→ / l", "Focus next column");
    add_shortcut(&mut lines, "Enter / Space", "Sort by focused column");
    add_shortcut(&mut lines, "click header", "Sort by that column");

    add_section(&mut lines, "Filter");
    add_shortcut(&mut lines, "/", "Edit the filter");
    add_shortcut(&mut lines, "Ctrl+u", "Clear the filter");
    add_shortcut(&mut lines, "Enter / Esc", "Stop editing");

    add_section(&mut lines, "Pages");
    add_shortcut(&mut lines, "g / Home", "First page");
    add_shortcut(&mut lines, "p / PageUp", "Previous page");
    add_shortcut(&mut lines, "n / PageDown", "Next page");
    add_shortcut(&mut lines, "G / End", "Last page");
    add_shortcut(&mut lines, "1-9", "Go to page");
    add_shortcut(&mut lines, "s", "Choose rows per page");

    add_section(&mut lines, "App");
    add_shortcut(&mut lines, "?", "Show this help");
    add_shortcut(&mut lines, "q", "Quit");
    add_shortcut(&mut lines, "Ctrl+c", "Quit immediately");

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press q, Esc, or ? to close",
        Style::default().fg(Color::DarkGray),
    )));

    lines
}
