//! Free-text filter input
//!
//! Single-line editor with a character cursor. The table mirrors the text
//! into its view state after each edit.

use crate::action::Action;
use crate::component::Component;
use crate::model::Theme;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const LABEL: &str = "Search: ";
const PLACEHOLDER: &str = "filter";

#[derive(Debug, Default)]
pub struct FilterInput {
    text: String,
    /// Cursor position in characters
    cursor: usize,
    focused: bool,
    theme: Theme,
}

impl FilterInput {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    fn insert(&mut self, c: char) {
        let at = self.byte_pos(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let at = self.byte_pos(self.cursor - 1);
        self.text.remove(at);
        self.cursor -= 1;
    }

    fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    fn byte_pos(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(byte_idx, _)| byte_idx)
            .unwrap_or(self.text.len())
    }

    fn input_spans(&self) -> Vec<Span<'static>> {
        let text_style = Style::default().fg(self.theme.primary);

        if self.text.is_empty() && !self.focused {
            return vec![Span::styled(
                PLACEHOLDER,
                Style::default().fg(Color::DarkGray),
            )];
        }
        if !self.focused {
            return vec![Span::styled(self.text.clone(), text_style)];
        }

        let split = self.byte_pos(self.cursor);
        let (before, rest) = self.text.split_at(split);
        let mut rest_chars = rest.chars();
        let under_cursor = rest_chars.next().map_or(" ".to_string(), String::from);
        vec![
            Span::styled(before.to_string(), text_style),
            Span::styled(under_cursor, text_style.add_modifier(Modifier::REVERSED)),
            Span::styled(rest_chars.as_str().to_string(), text_style),
        ]
    }
}

impl Component for FilterInput {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match (key.code, key.modifiers) {
            (KeyCode::Enter, _) | (KeyCode::Esc, _) => Some(Action::ExitFilterMode),
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => Some(Action::ClearFilter),
            (KeyCode::Backspace, _) => Some(Action::FilterBackspace),
            (KeyCode::Left, _) => Some(Action::FilterCursorLeft),
            (KeyCode::Right, _) => Some(Action::FilterCursorRight),
            (KeyCode::Char(c), m) if !m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                Some(Action::FilterInput(c))
            }
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::FilterInput(c) => self.insert(c),
            Action::FilterBackspace => self.backspace(),
            Action::FilterCursorLeft => self.cursor = self.cursor.saturating_sub(1),
            Action::FilterCursorRight => {
                self.cursor = (self.cursor + 1).min(self.text.chars().count());
            }
            Action::ClearFilter => self.clear(),
            Action::EnterFilterMode => self.focus(),
            Action::ExitFilterMode => self.blur(),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let label_style = if self.focused {
            Style::default()
                .fg(self.theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.theme.primary)
        };

        let mut spans = vec![Span::styled(LABEL, label_style)];
        spans.extend(self.input_spans());
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
        Ok(())
    }
}
