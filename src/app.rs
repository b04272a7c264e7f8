//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that routes input to the top modal or to the table and draws the hint bar.
//! App does not hold table state itself.

use crate::action::Action;
use crate::component::Component;
use crate::components::{split_hint_bar, DataTableComponent, HelpDialog, QuitDialog, TableOptions};
use crate::model::modal::{Modal, ModalStack};
use crate::model::{TableData, Theme};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tracing::debug;

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

pub struct App {
    /// Set once the user confirmed quitting
    pub should_quit: bool,

    /// Modal overlay stack
    pub modals: ModalStack,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub table: DataTableComponent,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,

    theme: Theme,
}

impl App {
    pub fn new(data: TableData, options: TableOptions) -> Self {
        let theme = options.theme;
        Self {
            should_quit: false,
            modals: ModalStack::new(),
            table: DataTableComponent::new(data, options),
            quit_dialog: QuitDialog::new(theme),
            help_dialog: HelpDialog::new(theme),
            theme,
        }
    }

    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
        }
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area),
            Modal::Help => self.help_dialog.draw(frame, area),
        }
    }

    /// Key hints for whatever currently receives input
    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        match self.modals.top() {
            Some(Modal::QuitConfirm) => vec![("y", "quit"), ("n/Esc", "cancel")],
            Some(Modal::Help) => vec![("j/k", "scroll"), ("Esc", "close")],
            None if self.table.error().is_some() => vec![("q", "quit")],
            None if self.table.is_capturing_input() => vec![
                ("↑/↓", "move"),
                ("Enter", "select/done"),
                ("Esc", "close"),
                ("Ctrl+u", "clear filter"),
            ],
            None => vec![
                ("←/→", "column"),
                ("Enter", "sort"),
                ("/", "filter"),
                ("s", "rows"),
                ("p/n", "page"),
                ("?", "help"),
                ("q", "quit"),
            ],
        }
    }

    fn draw_hint_bar(&self, frame: &mut Frame, area: Rect) {
        let key_style = Style::default()
            .fg(self.theme.accent)
            .add_modifier(Modifier::BOLD);
        let spans: Vec<Span> = self
            .hints()
            .into_iter()
            .flat_map(|(key, label)| {
                [
                    Span::styled(format!(" {} ", key), key_style),
                    Span::styled(format!("{} ", label), Style::default().fg(Color::DarkGray)),
                ]
            })
            .collect();
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(Action::ForceQuit));
        }

        if let Some(modal) = self.modals.top().cloned() {
            return self.handle_modal_key_event(&modal, key);
        }
        if self.table.is_capturing_input() {
            return self.table.handle_key_event(key);
        }

        match key.code {
            KeyCode::Char('q') => Ok(Some(Action::OpenQuitDialog)),
            KeyCode::Char('?') => Ok(Some(Action::OpenHelp)),
            _ => self.table.handle_key_event(key),
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if !self.modals.is_empty() {
            return Ok(None);
        }
        self.table.handle_mouse_event(mouse)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        debug!(%action, "update");
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::ForceQuit => {
                self.should_quit = true;
                Ok(None)
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                self.modals.push(Modal::QuitConfirm);
                Ok(None)
            }
            Action::OpenHelp => {
                self.help_dialog.update(action)?;
                self.modals.push(Modal::Help);
                Ok(None)
            }
            Action::CloseModal => {
                self.modals.pop();
                Ok(None)
            }

            // Everything else belongs to the table
            _ => self.table.update(action),
        }
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let (content, hint_bar) = split_hint_bar(area);
        self.table.draw(frame, content)?;
        self.draw_hint_bar(frame, hint_bar);

        if let Some(modal) = self.modals.top().cloned() {
            self.draw_modal(frame, area, &modal)?;
        }
        Ok(())
    }
}
