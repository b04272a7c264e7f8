//! Terminal lifecycle
//!
//! Raw mode, alternate screen and mouse capture are switched on by `enter`
//! and restored by `exit`, on drop, and from the panic hook.

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseEventKind},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io::{self, Stdout},
    panic,
    time::Duration,
};
use tracing::error;

pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// How long `next_event` waits before giving up
    pub poll_timeout: Duration,
    active: bool,
}

impl Tui {
    pub fn new() -> Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;
        Ok(Self {
            terminal,
            poll_timeout: Duration::from_millis(250),
            active: false,
        })
    }

    pub fn with_poll_timeout(mut self, poll_timeout: Duration) -> Self {
        self.poll_timeout = poll_timeout;
        self
    }

    pub fn enter(&mut self) -> Result<()> {
        install_panic_hook();
        terminal::enable_raw_mode()?;
        crossterm::execute!(
            io::stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )?;
        self.terminal.clear()?;
        self.active = true;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        if self.active {
            restore_terminal()?;
            self.active = false;
        }
        Ok(())
    }

    /// Next key press, mouse click or resize within the poll timeout
    ///
    /// Key releases/repeats and mouse moves are dropped so every returned
    /// event is one the app reacts to.
    pub fn next_event(&self) -> Result<Option<Event>> {
        if !event::poll(self.poll_timeout)? {
            return Ok(None);
        }

        let event = event::read()?;
        let relevant = match &event {
            Event::Key(key) => key.kind == KeyEventKind::Press,
            Event::Mouse(mouse) => matches!(mouse.kind, MouseEventKind::Down(_)),
            Event::Resize(_, _) => true,
            _ => false,
        };
        Ok(relevant.then_some(event))
    }

    pub fn draw<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

fn restore_terminal() -> Result<()> {
    terminal::disable_raw_mode()?;
    crossterm::execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        cursor::Show
    )?;
    Ok(())
}

/// Put the terminal back before the default hook prints the panic
fn install_panic_hook() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        if let Err(e) = restore_terminal() {
            error!("failed to restore terminal: {e}");
        }
        error!("panic: {info}");
        default_hook(info);
    }));
}
