//! Terminal management
//!
//! Owns the crossterm backend: raw mode, alternate screen, drawing and
//! key polling. Restores the terminal on drop.

use crossterm::{
    event::{self, Event, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use std::{
    io::{self, Stdout},
    time::Duration,
};

use crate::{QuizError, Result};

/// Smallest terminal the quiz screen lays out cleanly in
pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 20;

/// Terminal wrapper around the crossterm backend
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    poll_interval: Duration,
    active: bool,
}

impl Tui {
    pub fn new() -> Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)
            .map_err(|e| QuizError::TuiError(format!("Failed to open terminal: {}", e)))?;

        Ok(Self {
            terminal,
            poll_interval: Duration::from_millis(250),
            active: false,
        })
    }

    /// Enter raw mode and the alternate screen
    pub fn init(&mut self) -> Result<()> {
        enable_raw_mode()?;
        self.active = true;
        execute!(io::stdout(), EnterAlternateScreen)?;
        self.terminal.hide_cursor()?;
        self.terminal.clear()?;
        Ok(())
    }

    /// Restore terminal to original state
    pub fn restore(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        // all three steps run before any error is reported
        first_error([
            disable_raw_mode(),
            execute!(io::stdout(), LeaveAlternateScreen),
            self.terminal.show_cursor(),
        ])?;
        Ok(())
    }

    pub fn is_size_adequate(&self) -> Result<bool> {
        let size = self.terminal.size()?;
        Ok(size.width >= MIN_WIDTH && size.height >= MIN_HEIGHT)
    }

    pub fn draw<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }

    /// Wait up to one poll interval for a key press
    pub fn next_key(&mut self) -> Result<Option<KeyEvent>> {
        if event::poll(self.poll_interval)? {
            if let Event::Key(key) = event::read()? {
                return Ok(Some(key));
            }
        }
        Ok(None)
    }
}

/// First failure among already-executed steps
fn first_error<I>(results: I) -> io::Result<()>
where
    I: IntoIterator<Item = io::Result<()>>,
{
    results.into_iter().collect()
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
