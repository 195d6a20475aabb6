//! Terminal lifecycle for the TUI
//!
//! Enters raw mode and the alternate screen, and restores both on drop.

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use super::event::{Event, EventHandler};

/// TUI terminal wrapper
pub struct App {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    events: EventHandler,
}

impl App {
    /// Set up the terminal for TUI mode (raw mode, alternate screen).
    ///
    /// Each step is rolled back if a later one fails.
    pub fn new(tick_rate: Duration) -> Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }

        let backend = CrosstermBackend::new(stdout);
        let terminal = match Terminal::new(backend) {
            Ok(t) => t,
            Err(e) => {
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                let _ = disable_raw_mode();
                return Err(e.into());
            }
        };

        Ok(Self {
            terminal,
            events: EventHandler::new(tick_rate),
        })
    }

    pub fn next_event(&self) -> Result<Event> {
        self.events.next()
    }

    /// Draw a frame using the provided closure.
    pub fn draw<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
