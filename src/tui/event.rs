//! Event handling for TUI
//!
//! Reads terminal events on a background thread and forwards them over a
//! channel, emitting a tick whenever the poll interval passes quietly.

use anyhow::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Application events
#[derive(Debug, Clone)]
pub enum Event {
    /// Terminal was resized
    Resize(u16, u16),
    /// Key was pressed
    Key(KeyEvent),
    /// Tick event for periodic redraws
    Tick,
}

/// Event handler that runs in a separate thread
pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
    /// Handle to the event thread (kept for cleanup)
    _handle: thread::JoinHandle<()>,
}

impl EventHandler {
    /// Create a new event handler with the given tick rate.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        let handle = thread::spawn(move || loop {
            let event = match event::poll(tick_rate) {
                Ok(true) => match event::read() {
                    // Release/repeat events are reported on some platforms
                    Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                        Event::Key(key)
                    }
                    Ok(CrosstermEvent::Resize(width, height)) => Event::Resize(width, height),
                    Ok(_) => continue,
                    Err(_) => break,
                },
                Ok(false) => Event::Tick,
                Err(_) => break,
            };
            if tx.send(event).is_err() {
                break;
            }
        });

        Self {
            rx,
            _handle: handle,
        }
    }

    /// Get the next event, blocking until one is available.
    pub fn next(&self) -> Result<Event> {
        self.rx
            .recv()
            .map_err(|e| anyhow::anyhow!("Event channel closed: {}", e))
    }
}
