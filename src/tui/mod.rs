//! TUI (Text User Interface) for the tabbed terminal
//!
//! Draws the tab panel with ratatui and feeds crossterm key events into the
//! active session.

pub mod app;
pub mod event;
pub mod panel;
pub mod ui;

pub use panel::{run, PanelApp};
