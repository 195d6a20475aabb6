//! Simulated shell: canned commands, per-tab sessions, and the tab panel.

pub mod commands;
mod error;
pub mod session;
pub mod tabs;

pub use commands::mock_response;
pub use error::TabError;
pub use session::{Key, Session};
pub use tabs::{Tab, TabPanel};
