//! TUI command handler

use anyhow::Result;
use tracing::info;

use ansitab::Config;

/// Launch the tabbed terminal with the saved configuration.
#[cfg(not(tarpaulin_include))]
pub fn handle() -> Result<()> {
    let config = Config::load()?;
    info!(theme = ?config.tui.theme, mode = ?config.parser.mode, "Starting TUI");
    ansitab::tui::run(&config)
}
