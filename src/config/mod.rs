//! Configuration management for ansitab

mod io;
mod types;

pub use types::*;

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

use crate::ansi::Tokenizer;

impl Config {
    /// Get the config file path (~/.config/ansitab/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Get the config directory path (~/.config/ansitab)
    pub fn config_dir() -> Result<PathBuf> {
        io::config_dir()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load_from(&io::config_path()?)
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        io::save_to(self, &io::config_path()?)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        io::save_to(self, path)
    }

    /// Reject values that would make the TUI unusable
    pub fn validate(&self) -> Result<()> {
        if self.tui.tick_rate_ms == 0 {
            bail!("[tui].tick_rate_ms must be greater than 0");
        }
        if self.shell.prompt.contains('\n') {
            bail!("[shell].prompt must be a single line");
        }
        Ok(())
    }

    /// Tokenizer for the configured parser mode
    pub fn tokenizer(&self) -> Tokenizer {
        Tokenizer::new(self.parser.mode)
    }
}
