//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::ansi::SgrMode;
use crate::render::Format;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub parser: ParserConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub shell: ShellConfig,
    #[serde(default)]
    pub tui: TuiConfig,
}

/// Tokenizer configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// SGR parsing contract: "compat" or "standard"
    #[serde(default)]
    pub mode: SgrMode,
}

/// Output configuration for `parse` and `run`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default)]
    pub format: Format,
}

/// Simulated shell configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Text shown before the input line
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Maximum output lines kept per tab (0 keeps everything)
    #[serde(default = "default_scrollback")]
    pub scrollback: usize,
    /// Show the welcome banner in new tabs
    #[serde(default = "default_welcome")]
    pub welcome: bool,
}

pub fn default_prompt() -> String {
    "$ ".to_string()
}

pub fn default_scrollback() -> usize {
    1000
}

pub fn default_welcome() -> bool {
    true
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            scrollback: default_scrollback(),
            welcome: default_welcome(),
        }
    }
}

/// Named chrome color schemes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Default,
    Classic,
    Ocean,
}

/// TUI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Event poll interval in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    #[serde(default)]
    pub theme: ThemeName,
}

pub fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            theme: ThemeName::default(),
        }
    }
}
