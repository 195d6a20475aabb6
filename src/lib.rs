//! ansitab Library
//!
//! ANSI SGR tokenizing, token renderers, and a tabbed mock terminal.

pub mod ansi;
pub mod cli;
pub mod config;
pub mod logging;
pub mod render;
pub mod shell;
pub mod theme;
pub mod tui;

pub use ansi::{parse, Color, SgrMode, Style, Token, Tokenizer};
pub use config::Config;
pub use render::Format;
pub use shell::{Session, TabPanel};
