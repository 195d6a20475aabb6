//! Token renderers.
//!
//! Turn a token sequence into something displayable:
//! - html: inline-styled `<span>` elements
//! - ansi: re-encoded SGR with 24-bit colors
//! - plain: text only
//! - json: serialized tokens
//! - span: ratatui `Line`s for the TUI

pub mod ansi;
pub mod html;
pub mod plain;
pub mod span;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::ansi::Token;

/// Output format for the CLI renderers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Ansi,
    Html,
    Json,
    Plain,
}

/// Serialize tokens as JSON.
pub fn to_json(tokens: &[Token], pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(tokens)
    } else {
        serde_json::to_string(tokens)
    }
}

/// Render tokens in the given format.
pub fn render(format: Format, tokens: &[Token]) -> Result<String> {
    Ok(match format {
        Format::Ansi => ansi::to_ansi(tokens)?,
        Format::Html => html::to_html(tokens),
        Format::Json => to_json(tokens, true)?,
        Format::Plain => plain::to_plain(tokens),
    })
}
