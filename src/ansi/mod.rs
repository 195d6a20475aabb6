//! ANSI SGR tokenizer.
//!
//! Turns a string with interleaved SGR escape sequences (`ESC [ params m`)
//! into styled text runs. The tokenizer is total: malformed sequences degrade
//! to literal text and unknown codes are ignored.
//!
//! Two parsing contracts are available:
//! - [`SgrMode::Compat`] (the default, used by [`parse`]) treats the whole
//!   parameter string as one lookup key and resolves backgrounds by stripping
//!   a leading `4`. Compound codes like `1;31` and real background codes like
//!   `41` have no effect in this mode.
//! - [`SgrMode::Standard`] runs the input through a VT state machine, splits
//!   parameters on `;`, and maps backgrounds 40-47/100-107 by offset.

mod compat;
pub mod palette;
mod performer;
mod types;

pub use types::{Color, ColorParseError, Style, Token};

use serde::{Deserialize, Serialize};
use vte::Parser;

/// Which SGR parsing contract the tokenizer follows.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum SgrMode {
    /// Single-key lookup with prefix-stripped backgrounds
    #[default]
    Compat,
    /// `;`-separated parameters with offset backgrounds
    Standard,
}

/// Tokenizer configured with a parsing mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer {
    mode: SgrMode,
}

impl Tokenizer {
    pub fn new(mode: SgrMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> SgrMode {
        self.mode
    }

    /// Split `input` into maximal runs of constant style.
    pub fn tokenize(&self, input: &str) -> Vec<Token> {
        match self.mode {
            SgrMode::Compat => compat::scan(input),
            SgrMode::Standard => {
                let mut runs = RunBuilder::default();
                let mut parser: Parser = Parser::new();
                let mut perf = performer::SgrPerformer { runs: &mut runs };
                parser.advance(&mut perf, input.as_bytes());
                runs.finish()
            }
        }
    }
}

/// Tokenize `input` with the compat contract.
pub fn parse(input: &str) -> Vec<Token> {
    compat::scan(input)
}

/// Accumulates text under a mutable current style and emits tokens.
///
/// Text is flushed whenever the style is about to change. A flush whose
/// style equals the previous token's style extends that token, so the
/// output stays a sequence of maximal runs.
#[derive(Debug, Default)]
pub(crate) struct RunBuilder {
    tokens: Vec<Token>,
    pending: String,
    style: Style,
}

impl RunBuilder {
    pub(crate) fn push_str(&mut self, text: &str) {
        self.pending.push_str(text);
    }

    pub(crate) fn push_char(&mut self, c: char) {
        self.pending.push(c);
    }

    /// Flush pending text, then let `update` change the current style.
    pub(crate) fn restyle(&mut self, update: impl FnOnce(&mut Style)) {
        self.flush();
        update(&mut self.style);
    }

    fn flush(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.pending);
        match self.tokens.last_mut() {
            Some(last) if last.style == self.style => last.text.push_str(&text),
            _ => self.tokens.push(Token::new(text, self.style)),
        }
    }

    pub(crate) fn finish(mut self) -> Vec<Token> {
        self.flush();
        self.tokens
    }
}
