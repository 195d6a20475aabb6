//! Tokenizer data types.
//!
//! Contains the value types produced by the tokenizer:
//! - Color: a resolved display color (RGB, rendered as `#rrggbb`)
//! - Style: text attributes active at a point in the stream
//! - Token: a maximal run of text sharing one style

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a `#rrggbb` string cannot be parsed into a [`Color`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    #[error("Color must start with '#': {0:?}")]
    MissingHash(String),

    #[error("Color must have exactly 6 hex digits: {0:?}")]
    BadLength(String),

    #[error("Invalid hex digit in color: {0:?}")]
    InvalidDigit(String),
}

/// A resolved display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb` form.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(s.to_string()))?;
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ColorParseError::BadLength(s.to_string()));
        }
        // from_str_radix alone would accept a sign such as "+f"
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(s.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ColorParseError::InvalidDigit(s.to_string()))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.hex()
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Style attributes active at a point in the stream.
///
/// A plain `Copy` value: every token owns its own snapshot, so later
/// changes to the accumulator never leak into tokens already emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    #[serde(skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub dim: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub italic: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub underline: bool,
    /// `None` means inherit the renderer's default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<Color>,
    /// `None` means transparent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Style {
    /// True when no attribute differs from the default.
    pub fn is_plain(&self) -> bool {
        *self == Style::default()
    }
}

/// A maximal run of text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    #[serde(flatten)]
    pub style: Style,
}

impl Token {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// A token with the default style.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Style::default())
    }
}
