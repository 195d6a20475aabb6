//! Plain-text renderer.

use crate::ansi::Token;

/// Concatenate token text, dropping all styling.
pub fn to_plain(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.text.as_str()).collect()
}
