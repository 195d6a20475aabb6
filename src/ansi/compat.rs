//! Compat-mode scanner.
//!
//! Recognizes `ESC [ <code> m` where `<code>` is everything up to the next
//! `m`. An `ESC [` with no later `m` is kept as literal text.

use tracing::trace;

use super::palette;
use super::types::Style;
use super::{RunBuilder, Token};

const ESC: char = '\x1b';

pub(crate) fn scan(input: &str) -> Vec<Token> {
    let mut runs = RunBuilder::default();
    let mut rest = input;

    while let Some(esc) = rest.find(ESC) {
        runs.push_str(&rest[..esc]);
        let after = &rest[esc + ESC.len_utf8()..];

        if let Some(body) = after.strip_prefix('[') {
            if let Some(end) = body.find('m') {
                let code = &body[..end];
                runs.restyle(|style| apply_code(style, code));
                rest = &body[end + 1..];
                continue;
            }
        }

        // Not a terminated sequence: ESC is ordinary text
        runs.push_char(ESC);
        rest = after;
    }

    runs.push_str(rest);
    runs.finish()
}

/// Apply one whole code string to the style.
fn apply_code(style: &mut Style, code: &str) {
    match code {
        "0" => *style = Style::default(),
        "1" => style.bold = true,
        "2" => style.dim = true,
        "3" => style.italic = true,
        "4" => style.underline = true,
        _ => {
            if let Some(color) = palette::lookup_key(code) {
                style.foreground = Some(color);
            } else if let Some(color) = code.strip_prefix('4').and_then(palette::lookup_key) {
                style.background = Some(color);
            } else {
                trace!(code = %code, "Ignoring unrecognized SGR code");
            }
        }
    }
}
