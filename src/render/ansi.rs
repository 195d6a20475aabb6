//! ANSI re-encoding renderer.
//!
//! Emits each styled token as SGR attributes plus 24-bit colors, followed by
//! a reset, so the output does not depend on the receiving terminal's
//! palette.

use std::io;

use crossterm::queue;
use crossterm::style::{
    Attribute, Color as TermColor, Print, SetAttribute, SetBackgroundColor, SetForegroundColor,
};

use crate::ansi::{Color, Token};

fn term_color(color: Color) -> TermColor {
    TermColor::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

/// Write tokens as SGR-styled text.
pub fn write_ansi<W: io::Write>(out: &mut W, tokens: &[Token]) -> io::Result<()> {
    for token in tokens {
        let style = &token.style;
        if style.is_plain() {
            queue!(out, Print(&token.text))?;
            continue;
        }
        if style.bold {
            queue!(out, SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            queue!(out, SetAttribute(Attribute::Dim))?;
        }
        if style.italic {
            queue!(out, SetAttribute(Attribute::Italic))?;
        }
        if style.underline {
            queue!(out, SetAttribute(Attribute::Underlined))?;
        }
        if let Some(fg) = style.foreground {
            queue!(out, SetForegroundColor(term_color(fg)))?;
        }
        if let Some(bg) = style.background {
            queue!(out, SetBackgroundColor(term_color(bg)))?;
        }
        queue!(out, Print(&token.text), SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

/// Render tokens to an SGR-styled string.
pub fn to_ansi(tokens: &[Token]) -> io::Result<String> {
    let mut buf = Vec::new();
    write_ansi(&mut buf, tokens)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
