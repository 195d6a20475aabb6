//! ratatui span renderer.
//!
//! Converts tokens to styled spans for the TUI output pane.

use ratatui::style::{Color as RatColor, Modifier, Style as RatStyle};
use ratatui::text::{Line, Span};

use crate::ansi::{Color, Style, Token};

fn rat_color(color: Color) -> RatColor {
    RatColor::Rgb(color.r, color.g, color.b)
}

/// Map a token style onto a ratatui style.
pub fn to_style(style: &Style) -> RatStyle {
    let mut out = RatStyle::default();
    if let Some(fg) = style.foreground {
        out = out.fg(rat_color(fg));
    }
    if let Some(bg) = style.background {
        out = out.bg(rat_color(bg));
    }

    let mut modifiers = Modifier::empty();
    if style.bold {
        modifiers |= Modifier::BOLD;
    }
    if style.dim {
        modifiers |= Modifier::DIM;
    }
    if style.italic {
        modifiers |= Modifier::ITALIC;
    }
    if style.underline {
        modifiers |= Modifier::UNDERLINED;
    }
    out.add_modifier(modifiers)
}

/// Build one ratatui line from a line's tokens.
pub fn to_line(tokens: &[Token]) -> Line<'static> {
    Line::from(
        tokens
            .iter()
            .map(|t| Span::styled(t.text.clone(), to_style(&t.style)))
            .collect::<Vec<_>>(),
    )
}
