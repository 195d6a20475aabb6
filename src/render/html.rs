//! HTML span renderer.

use std::fmt::Write;

use crate::ansi::{Style, Token};

/// Render each token as an inline-styled `<span>`.
pub fn to_html(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        // Writing to a String cannot fail
        let _ = write!(
            out,
            "<span style=\"{}\">{}</span>",
            css(&token.style),
            escape(&token.text)
        );
    }
    out
}

/// CSS declarations for a style.
pub fn css(style: &Style) -> String {
    let mut decls = vec![
        format!(
            "font-weight:{}",
            if style.bold { "bold" } else { "normal" }
        ),
        format!(
            "font-style:{}",
            if style.italic { "italic" } else { "normal" }
        ),
        format!(
            "text-decoration:{}",
            if style.underline { "underline" } else { "none" }
        ),
        format!(
            "color:{}",
            style.foreground.map_or("inherit".to_string(), |c| c.hex())
        ),
        format!(
            "background-color:{}",
            style
                .background
                .map_or("transparent".to_string(), |c| c.hex())
        ),
    ];
    if style.dim {
        decls.push("opacity:0.6".to_string());
    }
    decls.join(";")
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
