//! ANSI helpers for CLI messages.
//!
//! Wraps CLI output in theme colors. Honors `NO_COLOR`.

use ratatui::style::Color;

use super::Theme;

/// ANSI reset sequence
pub const ANSI_RESET: &str = "\x1b[0m";

/// Convert a ratatui Color to an ANSI escape code.
pub fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::LightRed => "\x1b[91m",
        Color::LightGreen => "\x1b[92m",
        Color::LightYellow => "\x1b[93m",
        Color::LightBlue => "\x1b[94m",
        Color::LightMagenta => "\x1b[95m",
        Color::LightCyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        Color::Reset => "\x1b[0m",
        // RGB and indexed colors have no 16-color code
        _ => "",
    }
}

fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

fn paint(color: Color, text: &str, enabled: bool) -> String {
    if enabled {
        format!("{}{}{}", color_to_ansi(color), text, ANSI_RESET)
    } else {
        text.to_string()
    }
}

impl Theme {
    /// Format text with the accent color (for CLI output).
    pub fn accent_text(&self, text: &str) -> String {
        paint(self.accent, text, colors_enabled())
    }

    /// Format text with the secondary color (for CLI output).
    pub fn secondary_text(&self, text: &str) -> String {
        paint(self.text_secondary, text, colors_enabled())
    }

    /// Format text with the error color (for CLI output).
    pub fn error_text(&self, text: &str) -> String {
        paint(self.error, text, colors_enabled())
    }
}
