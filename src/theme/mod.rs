//! Theme configuration for TUI and CLI
//!
//! Chrome colors for the tab bar, prompt, and CLI messages. Terminal
//! output itself is colored by the SGR palette, not by the theme.

use ratatui::style::Color;

use crate::config::ThemeName;

pub mod cli;
pub mod tui;

pub use cli::{color_to_ansi, ANSI_RESET};

/// Theme configuration for the TUI and CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Primary text color (used for most content)
    pub text_primary: Color,
    /// Secondary/dimmed text color (footer hints, inactive tabs)
    pub text_secondary: Color,
    /// Accent color for the active tab and key hints
    pub accent: Color,
    /// Error/warning color
    pub error: Color,
    /// Background of the active tab
    pub tab_active_bg: Color,
    /// Block cursor color
    pub cursor: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::midnight()
    }
}

impl Theme {
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Default => Self::midnight(),
            ThemeName::Classic => Self::classic(),
            ThemeName::Ocean => Self::ocean(),
        }
    }

    /// Default theme - gray text, green accents on a dark tab strip.
    pub fn midnight() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::LightGreen,
            error: Color::Red,
            tab_active_bg: Color::Rgb(0x1e, 0x29, 0x3b),
            cursor: Color::LightGreen,
        }
    }

    /// Classic terminal theme - white text, yellow accents.
    pub fn classic() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::DarkGray,
            accent: Color::Yellow,
            error: Color::Red,
            tab_active_bg: Color::Black,
            cursor: Color::White,
        }
    }

    /// Cyan/blue theme.
    pub fn ocean() -> Self {
        Self {
            text_primary: Color::Cyan,
            text_secondary: Color::DarkGray,
            accent: Color::LightCyan,
            error: Color::Red,
            tab_active_bg: Color::Rgb(0x0b, 0x2a, 0x3f),
            cursor: Color::LightCyan,
        }
    }
}
