//! Ratatui Style helpers for Theme
//!
//! All methods that return `ratatui::style::Style` live here,
//! isolating the ratatui dependency to a single file within the theme module.

use ratatui::style::{Modifier, Style};

use super::Theme;

impl Theme {
    /// Style for primary text content.
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for secondary/dimmed text.
    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for bold accented text (keybindings, etc).
    pub fn accent_bold_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the selected tab title.
    pub fn tab_active_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.tab_active_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for unselected tab titles.
    pub fn tab_inactive_style(&self) -> Style {
        self.text_secondary_style()
    }

    /// Block cursor drawn after the input.
    pub fn cursor_style(&self) -> Style {
        Style::default().bg(self.cursor)
    }

    /// Style for error messages in the footer.
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }
}
