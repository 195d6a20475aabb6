//! Palette command handler

use anyhow::Result;
use crossterm::queue;
use crossterm::style::{
    Color as TermColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor,
};
use std::io::{self, IsTerminal};

use ansitab::ansi::palette::COLOR_TABLE;
use ansitab::theme::Theme;
use ansitab::Config;

/// Print the color table with foreground and background swatches.
#[cfg(not(tarpaulin_include))]
pub fn handle() -> Result<()> {
    let config = Config::load()?;
    let theme = Theme::from_name(config.tui.theme);
    let swatches = io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();

    println!("{}", theme.accent_text("Code  Hex      Fg    Bg"));
    for line in palette_lines(swatches)? {
        println!("{}", line);
    }
    println!(
        "{}",
        theme.secondary_text("Backgrounds: 40-47 and 100-107 (standard mode)")
    );
    Ok(())
}

/// 256-color index of a foreground code: 0-7 standard, 8-15 bright.
fn ansi_index(code: u16) -> u8 {
    match code {
        30..=37 => (code - 30) as u8,
        90..=97 => (code - 90 + 8) as u8,
        _ => 0,
    }
}

fn swatch(code: u16) -> io::Result<String> {
    let color = TermColor::AnsiValue(ansi_index(code));
    let mut buf = Vec::new();
    queue!(
        buf,
        SetForegroundColor(color),
        Print("████"),
        ResetColor,
        Print("  "),
        SetBackgroundColor(color),
        Print("    "),
        ResetColor
    )?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// One row per table entry: code, hex, then optional swatches drawn in the
/// terminal's own color for that code.
pub fn palette_lines(swatches: bool) -> io::Result<Vec<String>> {
    COLOR_TABLE
        .iter()
        .map(|(code, color)| {
            let row = format!("{:<4}  {}", code, color);
            if swatches {
                Ok(format!("{}  {}", row, swatch(*code)?))
            } else {
                Ok(row)
            }
        })
        .collect()
}
