//! SGR color table.
//!
//! Maps the 16 foreground codes (30-37 standard, 90-97 bright) to resolved
//! display colors. Background codes reuse the same table.

use super::types::Color;

/// Foreground SGR codes and their display colors.
pub static COLOR_TABLE: [(u16, Color); 16] = [
    (30, Color::rgb(0x00, 0x00, 0x00)), // black
    (31, Color::rgb(0xff, 0x00, 0x00)), // red
    (32, Color::rgb(0x00, 0xff, 0x00)), // green
    (33, Color::rgb(0xff, 0xff, 0x00)), // yellow
    (34, Color::rgb(0x00, 0x88, 0xff)), // blue, brightened for dark backgrounds
    (35, Color::rgb(0xff, 0x00, 0xff)), // magenta
    (36, Color::rgb(0x00, 0xff, 0xff)), // cyan
    (37, Color::rgb(0xff, 0xff, 0xff)), // white
    (90, Color::rgb(0x88, 0x88, 0x88)), // bright black
    (91, Color::rgb(0xff, 0x88, 0x88)), // bright red
    (92, Color::rgb(0x88, 0xff, 0x88)), // bright green
    (93, Color::rgb(0xff, 0xff, 0x88)), // bright yellow
    (94, Color::rgb(0x88, 0xaa, 0xff)), // bright blue
    (95, Color::rgb(0xff, 0x88, 0xff)), // bright magenta
    (96, Color::rgb(0x88, 0xff, 0xff)), // bright cyan
    (97, Color::rgb(0xff, 0xff, 0xff)), // bright white
];

/// Look up a foreground code.
pub fn foreground(code: u16) -> Option<Color> {
    COLOR_TABLE
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, color)| *color)
}

/// Look up a background code by its offset into the foreground table
/// (40-47 and 100-107).
pub fn background(code: u16) -> Option<Color> {
    match code {
        40..=47 | 100..=107 => foreground(code - 10),
        _ => None,
    }
}

/// Look up a raw code string as a table key.
///
/// The key must be the canonical decimal form, so `"031"` or `"+31"` do not
/// match.
pub fn lookup_key(key: &str) -> Option<Color> {
    if key.len() != 2 || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse().ok().and_then(foreground)
}
