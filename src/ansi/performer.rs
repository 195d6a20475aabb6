//! VTE performer for standard-mode tokenizing.
//!
//! Printable characters and C0 controls go into the pending run; SGR
//! sequences restyle it; every other sequence is consumed.

use tracing::trace;
use vte::{Params, Perform};

use super::palette;
use super::types::Style;
use super::RunBuilder;

pub(crate) struct SgrPerformer<'a> {
    pub runs: &'a mut RunBuilder,
}

impl Perform for SgrPerformer<'_> {
    fn print(&mut self, c: char) {
        self.runs.push_char(c);
    }

    fn execute(&mut self, byte: u8) {
        self.runs.push_char(char::from(byte));
    }

    fn hook(&mut self, _params: &Params, _intermediates: &[u8], _ignore: bool, _action: char) {}

    fn put(&mut self, _byte: u8) {}

    fn unhook(&mut self) {}

    fn osc_dispatch(&mut self, params: &[&[u8]], _bell_terminated: bool) {
        trace!(params = params.len(), "Ignoring OSC sequence");
    }

    fn csi_dispatch(&mut self, params: &Params, intermediates: &[u8], ignore: bool, action: char) {
        if action != 'm' || !intermediates.is_empty() || ignore {
            let flat: Vec<u16> = params
                .iter()
                .map(|p| p.first().copied().unwrap_or(0))
                .collect();
            trace!(
                action = %action,
                params = ?flat,
                intermediates = ?intermediates,
                "Unhandled CSI sequence"
            );
            return;
        }

        let groups: Vec<&[u16]> = params.iter().collect();
        self.runs.restyle(|style| apply_sgr(style, &groups));
    }

    fn esc_dispatch(&mut self, intermediates: &[u8], _ignore: bool, byte: u8) {
        trace!(
            byte = byte,
            byte_char = %char::from(byte),
            intermediates = ?intermediates,
            "Unhandled ESC sequence"
        );
    }
}

/// Apply a parameter list to the style.
///
/// Each group is one `;`-separated parameter with its `:` sub-parameters.
fn apply_sgr(style: &mut Style, groups: &[&[u16]]) {
    if groups.is_empty() {
        *style = Style::default();
        return;
    }

    let mut iter = groups.iter();
    while let Some(group) = iter.next() {
        let param = group.first().copied().unwrap_or(0);
        match param {
            0 => *style = Style::default(),
            1 => style.bold = true,
            2 => style.dim = true,
            3 => style.italic = true,
            4 => style.underline = true,
            22 => {
                style.bold = false;
                style.dim = false;
            }
            23 => style.italic = false,
            24 => style.underline = false,
            30..=37 | 90..=97 => style.foreground = palette::foreground(param),
            39 => style.foreground = None,
            40..=47 | 100..=107 => style.background = palette::background(param),
            49 => style.background = None,
            38 | 48 => {
                // Colon form carries its arguments as sub-parameters
                if group.len() == 1 {
                    skip_extended_color(&mut iter);
                }
                trace!(param, "Ignoring extended color");
            }
            _ => trace!(param, "Ignoring unrecognized SGR parameter"),
        }
    }
}

/// Consume the arguments of a `38;5;n` or `38;2;r;g;b` selector.
fn skip_extended_color(iter: &mut std::slice::Iter<'_, &[u16]>) {
    let mode = iter.next().and_then(|g| g.first().copied());
    let count = match mode {
        Some(5) => 1,
        Some(2) => 3,
        _ => 0,
    };
    for _ in 0..count {
        iter.next();
    }
}
