//! Command handlers for the ansitab CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod completions;
pub mod config;
pub mod palette;
pub mod parse;
pub mod run;
pub mod tui;

use anyhow::Result;

use ansitab::cli::RenderArgs;
use ansitab::{render, Config, Format, Token, Tokenizer};

/// Resolve render flags against the configuration; flags win.
pub fn resolve(args: &RenderArgs, config: &Config) -> (Tokenizer, Format) {
    let mode = args.mode.unwrap_or(config.parser.mode);
    let format = args.format.unwrap_or(config.render.format);
    (Tokenizer::new(mode), format)
}

/// Render tokens and print them on stdout.
pub fn print_tokens(format: Format, tokens: &[Token]) -> Result<()> {
    let out = render::render(format, tokens)?;
    if out.ends_with('\n') {
        print!("{}", out);
    } else {
        println!("{}", out);
    }
    Ok(())
}
