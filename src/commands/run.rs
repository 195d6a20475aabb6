//! Run command handler

use anyhow::Result;
use tracing::debug;

use ansitab::cli::RenderArgs;
use ansitab::shell::mock_response;
use ansitab::Config;

use super::{print_tokens, resolve};

/// Render the canned response for a mock command.
#[cfg(not(tarpaulin_include))]
pub fn handle(words: &[String], args: &RenderArgs) -> Result<()> {
    let config = Config::load()?;
    let (tokenizer, format) = resolve(args, &config);

    let command = words.join(" ");
    debug!(command = %command, "Running mock command");
    let tokens = tokenizer.tokenize(&mock_response(&command));
    print_tokens(format, &tokens)
}
