//! Parse command handler

use anyhow::{bail, Context, Result};
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::Path;
use tracing::debug;

use ansitab::cli::RenderArgs;
use ansitab::Config;

use super::{print_tokens, resolve};

/// Tokenize TEXT, a file, or stdin and print it in the chosen format.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    text: Option<String>,
    file: Option<&Path>,
    escapes: bool,
    args: &RenderArgs,
) -> Result<()> {
    let config = Config::load()?;
    let (tokenizer, format) = resolve(args, &config);

    let mut input = read_input(text, file)?;
    if escapes {
        input = expand_escapes(&input);
    }

    let tokens = tokenizer.tokenize(&input);
    debug!(
        mode = ?tokenizer.mode(),
        ?format,
        tokens = tokens.len(),
        "Parsed input"
    );
    print_tokens(format, &tokens)
}

fn read_input(text: Option<String>, file: Option<&Path>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        return fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {:?}", path));
    }

    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        bail!("No input: pass TEXT, use --file, or pipe text on stdin");
    }
    let mut buf = String::new();
    stdin
        .read_to_string(&mut buf)
        .context("Failed to read stdin")?;
    Ok(buf)
}

/// Expand the shell-friendly spellings `\e`, `\x1b`, `\033` and `\n`.
///
/// `\\` is a literal backslash, so `\\e` stays as the two characters `\e`.
/// Any other backslash is kept as-is.
pub fn expand_escapes(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find('\\') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        let (replacement, consumed) = if after.starts_with('\\') {
            ('\\', 1)
        } else if after.starts_with('e') {
            ('\x1b', 1)
        } else if after.starts_with("x1b") || after.starts_with("x1B") {
            ('\x1b', 3)
        } else if after.starts_with("033") {
            ('\x1b', 3)
        } else if after.starts_with('n') {
            ('\n', 1)
        } else {
            out.push('\\');
            rest = after;
            continue;
        };

        out.push(replacement);
        rest = &after[consumed..];
    }
    out.push_str(rest);
    out
}
