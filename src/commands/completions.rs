//! Completions command handler

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell as CompletionShell};
use std::io;

/// Generate a shell completion script on stdout.
#[cfg(not(tarpaulin_include))]
pub fn handle<C: CommandFactory>(shell: CompletionShell) -> Result<()> {
    write_completions::<C, _>(shell, &mut io::stdout());
    Ok(())
}

pub(crate) fn write_completions<C: CommandFactory, W: io::Write>(
    shell: CompletionShell,
    out: &mut W,
) {
    let mut cmd = C::command();
    generate(shell, &mut cmd, "ansitab", out);
}
