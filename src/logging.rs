//! Tracing setup for the CLI.
//!
//! Logs go to stderr so they never mix with rendered output on stdout. The
//! TUI owns the terminal, so it logs to a file or not at all.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter level for a `-v` count.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// RUST_LOG wins over the verbosity flag.
fn filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("ansitab={}", level_for(verbosity))))
}

/// Install a stderr subscriber.
pub fn init_stderr(verbosity: u8) -> Result<()> {
    tracing_subscriber::registry()
        .with(filter(verbosity))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(verbosity >= 2)
                .with_line_number(verbosity >= 2),
        )
        .try_init()
        .context("Failed to initialize logging")
}

/// Install a subscriber appending to `path`.
pub fn init_file(verbosity: u8, path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(filter(verbosity))
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .context("Failed to initialize logging")
}
