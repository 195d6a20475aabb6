//! Config subcommands handler

use anyhow::{bail, Result};
use std::path::Path;

use ansitab::theme::Theme;
use ansitab::Config;

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

/// Print the configuration file path.
#[cfg(not(tarpaulin_include))]
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Write a default configuration file.
#[cfg(not(tarpaulin_include))]
pub fn handle_init(force: bool) -> Result<()> {
    let path = Config::config_path()?;
    init_at(&path, force)?;
    let theme = Theme::default();
    println!(
        "{}",
        theme.accent_text(&format!("Wrote default config to {}", path.display()))
    );
    Ok(())
}

/// Write defaults to `path`, refusing to clobber an existing file.
pub(crate) fn init_at(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Config file already exists: {:?} (use --force to overwrite)",
            path
        );
    }
    Config::default().save_to(path)
}
