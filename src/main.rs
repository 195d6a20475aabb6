//! ansitab - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;

use ansitab::cli::{Cli, Commands, ConfigCommands};
use ansitab::logging;
use ansitab::theme::Theme;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!(
            "{}",
            Theme::default().error_text(&format!("Error: {:#}", e))
        );
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // The TUI owns the terminal; stderr output would land on the alternate screen
    match &cli.command {
        Commands::Tui { log_file: Some(path) } => logging::init_file(cli.verbose, path)?,
        Commands::Tui { log_file: None } => {}
        _ => logging::init_stderr(cli.verbose)?,
    }

    match cli.command {
        Commands::Parse {
            text,
            file,
            escapes,
            render,
        } => commands::parse::handle(text, file.as_deref(), escapes, &render),
        Commands::Run { command, render } => commands::run::handle(&command, &render),
        Commands::Palette => commands::palette::handle(),
        Commands::Tui { .. } => commands::tui::handle(),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
            ConfigCommands::Init { force } => commands::config::handle_init(force),
        },
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}
