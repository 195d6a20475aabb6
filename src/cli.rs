//! CLI definitions for ansitab
//!
//! Kept out of main.rs so the command tree can be reused for completion
//! generation and tested without spawning the binary.

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell as CompletionShell;

use crate::ansi::SgrMode;
use crate::render::Format;

/// Build clap styles using our theme colors.
///
/// - Green: headers, usage, command names (accent color)
/// - White: descriptions, placeholders (renders as light gray on dark terminals)
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "ansitab")]
#[command(about = "[ ansitab ] - ANSI color parsing and a tabbed mock terminal")]
#[command(
    long_about = "ansitab - turn ANSI SGR escape sequences into styled text runs.

Text is split into tokens that each carry one style (bold, dim, italic,
underline, foreground and background color). Tokens can be rendered as
re-encoded ANSI, HTML spans, JSON or plain text, or shown live in a tabbed
terminal panel backed by canned command responses.

QUICK START:
    ansitab parse --escapes '\\e[1m\\e[31mred\\e[0m plain'
    ansitab run ls --format html
    ansitab palette
    ansitab tui"
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output options shared by commands that render tokens.
#[derive(Args, Debug, Clone, Default)]
pub struct RenderArgs {
    /// Output format (defaults to the configured format)
    #[arg(long, short, value_enum)]
    pub format: Option<Format>,

    /// Escape interpretation (defaults to the configured mode)
    #[arg(long, short, value_enum)]
    pub mode: Option<SgrMode>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Tokenize text containing ANSI escapes
    #[command(long_about = "Tokenize text containing ANSI SGR escapes and render it.

Input is taken from TEXT, from --file, or from stdin, in that order.

EXAMPLES:
    ansitab parse --escapes '\\e[32mok\\e[0m'
    ansitab parse --file build.log --format html
    printf '\\033[1mhi' | ansitab parse --format json
    ansitab parse --mode standard --escapes '\\e[1;41mboth\\e[0m'")]
    Parse {
        /// Text to tokenize
        #[arg(conflicts_with = "file")]
        text: Option<String>,

        /// Read input from a file
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,

        /// Expand literal \e, \x1b, \033 and \n (write \\ for a backslash)
        #[arg(long, short)]
        escapes: bool,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Render the canned response of a mock command
    #[command(long_about = "Render the canned response for a mock shell command.

Nothing is executed. Recognized commands are help, ls, pwd and echo.

EXAMPLES:
    ansitab run help
    ansitab run echo hello --format plain")]
    Run {
        /// Command line, words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        command: Vec<String>,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Show the 16-color table with swatches
    Palette,

    /// Launch the tabbed terminal
    #[command(long_about = "Launch the tabbed mock terminal.

KEYS:
    Enter / arrows / Home / End    edit and recall commands
    Ctrl+T / Ctrl+W                new / close tab
    Tab / Shift+Tab / Alt+1..9     switch tabs
    Ctrl+C / Ctrl+L                interrupt / clear
    F10 / F11                      minimize / expand
    Esc / Ctrl+Q                   quit")]
    Tui {
        /// Append logs to this file (logging is off otherwise)
        #[arg(long, value_name = "PATH")]
        log_file: Option<PathBuf>,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the configuration file path
    Path,
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
