//! Mock command table.
//!
//! Commands never execute anything: each is matched against a fixed set of
//! patterns and answered with canned, ANSI-colored output.

/// ANSI reset sequence
pub const ANSI_RESET: &str = "\x1b[0m";
pub const ANSI_BOLD: &str = "\x1b[1m";
pub const ANSI_DIM: &str = "\x1b[2m";
pub const ANSI_ITALIC: &str = "\x1b[3m";
pub const ANSI_UNDERLINE: &str = "\x1b[4m";

pub const ANSI_BLACK: &str = "\x1b[30m";
pub const ANSI_RED: &str = "\x1b[31m";
pub const ANSI_GREEN: &str = "\x1b[32m";
pub const ANSI_YELLOW: &str = "\x1b[33m";
pub const ANSI_BLUE: &str = "\x1b[34m";
pub const ANSI_MAGENTA: &str = "\x1b[35m";
pub const ANSI_CYAN: &str = "\x1b[36m";
pub const ANSI_WHITE: &str = "\x1b[37m";

pub const ANSI_BG_BLACK: &str = "\x1b[40m";
pub const ANSI_BG_RED: &str = "\x1b[41m";
pub const ANSI_BG_GREEN: &str = "\x1b[42m";
pub const ANSI_BG_YELLOW: &str = "\x1b[43m";
pub const ANSI_BG_BLUE: &str = "\x1b[44m";
pub const ANSI_BG_MAGENTA: &str = "\x1b[45m";
pub const ANSI_BG_CYAN: &str = "\x1b[46m";
pub const ANSI_BG_WHITE: &str = "\x1b[47m";

/// Commands that wipe the session output instead of answering.
pub fn is_clear_command(command: &str) -> bool {
    matches!(command.trim(), "clear" | "cls")
}

/// Canned response for a command.
///
/// Patterns are checked in order, by substring, so `helpls` answers as
/// `help` and `cls` would answer as `ls` if it were not intercepted as a
/// clear command first.
pub fn mock_response(command: &str) -> String {
    if command.contains("help") {
        return [
            format!("{ANSI_BOLD}{ANSI_GREEN}Available Commands:{ANSI_RESET}"),
            format!("{ANSI_YELLOW}help{ANSI_RESET}       - Display this help message"),
            format!("{ANSI_YELLOW}clear{ANSI_RESET}      - Clear the terminal screen"),
            format!("{ANSI_YELLOW}ls{ANSI_RESET}         - List files in current directory"),
            format!("{ANSI_YELLOW}pwd{ANSI_RESET}        - Print working directory"),
            format!("{ANSI_YELLOW}echo{ANSI_RESET}       - Echo a message back"),
        ]
        .join("\n");
    }

    if command.contains("ls") {
        return [
            format!("{ANSI_BOLD}{ANSI_BLUE}src{ANSI_RESET}          {ANSI_DIM}Directory{ANSI_RESET}"),
            format!("{ANSI_BOLD}{ANSI_BLUE}public{ANSI_RESET}       {ANSI_DIM}Directory{ANSI_RESET}"),
            format!("{ANSI_GREEN}package.json{ANSI_RESET}  {ANSI_DIM}File{ANSI_RESET}"),
            format!("{ANSI_GREEN}tsconfig.json{ANSI_RESET} {ANSI_DIM}File{ANSI_RESET}"),
            format!("{ANSI_GREEN}README.md{ANSI_RESET}     {ANSI_DIM}File{ANSI_RESET}"),
        ]
        .join("\n");
    }

    if command.contains("pwd") {
        return format!("{ANSI_GREEN}/home/user/project{ANSI_RESET}");
    }

    if let Some(message) = command.strip_prefix("echo ") {
        return message.to_string();
    }

    format!(
        "{ANSI_YELLOW}Command not recognized: {ANSI_RED}{command}{ANSI_RESET}\n\
         {ANSI_DIM}Type 'help' for available commands.{ANSI_RESET}"
    )
}
