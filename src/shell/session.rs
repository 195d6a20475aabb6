//! A single simulated terminal.
//!
//! Holds the output history, the line being edited, and the command
//! history used for Up/Down recall.

use tracing::debug;

use super::commands::{is_clear_command, mock_response};
use crate::ansi::{Token, Tokenizer};
use crate::config::ShellConfig;

/// Editing keys understood by a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Backspace,
    Delete,
    Char(char),
    /// Ctrl+C
    Interrupt,
    /// Ctrl+L
    ClearScreen,
}

/// Lines shown when a session opens.
pub const WELCOME_LINES: [&str; 2] = ["Welcome to the terminal", "Type commands below..."];

#[derive(Debug, Clone)]
pub struct Session {
    prompt: String,
    /// Maximum retained output lines, 0 for unlimited
    scrollback: usize,
    lines: Vec<String>,
    input: String,
    /// Cursor position in chars, always within `0..=input.chars().count()`
    cursor: usize,
    /// Submitted commands, most recent first
    command_history: Vec<String>,
    history_index: Option<usize>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&ShellConfig::default())
    }
}

impl Session {
    pub fn new(config: &ShellConfig) -> Self {
        let lines = if config.welcome {
            WELCOME_LINES.iter().map(|s| s.to_string()).collect()
        } else {
            Vec::new()
        };
        Self {
            prompt: config.prompt.clone(),
            scrollback: config.scrollback,
            lines,
            input: String::new(),
            cursor: 0,
            command_history: Vec::new(),
            history_index: None,
        }
    }

    /// Output history, oldest first.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn command_history(&self) -> &[String] {
        &self.command_history
    }

    pub fn history_index(&self) -> Option<usize> {
        self.history_index
    }

    /// The prompt followed by the current input.
    pub fn prompt_line(&self) -> String {
        format!("{}{}", self.prompt, self.input)
    }

    /// Input split at the cursor.
    pub fn split_input(&self) -> (&str, &str) {
        self.input.split_at(self.byte_index(self.cursor))
    }

    /// Replace the input line and move the cursor to its end.
    pub fn set_input(&mut self, input: &str) {
        self.input = input.to_string();
        self.cursor = self.input_len();
    }

    pub fn handle_key(&mut self, key: Key) {
        match key {
            Key::Enter => {
                self.submit();
            }
            Key::Up => self.history_up(),
            Key::Down => self.history_down(),
            Key::Left => self.cursor = self.cursor.saturating_sub(1),
            Key::Right => self.cursor = (self.cursor + 1).min(self.input_len()),
            Key::Home => self.cursor = 0,
            Key::End => self.cursor = self.input_len(),
            Key::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let at = self.byte_index(self.cursor);
                    self.input.remove(at);
                }
            }
            Key::Delete => {
                if self.cursor < self.input_len() {
                    let at = self.byte_index(self.cursor);
                    self.input.remove(at);
                }
            }
            Key::Char(c) => {
                let at = self.byte_index(self.cursor);
                self.input.insert(at, c);
                self.cursor += 1;
            }
            Key::Interrupt => self.interrupt(),
            Key::ClearScreen => self.clear_screen(),
        }
    }

    /// Run the current input as a command and return it.
    pub fn submit(&mut self) -> String {
        let command = std::mem::take(&mut self.input);
        self.cursor = 0;
        self.push_line(format!("{}{}", self.prompt, command));

        if !command.trim().is_empty() {
            self.command_history.insert(0, command.clone());
            self.history_index = None;
        }

        if is_clear_command(&command) {
            debug!("Clearing session output");
            self.lines.clear();
        } else if !command.trim().is_empty() {
            debug!(command = %command, "Running mock command");
            for line in mock_response(&command).split('\n') {
                self.push_line(line.to_string());
            }
        }

        command
    }

    /// Abandon the current input line.
    pub fn interrupt(&mut self) {
        let line = format!("{}{}^C", self.prompt, self.input);
        self.push_line(line);
        self.input.clear();
        self.cursor = 0;
    }

    /// Drop all output and the current input.
    pub fn clear_screen(&mut self) {
        self.lines.clear();
        self.input.clear();
        self.cursor = 0;
    }

    /// Tokenize every output line.
    pub fn styled_lines(&self, tokenizer: &Tokenizer) -> Vec<Vec<Token>> {
        self.lines.iter().map(|l| tokenizer.tokenize(l)).collect()
    }

    fn history_up(&mut self) {
        if self.command_history.is_empty() {
            return;
        }
        let next = match self.history_index {
            None => 0,
            Some(i) => (i + 1).min(self.command_history.len() - 1),
        };
        self.history_index = Some(next);
        let command = self.command_history[next].clone();
        self.set_input(&command);
    }

    fn history_down(&mut self) {
        match self.history_index {
            Some(0) => {
                self.history_index = None;
                self.input.clear();
                self.cursor = 0;
            }
            Some(i) => {
                self.history_index = Some(i - 1);
                let command = self.command_history[i - 1].clone();
                self.set_input(&command);
            }
            None => {}
        }
    }

    fn push_line(&mut self, line: String) {
        self.lines.push(line);
        if self.scrollback > 0 && self.lines.len() > self.scrollback {
            let excess = self.lines.len() - self.scrollback;
            self.lines.drain(..excess);
        }
    }

    fn input_len(&self) -> usize {
        self.input.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }
}
