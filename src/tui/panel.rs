//! Tab panel state driven by key events.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;
use tracing::debug;

use super::app::App;
use super::event::Event;
use super::ui;
use crate::ansi::Tokenizer;
use crate::config::Config;
use crate::shell::{Key, TabPanel};
use crate::theme::Theme;

/// What a key press asks the panel to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Session(Key),
    NewTab,
    CloseTab,
    NextTab,
    PreviousTab,
    /// Activate the tab at this 0-based position
    SelectTab(usize),
    ToggleMinimize,
    ToggleExpand,
    Quit,
    Ignore,
}

/// Map a terminal key event to a panel action.
pub fn map_key(key: KeyEvent) -> Action {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Char(c) if ctrl => match c.to_ascii_lowercase() {
            'c' => Action::Session(Key::Interrupt),
            'l' => Action::Session(Key::ClearScreen),
            't' => Action::NewTab,
            'w' => Action::CloseTab,
            'q' => Action::Quit,
            _ => Action::Ignore,
        },
        KeyCode::Char(c) if alt => match c.to_digit(10) {
            Some(n @ 1..=9) => Action::SelectTab(n as usize - 1),
            _ => Action::Ignore,
        },
        KeyCode::Char(c) => Action::Session(Key::Char(c)),
        KeyCode::Enter => Action::Session(Key::Enter),
        KeyCode::Backspace => Action::Session(Key::Backspace),
        KeyCode::Delete => Action::Session(Key::Delete),
        KeyCode::Up => Action::Session(Key::Up),
        KeyCode::Down => Action::Session(Key::Down),
        KeyCode::Left => Action::Session(Key::Left),
        KeyCode::Right => Action::Session(Key::Right),
        KeyCode::Home => Action::Session(Key::Home),
        KeyCode::End => Action::Session(Key::End),
        KeyCode::Tab => Action::NextTab,
        KeyCode::BackTab => Action::PreviousTab,
        KeyCode::F(10) => Action::ToggleMinimize,
        KeyCode::F(11) => Action::ToggleExpand,
        KeyCode::Esc => Action::Quit,
        _ => Action::Ignore,
    }
}

/// TUI state: the tab panel plus presentation settings.
pub struct PanelApp {
    pub panel: TabPanel,
    pub tokenizer: Tokenizer,
    pub theme: Theme,
    /// Transient message shown in the footer
    pub status: Option<String>,
    should_quit: bool,
}

impl PanelApp {
    pub fn new(config: &Config) -> Self {
        Self {
            panel: TabPanel::new(config.shell.clone()),
            tokenizer: config.tokenizer(),
            theme: Theme::from_name(config.tui.theme),
            status: None,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.apply(map_key(key));
    }

    pub fn apply(&mut self, action: Action) {
        if action != Action::Ignore {
            self.status = None;
        }
        match action {
            Action::Session(key) => self.panel.active_mut().session.handle_key(key),
            Action::NewTab => {
                self.panel.add();
            }
            Action::CloseTab => {
                if let Err(e) = self.panel.close_active() {
                    self.status = Some(e.to_string());
                }
            }
            Action::NextTab => self.panel.activate_next(),
            Action::PreviousTab => self.panel.activate_previous(),
            Action::SelectTab(pos) => {
                if let Some(id) = self.panel.tabs().get(pos).map(|t| t.id) {
                    // id comes from the open tab list
                    let _ = self.panel.activate(id);
                }
            }
            Action::ToggleMinimize => self.panel.toggle_minimize(),
            Action::ToggleExpand => self.panel.toggle_expand(),
            Action::Quit => {
                debug!("Quit requested");
                self.should_quit = true;
            }
            Action::Ignore => {}
        }
    }
}

/// Run the tabbed terminal until the user quits.
#[cfg(not(tarpaulin_include))]
pub fn run(config: &Config) -> Result<()> {
    let mut state = PanelApp::new(config);
    let mut app = App::new(Duration::from_millis(config.tui.tick_rate_ms))?;

    while !state.should_quit() {
        app.draw(|frame| ui::render(frame, &state))?;
        match app.next_event()? {
            Event::Key(key) => state.handle_key(key),
            Event::Resize(..) | Event::Tick => {}
        }
    }
    Ok(())
}
