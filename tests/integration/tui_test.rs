//! Full TUI frames rendered to a test backend

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};

use ansitab::tui::ui::render;
use ansitab::tui::PanelApp;
use ansitab::Config;

fn screen(app: &PanelApp, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| render(frame, app)).unwrap();
    let buffer = terminal.backend().buffer();
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

fn press(app: &mut PanelApp, code: KeyCode, modifiers: KeyModifiers) {
    app.handle_key(KeyEvent::new(code, modifiers));
}

fn type_line(app: &mut PanelApp, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c), KeyModifiers::NONE);
    }
    press(app, KeyCode::Enter, KeyModifiers::NONE);
}

#[test]
fn echo_shows_in_output() {
    let mut app = PanelApp::new(&Config::default());
    type_line(&mut app, "echo hello");
    let rows = screen(&app, 50, 8);
    assert_eq!(rows[3], "$ echo hello");
    assert_eq!(rows[4], "hello");
    assert_eq!(rows[5], "$");
}

#[test]
fn expanded_view_hides_tab_bar() {
    let mut app = PanelApp::new(&Config::default());
    press(&mut app, KeyCode::F(11), KeyModifiers::NONE);
    let rows = screen(&app, 50, 6);
    assert_eq!(rows[0], "Welcome to the terminal");
}

#[test]
fn minimized_view_shows_only_tabs_and_footer() {
    let mut app = PanelApp::new(&Config::default());
    press(&mut app, KeyCode::F(10), KeyModifiers::NONE);
    let rows = screen(&app, 50, 6);
    assert!(rows[0].contains("Terminal 1"));
    assert!(rows[1..5].iter().all(|r| r.is_empty()));
    assert!(rows[5].contains("quit"));
}

#[test]
fn each_tab_renders_its_own_session() {
    let mut app = PanelApp::new(&Config::default());
    type_line(&mut app, "pwd");
    press(&mut app, KeyCode::Char('t'), KeyModifiers::CONTROL);
    let rows = screen(&app, 50, 8);
    assert!(!rows.iter().any(|r| r.contains("/home/user/project")));

    press(&mut app, KeyCode::Char('1'), KeyModifiers::ALT);
    let rows = screen(&app, 50, 8);
    assert!(rows.iter().any(|r| r.contains("/home/user/project")));
}

#[test]
fn clear_screen_leaves_only_prompt() {
    let mut app = PanelApp::new(&Config::default());
    press(&mut app, KeyCode::Char('l'), KeyModifiers::CONTROL);
    let rows = screen(&app, 50, 5);
    assert_eq!(rows[1], "$");
    assert!(rows[2].is_empty());
}
