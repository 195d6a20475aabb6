//! Session editing and command flow

use ansitab::shell::session::WELCOME_LINES;
use ansitab::shell::Key;
use ansitab::{Session, Tokenizer};

use crate::helpers::quiet_shell;

fn type_line(session: &mut Session, text: &str) {
    for c in text.chars() {
        session.handle_key(Key::Char(c));
    }
    session.handle_key(Key::Enter);
}

#[test]
fn welcome_banner_then_command() {
    let mut session = Session::default();
    type_line(&mut session, "echo hi");
    assert_eq!(
        session.lines(),
        [WELCOME_LINES[0], WELCOME_LINES[1], "$ echo hi", "hi"]
    );
}

#[test]
fn unknown_command_adds_two_lines() {
    let mut session = Session::new(&quiet_shell());
    type_line(&mut session, "make");
    assert_eq!(session.lines().len(), 3);
    assert!(session.lines()[1].contains("Command not recognized"));
    assert!(session.lines()[2].contains("Type 'help'"));
}

#[test]
fn cls_wipes_everything_including_its_own_prompt() {
    let mut session = Session::default();
    type_line(&mut session, "ls");
    type_line(&mut session, "cls");
    assert!(session.lines().is_empty());
    assert_eq!(session.command_history(), ["cls", "ls"]);
}

#[test]
fn edit_a_recalled_command() {
    let mut session = Session::new(&quiet_shell());
    type_line(&mut session, "echo one");
    session.handle_key(Key::Up);
    session.handle_key(Key::Backspace);
    session.handle_key(Key::Backspace);
    session.handle_key(Key::Backspace);
    for c in "two".chars() {
        session.handle_key(Key::Char(c));
    }
    session.handle_key(Key::Enter);

    assert_eq!(session.lines().last().map(String::as_str), Some("two"));
    assert_eq!(session.command_history(), ["echo two", "echo one"]);
    assert_eq!(session.history_index(), None);
}

#[test]
fn insert_at_home() {
    let mut session = Session::new(&quiet_shell());
    session.set_input("world");
    session.handle_key(Key::Home);
    for c in "hello ".chars() {
        session.handle_key(Key::Char(c));
    }
    assert_eq!(session.input(), "hello world");
    assert_eq!(session.cursor(), 6);
}

#[test]
fn custom_prompt_is_used_everywhere() {
    let mut config = quiet_shell();
    config.prompt = "> ".to_string();
    let mut session = Session::new(&config);
    session.set_input("x");
    assert_eq!(session.prompt_line(), "> x");
    session.handle_key(Key::Interrupt);
    assert_eq!(session.lines(), ["> x^C"]);
}

#[test]
fn styled_lines_carry_response_colors() {
    let mut session = Session::new(&quiet_shell());
    type_line(&mut session, "help");
    let styled = session.styled_lines(&Tokenizer::default());

    let header = &styled[1][0];
    assert_eq!(header.text, "Available Commands:");
    assert!(header.style.bold);
    assert_eq!(styled[2][0].text, "help");
    assert_eq!(
        styled[2][0].style.foreground.map(|c| c.hex()),
        Some("#ffff00".to_string())
    );
}

#[test]
fn unlimited_scrollback_keeps_all_lines() {
    let mut config = quiet_shell();
    config.scrollback = 0;
    let mut session = Session::new(&config);
    for _ in 0..50 {
        type_line(&mut session, "ls");
    }
    assert_eq!(session.lines().len(), 300);
}
