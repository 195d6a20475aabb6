//! Configuration loading, saving and validation

use std::fs;
use tempfile::TempDir;

use ansitab::config::ThemeName;
use ansitab::{Config, Format, SgrMode};

#[test]
fn missing_file_gives_defaults() {
    let temp = TempDir::new().unwrap();
    let config = Config::load_from(&temp.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn partial_file_fills_in_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(
        &path,
        "[parser]\nmode = \"standard\"\n\n[tui]\ntheme = \"ocean\"\n",
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.parser.mode, SgrMode::Standard);
    assert_eq!(config.tui.theme, ThemeName::Ocean);
    assert_eq!(config.tui.tick_rate_ms, 250);
    assert_eq!(config.render.format, Format::Ansi);
    assert_eq!(config.shell.prompt, "$ ");
}

#[test]
fn save_then_load_round_trips() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("dir").join("config.toml");

    let mut config = Config::default();
    config.render.format = Format::Html;
    config.shell.prompt = "> ".to_string();
    config.shell.scrollback = 0;
    config.save_to(&path).unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), config);
}

#[test]
fn parse_error_names_the_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.toml");
    fs::write(&path, "[parser\nmode = ").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("broken.toml"));
}

#[test]
fn unknown_enum_value_is_an_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[render]\nformat = \"pdf\"\n").unwrap();
    assert!(Config::load_from(&path).is_err());
}

#[test]
fn zero_tick_rate_is_rejected() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[tui]\ntick_rate_ms = 0\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("tick_rate_ms"));
}

#[test]
fn configured_mode_drives_tokenizer() {
    let mut config = Config::default();
    config.parser.mode = SgrMode::Standard;
    let tokens = config.tokenizer().tokenize("\x1b[1;31mx");
    assert!(tokens[0].style.bold);
}
