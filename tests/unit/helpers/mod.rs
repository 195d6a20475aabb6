//! Test helper utilities

#![allow(dead_code)]

use ansitab::config::ShellConfig;
use ansitab::Token;

/// Concatenated text of a token list
pub fn text_of(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

/// Shell settings without the welcome banner
pub fn quiet_shell() -> ShellConfig {
    ShellConfig {
        welcome: false,
        ..ShellConfig::default()
    }
}

/// Remove `ESC [ <digits> m` sequences, leaving every other byte alone
pub fn strip_digit_sgr(input: &str) -> String {
    let mut out = String::new();
    let mut rest = input;
    while let Some(pos) = rest.find("\x1b[") {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 2..];
        let digits = after.bytes().take_while(u8::is_ascii_digit).count();
        if after[digits..].starts_with('m') {
            rest = &after[digits + 1..];
        } else {
            out.push_str("\x1b[");
            rest = after;
        }
    }
    out.push_str(rest);
    out
}

/// Small deterministic xorshift generator for input generation
pub struct Rng(u64);

impl Rng {
    pub fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    pub fn below(&mut self, n: usize) -> usize {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        (self.0 % n as u64) as usize
    }

    pub fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.below(items.len())]
    }
}

/// Text interleaved with `ESC [ <digits> m` sequences, lone escapes, and
/// optionally an unterminated `ESC [ <digits>` at the very end.
pub fn sgr_sentence(rng: &mut Rng) -> String {
    const WORDS: [&str; 8] = ["a", "hello", "mom", " ", "世界", "é", "\n", "[m"];
    let mut out = String::new();
    for _ in 0..rng.below(10) {
        match rng.below(4) {
            0 => {
                out.push_str("\x1b[");
                for _ in 0..1 + rng.below(3) {
                    out.push(char::from(b'0' + rng.below(10) as u8));
                }
                out.push('m');
            }
            1 => out.push_str("\x1bx"),
            _ => out.push_str(rng.pick(&WORDS)),
        }
    }
    if rng.below(3) == 0 {
        out.push_str("\x1b[");
        out.push(char::from(b'0' + rng.below(10) as u8));
    }
    out
}

/// Arbitrary mix of escape-significant characters
pub fn escape_soup(rng: &mut Rng) -> String {
    const PARTS: [&str; 10] = ["\x1b", "[", "m", "0", "4", "3", "1", ";", "z", "é"];
    (0..rng.below(16)).map(|_| rng.pick(&PARTS)).collect()
}
