//! Tokenizer properties for both parsing modes

use ansitab::ansi::palette::{self, COLOR_TABLE};
use ansitab::{parse, Color, SgrMode, Style, Token, Tokenizer};

use crate::helpers::{escape_soup, sgr_sentence, strip_digit_sgr, text_of, Rng};

#[test]
fn text_survives_with_sgr_removed() {
    let inputs = [
        "hello",
        "\x1b[1mbold\x1b[0m plain",
        "a\x1b[31mb\x1b[32mc\x1b[0md",
        "\x1b[99mignored code",
        "tail \x1b[31",
        "lone \x1b escape",
        "héllo \x1b[36m世界\x1b[0m",
    ];
    for input in inputs {
        assert_eq!(text_of(&parse(input)), strip_digit_sgr(input), "{:?}", input);
    }
}

#[test]
fn generated_sentences_keep_text_with_sgr_removed() {
    let mut rng = Rng::new(0x5eed);
    for _ in 0..2000 {
        let input = sgr_sentence(&mut rng);
        assert_eq!(text_of(&parse(&input)), strip_digit_sgr(&input), "{:?}", input);
    }
}

#[test]
fn generated_soup_yields_maximal_nonempty_runs() {
    let mut rng = Rng::new(42);
    for _ in 0..2000 {
        let input = escape_soup(&mut rng);
        for mode in [SgrMode::Compat, SgrMode::Standard] {
            let tokens = Tokenizer::new(mode).tokenize(&input);
            assert!(tokens.iter().all(|t| !t.text.is_empty()), "{:?}", input);
            assert!(
                tokens.windows(2).all(|w| w[0].style != w[1].style),
                "{:?} in {:?}",
                input,
                mode
            );
            if mode == SgrMode::Standard {
                assert!(!text_of(&tokens).contains('\x1b'), "{:?}", input);
            }
        }
    }
}

#[test]
fn plain_text_is_one_default_token() {
    assert_eq!(parse("hello"), vec![Token::plain("hello")]);
}

#[test]
fn bold_red_then_reset() {
    let tokens = parse("\x1b[1m\x1b[31mx\x1b[0my");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].text, "x");
    assert!(tokens[0].style.bold);
    assert_eq!(tokens[0].style.foreground, Some("#ff0000".parse().unwrap()));
    assert_eq!(tokens[1], Token::plain("y"));
}

#[test]
fn repeated_code_does_not_split_run() {
    let tokens = parse("\x1b[1mab\x1b[1mcd");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].text, "abcd");
    assert!(tokens[0].style.bold);
}

#[test]
fn empty_input_yields_no_tokens() {
    assert!(parse("").is_empty());
    assert!(Tokenizer::new(SgrMode::Standard).tokenize("").is_empty());
}

#[test]
fn unterminated_sequence_is_literal_in_compat_mode() {
    assert_eq!(parse("a\x1b[31"), vec![Token::plain("a\x1b[31")]);
}

#[test]
fn unknown_code_changes_nothing() {
    assert_eq!(parse("\x1b[99mz"), vec![Token::plain("z")]);
}

#[test]
fn every_foreground_code_maps_to_its_table_color() {
    for code in (30..=37).chain(90..=97) {
        let tokens = parse(&format!("\x1b[{}mx", code));
        assert_eq!(tokens.len(), 1);
        assert_eq!(
            tokens[0].style.foreground,
            palette::foreground(code),
            "code {}",
            code
        );
        assert!(tokens[0].style.foreground.is_some());
    }
}

#[test]
fn color_table_has_sixteen_distinct_codes() {
    let mut codes: Vec<u16> = COLOR_TABLE.iter().map(|(c, _)| *c).collect();
    codes.dedup();
    assert_eq!(codes.len(), 16);
    assert_eq!(palette::foreground(34), Some(Color::rgb(0x00, 0x88, 0xff)));
}

#[test]
fn modes_disagree_on_standard_backgrounds() {
    let compat = Tokenizer::new(SgrMode::Compat).tokenize("\x1b[41mx");
    let standard = Tokenizer::new(SgrMode::Standard).tokenize("\x1b[41mx");
    assert!(compat[0].style.is_plain());
    assert_eq!(standard[0].style.background, palette::foreground(31));
}

#[test]
fn modes_disagree_on_compound_codes() {
    let compat = Tokenizer::new(SgrMode::Compat).tokenize("\x1b[1;32mok");
    let standard = Tokenizer::new(SgrMode::Standard).tokenize("\x1b[1;32mok");
    assert!(compat[0].style.is_plain());
    assert_eq!(
        standard[0].style,
        Style {
            bold: true,
            foreground: palette::foreground(32),
            ..Style::default()
        }
    );
}

#[test]
fn standard_mode_bright_backgrounds() {
    let tokens = Tokenizer::new(SgrMode::Standard).tokenize("\x1b[107mx");
    assert_eq!(tokens[0].style.background, palette::foreground(97));
}

#[test]
fn tokens_serialize_with_hex_colors() {
    let tokens = parse("\x1b[1m\x1b[31mx");
    let json = serde_json::to_string(&tokens[0]).unwrap();
    assert_eq!(json, r##"{"text":"x","bold":true,"foreground":"#ff0000"}"##);

    let back: Token = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tokens[0]);
}

#[test]
fn invalid_color_string_is_rejected() {
    assert!(serde_json::from_str::<Token>(r#"{"text":"x","foreground":"red"}"#).is_err());
}

#[test]
fn tokenizer_never_panics_on_odd_input() {
    let inputs = [
        "\x1b",
        "\x1b[",
        "\x1b[m",
        "\x1b[;;;m",
        "\x1b[38;5m",
        "\x1b[4",
        "\x1b[4m\x1b[40m\x1b[400m",
        "\x1b[\u{1F600}m",
        "m[\x1b\x1b[[mm",
    ];
    for mode in [SgrMode::Compat, SgrMode::Standard] {
        let tokenizer = Tokenizer::new(mode);
        for input in inputs {
            let _ = tokenizer.tokenize(input);
        }
    }
}
