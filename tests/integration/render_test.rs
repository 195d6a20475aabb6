//! Tokenize-then-render pipelines

use ansitab::render::{self, html, plain};
use ansitab::shell::mock_response;
use ansitab::{parse, Format};

#[test]
fn ls_response_as_html() {
    let tokens = parse(&mock_response("ls"));
    let html = html::to_html(&tokens[..3]);
    insta::assert_snapshot!(
        html,
        @r#"<span style="font-weight:bold;font-style:normal;text-decoration:none;color:#0088ff;background-color:transparent">src</span><span style="font-weight:normal;font-style:normal;text-decoration:none;color:inherit;background-color:transparent">          </span><span style="font-weight:normal;font-style:normal;text-decoration:none;color:inherit;background-color:transparent;opacity:0.6">Directory</span>"#
    );
}

#[test]
fn unknown_command_as_json() {
    let tokens = parse(&mock_response("oops"));
    insta::assert_snapshot!(
        render::to_json(&tokens, false).unwrap(),
        @r##"[{"text":"Command not recognized: ","foreground":"#ffff00"},{"text":"oops","foreground":"#ff0000"},{"text":"\n"},{"text":"Type 'help' for available commands.","dim":true}]"##
    );
}

#[test]
fn plain_render_matches_plain_text_of_every_response() {
    for command in ["help", "ls", "pwd", "echo x", "nope"] {
        let tokens = parse(&mock_response(command));
        let rendered = render::render(Format::Plain, &tokens).unwrap();
        assert_eq!(rendered, plain::to_plain(&tokens));
        assert!(!rendered.contains('\x1b'), "{}", command);
    }
}
