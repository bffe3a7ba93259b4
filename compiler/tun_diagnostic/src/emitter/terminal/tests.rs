#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use tun_ir::Span;

use super::*;
use crate::ErrorCode;

fn sample_diagnostic() -> Diagnostic {
    Diagnostic::error(ErrorCode::E2002)
        .with_message("`a` is defined outside this function")
        .with_label(Span::new(38, 39), "referenced here")
        .with_secondary_label(Span::new(4, 5), "defined here")
        .with_note("function bodies only see their parameters")
        .with_help("pass `a` as an argument")
}

fn render(emitter_source: Option<(&str, &str)>, diag: &Diagnostic, mode: ColorMode) -> String {
    let mut out = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut out, mode, false);
    if let Some((path, text)) = emitter_source {
        emitter = emitter.with_source(path, text);
    }
    emitter.emit(diag);
    emitter.flush();
    String::from_utf8(out).unwrap()
}

#[test]
fn renders_without_source() {
    let text = render(None, &sample_diagnostic(), ColorMode::Never);
    assert!(text.starts_with("error[E2002]: `a` is defined outside this function\n"));
    assert!(text.contains("  --> 38..39: referenced here"));
    assert!(text.contains("  = note: function bodies only see their parameters"));
    assert!(text.contains("  = help: pass `a` as an argument"));
    assert!(!text.contains("\x1b["));
}

#[test]
fn renders_source_snippet() {
    let source = "let a = b\n";
    let diag = Diagnostic::error(ErrorCode::E2001)
        .with_message("unknown identifier `b`")
        .with_label(Span::new(8, 9), "not found in this scope");
    let text = render(Some(("demo.tun", source)), &diag, ColorMode::Never);

    assert_eq!(
        text,
        "error[E2001]: unknown identifier `b`\n\
         \x20--> demo.tun:1:9\n\
         \x20 |\n\
         1 | let a = b\n\
         \x20 |         ^ not found in this scope\n"
    );
}

#[test]
fn secondary_label_uses_dashes() {
    let source = "let a = 1\nlet f = function() { return a }";
    let text = render(Some(("f.tun", source)), &sample_diagnostic(), ColorMode::Never);
    assert!(text.contains(" ::: f.tun:1:5"));
    assert!(text.contains("  |     - defined here"));
    assert!(text.contains(" --> f.tun:2:29"));
}

#[test]
fn color_mode_always_emits_ansi() {
    let text = render(None, &sample_diagnostic(), ColorMode::Always);
    assert!(text.contains("\x1b["));
    assert!(text.contains("E2002"));
}

#[test]
fn color_mode_resolution() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
    assert_eq!(ColorMode::default(), ColorMode::Auto);
}
