use pretty_assertions::assert_eq;

use super::*;

#[test]
fn builder_collects_parts() {
    let diag = Diagnostic::error(ErrorCode::E2002)
        .with_message("`a` is defined outside this function")
        .with_label(Span::new(30, 31), "referenced here")
        .with_secondary_label(Span::new(4, 5), "defined here")
        .with_note("function bodies only see their parameters")
        .with_help("pass `a` as an argument");

    assert_eq!(diag.labels.len(), 2);
    assert_eq!(diag.primary_span(), Some(Span::new(30, 31)));
    assert_eq!(diag.notes.len(), 1);
    assert_eq!(diag.help.len(), 1);
}

#[test]
fn default_message_is_description() {
    let diag = Diagnostic::error(ErrorCode::E6008);
    assert_eq!(diag.message, "return outside function");
    assert_eq!(diag.primary_span(), None);
}

#[test]
fn display_header() {
    let diag = unknown_identifier(Span::new(8, 9), "b");
    assert_eq!(diag.to_string(), "error[E2001]: unknown identifier `b`");
    assert_eq!(diag.primary_span(), Some(Span::new(8, 9)));
}
