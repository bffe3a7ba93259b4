#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;

fn kinds(source: &str, interner: &StringInterner) -> Vec<TokenKind> {
    lex(source, interner).tokens.iter().map(|t| t.kind).collect()
}

/// `(TAG, literal)` pairs, the shape the token listing prints.
fn tagged(source: &str) -> Vec<(&'static str, String)> {
    let interner = StringInterner::new();
    lex(source, &interner)
        .tokens
        .iter()
        .map(|t| (t.kind.tag_name(), t.literal(source).to_string()))
        .collect()
}

#[test]
fn scans_let_statement() {
    assert_eq!(
        tagged("let a = 1"),
        vec![
            ("LET", "let".to_string()),
            ("IDENTIFIER", "a".to_string()),
            ("EQUAL", "=".to_string()),
            ("INT", "1".to_string()),
            ("EOF", String::new()),
        ]
    );
}

#[test]
fn integer_literal_keeps_source_text() {
    let interner = StringInterner::new();
    assert_eq!(kinds("007", &interner)[0], TokenKind::Int(7));
    assert_eq!(tagged("007")[0], ("INT", "007".to_string()));
}

#[test]
fn scans_function_literal_and_call() {
    let interner = StringInterner::new();
    let add = interner.intern("add");
    let a = interner.intern("a");
    let b = interner.intern("b");
    let source = "let add = function(a, b) {\n\treturn a + b\n}\nlet e = add(1, 20)";

    assert_eq!(
        kinds(source, &interner),
        vec![
            TokenKind::Let,
            TokenKind::Ident(add),
            TokenKind::Eq,
            TokenKind::Function,
            TokenKind::LParen,
            TokenKind::Ident(a),
            TokenKind::Comma,
            TokenKind::Ident(b),
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::Return,
            TokenKind::Ident(a),
            TokenKind::Plus,
            TokenKind::Ident(b),
            TokenKind::RBrace,
            TokenKind::Let,
            TokenKind::Ident(interner.intern("e")),
            TokenKind::Eq,
            TokenKind::Ident(add),
            TokenKind::LParen,
            TokenKind::Int(1),
            TokenKind::Comma,
            TokenKind::Int(20),
            TokenKind::RParen,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn operators_need_no_spaces() {
    let interner = StringInterner::new();
    let a = interner.intern("a");
    assert_eq!(
        kinds("a+10-a", &interner),
        vec![
            TokenKind::Ident(a),
            TokenKind::Plus,
            TokenKind::Int(10),
            TokenKind::Minus,
            TokenKind::Ident(a),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn keywords_are_exact_words() {
    let interner = StringInterner::new();
    let toks = kinds("letter returns functions let", &interner);
    assert!(matches!(toks[0], TokenKind::Ident(_)));
    assert!(matches!(toks[1], TokenKind::Ident(_)));
    assert!(matches!(toks[2], TokenKind::Ident(_)));
    assert_eq!(toks[3], TokenKind::Let);
}

#[test]
fn underscore_identifiers() {
    let interner = StringInterner::new();
    let name = interner.intern("_tmp_1");
    assert_eq!(kinds("_tmp_1", &interner), vec![TokenKind::Ident(name), TokenKind::Eof]);
}

#[test]
fn empty_and_blank_sources_yield_only_eof() {
    let interner = StringInterner::new();
    assert_eq!(kinds("", &interner), vec![TokenKind::Eof]);
    assert_eq!(kinds(" \t\r\n  ", &interner), vec![TokenKind::Eof]);
}

#[test]
fn crlf_sources_scan() {
    let interner = StringInterner::new();
    let out = lex("let a = 1\r\nlet b = 2\r\n", &interner);
    assert!(out.errors.is_empty());
    assert_eq!(out.tokens.len(), 9);
}

#[test]
fn eof_span_is_end_of_source() {
    let interner = StringInterner::new();
    let out = lex("let a = 1  ", &interner);
    let eof = out.tokens.iter().next_back().unwrap();
    assert_eq!(eof.kind, TokenKind::Eof);
    assert_eq!(eof.span, Span::point(11));
}

#[test]
fn token_spans_cover_source_text() {
    let interner = StringInterner::new();
    let source = "let total = 100";
    let out = lex(source, &interner);
    let spans: Vec<_> = out.tokens.iter().map(|t| t.span).collect();
    assert_eq!(
        spans,
        vec![
            Span::new(0, 3),
            Span::new(4, 9),
            Span::new(10, 11),
            Span::new(12, 15),
            Span::point(15),
        ]
    );
}

#[test]
fn invalid_character_becomes_error_token() {
    let interner = StringInterner::new();
    let out = lex("let a = 2 * 3", &interner);

    assert_eq!(out.errors.len(), 1);
    assert_eq!(out.errors[0].kind, LexErrorKind::InvalidCharacter);
    assert_eq!(out.errors[0].text, "*");
    assert_eq!(out.errors[0].span, Span::new(10, 11));

    let star = interner.intern("*");
    assert_eq!(out.tokens.get(4).unwrap().kind, TokenKind::Error(star));
    // Scanning continues past the bad byte.
    assert_eq!(out.tokens.get(5).unwrap().kind, TokenKind::Int(3));
}

#[test]
fn digit_led_word_is_invalid_integer() {
    let interner = StringInterner::new();
    let out = lex("let x = 12ab", &interner);
    assert_eq!(out.errors.len(), 1);
    assert_eq!(out.errors[0].kind, LexErrorKind::InvalidInteger);
    assert_eq!(out.errors[0].text, "12ab");
}

#[test]
fn integer_bounds() {
    let interner = StringInterner::new();
    assert_eq!(
        kinds("9223372036854775807", &interner),
        vec![TokenKind::Int(i64::MAX), TokenKind::Eof]
    );

    let out = lex("9223372036854775808", &interner);
    assert_eq!(out.errors[0].kind, LexErrorKind::InvalidInteger);
}

#[test]
fn leading_zeros_parse_as_decimal() {
    let interner = StringInterner::new();
    assert_eq!(kinds("007", &interner), vec![TokenKind::Int(7), TokenKind::Eof]);
}

#[test]
fn minus_is_never_part_of_literal() {
    let interner = StringInterner::new();
    assert_eq!(
        kinds("-5", &interner),
        vec![TokenKind::Minus, TokenKind::Int(5), TokenKind::Eof]
    );
}

proptest! {
    #[test]
    fn always_ends_with_single_eof(source in "\\PC{0,64}") {
        let interner = StringInterner::new();
        let out = lex(&source, &interner);
        let eofs = out.tokens.iter().filter(|t| t.kind == TokenKind::Eof).count();
        prop_assert_eq!(eofs, 1);
        prop_assert_eq!(out.tokens.iter().next_back().map(|t| t.kind), Some(TokenKind::Eof));
    }

    #[test]
    fn errors_match_error_tokens(source in "[a-z0-9 +=(){},*;/-]{0,64}") {
        let interner = StringInterner::new();
        let out = lex(&source, &interner);
        let error_tokens = out
            .tokens
            .iter()
            .filter(|t| matches!(t.kind, TokenKind::Error(_)))
            .count();
        prop_assert_eq!(error_tokens, out.errors.len());
    }

    #[test]
    fn literals_rebuild_source_without_whitespace(source in "[a-z_ +=(){},\n\t-]{0,64}") {
        let interner = StringInterner::new();
        let out = lex(&source, &interner);
        prop_assert!(out.errors.is_empty());
        let rebuilt: String = out.tokens.iter().map(|t| t.literal(&source)).collect();
        let stripped: String = source.chars().filter(|c| !c.is_whitespace()).collect();
        prop_assert_eq!(rebuilt, stripped);
    }
}
