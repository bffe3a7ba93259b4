//! Scanner for tun using logos with string interning.
//!
//! One left-to-right pass over the source:
//! - whitespace (space, tab, newline, carriage return) is skipped
//! - `+ - = ( ) { } ,` are single-character tokens
//! - a run of letters, digits and underscores is a keyword, an integer
//!   literal or an identifier, in that order of preference
//! - anything else becomes an `ERROR` token plus a [`LexError`]
//!
//! The token list always ends with exactly one EOF token.

mod lex_error;

use logos::Logos;
use tun_ir::{Span, StringInterner, Token, TokenKind, TokenList};

pub use lex_error::{LexError, LexErrorKind};

/// Raw token from logos (before classification and interning).
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
enum RawToken {
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("=")]
    Eq,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,

    /// Keyword, integer or identifier; told apart after matching.
    #[regex(r"[A-Za-z0-9_]+")]
    Word,
}

/// Scanner output: the token list plus every malformed run found.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOutput {
    pub tokens: TokenList,
    pub errors: Vec<LexError>,
}

/// Scan source text into tokens.
///
/// Never fails: malformed runs are kept as `ERROR` tokens and reported in
/// [`LexOutput::errors`].
pub fn lex(source: &str, interner: &StringInterner) -> LexOutput {
    let mut output = LexOutput {
        tokens: TokenList::with_capacity(source.len() / 2 + 1),
        errors: Vec::new(),
    };
    let mut logos = RawToken::lexer(source);

    while let Some(result) = logos.next() {
        let range = logos.span();
        let span = Span::from_range(range.clone());
        let slice = source.get(range).unwrap_or("");

        let kind = match result {
            Ok(raw) => convert_token(raw, slice, span, interner, &mut output.errors),
            Err(()) => {
                output.errors.push(LexError::new(
                    LexErrorKind::InvalidCharacter,
                    span,
                    slice,
                ));
                TokenKind::Error(interner.intern(slice))
            }
        };
        output.tokens.push(Token::new(kind, span));
    }

    let eof = Span::point(u32::try_from(source.len()).unwrap_or(u32::MAX));
    output.tokens.push(Token::new(TokenKind::Eof, eof));
    output
}

fn convert_token(
    raw: RawToken,
    slice: &str,
    span: Span,
    interner: &StringInterner,
    errors: &mut Vec<LexError>,
) -> TokenKind {
    match raw {
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Eq => TokenKind::Eq,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Word => classify_word(slice, span, interner, errors),
    }
}

/// Keyword first, then a base-10 `i64`, else an identifier.
///
/// A digit-led run that does not fit `i64` is malformed rather than an
/// identifier.
fn classify_word(
    slice: &str,
    span: Span,
    interner: &StringInterner,
    errors: &mut Vec<LexError>,
) -> TokenKind {
    if let Some(keyword) = TokenKind::keyword(slice) {
        return keyword;
    }
    if slice.starts_with(|c: char| c.is_ascii_digit()) {
        return match slice.parse::<i64>() {
            Ok(value) => TokenKind::Int(value),
            Err(_) => {
                errors.push(LexError::new(LexErrorKind::InvalidInteger, span, slice));
                TokenKind::Error(interner.intern(slice))
            }
        };
    }
    TokenKind::Ident(interner.intern(slice))
}

#[cfg(test)]
mod tests;
