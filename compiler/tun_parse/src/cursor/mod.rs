//! Token cursor for navigating the token stream.
//!
//! Low-level token access, one-token lookahead, and consumption.

use tracing::trace;
use tun_diagnostic::ErrorCode;
use tun_ir::{Name, Span, StringInterner, Token, TokenKind, TokenList};

use crate::ParseError;

/// Returned past the end of a token list that lacks its EOF token.
static EOF_TOKEN: Token = Token::new(TokenKind::Eof, Span::DUMMY);

/// Cursor over a token list.
///
/// The position never moves past the final EOF token.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    interner: &'a StringInterner,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Cursor {
            tokens,
            interner,
            pos: 0,
        }
    }

    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    #[inline]
    pub fn current(&self) -> &'a Token {
        self.tokens.get(self.pos).unwrap_or(&EOF_TOKEN)
    }

    #[inline]
    pub fn current_kind(&self) -> &'a TokenKind {
        &self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Kind of the token after the current one, EOF past the end.
    #[inline]
    pub fn peek_next_kind(&self) -> &'a TokenKind {
        self.tokens
            .get(self.pos + 1)
            .map_or(&EOF_TOKEN.kind, |t| &t.kind)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Check if the current token is the same kind, ignoring payloads.
    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        self.current_kind().is_same_kind(kind)
    }

    /// Consume the current token and return it. Stays put at EOF.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.current();
        if !self.is_at_end() {
            trace!(pos = self.pos, kind = token.kind.tag_name(), "advance");
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it matches.
    pub fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a token of the given kind or fail with "expected X, found Y".
    pub fn expect(&mut self, kind: &TokenKind) -> Result<&'a Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(kind.display_name()))
        }
    }

    /// Consume an identifier and return its name and span.
    pub fn expect_ident(&mut self) -> Result<(Name, Span), ParseError> {
        if let TokenKind::Ident(name) = *self.current_kind() {
            let span = self.advance().span;
            Ok((name, span))
        } else {
            Err(self.unexpected_with_code(ErrorCode::E1004, "identifier"))
        }
    }

    /// Error for the current token when `expected` was wanted.
    ///
    /// A malformed scanner token is reported as such rather than as a
    /// mismatch.
    #[cold]
    #[inline(never)]
    pub fn unexpected(&self, expected: &str) -> ParseError {
        self.unexpected_with_code(ErrorCode::E1001, expected)
    }

    #[cold]
    #[inline(never)]
    pub fn unexpected_with_code(&self, code: ErrorCode, expected: &str) -> ParseError {
        let current = self.current();
        if let TokenKind::Error(text) = current.kind {
            return ParseError::invalid_token(current.span, self.interner.lookup(text));
        }
        ParseError::new(
            code,
            format!(
                "expected {expected}, found {}",
                current.kind.display_name()
            ),
            current.span,
        )
        .with_context(format!("expected {expected}"))
    }
}
