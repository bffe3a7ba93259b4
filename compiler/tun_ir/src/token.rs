//! Token types produced by the scanner.

use std::fmt;

use super::{Name, Span};

/// A token with its kind and source location.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    /// Source text this token was scanned from. EOF has an empty literal.
    pub fn literal<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.span.to_range()).unwrap_or("")
    }
}

/// Token kinds.
///
/// Identifier and malformed-run text is interned; integer literals carry
/// their parsed value.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// End of input.
    Eof,
    Ident(Name),
    Int(i64),

    // Keywords
    Function,
    Let,
    Return,

    // Punctuation
    Eq,
    Plus,
    Minus,
    Comma,
    LParen,
    RParen,
    LBrace,
    RBrace,

    /// A run the scanner could not classify, with its text.
    Error(Name),
}

impl TokenKind {
    /// Upper-case kind tag used by the token listing.
    pub const fn tag_name(&self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::Ident(_) => "IDENTIFIER",
            TokenKind::Int(_) => "INT",
            TokenKind::Function => "FUNCTION",
            TokenKind::Let => "LET",
            TokenKind::Return => "RETURN",
            TokenKind::Eq => "EQUAL",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Comma => "COMMA",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::Error(_) => "ERROR",
        }
    }

    /// Human-readable description for "expected X, found Y" messages.
    pub const fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Eof => "end of file",
            TokenKind::Ident(_) => "identifier",
            TokenKind::Int(_) => "integer",
            TokenKind::Function => "`function`",
            TokenKind::Let => "`let`",
            TokenKind::Return => "`return`",
            TokenKind::Eq => "`=`",
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Comma => "`,`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::Error(_) => "invalid token",
        }
    }

    /// Keyword lookup for an identifier-shaped run.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        match text {
            "function" => Some(TokenKind::Function),
            "let" => Some(TokenKind::Let),
            "return" => Some(TokenKind::Return),
            _ => None,
        }
    }

    /// Check whether two kinds are the same variant, ignoring payloads.
    #[inline]
    pub fn is_same_kind(&self, other: &TokenKind) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Scanner output: every token in source order, ending with one EOF.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
