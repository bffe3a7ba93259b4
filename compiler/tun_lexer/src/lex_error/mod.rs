//! Scanner error types.

use tun_diagnostic::{Diagnostic, ErrorCode};
use tun_ir::Span;

/// A run of source text the scanner could not classify.
///
/// Scanning never stops at one of these: the run becomes an `ERROR` token
/// and the error is recorded alongside the token list.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind} `{text}`")]
pub struct LexError {
    pub span: Span,
    pub kind: LexErrorKind,
    /// The offending source text.
    pub text: String,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// A byte that cannot start any token, such as `*` or `;`.
    #[error("invalid character")]
    InvalidCharacter,
    /// A digit-led run that is not a base-10 `i64`, such as `12ab` or a
    /// literal past `i64::MAX`.
    #[error("invalid integer literal")]
    InvalidInteger,
}

impl LexError {
    #[cold]
    pub fn new(kind: LexErrorKind, span: Span, text: impl Into<String>) -> Self {
        LexError {
            span,
            kind,
            text: text.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::InvalidCharacter => ErrorCode::E0001,
            LexErrorKind::InvalidInteger => ErrorCode::E0002,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self.kind {
            LexErrorKind::InvalidCharacter => diag
                .with_label(self.span, "not valid in tun source")
                .with_note("tokens are `+ - = ( ) { } ,`, keywords, identifiers and integers"),
            LexErrorKind::InvalidInteger => diag
                .with_label(self.span, "not a 64-bit integer")
                .with_note("identifiers cannot start with a digit"),
        }
    }
}
