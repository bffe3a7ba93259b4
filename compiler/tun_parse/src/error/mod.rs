//! Parse error types.

use std::fmt;

use tun_diagnostic::{Diagnostic, ErrorCode};
use tun_ir::{Span, TokenKind};

/// Parse error with error code for rich diagnostics.
///
/// Parsing stops at the first error; no partial program is produced.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParseError {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Human-readable message.
    pub message: String,
    /// Location of the offending token.
    pub span: Span,
    /// What the parser wanted at `span`.
    pub context: Option<String>,
    /// A related location, such as the `{` an unclosed body opened with.
    pub related: Option<(Span, String)>,
    pub help: Vec<String>,
}

impl ParseError {
    #[cold]
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        ParseError {
            code,
            message: message.into(),
            span,
            context: None,
            related: None,
            help: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    #[must_use]
    pub fn with_related(mut self, span: Span, label: impl Into<String>) -> Self {
        self.related = Some((span, label.into()));
        self
    }

    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help.push(help.into());
        self
    }

    /// A body reached end of file before its closing `}`.
    #[cold]
    pub fn unclosed_body(eof: Span, open: Span) -> Self {
        ParseError::new(
            ErrorCode::E1003,
            "expected `}`, found end of file",
            eof,
        )
        .with_context("expected `}`")
        .with_related(open, "function body opened here")
    }

    /// A malformed token from the scanner reached the parser.
    #[cold]
    pub fn invalid_token(span: Span, text: &str) -> Self {
        ParseError::new(ErrorCode::E1005, format!("invalid token `{text}`"), span)
            .with_context("not a tun token")
    }

    /// The left side of `+`/`-` was neither an identifier nor an integer.
    #[cold]
    pub fn invalid_operand(span: Span, found: &TokenKind, op: &TokenKind) -> Self {
        ParseError::new(
            ErrorCode::E1002,
            format!(
                "expected identifier or integer before {}, found {}",
                op.display_name(),
                found.display_name()
            ),
            span,
        )
        .with_context("expected identifier or integer")
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = self.context.clone().unwrap_or_default();
        let mut diag = Diagnostic::error(self.code)
            .with_message(self.message.clone())
            .with_label(self.span, label);
        if let Some((span, label)) = &self.related {
            diag = diag.with_secondary_label(*span, label.clone());
        }
        for help in &self.help {
            diag = diag.with_help(help.clone());
        }
        diag
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} at {}", self.code, self.message, self.span)
    }
}

impl std::error::Error for ParseError {}
