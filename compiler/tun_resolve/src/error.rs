//! Reference errors.

use std::fmt;

use tun_diagnostic::{unknown_identifier, Diagnostic, ErrorCode};
use tun_ir::Span;

/// A reference that does not resolve in its scope.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ResolveError {
    pub kind: ResolveErrorKind,
    /// The unresolved name.
    pub name: String,
    /// Where the name is used.
    pub span: Span,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ResolveErrorKind {
    /// Not bound anywhere before this use.
    Undefined,
    /// Bound outside the function body that uses it. Function bodies only
    /// see their parameters and their own earlier `let`s, even though a
    /// call at run time would find the caller's binding.
    OuterBinding { defined_at: Span },
}

impl ResolveError {
    #[cold]
    pub fn undefined(name: impl Into<String>, span: Span) -> Self {
        ResolveError {
            kind: ResolveErrorKind::Undefined,
            name: name.into(),
            span,
        }
    }

    #[cold]
    pub fn outer_binding(name: impl Into<String>, span: Span, defined_at: Span) -> Self {
        ResolveError {
            kind: ResolveErrorKind::OuterBinding { defined_at },
            name: name.into(),
            span,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            ResolveErrorKind::Undefined => ErrorCode::E2001,
            ResolveErrorKind::OuterBinding { .. } => ErrorCode::E2002,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self.kind {
            ResolveErrorKind::Undefined => unknown_identifier(self.span, &self.name)
                .with_note("names must be bound with `let` before they are used"),
            ResolveErrorKind::OuterBinding { defined_at } => Diagnostic::error(self.code())
                .with_message(self.to_string())
                .with_label(self.span, "used inside a function body")
                .with_secondary_label(defined_at, "defined outside the function here")
                .with_note("a function body only sees its parameters and its own `let`s")
                .with_help(format!("pass `{}` to the function as a parameter", self.name)),
        }
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ResolveErrorKind::Undefined => write!(f, "undefined variable: {}", self.name),
            ResolveErrorKind::OuterBinding { .. } => {
                write!(f, "undefined variable: {} (defined outside this function)", self.name)
            }
        }
    }
}

impl std::error::Error for ResolveError {}
