//! Runtime errors.
//!
//! Factory functions build an [`EvalError`] from its [`EvalErrorKind`]; the
//! evaluator attaches the span of the failing expression.

use std::fmt;

use tun_diagnostic::{Diagnostic, ErrorCode};
use tun_ir::Span;

/// Typed category of a runtime failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    UndefinedVariable {
        name: String,
    },
    UndefinedFunction {
        name: String,
    },
    NotCallable {
        name: String,
        type_name: &'static str,
    },
    TypeMismatch {
        expected: &'static str,
        got: &'static str,
    },
    /// An integer was required but the value came from a call that
    /// finished without `return`.
    MissingReturn,
    IntegerOverflow {
        operation: &'static str,
    },
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },
    ReturnOutsideFunction,
    StackOverflow {
        depth: usize,
    },
}

impl EvalErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UndefinedVariable { .. } => ErrorCode::E6001,
            Self::UndefinedFunction { .. } => ErrorCode::E6002,
            Self::NotCallable { .. } => ErrorCode::E6003,
            Self::TypeMismatch { .. } => ErrorCode::E6004,
            Self::MissingReturn => ErrorCode::E6005,
            Self::IntegerOverflow { .. } => ErrorCode::E6006,
            Self::ArityMismatch { .. } => ErrorCode::E6007,
            Self::ReturnOutsideFunction => ErrorCode::E6008,
            Self::StackOverflow { .. } => ErrorCode::E6009,
        }
    }
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedVariable { name } => write!(f, "undefined variable: {name}"),
            Self::UndefinedFunction { name } => write!(f, "undefined function: {name}"),
            Self::NotCallable { name, type_name } => {
                write!(f, "`{name}` is not callable: it is bound to {type_name}")
            }
            Self::TypeMismatch { expected, got } => {
                write!(f, "type mismatch: expected {expected}, got {got}")
            }
            Self::MissingReturn => write!(f, "expected integer, but the call returned no value"),
            Self::IntegerOverflow { operation } => write!(f, "integer overflow in {operation}"),
            Self::ArityMismatch {
                name,
                expected,
                got,
            } => {
                let arg_word = if *expected == 1 {
                    "argument"
                } else {
                    "arguments"
                };
                write!(f, "{name} expects {expected} {arg_word}, got {got}")
            }
            Self::ReturnOutsideFunction => write!(f, "`return` outside of a function body"),
            Self::StackOverflow { depth } => {
                write!(f, "maximum call depth exceeded (limit: {depth})")
            }
        }
    }
}

/// A runtime failure. Evaluation stops at the first one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// The expression or statement that failed.
    pub span: Option<Span>,
    pub notes: Vec<String>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        EvalError {
            kind,
            span: None,
            notes: Vec::new(),
        }
    }

    /// Attach a span unless one is already set. Errors from inside a call
    /// keep the innermost location.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span.get_or_insert(span);
        self
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code()).with_message(self.kind.to_string());
        if let Some(span) = self.span {
            diag = diag.with_label(span, "failed here");
        }
        for note in &self.notes {
            diag = diag.with_note(note.clone());
        }
        diag
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for EvalError {}

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

#[cold]
pub fn undefined_function(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedFunction {
        name: name.to_string(),
    })
}

#[cold]
pub fn not_callable(name: &str, type_name: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable {
        name: name.to_string(),
        type_name,
    })
}

#[cold]
pub fn type_mismatch(expected: &'static str, got: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch { expected, got })
}

#[cold]
pub fn missing_return() -> EvalError {
    EvalError::from_kind(EvalErrorKind::MissingReturn)
}

#[cold]
pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow { operation })
}

#[cold]
pub fn wrong_function_args(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
    })
}

#[cold]
pub fn return_outside_function() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ReturnOutsideFunction)
}

#[cold]
pub fn recursion_limit_exceeded(depth: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::StackOverflow { depth })
}
