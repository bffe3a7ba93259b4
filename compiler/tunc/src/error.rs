//! Driver errors: one variant per pipeline stage.

use std::io;

use tun_diagnostic::{Diagnostic, ErrorCode};
use tun_eval::EvalError;
use tun_lexer::LexError;
use tun_parse::ParseError;
use tun_resolve::ResolveError;

/// Pipeline stage an error came from.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Stage {
    Open,
    Read,
    Scan,
    Parse,
    Check,
    Execute,
    Output,
}

impl Stage {
    /// Process exit status for a failure in this stage.
    pub const fn exit_code(self) -> i32 {
        match self {
            Stage::Open => 1,
            Stage::Read => 2,
            Stage::Scan => 3,
            Stage::Parse => 4,
            Stage::Check => 5,
            Stage::Execute => 6,
            Stage::Output => 70,
        }
    }
}

/// Any failure from reading a file through running it.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to read source code: {0}")]
    Read(#[source] io::Error),

    /// The first malformed run; `count` is how many the scanner found.
    #[error("failed to scan source: {first} ({count} error(s))")]
    Scan { first: LexError, count: usize },

    #[error("failed to parse program: {0}")]
    Parse(#[from] ParseError),

    #[error("reference check error: {0}")]
    Check(#[from] ResolveError),

    #[error("execute error: {0}")]
    Execute(#[from] EvalError),

    #[error("failed to serialize AST: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CompileError {
    pub fn stage(&self) -> Stage {
        match self {
            CompileError::Open { .. } => Stage::Open,
            CompileError::Read(_) => Stage::Read,
            CompileError::Scan { .. } => Stage::Scan,
            CompileError::Parse(_) => Stage::Parse,
            CompileError::Check(_) => Stage::Check,
            CompileError::Execute(_) => Stage::Execute,
            CompileError::Serialize(_) => Stage::Output,
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.stage().exit_code()
    }

    /// A scan failure for the first of `errors`, if there are any.
    pub fn from_lex_errors(errors: &[LexError]) -> Option<Self> {
        errors.first().map(|first| CompileError::Scan {
            first: first.clone(),
            count: errors.len(),
        })
    }

    /// Structured diagnostic for errors that point into the source.
    pub fn to_diagnostic(&self) -> Option<Diagnostic> {
        match self {
            CompileError::Scan { first, .. } => Some(first.to_diagnostic()),
            CompileError::Parse(err) => Some(err.to_diagnostic()),
            CompileError::Check(err) => Some(err.to_diagnostic()),
            CompileError::Execute(err) => Some(err.to_diagnostic()),
            CompileError::Serialize(err) => Some(
                Diagnostic::error(ErrorCode::E9001)
                    .with_message(format!("failed to serialize AST: {err}")),
            ),
            CompileError::Open { .. } | CompileError::Read(_) => None,
        }
    }
}
