//! Statement types.

use std::fmt;

use crate::{ExprId, Name, Span};

/// Statement node.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub const fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

impl fmt::Debug for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Statement kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum StmtKind {
    /// `let name = value`
    Let { name: Name, value: ExprId },

    /// `return value`
    Return(ExprId),
}

impl StmtKind {
    /// Node name used by AST dumps.
    pub const fn node_name(&self) -> &'static str {
        match self {
            StmtKind::Let { .. } => "VariableAssignment",
            StmtKind::Return(_) => "ReturnStatement",
        }
    }

    pub const fn node_type(&self) -> &'static str {
        "Statement"
    }
}
