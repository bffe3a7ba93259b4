//! Expression types.

use std::fmt;

use super::BinaryOp;
use crate::{ExprRange, Name, ParamRange, Span, StmtRange};

/// Expression node.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub const fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Expression variants.
///
/// Children are arena indices; lists are ranges into the arena's side
/// tables.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// Integer literal: `42`
    Literal(i64),

    /// Variable reference: `x`
    Ident(Name),

    /// `left op right`, where `left` is always a literal or identifier.
    Binary {
        left: crate::ExprId,
        op: BinaryOp,
        right: crate::ExprId,
    },

    /// `function(a, b) { ... }`
    Function { params: ParamRange, body: Block },

    /// `name(arg, ...)`; the callee is always a plain name.
    Call { func: Name, args: ExprRange },
}

impl ExprKind {
    /// Node name used by AST dumps.
    pub const fn node_name(&self) -> &'static str {
        match self {
            ExprKind::Literal(_) => "LiteralExpression",
            ExprKind::Ident(_) => "IdentifierExpression",
            ExprKind::Binary { .. } => "ComplexExpression",
            ExprKind::Function { .. } => "FunctionLiteral",
            ExprKind::Call { .. } => "FunctionCall",
        }
    }

    pub const fn node_type(&self) -> &'static str {
        "Expression"
    }
}

/// Function body: an ordered statement list.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Block {
    pub stmts: StmtRange,
    pub span: Span,
}

impl Block {
    pub const fn node_name(&self) -> &'static str {
        "BlockStatement"
    }

    pub const fn node_type(&self) -> &'static str {
        "Statement"
    }
}

/// Function parameter.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Param {
    pub name: Name,
    pub span: Span,
}
