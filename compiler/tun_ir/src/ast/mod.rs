//! Flat AST types using arena allocation.
//!
//! # Module Structure
//!
//! - `expr`: expressions, function bodies and parameters
//! - `operators`: binary operators
//! - `stmt`: statements

mod expr;
mod operators;
mod stmt;

pub use expr::{Block, Expr, ExprKind, Param};
pub use operators::BinaryOp;
pub use stmt::{Stmt, StmtKind};

use crate::{ExprArena, StmtRange};

/// A parsed source file: top-level statements plus the arena that owns
/// every node.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Program {
    pub statements: StmtRange,
    pub arena: ExprArena,
}

impl Program {
    pub fn new(statements: StmtRange, arena: ExprArena) -> Self {
        Program { statements, arena }
    }

    /// Top-level statements in source order.
    pub fn statements(&self) -> impl Iterator<Item = &Stmt> + '_ {
        self.arena
            .get_stmt_list(self.statements)
            .iter()
            .map(|&id| self.arena.get_stmt(id))
    }
}

#[cfg(test)]
mod tests;
