//! AST Visitor Pattern
//!
//! Generic traversal of the arena-allocated AST. The visitor may mutate its
//! own state; the AST stays immutable.
//!
//! Default implementations call `walk_*` functions that traverse children.
//! Override `visit_*` methods to add behavior at specific nodes.
//!
//! # Example
//!
//! ```text
//! struct CountLiterals {
//!     count: usize,
//! }
//!
//! impl<'ast> Visitor<'ast> for CountLiterals {
//!     fn visit_expr(&mut self, expr: &'ast Expr, arena: &'ast ExprArena) {
//!         if let ExprKind::Literal(_) = expr.kind {
//!             self.count += 1;
//!         }
//!         walk_expr(self, expr, arena);
//!     }
//! }
//! ```

use crate::ast::{Block, Expr, ExprKind, Param, Program, Stmt, StmtKind};
use crate::{ExprArena, ExprId, Name, ParamRange, Span};

/// AST Visitor trait.
pub trait Visitor<'ast> {
    /// Visit a whole program.
    fn visit_program(&mut self, program: &'ast Program) {
        walk_program(self, program);
    }

    fn visit_stmt(&mut self, stmt: &'ast Stmt, arena: &'ast ExprArena) {
        walk_stmt(self, stmt, arena);
    }

    fn visit_expr(&mut self, expr: &'ast Expr, arena: &'ast ExprArena) {
        walk_expr(self, expr, arena);
    }

    /// Visit an expression by ID.
    fn visit_expr_id(&mut self, id: ExprId, arena: &'ast ExprArena) {
        self.visit_expr(arena.get_expr(id), arena);
    }

    /// Visit a function literal's parameters and body.
    fn visit_function(&mut self, params: ParamRange, body: &'ast Block, arena: &'ast ExprArena) {
        walk_function(self, params, body, arena);
    }

    fn visit_block(&mut self, block: &'ast Block, arena: &'ast ExprArena) {
        walk_block(self, block, arena);
    }

    fn visit_param(&mut self, param: &'ast Param) {
        let _ = param;
    }

    /// Visit a use of a name: an identifier expression or a call's callee.
    fn visit_reference(&mut self, name: Name, span: Span) {
        let _ = (name, span);
    }
}

// Walk Functions
//
// All walk functions traverse children depth-first, left to right. A call
// reports its callee before its arguments.

/// Walk every top-level statement in order.
pub fn walk_program<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, program: &'ast Program) {
    for stmt in program.statements() {
        visitor.visit_stmt(stmt, &program.arena);
    }
}

pub fn walk_stmt<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    stmt: &'ast Stmt,
    arena: &'ast ExprArena,
) {
    match stmt.kind {
        StmtKind::Let { value, .. } | StmtKind::Return(value) => {
            visitor.visit_expr_id(value, arena);
        }
    }
}

pub fn walk_expr<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    expr: &'ast Expr,
    arena: &'ast ExprArena,
) {
    match &expr.kind {
        ExprKind::Literal(_) => {}
        ExprKind::Ident(name) => visitor.visit_reference(*name, expr.span),
        ExprKind::Binary { left, right, .. } => {
            visitor.visit_expr_id(*left, arena);
            visitor.visit_expr_id(*right, arena);
        }
        ExprKind::Function { params, body } => visitor.visit_function(*params, body, arena),
        ExprKind::Call { func, args } => {
            visitor.visit_reference(*func, expr.span);
            for &arg in arena.get_expr_list(*args) {
                visitor.visit_expr_id(arg, arena);
            }
        }
    }
}

pub fn walk_function<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    params: ParamRange,
    body: &'ast Block,
    arena: &'ast ExprArena,
) {
    for param in arena.get_params(params) {
        visitor.visit_param(param);
    }
    visitor.visit_block(body, arena);
}

pub fn walk_block<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    block: &'ast Block,
    arena: &'ast ExprArena,
) {
    for &id in arena.get_stmt_list(block.stmts) {
        visitor.visit_stmt(arena.get_stmt(id), arena);
    }
}
