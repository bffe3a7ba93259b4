//! Source-like rendering of AST nodes.
//!
//! Used to display function values and to echo statements in logs. The
//! output re-parses to the same tree: complex expressions only chain to the
//! right, so no parentheses are ever needed.

use std::fmt::Write;

use crate::ast::{Block, ExprKind, StmtKind};
use crate::{ExprArena, ExprId, ParamRange, StmtId, StringInterner};

/// Renders nodes of one arena.
pub struct Printer<'a> {
    arena: &'a ExprArena,
    interner: &'a StringInterner,
}

impl<'a> Printer<'a> {
    pub fn new(arena: &'a ExprArena, interner: &'a StringInterner) -> Self {
        Printer { arena, interner }
    }

    pub fn expr(&self, id: ExprId) -> String {
        let mut out = String::new();
        self.write_expr(&mut out, id);
        out
    }

    pub fn stmt(&self, id: StmtId) -> String {
        let mut out = String::new();
        self.write_stmt(&mut out, id);
        out
    }

    fn write_stmt(&self, out: &mut String, id: StmtId) {
        match self.arena.get_stmt(id).kind {
            StmtKind::Let { name, value } => {
                let _ = write!(out, "let {} = ", self.interner.lookup(name));
                self.write_expr(out, value);
            }
            StmtKind::Return(value) => {
                out.push_str("return ");
                self.write_expr(out, value);
            }
        }
    }

    fn write_expr(&self, out: &mut String, id: ExprId) {
        match self.arena.get_expr(id).kind {
            ExprKind::Literal(value) => {
                let _ = write!(out, "{value}");
            }
            ExprKind::Ident(name) => out.push_str(self.interner.lookup(name)),
            ExprKind::Binary { left, op, right } => {
                self.write_expr(out, left);
                let _ = write!(out, " {} ", op.as_symbol());
                self.write_expr(out, right);
            }
            ExprKind::Function { params, body } => self.write_function(out, params, &body),
            ExprKind::Call { func, args } => {
                out.push_str(self.interner.lookup(func));
                out.push('(');
                for (i, &arg) in self.arena.get_expr_list(args).iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    self.write_expr(out, arg);
                }
                out.push(')');
            }
        }
    }

    fn write_function(&self, out: &mut String, params: ParamRange, body: &Block) {
        out.push_str("function(");
        for (i, param) in self.arena.get_params(params).iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(self.interner.lookup(param.name));
        }
        out.push_str(") {");
        let stmts = self.arena.get_stmt_list(body.stmts);
        for &stmt in stmts {
            out.push(' ');
            self.write_stmt(out, stmt);
            out.push(';');
        }
        if !stmts.is_empty() {
            out.push(' ');
        }
        out.push('}');
    }
}
