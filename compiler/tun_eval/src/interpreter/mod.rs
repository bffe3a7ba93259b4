//! Tree-walking interpreter.
//!
//! Top-level statements run in order against one global environment. A call
//! swaps in a snapshot of the caller's environment with the parameters
//! overlaid, runs the body, and swaps the caller's environment back.

mod builder;
mod function_call;

pub use builder::InterpreterBuilder;

use tracing::{debug, trace};
use tun_ir::pretty::Printer;
use tun_ir::{
    Block, ExprArena, ExprId, ExprKind, Name, Program, Stmt, StmtKind, StmtRange, StringInterner,
};
use tun_stack::ensure_sufficient_stack;

use crate::errors::{missing_return, return_outside_function, type_mismatch, undefined_variable};
use crate::operators::evaluate_binary;
use crate::{Bindings, Environment, EvalError, FunctionValue, Value};

/// How strictly a call's argument count must match the parameter list.
///
/// More arguments than parameters is always an error.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum ArityPolicy {
    /// Missing arguments leave trailing parameters unbound; a body that
    /// reads one fails at that use.
    #[default]
    Lenient,
    /// The argument count must equal the parameter count.
    Strict,
}

/// Default bound on nested calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 1024;

/// Interpreter state for one program run.
pub struct Interpreter<'a> {
    pub(crate) arena: &'a ExprArena,
    pub(crate) interner: &'a StringInterner,
    pub(crate) env: Environment,
    pub(crate) arity: ArityPolicy,
    pub(crate) max_call_depth: usize,
    /// Calls currently running.
    pub(crate) depth: usize,
}

impl<'a> Interpreter<'a> {
    /// Interpreter with default settings.
    pub fn new(interner: &'a StringInterner, arena: &'a ExprArena) -> Self {
        InterpreterBuilder::new(interner, arena).build()
    }

    /// Run a program and return its final top-level bindings.
    pub fn run(self, program: &Program) -> Result<Bindings, EvalError> {
        self.run_statements(program.statements)
    }

    /// Run a top-level statement list from this interpreter's arena.
    pub fn run_statements(mut self, statements: StmtRange) -> Result<Bindings, EvalError> {
        for &id in self.arena.get_stmt_list(statements) {
            trace!(stmt = %Printer::new(self.arena, self.interner).stmt(id), "exec");
            self.exec_top_level(self.arena.get_stmt(id))?;
        }
        debug!(bindings = self.env.len(), "program executed");
        Ok(Bindings::new(self.env))
    }

    fn exec_top_level(&mut self, stmt: &'a Stmt) -> Result<(), EvalError> {
        match stmt.kind {
            StmtKind::Let { name, value } => self.exec_let(name, value),
            StmtKind::Return(_) => Err(return_outside_function().with_span(stmt.span)),
        }
    }

    /// Run a function body. `return` ends it; running off the end yields
    /// [`Value::Void`].
    pub(crate) fn exec_body(&mut self, body: Block) -> Result<Value, EvalError> {
        for &id in self.arena.get_stmt_list(body.stmts) {
            match self.arena.get_stmt(id).kind {
                StmtKind::Let { name, value } => self.exec_let(name, value)?,
                StmtKind::Return(value) => return self.eval_expr(value),
            }
        }
        Ok(Value::Void)
    }

    fn exec_let(&mut self, name: Name, value: ExprId) -> Result<(), EvalError> {
        let value = self.eval_expr(value)?;
        trace!(name = self.interner.lookup(name), kind = value.type_name(), "bind");
        self.env.define(name, value);
        Ok(())
    }

    pub(crate) fn eval_expr(&mut self, id: ExprId) -> Result<Value, EvalError> {
        ensure_sufficient_stack(|| self.eval_expr_inner(id))
    }

    fn eval_expr_inner(&mut self, id: ExprId) -> Result<Value, EvalError> {
        let expr = self.arena.get_expr(id);
        match expr.kind {
            ExprKind::Literal(n) => Ok(Value::Int(n)),
            ExprKind::Ident(name) => self.env.lookup(name).ok_or_else(|| {
                undefined_variable(self.interner.lookup(name)).with_span(expr.span)
            }),
            ExprKind::Binary { left, op, right } => {
                let left = self.eval_int(left)?;
                let right = self.eval_int(right)?;
                evaluate_binary(left, op, right)
                    .map(Value::Int)
                    .map_err(|err| err.with_span(expr.span))
            }
            ExprKind::Function { params, body } => Ok(Value::Function(FunctionValue {
                expr: id,
                params,
                body,
            })),
            ExprKind::Call { func, args } => self.eval_call(func, args, expr.span),
        }
    }

    /// Evaluate an expression that must produce an integer.
    pub(crate) fn eval_int(&mut self, id: ExprId) -> Result<i64, EvalError> {
        let span = self.arena.get_expr(id).span;
        match self.eval_expr(id)? {
            Value::Int(n) => Ok(n),
            other @ Value::Function(_) => {
                Err(type_mismatch("integer", other.type_name()).with_span(span))
            }
            Value::Void => Err(missing_return().with_span(span)),
        }
    }
}
