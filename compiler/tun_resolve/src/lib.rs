//! Static reference checking for tun programs.
//!
//! Every name a statement uses must be bound before that statement runs:
//!
//! - at top level, by an earlier top-level `let`;
//! - inside a function body, by a parameter or an earlier `let` of that
//!   same body.
//!
//! Function bodies are checked where the literal appears, with a fresh scope,
//! so a body never sees the bindings around it. A statement's own `let` name
//! is bound only after its value is checked, so `let a = a` is an error.
//! Rebinding a name is allowed.

mod error;
mod scope;

pub use error::{ResolveError, ResolveErrorKind};
pub use scope::Scope;

use tun_ir::visitor::{walk_expr, Visitor};
use tun_ir::{
    Block, Expr, ExprArena, Name, ParamRange, Program, Span, Stmt, StmtKind, StringInterner,
};
use tun_stack::ensure_sufficient_stack;

/// Check that every reference in `program` resolves.
///
/// Stops at the first unresolved name, in source order. Errors inside a
/// nested function literal are reported before the uses of the statement
/// that contains it.
pub fn check(program: &Program, interner: &StringInterner) -> Result<(), ResolveError> {
    let resolver = Resolver {
        arena: &program.arena,
        interner,
    };
    let mut globals = Scope::root();
    for stmt in program.statements() {
        resolver.check_stmt(stmt, &mut globals)?;
    }
    tracing::debug!(globals = globals.len(), "references resolved");
    Ok(())
}

struct Resolver<'a> {
    arena: &'a ExprArena,
    interner: &'a StringInterner,
}

impl<'a> Resolver<'a> {
    fn check_stmt(&self, stmt: &'a Stmt, scope: &mut Scope<'_>) -> Result<(), ResolveError> {
        let refs = {
            let mut collector = RefCollector {
                resolver: self,
                scope: &*scope,
                refs: Vec::new(),
                error: None,
            };
            collector.visit_stmt(stmt, self.arena);
            if let Some(err) = collector.error {
                return Err(err);
            }
            collector.refs
        };

        for (name, span) in refs {
            if !scope.contains(name) {
                return Err(self.unresolved(name, span, scope));
            }
        }

        if let StmtKind::Let { name, .. } = stmt.kind {
            tracing::trace!(name = self.interner.lookup(name), "bound");
            scope.define(name, stmt.span);
        }
        Ok(())
    }

    fn check_function(
        &self,
        params: ParamRange,
        body: &'a Block,
        enclosing: &Scope<'_>,
    ) -> Result<(), ResolveError> {
        let mut scope = Scope::with_parent(enclosing);
        for param in self.arena.get_params(params) {
            scope.define(param.name, param.span);
        }
        for &id in self.arena.get_stmt_list(body.stmts) {
            self.check_stmt(self.arena.get_stmt(id), &mut scope)?;
        }
        Ok(())
    }

    #[cold]
    fn unresolved(&self, name: Name, span: Span, scope: &Scope<'_>) -> ResolveError {
        let text = self.interner.lookup(name);
        if let Some(defined_at) = scope.lookup_enclosing(name) {
            ResolveError::outer_binding(text, span, defined_at)
        } else {
            ResolveError::undefined(text, span)
        }
    }
}

/// Gathers the names one statement uses, outside nested function literals.
/// Nested literals are checked on the spot against their own scope.
struct RefCollector<'r, 'a, 's> {
    resolver: &'r Resolver<'a>,
    scope: &'r Scope<'s>,
    refs: Vec<(Name, Span)>,
    error: Option<ResolveError>,
}

impl<'a> Visitor<'a> for RefCollector<'_, 'a, '_> {
    fn visit_expr(&mut self, expr: &'a Expr, arena: &'a ExprArena) {
        if self.error.is_none() {
            ensure_sufficient_stack(|| walk_expr(self, expr, arena));
        }
    }

    fn visit_function(&mut self, params: ParamRange, body: &'a Block, _arena: &'a ExprArena) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.resolver.check_function(params, body, self.scope) {
            self.error = Some(err);
        }
    }

    fn visit_reference(&mut self, name: Name, span: Span) {
        self.refs.push((name, span));
    }
}
