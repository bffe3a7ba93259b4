//! Function call evaluation.

use tracing::debug;
use tun_ir::{ExprRange, Name, Span};

use super::{ArityPolicy, Interpreter};
use crate::errors::{
    not_callable, recursion_limit_exceeded, undefined_function, wrong_function_args,
};
use crate::{EvalError, FunctionValue, Value};

impl Interpreter<'_> {
    /// Call the function bound to `func`.
    ///
    /// Arguments are evaluated left to right in the caller's environment and
    /// must be integers.
    pub(crate) fn eval_call(
        &mut self,
        func: Name,
        args: ExprRange,
        span: Span,
    ) -> Result<Value, EvalError> {
        let name = self.interner.lookup(func);
        let callee = match self.env.lookup(func) {
            Some(Value::Function(callee)) => callee,
            Some(other) => return Err(not_callable(name, other.type_name()).with_span(span)),
            None => return Err(undefined_function(name).with_span(span)),
        };

        let arg_ids = self.arena.get_expr_list(args);
        let mut values = Vec::with_capacity(arg_ids.len());
        for &arg in arg_ids {
            values.push(self.eval_int(arg)?);
        }

        self.check_arity(name, &callee, values.len())
            .map_err(|err| err.with_span(span))?;
        if self.depth >= self.max_call_depth {
            return Err(recursion_limit_exceeded(self.max_call_depth).with_span(span));
        }

        let mut callee_env = self.env.snapshot();
        for (param, &value) in self.arena.get_params(callee.params).iter().zip(&values) {
            callee_env.define(param.name, Value::Int(value));
        }

        self.depth = self.depth.saturating_add(1);
        debug!(
            callee = name,
            depth = self.depth,
            bindings = callee_env.len(),
            remaining_stack = ?tun_stack::remaining_stack(),
            "call"
        );
        let caller_env = std::mem::replace(&mut self.env, callee_env);
        let result = self.exec_body(callee.body);
        self.env = caller_env;
        self.depth = self.depth.saturating_sub(1);

        result
    }

    fn check_arity(
        &self,
        name: &str,
        callee: &FunctionValue,
        got: usize,
    ) -> Result<(), EvalError> {
        let expected = callee.arity();
        let ok = match self.arity {
            ArityPolicy::Lenient => got <= expected,
            ArityPolicy::Strict => got == expected,
        };
        if ok {
            Ok(())
        } else {
            Err(wrong_function_args(name, expected, got))
        }
    }
}
