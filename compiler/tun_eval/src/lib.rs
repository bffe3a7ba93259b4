#![deny(clippy::arithmetic_side_effects)]
//! Tun Eval - tree-walking interpreter for tun programs.
//!
//! # Architecture
//!
//! - `Environment`: one flat name-to-value map; a call runs in a copy of
//!   the caller's map with its parameters overlaid
//! - `Interpreter`: statement execution and expression evaluation, built by
//!   `InterpreterBuilder`
//! - `evaluate_binary`: checked integer `+` and `-`
//! - `Bindings`: the final top-level environment
//!
//! Every failure is a returned [`EvalError`]. Integer arithmetic is checked,
//! and nested calls are bounded by the builder's call depth limit.

mod bindings;
mod environment;
pub mod errors;
pub mod interpreter;
mod operators;
mod value;

pub use bindings::Bindings;
pub use environment::Environment;
pub use errors::{EvalError, EvalErrorKind};
pub use interpreter::{ArityPolicy, Interpreter, InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};
pub use operators::evaluate_binary;
pub use value::{FunctionValue, Value, ValueDisplay};

use tun_ir::{Program, StringInterner};

/// Run `program` with default settings.
pub fn execute(program: &Program, interner: &StringInterner) -> Result<Bindings, EvalError> {
    Interpreter::new(interner, &program.arena).run(program)
}

#[cfg(test)]
mod tests;
