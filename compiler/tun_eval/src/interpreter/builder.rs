//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use tun_ir::{ExprArena, StringInterner};

use super::{ArityPolicy, Interpreter, DEFAULT_MAX_CALL_DEPTH};
use crate::Environment;

/// Builder for [`Interpreter`].
///
/// Defaults: lenient arity, a call depth limit of
/// [`DEFAULT_MAX_CALL_DEPTH`], and an empty environment.
pub struct InterpreterBuilder<'a> {
    interner: &'a StringInterner,
    arena: &'a ExprArena,
    env: Option<Environment>,
    arity: ArityPolicy,
    max_call_depth: usize,
}

impl<'a> InterpreterBuilder<'a> {
    pub fn new(interner: &'a StringInterner, arena: &'a ExprArena) -> Self {
        Self {
            interner,
            arena,
            env: None,
            arity: ArityPolicy::default(),
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
        }
    }

    /// Set how argument counts are validated.
    #[must_use]
    pub fn arity(mut self, policy: ArityPolicy) -> Self {
        self.arity = policy;
        self
    }

    /// Bound on nested calls. Exceeding it is a runtime error rather than
    /// a stack overflow.
    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }

    /// Set the initial global environment.
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    #[must_use]
    pub fn build(self) -> Interpreter<'a> {
        Interpreter {
            arena: self.arena,
            interner: self.interner,
            env: self.env.unwrap_or_default(),
            arity: self.arity,
            max_call_depth: self.max_call_depth,
            depth: 0,
        }
    }
}
