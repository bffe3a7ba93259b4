//! Runtime values.

use std::fmt;

use tun_ir::pretty::Printer;
use tun_ir::{Block, ExprArena, ExprId, ParamRange, StringInterner};

/// A value an expression evaluates to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Value {
    Int(i64),
    Function(FunctionValue),
    /// Result of a call whose body finished without `return`.
    Void,
}

impl Value {
    /// Name of the value's kind for error messages.
    pub const fn type_name(self) -> &'static str {
        match self {
            Value::Int(_) => "integer",
            Value::Function(_) => "function",
            Value::Void => "no value",
        }
    }

    /// Source-like rendering. Functions print as their literal.
    pub fn display<'a>(
        self,
        arena: &'a ExprArena,
        interner: &'a StringInterner,
    ) -> ValueDisplay<'a> {
        ValueDisplay {
            value: self,
            arena,
            interner,
        }
    }
}

/// A function literal as a value.
///
/// Holds no captured environment: a call sees a copy of the caller's
/// bindings at the time of the call.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct FunctionValue {
    /// The literal this value came from.
    pub expr: ExprId,
    pub params: ParamRange,
    pub body: Block,
}

impl FunctionValue {
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

/// [`Value`] paired with what it needs to print itself.
pub struct ValueDisplay<'a> {
    value: Value,
    arena: &'a ExprArena,
    interner: &'a StringInterner,
}

impl fmt::Display for ValueDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Value::Int(n) => write!(f, "{n}"),
            Value::Function(func) => {
                f.write_str(&Printer::new(self.arena, self.interner).expr(func.expr))
            }
            Value::Void => f.write_str("<no value>"),
        }
    }
}
