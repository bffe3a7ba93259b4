//! Variable bindings for the interpreter.
//!
//! There is no scope stack. A call runs in a full copy of the caller's
//! environment, so nothing the callee binds is visible to the caller and
//! later rebinding by the caller is invisible to a call already running.

use rustc_hash::FxHashMap;
use tun_ir::Name;

use crate::Value;

/// A flat map from name to value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Environment {
    bindings: FxHashMap<Name, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Environment::default()
    }

    #[inline]
    pub fn lookup(&self, name: Name) -> Option<Value> {
        self.bindings.get(&name).copied()
    }

    /// Bind or rebind `name`.
    #[inline]
    pub fn define(&mut self, name: Name, value: Value) {
        self.bindings.insert(name, value);
    }

    /// Copy of this environment for a call to run in.
    pub fn snapshot(&self) -> Environment {
        self.clone()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bindings in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (Name, Value)> + '_ {
        self.bindings.iter().map(|(&name, &value)| (name, value))
    }
}
