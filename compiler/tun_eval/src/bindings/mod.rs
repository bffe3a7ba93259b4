//! Final top-level bindings of a run.

use std::fmt::Write as _;

use tun_ir::{ExprArena, Name, StringInterner};

use crate::{Environment, Value};

/// Every top-level name and its final value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bindings {
    env: Environment,
}

impl Bindings {
    pub fn new(env: Environment) -> Self {
        Bindings { env }
    }

    pub fn get(&self, name: Name) -> Option<Value> {
        self.env.lookup(name)
    }

    pub fn len(&self) -> usize {
        self.env.len()
    }

    pub fn is_empty(&self) -> bool {
        self.env.is_empty()
    }

    /// Bindings ordered by name.
    pub fn sorted<'i>(&self, interner: &'i StringInterner) -> Vec<(&'i str, Value)> {
        let mut entries: Vec<_> = self
            .env
            .iter()
            .map(|(name, value)| (interner.lookup(name), value))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// One `name = value` line per binding, ordered by name.
    pub fn render(&self, arena: &ExprArena, interner: &StringInterner) -> String {
        let mut out = String::new();
        for (name, value) in self.sorted(interner) {
            let _ = writeln!(out, "{name} = {}", value.display(arena, interner));
        }
        out
    }
}
