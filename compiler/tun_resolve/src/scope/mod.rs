//! Lexical scopes for the checker.

use rustc_hash::FxHashMap;
use tun_ir::{Name, Span};

/// Names bound in one scope, with where each was bound.
///
/// Lookups for validation only consult the scope itself. The parent chain
/// exists so an error can say a name *is* defined, just not visibly: a
/// function body cannot see the bindings around it.
#[derive(Debug, Default)]
pub struct Scope<'p> {
    bindings: FxHashMap<Name, Span>,
    parent: Option<&'p Scope<'p>>,
}

impl<'p> Scope<'p> {
    /// The top-level scope.
    pub fn root() -> Self {
        Scope::default()
    }

    /// A function body scope nested in `parent`.
    pub fn with_parent(parent: &'p Scope<'p>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    /// Bind a name. Rebinding keeps the latest location.
    pub fn define(&mut self, name: Name, span: Span) {
        self.bindings.insert(name, span);
    }

    pub fn contains(&self, name: Name) -> bool {
        self.bindings.contains_key(&name)
    }

    /// Where an enclosing scope binds `name`, innermost first.
    pub fn lookup_enclosing(&self, name: Name) -> Option<Span> {
        let mut scope = self.parent;
        while let Some(current) = scope {
            if let Some(&span) = current.bindings.get(&name) {
                return Some(span);
            }
            scope = current.parent;
        }
        None
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
