//! The set of declared register names.

use lc_ir::{Name, RegisterRef};
use rustc_hash::FxHashSet;

/// Every register name that has appeared in an operation record.
///
/// Literals are never declared; they are always known.
#[derive(Default, Debug)]
pub struct RegisterRegistry {
    known: FxHashSet<Name>,
}

impl RegisterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `name` as known. Returns `true` the first time a name is declared.
    pub fn declare(&mut self, name: Name) -> bool {
        self.known.insert(name)
    }

    /// Declare the register behind `register`, if it is named.
    pub fn declare_ref(&mut self, register: RegisterRef) {
        if let RegisterRef::Named(name) = register {
            self.declare(name);
        }
    }

    #[inline]
    pub fn is_known(&self, name: Name) -> bool {
        self.known.contains(&name)
    }

    /// Number of declared names.
    pub fn len(&self) -> usize {
        self.known.len()
    }

    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }
}
