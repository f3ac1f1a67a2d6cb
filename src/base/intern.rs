//! Identifier interner for graph vertices.
//!
//! Uses `Arc<str>` for cheap cloning (reference count increment instead of allocation).
//! The interner deduplicates strings so identical identifiers share the same allocation.

use rustc_hash::FxHashSet;
use std::sync::Arc;

/// An interned identifier - cheap to clone (just an `Arc` increment)
pub type Name = Arc<str>;

/// Interner that deduplicates identifiers.
///
/// Interning a string returns a [`Name`] that can be cheaply cloned.
/// If the same string is interned multiple times, the same `Arc` is returned.
#[derive(Debug, Default, Clone)]
pub struct NameInterner {
    names: FxHashSet<Name>,
}

impl NameInterner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an interner sized for roughly `capacity` distinct names.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut names = FxHashSet::default();
        names.reserve(capacity);
        Self { names }
    }

    /// Intern a string, returning a cheap-to-clone reference.
    ///
    /// If the string was already interned, returns the existing `Arc`.
    /// Otherwise, creates a new `Arc` and stores it.
    pub fn intern(&mut self, s: &str) -> Name {
        if let Some(existing) = self.names.get(s) {
            Arc::clone(existing)
        } else {
            let name: Name = Arc::from(s);
            self.names.insert(Arc::clone(&name));
            name
        }
    }

    /// Get an interned name if it exists, without creating it.
    pub fn get(&self, s: &str) -> Option<Name> {
        self.names.get(s).cloned()
    }

    /// Number of unique names interned.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if no names have been interned.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
