//! Error types for dependency sorting.

use thiserror::Error;

/// Result alias for sorter operations.
pub type SortResult<T> = Result<T, SortError>;

/// Input contract violations detected before any graph is built.
///
/// References that match no declaration are not errors; they simply produce
/// no edge.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// Two declarations share an identifier.
    #[error("duplicate declaration '{name}' at positions {first} and {second}")]
    DuplicateDeclaration {
        name: String,
        first: usize,
        second: usize,
    },

    /// A declaration has an empty identifier.
    #[error("declaration at position {index} has an empty identifier")]
    EmptyIdentifier { index: usize },
}

impl SortError {
    /// Create a duplicate declaration error.
    pub fn duplicate(name: impl Into<String>, first: usize, second: usize) -> Self {
        Self::DuplicateDeclaration {
            name: name.into(),
            first,
            second,
        }
    }
}
