//! # codedocs-base
//!
//! Core library for ordering analyzed type declarations by their dependencies.
//!
//! A source analysis front end hands over a pre-parsed symbol table (type
//! declarations, their base types and members, and the unit's import
//! directives). This crate infers dependency edges between the declarations
//! and returns them in a deterministic dependency order.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! sort        → DependencySorter, edge rules, plans, diagnostics
//!   ↓
//! graph       → Adjacency-list graph, iterative postorder traversal
//!   ↓
//! model       → TypeDeclaration, ImportDirective, members, CompilationUnit
//!   ↓
//! base        → Primitives (Name interning, qualified-name helpers)
//! ```
//!
//! ## Example
//!
//! ```
//! use codedocs::model::TypeDeclaration;
//! use codedocs::sort::DependencySorter;
//!
//! let declarations = vec![
//!     TypeDeclaration::new("Derived").with_base("Base"),
//!     TypeDeclaration::new("Base"),
//! ];
//! let sorted = DependencySorter::default().sort(declarations, &[]).unwrap();
//! assert_eq!(sorted[0].identifier, "Base");
//! assert_eq!(sorted[1].identifier, "Derived");
//! ```

// ============================================================================
// MODULES (dependency order: base → model → graph → sort)
// ============================================================================

/// Foundation types: Name interning, qualified-name helpers
pub mod base;

/// Input model: declarations, members, imports
pub mod model;

/// Dependency graph and traversal
pub mod graph;

/// Dependency sorting: edge inference and ordering
pub mod sort;

/// Reading front-end output (JSON, JSON Lines)
#[cfg(feature = "interchange")]
pub mod interchange;

// Re-export the types most callers need
pub use base::{Name, NameInterner};
pub use graph::DependencyGraph;
pub use model::{CompilationUnit, ImportDirective, TypeDeclaration};
pub use sort::{DependencySorter, OrderConvention, SortError, SortOptions, SortPlan, SortResult};
