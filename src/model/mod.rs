//! Input model — the pre-parsed symbol table handed over by the analysis front end.
//!
//! Nothing in here is computed by this crate: the front end walks the syntax
//! trees and fills these types in. The sorter only reads them.
//!
//! ## Key Types
//!
//! - [`TypeDeclaration`] — A named type (class, interface, struct, enum)
//! - [`ImportDirective`] — A `using`/import of a namespace
//! - [`MethodDefinition`], [`PropertyDefinition`] — Members of a declaration
//! - [`Invocation`] — A call site inside a method body
//! - [`CompilationUnit`] — Declarations plus imports, sorted as one set

mod declaration;
mod member;
mod unit;

pub use declaration::{DeclarationKind, ImportDirective, TypeDeclaration};
pub use member::{Invocation, MethodDefinition, Modifiers, PropertyDefinition};
pub use unit::CompilationUnit;
