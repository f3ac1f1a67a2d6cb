//! Foundation types for the codedocs toolchain.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`Name`], [`NameInterner`] - Shared identifier storage
//! - Qualified-name helpers and separator constants
//!
//! This module has NO dependencies on other codedocs modules.

pub mod constants;
mod intern;

pub use constants::{QUALIFIED_SEPARATOR, is_qualified_under, simple_name};
pub use intern::{Name, NameInterner};
