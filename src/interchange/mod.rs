//! Reading the analysis front end's output.
//!
//! The front end serializes what it extracted as JSON. This module turns that
//! back into the [`model`](crate::model) types:
//!
//! - [`read_unit`] - one JSON object `{ "declarations": [...], "imports": [...] }`
//! - [`read_declarations_jsonl`] - one declaration per line (JSON Lines)
//!
//! Missing fields take their defaults: no base types, `Class` kind, no members.
//! Imports are plain strings.
//!
//! ## Usage
//!
//! ```ignore
//! use codedocs::interchange::read_unit_from_path;
//! use codedocs::sort::DependencySorter;
//!
//! let unit = read_unit_from_path("unit.json")?;
//! let sorted = DependencySorter::default().sort_unit(unit)?;
//! ```

mod error;

pub use error::InterchangeError;

use std::path::Path;

use tracing::debug;

use crate::model::{CompilationUnit, TypeDeclaration};

/// Parse a compilation unit from JSON.
pub fn read_unit(input: &[u8]) -> Result<CompilationUnit, InterchangeError> {
    let unit: CompilationUnit = serde_json::from_slice(input)
        .map_err(|e| InterchangeError::json(format!("Parse error: {e}")))?;
    debug!(
        "read compilation unit: {} declarations, {} imports",
        unit.declarations.len(),
        unit.imports.len()
    );
    Ok(unit)
}

/// Read and parse a compilation unit from a JSON file.
pub fn read_unit_from_path(path: impl AsRef<Path>) -> Result<CompilationUnit, InterchangeError> {
    let bytes = std::fs::read(path.as_ref())?;
    read_unit(&bytes)
}

/// Parse one declaration per non-blank line.
///
/// Line numbers in errors are 1-based.
pub fn read_declarations_jsonl(input: &str) -> Result<Vec<TypeDeclaration>, InterchangeError> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str(line).map_err(|e| InterchangeError::JsonLine {
                line: index + 1,
                message: e.to_string(),
            })
        })
        .collect()
}
