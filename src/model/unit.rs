//! A compilation unit: the declarations and imports sorted together.

use super::declaration::{ImportDirective, TypeDeclaration};

/// Declarations plus the import directives in effect for them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "interchange", serde(default))]
pub struct CompilationUnit {
    pub declarations: Vec<TypeDeclaration>,
    pub imports: Vec<ImportDirective>,
}

impl CompilationUnit {
    pub fn new(declarations: Vec<TypeDeclaration>, imports: Vec<ImportDirective>) -> Self {
        Self {
            declarations,
            imports,
        }
    }

    /// Look up a declaration by identifier (first match).
    pub fn declaration(&self, identifier: &str) -> Option<&TypeDeclaration> {
        self.declarations
            .iter()
            .find(|d| d.identifier == identifier)
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}
