//! Type declarations and import directives.

use super::member::{Invocation, MethodDefinition, PropertyDefinition};

/// The kind of a type declaration, as reported by the front end.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub enum DeclarationKind {
    #[default]
    Class,
    Interface,
    Struct,
    Enum,
}

/// A named type unit discovered by the front end.
///
/// `identifier` must be unique within one sort call; duplicates are rejected
/// by the sorter rather than silently collapsed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "interchange", serde(default))]
pub struct TypeDeclaration {
    /// Identifier of the type, possibly qualified (`Foo.Bar`).
    pub identifier: String,
    /// Declaration kind.
    pub kind: DeclarationKind,
    /// Names listed in the declaration's base list, in source order.
    pub base_types: Vec<String>,
    /// Methods, including those of nested types.
    pub methods: Vec<MethodDefinition>,
    /// Properties, including those of nested types.
    pub properties: Vec<PropertyDefinition>,
}

impl Default for TypeDeclaration {
    fn default() -> Self {
        Self::new("")
    }
}

impl TypeDeclaration {
    /// Create a class declaration with no base types and no members.
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            kind: DeclarationKind::Class,
            base_types: Vec::new(),
            methods: Vec::new(),
            properties: Vec::new(),
        }
    }

    /// Set the declaration kind.
    pub fn with_kind(mut self, kind: DeclarationKind) -> Self {
        self.kind = kind;
        self
    }

    /// Append a base type name.
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base_types.push(base.into());
        self
    }

    /// Append a method.
    pub fn with_method(mut self, method: MethodDefinition) -> Self {
        self.methods.push(method);
        self
    }

    /// Append a property.
    pub fn with_property(mut self, property: PropertyDefinition) -> Self {
        self.properties.push(property);
        self
    }

    /// All invocation sites across this declaration's methods, in method order.
    pub fn invocations(&self) -> impl Iterator<Item = &Invocation> {
        self.methods.iter().flat_map(|m| m.invocations.iter())
    }
}

/// A `using`/import directive of the compilation unit.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "interchange", serde(transparent))]
pub struct ImportDirective {
    /// The imported namespace (`System.Net`).
    pub identifier: String,
}

impl ImportDirective {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }
}

impl From<&str> for ImportDirective {
    fn from(identifier: &str) -> Self {
        Self::new(identifier)
    }
}
