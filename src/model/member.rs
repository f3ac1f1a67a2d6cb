//! Members of a type declaration: methods, properties and call sites.

use crate::base::constants::UNKNOWN_TYPE;

/// Modifier flags of a property or parameter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "interchange", serde(default))]
pub struct Modifiers {
    pub is_public: bool,
    pub is_static: bool,
    pub is_abstract: bool,
    pub is_field: bool,
    pub is_virtual: bool,
    pub is_override: bool,
    pub is_return_type: bool,
}

/// A property of a type, or a parameter of a method.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertyDefinition {
    /// Declared type as written in source, or `"Unknown"`.
    pub type_name: String,
    pub name: String,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub modifiers: Modifiers,
}

impl PropertyDefinition {
    pub fn new(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            name: name.into(),
            modifiers: Modifiers::default(),
        }
    }

    /// A property whose type the front end could not determine.
    pub fn untyped(name: impl Into<String>) -> Self {
        Self::new(UNKNOWN_TYPE, name)
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Whether the type name is the front end's placeholder.
    pub fn has_unknown_type(&self) -> bool {
        self.type_name == UNKNOWN_TYPE
    }
}

/// A call site inside a method body.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct Invocation {
    /// Name of the invoked method.
    pub method_name: String,
    /// Type containing the invoked method, when the front end resolved it.
    #[cfg_attr(feature = "interchange", serde(default))]
    pub target_type: Option<String>,
}

impl Invocation {
    /// An invocation whose target type is unknown.
    pub fn new(method_name: impl Into<String>) -> Self {
        Self {
            method_name: method_name.into(),
            target_type: None,
        }
    }

    /// An invocation resolved to a method on `target_type`.
    pub fn resolved(method_name: impl Into<String>, target_type: impl Into<String>) -> Self {
        Self {
            method_name: method_name.into(),
            target_type: Some(target_type.into()),
        }
    }
}

/// A method of a type declaration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "interchange", serde(default))]
pub struct MethodDefinition {
    pub name: String,
    pub parameters: Vec<PropertyDefinition>,
    /// Call sites found in the method body, in source order.
    pub invocations: Vec<Invocation>,
}

impl MethodDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            invocations: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, parameter: PropertyDefinition) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn with_invocation(mut self, invocation: Invocation) -> Self {
        self.invocations.push(invocation);
        self
    }
}
