//! Declaration builders and canned symbol tables.

use codedocs::model::{ImportDirective, Invocation, MethodDefinition, TypeDeclaration};

/// A class with the given base types.
pub fn class(identifier: &str, bases: &[&str]) -> TypeDeclaration {
    bases
        .iter()
        .fold(TypeDeclaration::new(identifier), |decl, base| decl.with_base(*base))
}

/// A class whose single method calls into each of `targets`.
pub fn caller(identifier: &str, targets: &[&str]) -> TypeDeclaration {
    let method = targets.iter().fold(MethodDefinition::new("Run"), |method, target| {
        method.with_invocation(Invocation::resolved("Call", *target))
    });
    TypeDeclaration::new(identifier).with_method(method)
}

pub fn imports(names: &[&str]) -> Vec<ImportDirective> {
    names.iter().map(|name| ImportDirective::new(*name)).collect()
}

/// Identifiers in order.
pub fn identifiers(declarations: &[TypeDeclaration]) -> Vec<&str> {
    declarations.iter().map(|d| d.identifier.as_str()).collect()
}

/// An HTTP client library shaped like a small real project: a request
/// hierarchy, one helper under an imported namespace (which every declaration
/// then depends on), and a type under a namespace nobody imports.
pub fn http_library() -> (Vec<TypeDeclaration>, Vec<ImportDirective>) {
    let declarations = vec![
        class("Client", &["IDisposable"]),
        class("PostRequest", &["Request"]),
        class("Request", &["RequestBase"]),
        class("RequestBase", &[]),
        class("Helpers.UrlEncoder", &[]),
        class("Util.Headers", &[]),
        class("Version", &[]),
    ];
    (declarations, imports(&["Helpers", "System"]))
}
