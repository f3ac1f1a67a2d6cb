//! Naming constants shared by the model and the sorter.

/// Separator between the segments of a qualified name (`Foo.Bar.Baz`).
pub const QUALIFIED_SEPARATOR: char = '.';

/// Type name reported by the front end when a member's type could not be determined.
pub const UNKNOWN_TYPE: &str = "Unknown";

/// Last segment of a qualified name.
///
/// ```
/// use codedocs::base::simple_name;
///
/// assert_eq!(simple_name("Foo.Bar.Baz"), "Baz");
/// assert_eq!(simple_name("Baz"), "Baz");
/// ```
pub fn simple_name(qualified: &str) -> &str {
    qualified
        .rsplit_once(QUALIFIED_SEPARATOR)
        .map_or(qualified, |(_, last)| last)
}

/// Whether `name` lives under the namespace `namespace`, i.e. starts with
/// `namespace` followed by the separator.
///
/// This is a textual prefix test, not symbol resolution: `Foo.Bar` is under
/// `Foo`, while `Foo` and `FooBar.Baz` are not.
pub fn is_qualified_under(name: &str, namespace: &str) -> bool {
    name.strip_prefix(namespace)
        .is_some_and(|rest| rest.starts_with(QUALIFIED_SEPARATOR))
}
