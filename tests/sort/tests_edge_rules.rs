//! Edge inference tests.
//!
//! Each rule is checked through the public sorter so the filtering the
//! sorter applies (unknown targets, self edges, duplicates) is covered too.

use crate::helpers::declaration_fixtures::*;
use codedocs::Name;
use codedocs::model::TypeDeclaration;
use codedocs::sort::{DependencySorter, EdgeRule, InferenceContext, SortOptions};
use rstest::rstest;

fn edges(
    sorter: &DependencySorter,
    declarations: &[TypeDeclaration],
    imports: &[&str],
) -> Vec<(String, String)> {
    let imports = crate::helpers::declaration_fixtures::imports(imports);
    let plan = sorter.plan(declarations, &imports).unwrap();
    plan.graph()
        .edges()
        .map(|(from, to)| (from.to_string(), to.to_string()))
        .collect()
}

fn edge(from: &str, to: &str) -> (String, String) {
    (from.to_string(), to.to_string())
}

// =============================================================================
// BASE TYPES
// =============================================================================

#[test]
fn test_base_type_outside_set_adds_no_edge() {
    let declarations = vec![class("Handler", &["Exception", "IDisposable"])];
    let sorter = DependencySorter::default();
    let plan = sorter.plan(&declarations, &[]).unwrap();

    assert_eq!(plan.graph().edge_count(), 0);
    assert_eq!(plan.graph().vertex_count(), 1);
    assert!(!plan.graph().contains("Exception"));
}

#[test]
fn test_multiple_bases_keep_listed_order() {
    let declarations = vec![
        class("Impl", &["IWriter", "IReader"]),
        class("IReader", &[]),
        class("IWriter", &[]),
    ];
    assert_eq!(
        edges(&DependencySorter::default(), &declarations, &[]),
        vec![edge("Impl", "IWriter"), edge("Impl", "IReader")]
    );
}

// =============================================================================
// IMPORT-QUALIFIED NAMES
// =============================================================================

#[test]
fn test_import_matches_only_qualified_declarations() {
    let declarations = vec![class("Client", &[]), class("Foo.Bar", &[]), class("Baz", &[])];
    let found = edges(&DependencySorter::default(), &declarations, &["Foo"]);
    assert!(found.contains(&edge("Client", "Foo.Bar")));
    assert!(found.contains(&edge("Baz", "Foo.Bar")));
    assert!(found.iter().all(|(_, to)| to != "Baz"));
}

#[rstest]
#[case("Foo", "Foo.Bar", true)]
#[case("Foo", "Foo.Bar.Baz", true)]
#[case("Foo.Bar", "Foo.Bar.Baz", true)]
#[case("Foo", "FooBar", false)]
#[case("Foo", "FooBar.Baz", false)]
#[case("Foo", "Foo", false)]
#[case("Bar", "Foo.Bar", false)]
fn test_import_prefix_requires_separator(
    #[case] import: &str,
    #[case] target: &str,
    #[case] expected: bool,
) {
    let declarations = vec![class("Client", &[]), class(target, &[])];
    let found = edges(&DependencySorter::default(), &declarations, &[import]);
    assert_eq!(found.contains(&edge("Client", target)), expected);
}

#[test]
fn test_import_equal_to_own_name_is_skipped() {
    let declarations = vec![class("Foo", &[]), class("Foo.Bar", &[])];
    let found = edges(&DependencySorter::default(), &declarations, &["Foo"]);
    assert!(!found.contains(&edge("Foo", "Foo.Bar")));
}

#[test]
fn test_namespace_siblings_depend_on_each_other() {
    let declarations = vec![class("Foo.A", &[]), class("Foo.B", &[])];
    assert_eq!(
        edges(&DependencySorter::default(), &declarations, &["Foo"]),
        vec![edge("Foo.A", "Foo.B"), edge("Foo.B", "Foo.A")]
    );
}

#[test]
fn test_repeated_imports_add_edges_once() {
    let declarations = vec![class("Client", &[]), class("Net.Socket", &[])];
    let found = edges(&DependencySorter::default(), &declarations, &["Net", "Net", "Net"]);
    assert_eq!(found, vec![edge("Client", "Net.Socket")]);
}

// =============================================================================
// INVOCATIONS
// =============================================================================

#[test]
fn test_invocation_targets_become_edges() {
    let declarations = vec![
        caller("Controller", &["Repository", "Mapper"]),
        class("Repository", &[]),
        class("Core.Mapper", &[]),
    ];
    assert_eq!(
        edges(&DependencySorter::default(), &declarations, &[]),
        vec![edge("Controller", "Repository"), edge("Controller", "Core.Mapper")]
    );
}

#[test]
fn test_qualified_invocation_outside_set_does_not_match_by_simple_name() {
    let declarations = vec![
        caller("MyApp.Scheduler", &["System.Threading.Timer"]),
        class("MyApp.Timer", &["MyApp.Scheduler"]),
    ];
    let plan = DependencySorter::default().plan(&declarations, &[]).unwrap();

    assert!(!plan.graph().has_edge("MyApp.Scheduler", "MyApp.Timer"));
    assert!(!plan.has_cycles());
    assert_eq!(
        edges(&DependencySorter::default(), &declarations, &[]),
        vec![edge("MyApp.Timer", "MyApp.Scheduler")]
    );
}

#[test]
fn test_ambiguous_invocation_target_is_skipped() {
    let declarations = vec![
        caller("Controller", &["Mapper"]),
        class("Core.Mapper", &[]),
        class("Legacy.Mapper", &[]),
    ];
    assert!(edges(&DependencySorter::default(), &declarations, &[]).is_empty());
}

// =============================================================================
// OPTION FLAGS
// =============================================================================

#[rstest]
#[case(
    SortOptions::new().with_base_type_edges(false),
    vec![edge("App", "Net.Socket"), edge("App", "Logger")]
)]
#[case(
    SortOptions::new().with_import_edges(false),
    vec![edge("App", "Base"), edge("App", "Logger")]
)]
#[case(
    SortOptions::new().with_invocation_edges(false),
    vec![edge("App", "Base"), edge("App", "Net.Socket")]
)]
fn test_disabling_a_rule_removes_its_edges(
    #[case] options: SortOptions,
    #[case] expected: Vec<(String, String)>,
) {
    let declarations = vec![
        TypeDeclaration::new("App")
            .with_base("Base")
            .with_method(caller("App", &["Logger"]).methods.remove(0)),
        class("Base", &[]),
        class("Net.Socket", &[]),
        class("Logger", &[]),
    ];
    let sorter = DependencySorter::new(options);
    let found: Vec<_> = edges(&sorter, &declarations, &["Net"])
        .into_iter()
        .filter(|(from, _)| from == "App")
        .collect();
    assert_eq!(found, expected);
}

#[test]
fn test_all_rules_disabled_keeps_input_order() {
    let declarations = vec![class("Derived", &["Base"]), class("Base", &[])];
    let options = SortOptions::new()
        .with_base_type_edges(false)
        .with_import_edges(false)
        .with_invocation_edges(false);
    let sorted = DependencySorter::new(options).sort(declarations, &[]).unwrap();
    assert_eq!(identifiers(&sorted), vec!["Derived", "Base"]);
}

// =============================================================================
// CUSTOM RULES
// =============================================================================

/// Depends on the declaration named after each property's type.
#[derive(Debug)]
struct PropertyTypeRule;

impl EdgeRule for PropertyTypeRule {
    fn name(&self) -> &'static str {
        "property-type"
    }

    fn infer(
        &self,
        declaration: &TypeDeclaration,
        ctx: &InferenceContext<'_>,
        out: &mut Vec<Name>,
    ) {
        out.extend(
            declaration
                .properties
                .iter()
                .filter_map(|property| ctx.resolve(&property.type_name)),
        );
    }
}

/// Proposes names outside the analyzed set and the declaration itself.
#[derive(Debug)]
struct NoisyRule;

impl EdgeRule for NoisyRule {
    fn name(&self) -> &'static str {
        "noisy"
    }

    fn infer(
        &self,
        declaration: &TypeDeclaration,
        _ctx: &InferenceContext<'_>,
        out: &mut Vec<Name>,
    ) {
        out.push(Name::from("NotDeclared"));
        out.push(Name::from(declaration.identifier.as_str()));
    }
}

#[test]
fn test_custom_rule_adds_edges() {
    use codedocs::model::PropertyDefinition;

    let declarations = vec![
        TypeDeclaration::new("Order").with_property(PropertyDefinition::new("Customer", "Buyer")),
        class("Customer", &[]),
    ];
    let sorter = DependencySorter::default().with_rule(PropertyTypeRule);
    assert_eq!(
        sorter.rule_names(),
        vec!["base-type", "import-prefix", "invocation", "property-type"]
    );

    let sorted = sorter.sort(declarations, &[]).unwrap();
    assert_eq!(identifiers(&sorted), vec!["Customer", "Order"]);
}

#[test]
fn test_custom_rule_output_is_filtered() {
    let declarations = vec![class("A", &[]), class("B", &[])];
    let sorter = DependencySorter::default().with_rule(NoisyRule);
    let plan = sorter.plan(&declarations, &[]).unwrap();

    assert_eq!(plan.graph().edge_count(), 0);
    assert!(!plan.graph().contains("NotDeclared"));
}
