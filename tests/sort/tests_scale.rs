//! Scale tests: long chains and dense import matching.

use crate::helpers::declaration_fixtures::*;
use crate::helpers::order_assertions::*;
use codedocs::model::TypeDeclaration;
use codedocs::sort::{DependencySorter, OrderConvention, SortOptions};

/// `T0 : T1 : ... : T(n-1)`, listed root-most last.
fn inheritance_chain(length: usize) -> Vec<TypeDeclaration> {
    (0..length)
        .map(|i| {
            let decl = TypeDeclaration::new(format!("T{i}"));
            if i + 1 < length {
                decl.with_base(format!("T{}", i + 1))
            } else {
                decl
            }
        })
        .collect()
}

#[test]
fn test_long_inheritance_chain_does_not_overflow() {
    const LENGTH: usize = 100_000;
    let sorted = DependencySorter::default()
        .sort(inheritance_chain(LENGTH), &[])
        .unwrap();

    assert_eq!(sorted.len(), LENGTH);
    assert_eq!(sorted[0].identifier, format!("T{}", LENGTH - 1));
    assert_eq!(sorted[LENGTH - 1].identifier, "T0");
}

#[test]
fn test_long_chain_dependents_first() {
    const LENGTH: usize = 50_000;
    let sorter =
        DependencySorter::new(SortOptions::new().with_order(OrderConvention::DependentsFirst));
    let sorted = sorter.sort(inheritance_chain(LENGTH), &[]).unwrap();

    assert_eq!(sorted[0].identifier, "T0");
    assert_eq!(sorted[LENGTH - 1].identifier, format!("T{}", LENGTH - 1));
}

#[test]
fn test_many_imports_against_many_declarations() {
    const NAMESPACES: usize = 60;
    const PER_NAMESPACE: usize = 5;

    let mut declarations: Vec<TypeDeclaration> = (0..NAMESPACES)
        .flat_map(|ns| (0..PER_NAMESPACE).map(move |t| class(&format!("Ns{ns}.Type{t}"), &[])))
        .collect();
    declarations.push(class("Consumer", &[]));
    let import_names: Vec<String> = (0..NAMESPACES).map(|ns| format!("Ns{ns}")).collect();
    let import_refs: Vec<&str> = import_names.iter().map(String::as_str).collect();
    let imports = imports(&import_refs);

    let plan = DependencySorter::default().plan(&declarations, &imports).unwrap();

    assert_eq!(
        plan.graph().neighbors("Consumer").count(),
        NAMESPACES * PER_NAMESPACE
    );
    // The consumer depends on everything, so it comes last.
    assert_eq!(plan.names().last().map(|n| &**n), Some("Consumer"));
    assert_permutation(&declarations, &plan.apply(declarations.clone()));
}
