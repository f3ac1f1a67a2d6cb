//! The outcome of planning a sort: graph, traversal and final order.

use super::OrderConvention;
use super::diagnostics::{Diagnostic, DiagnosticCollector};
use crate::base::Name;
use crate::graph::{DependencyGraph, Traversal};

/// Everything computed for one sort call.
///
/// `order` holds positions into the declaration slice the plan was built
/// from; [`SortPlan::apply`] permutes any parallel vector accordingly.
#[derive(Clone, Debug)]
pub struct SortPlan {
    pub(super) graph: DependencyGraph,
    pub(super) traversal: Traversal,
    pub(super) convention: OrderConvention,
    pub(super) order: Vec<usize>,
    pub(super) names: Vec<Name>,
    /// `(declaration, base type)` pairs naming types outside the analyzed set.
    pub(super) unresolved_bases: Vec<(Name, String)>,
}

impl SortPlan {
    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    /// The raw postorder walk, independent of the output convention.
    pub fn traversal(&self) -> &Traversal {
        &self.traversal
    }

    pub fn convention(&self) -> OrderConvention {
        self.convention
    }

    /// Input positions in output order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Declaration identifiers in output order.
    pub fn names(&self) -> &[Name] {
        &self.names
    }

    /// Output position of `identifier`.
    pub fn position_of(&self, identifier: &str) -> Option<usize> {
        self.names.iter().position(|name| &**name == identifier)
    }

    pub fn has_cycles(&self) -> bool {
        self.traversal.has_cycles()
    }

    /// Reorder `items`, which must be parallel to the planned declarations.
    ///
    /// Positions missing from `items` are skipped, as are items no planned
    /// position refers to.
    pub fn apply<T>(&self, items: Vec<T>) -> Vec<T> {
        let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
        self.order
            .iter()
            .filter_map(|&index| slots.get_mut(index).and_then(Option::take))
            .collect()
    }

    /// Cycle warnings (one per edge that closed a cycle) followed by notes
    /// for base types outside the analyzed set.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        let mut collector = DiagnosticCollector::new();
        for (from, to) in &self.traversal.back_edges {
            collector.dependency_cycle(from, to);
        }
        for (declaration, base) in &self.unresolved_bases {
            collector.unresolved_base_type(declaration, base);
        }
        collector.into_diagnostics()
    }
}
