//! Dependency sorting — ordering declarations by the types they depend on.
//!
//! # Architecture
//!
//! 1. **Validation** - identifiers must be non-empty and unique
//! 2. **Graph construction** - one vertex per declaration, edges from each
//!    enabled [`EdgeRule`]
//! 3. **Traversal** - iterative depth-first postorder over the graph
//! 4. **Permutation** - declarations are rearranged to the chosen
//!    [`OrderConvention`]
//!
//! ## Edge rules
//!
//! - [`BaseTypeRule`] - inheritance: `Derived → Base`
//! - [`ImportPrefixRule`] - `Import.Type` declarations for every import
//! - [`InvocationRule`] - call targets found in method bodies
//!
//! Rules only ever produce edges between analyzed declarations. Cycles are
//! tolerated: the walk terminates, but the order among the members of a cycle
//! is an artifact of where the walk entered it. Such cycles are reported
//! through [`SortPlan::diagnostics`].

mod context;
mod diagnostics;
mod error;
mod plan;
mod rules;

pub use context::InferenceContext;
pub use diagnostics::{Diagnostic, DiagnosticCollector, Severity, codes};
pub use error::{SortError, SortResult};
pub use plan::SortPlan;
pub use rules::{BaseTypeRule, EdgeRule, ImportPrefixRule, InvocationRule};

use rustc_hash::FxHashMap;
use tracing::{debug, trace, warn};

use crate::graph::{self, DependencyGraph};
use crate::model::{CompilationUnit, ImportDirective, TypeDeclaration};

// ============================================================================
// OPTIONS
// ============================================================================

/// Which end of the output holds the leaves of the dependency graph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OrderConvention {
    /// Every dependency comes before the declarations that depend on it
    /// (outside of cycles). Base types precede derived types.
    #[default]
    DependenciesFirst,
    /// The exact reverse of [`OrderConvention::DependenciesFirst`]: dependents
    /// come before their dependencies.
    DependentsFirst,
}

/// Configuration for a [`DependencySorter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SortOptions {
    pub include_base_type_edges: bool,
    pub include_import_edges: bool,
    pub include_invocation_edges: bool,
    pub order: OrderConvention,
}

impl Default for SortOptions {
    fn default() -> Self {
        Self {
            include_base_type_edges: true,
            include_import_edges: true,
            include_invocation_edges: true,
            order: OrderConvention::default(),
        }
    }
}

impl SortOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_type_edges(mut self, enabled: bool) -> Self {
        self.include_base_type_edges = enabled;
        self
    }

    pub fn with_import_edges(mut self, enabled: bool) -> Self {
        self.include_import_edges = enabled;
        self
    }

    pub fn with_invocation_edges(mut self, enabled: bool) -> Self {
        self.include_invocation_edges = enabled;
        self
    }

    pub fn with_order(mut self, order: OrderConvention) -> Self {
        self.order = order;
        self
    }
}

// ============================================================================
// SORTER
// ============================================================================

/// Orders type declarations by their dependencies.
///
/// A sorter holds no state between calls; each call builds and discards its
/// own graph.
#[derive(Debug)]
pub struct DependencySorter {
    options: SortOptions,
    rules: Vec<Box<dyn EdgeRule>>,
}

impl Default for DependencySorter {
    fn default() -> Self {
        Self::new(SortOptions::default())
    }
}

impl DependencySorter {
    /// Create a sorter running the built-in rules enabled in `options`.
    pub fn new(options: SortOptions) -> Self {
        let mut rules: Vec<Box<dyn EdgeRule>> = Vec::new();
        if options.include_base_type_edges {
            rules.push(Box::new(BaseTypeRule));
        }
        if options.include_import_edges {
            rules.push(Box::new(ImportPrefixRule));
        }
        if options.include_invocation_edges {
            rules.push(Box::new(InvocationRule));
        }
        Self { options, rules }
    }

    /// Append a rule, run after the built-in ones.
    pub fn with_rule(mut self, rule: impl EdgeRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn options(&self) -> &SortOptions {
        &self.options
    }

    /// Names of the active rules, in the order they run.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Sort `declarations` and return them in the configured order.
    ///
    /// The result is a permutation of the input.
    pub fn sort(
        &self,
        declarations: Vec<TypeDeclaration>,
        imports: &[ImportDirective],
    ) -> SortResult<Vec<TypeDeclaration>> {
        let plan = self.plan(&declarations, imports)?;
        Ok(plan.apply(declarations))
    }

    /// Sort the declarations of a compilation unit against its own imports.
    pub fn sort_unit(&self, unit: CompilationUnit) -> SortResult<Vec<TypeDeclaration>> {
        self.sort(unit.declarations, &unit.imports)
    }

    /// Build the graph and ordering without moving any declaration.
    pub fn plan(
        &self,
        declarations: &[TypeDeclaration],
        imports: &[ImportDirective],
    ) -> SortResult<SortPlan> {
        let positions = index_declarations(declarations)?;
        let ctx = InferenceContext::new(declarations, imports);
        let graph = self.build_graph(declarations, &ctx);

        let traversal = graph::postorder(&graph);
        if traversal.has_cycles() {
            warn!(
                "dependency graph has {} cycle-closing edge(s); order within cycles is arbitrary",
                traversal.back_edges.len()
            );
        }

        let names = match self.options.order {
            OrderConvention::DependenciesFirst => traversal.order.clone(),
            OrderConvention::DependentsFirst => traversal.order.iter().rev().cloned().collect(),
        };
        let order = names
            .iter()
            .filter_map(|name| positions.get(&**name).copied())
            .collect();

        let mut unresolved_bases = Vec::new();
        for declaration in declarations {
            let Some(subject) = ctx.resolve(&declaration.identifier) else {
                continue;
            };
            for base in &declaration.base_types {
                if !ctx.is_declared(base) {
                    unresolved_bases.push((subject.clone(), base.clone()));
                }
            }
        }

        Ok(SortPlan {
            graph,
            traversal,
            convention: self.options.order,
            order,
            names,
            unresolved_bases,
        })
    }

    fn build_graph(
        &self,
        declarations: &[TypeDeclaration],
        ctx: &InferenceContext<'_>,
    ) -> DependencyGraph {
        let mut graph = DependencyGraph::with_capacity(declarations.len());
        for declaration in declarations {
            if let Some(name) = ctx.resolve(&declaration.identifier) {
                graph.add_vertex(name);
            }
        }

        let mut proposed = Vec::new();
        let mut inserted = vec![0usize; self.rules.len()];
        for declaration in declarations {
            let Some(from) = ctx.resolve(&declaration.identifier) else {
                continue;
            };
            for (rule, count) in self.rules.iter().zip(inserted.iter_mut()) {
                proposed.clear();
                rule.infer(declaration, ctx, &mut proposed);
                for target in proposed.drain(..) {
                    // Rules may hand back names they built themselves; only
                    // analyzed declarations become edge targets.
                    let Some(to) = ctx.resolve(&target) else {
                        continue;
                    };
                    if to == from {
                        continue;
                    }
                    if graph.add_edge(&from, to) {
                        trace!("[{}] {} -> {}", rule.name(), from, target);
                        *count += 1;
                    }
                }
            }
        }

        debug!(
            "dependency graph: {} vertices, {} edges ({})",
            graph.vertex_count(),
            graph.edge_count(),
            self.rules
                .iter()
                .zip(&inserted)
                .map(|(rule, count)| format!("{}={}", rule.name(), count))
                .collect::<Vec<_>>()
                .join(", ")
        );
        graph
    }
}

/// Map each identifier to its input position, rejecting empty and repeated ones.
fn index_declarations(declarations: &[TypeDeclaration]) -> SortResult<FxHashMap<&str, usize>> {
    let mut positions = FxHashMap::default();
    positions.reserve(declarations.len());
    for (index, declaration) in declarations.iter().enumerate() {
        let identifier = declaration.identifier.as_str();
        if identifier.is_empty() {
            return Err(SortError::EmptyIdentifier { index });
        }
        if let Some(&first) = positions.get(identifier) {
            return Err(SortError::duplicate(identifier, first, index));
        }
        positions.insert(identifier, index);
    }
    Ok(positions)
}
