//! Dependency graph over declaration identifiers.
//!
//! Vertices are [`Name`]s, not declarations: the graph never owns the
//! declarations themselves, so callers keep a parallel name → declaration
//! lookup to rebuild ordered declarations afterwards.
//!
//! An edge `(from, to)` asserts "`from` depends on `to`". Edges are stored at
//! most once per ordered pair, in insertion order.

mod traversal;

pub use traversal::{Traversal, postorder};

use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxBuildHasher;

use crate::base::Name;

type NeighborSet = IndexSet<Name, FxBuildHasher>;

/// Adjacency-list directed graph.
///
/// Both the vertex set and each neighbor list preserve insertion order, which
/// makes every traversal over the graph deterministic for a given input order.
#[derive(Clone, Debug, Default)]
pub struct DependencyGraph {
    adjacency: IndexMap<Name, NeighborSet, FxBuildHasher>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            adjacency: IndexMap::with_capacity_and_hasher(capacity, FxBuildHasher),
        }
    }

    /// Insert a vertex with no neighbors. Does nothing if it already exists.
    pub fn add_vertex(&mut self, vertex: Name) {
        self.adjacency.entry(vertex).or_default();
    }

    /// Add the edge `from → to`.
    ///
    /// Returns `false` (and changes nothing) when `from` is not a vertex or the
    /// edge already exists. `to` does not have to be a vertex.
    pub fn add_edge(&mut self, from: &str, to: Name) -> bool {
        match self.adjacency.get_mut(from) {
            Some(neighbors) => neighbors.insert(to),
            None => false,
        }
    }

    pub fn contains(&self, vertex: &str) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Whether the edge `from → to` exists.
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.adjacency
            .get(from)
            .is_some_and(|neighbors| neighbors.contains(to))
    }

    /// Neighbors of `vertex` in insertion order (empty if unknown).
    pub fn neighbors<'a>(&'a self, vertex: &str) -> impl Iterator<Item = &'a Name> + use<'a> {
        self.adjacency.get(vertex).into_iter().flatten()
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &Name> {
        self.adjacency.keys()
    }

    /// All edges, grouped by source vertex in vertex order.
    pub fn edges(&self) -> impl Iterator<Item = (&Name, &Name)> {
        self.adjacency
            .iter()
            .flat_map(|(from, neighbors)| neighbors.iter().map(move |to| (from, to)))
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|neighbors| neighbors.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub(crate) fn vertex_index(&self, vertex: &str) -> Option<usize> {
        self.adjacency.get_index_of(vertex)
    }

    pub(crate) fn vertex_at(&self, index: usize) -> Option<(&Name, &NeighborSet)> {
        self.adjacency.get_index(index)
    }
}
