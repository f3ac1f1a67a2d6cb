//! Depth-first postorder over a [`DependencyGraph`].
//!
//! The walk keeps its own stack of frames on the heap, so dependency chains of
//! any length are handled without growing the call stack.

use super::DependencyGraph;
use crate::base::Name;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum VisitState {
    Unvisited,
    /// Entered but not yet emitted; reaching it again closes a cycle.
    InProgress,
    Done,
}

/// One suspended visit: the vertex and the next neighbor to look at.
#[derive(Debug)]
struct Frame {
    vertex: usize,
    next_neighbor: usize,
}

/// Result of [`postorder`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Traversal {
    /// Every vertex exactly once, each emitted after all neighbors it reached.
    pub order: Vec<Name>,
    /// Edges `(from, to)` whose target was still in progress when reached.
    /// Each one closes a cycle; self loops are included.
    pub back_edges: Vec<(Name, Name)>,
}

impl Traversal {
    /// Whether the walk found at least one cycle.
    pub fn has_cycles(&self) -> bool {
        !self.back_edges.is_empty()
    }
}

/// Depth-first postorder of `graph`.
///
/// Roots are taken in vertex insertion order and neighbors in edge insertion
/// order. A vertex is marked visited when entered, so cycles terminate: the
/// relative order of vertices on a cycle then depends on where the walk
/// entered it and carries no dependency meaning. Neighbors that are not
/// vertices are skipped.
///
/// For every edge `(from, to)` not reported in `back_edges`, `to` appears
/// before `from` in `order`.
pub fn postorder(graph: &DependencyGraph) -> Traversal {
    let count = graph.vertex_count();
    let mut state = vec![VisitState::Unvisited; count];
    let mut order = Vec::with_capacity(count);
    let mut back_edges = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();

    for root in 0..count {
        if state[root] != VisitState::Unvisited {
            continue;
        }
        state[root] = VisitState::InProgress;
        stack.push(Frame {
            vertex: root,
            next_neighbor: 0,
        });

        while let Some(frame) = stack.last_mut() {
            let Some((name, neighbors)) = graph.vertex_at(frame.vertex) else {
                stack.pop();
                continue;
            };

            match neighbors.get_index(frame.next_neighbor) {
                Some(neighbor) => {
                    frame.next_neighbor += 1;
                    let Some(next) = graph.vertex_index(neighbor) else {
                        continue;
                    };
                    match state[next] {
                        VisitState::Unvisited => {
                            state[next] = VisitState::InProgress;
                            stack.push(Frame {
                                vertex: next,
                                next_neighbor: 0,
                            });
                        }
                        VisitState::InProgress => {
                            back_edges.push((name.clone(), neighbor.clone()));
                        }
                        VisitState::Done => {}
                    }
                }
                None => {
                    state[frame.vertex] = VisitState::Done;
                    order.push(name.clone());
                    stack.pop();
                }
            }
        }
    }

    Traversal { order, back_edges }
}
