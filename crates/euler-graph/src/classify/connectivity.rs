//! Reachability-based connectivity checks.
//!
//! Undirected graphs use a single breadth-first sweep. Directed graphs
//! use the double-sweep test for strong connectivity: one forward pass
//! and one pass over the reversed edges from the same root. Only the
//! "is it a single component" answer is needed, so no full SCC
//! decomposition is performed.

use std::collections::VecDeque;
use std::fmt;
use std::hash::Hash;

use crate::graph::{CompactGraph, GraphView};

/// Whether the graph is connected in the sense its directedness requires.
///
/// Undirected: every vertex reachable from every other. Directed:
/// strongly connected. A graph with zero vertices is reported as not
/// connected.
pub fn is_connected<G: GraphView>(graph: &G) -> bool {
    let compact = CompactGraph::from_view(graph);
    if compact.vertex_count() == 0 {
        return false;
    }
    if compact.is_directed() {
        strongly_connected(&compact)
    } else {
        undirected_connected(&compact)
    }
}

/// Single BFS over the symmetric adjacency; isolated vertices disconnect.
pub(crate) fn undirected_connected<V: Clone + Eq + Hash + fmt::Debug>(
    compact: &CompactGraph<V>,
) -> bool {
    let n = compact.vertex_count();
    if n == 0 {
        return false;
    }
    let adjacency = symmetric_adjacency(compact);
    sweep(&adjacency, 0) == n
}

/// Double-sweep strong connectivity: forward pass plus reversed pass.
pub(crate) fn strongly_connected<V: Clone + Eq + Hash + fmt::Debug>(
    compact: &CompactGraph<V>,
) -> bool {
    let n = compact.vertex_count();
    if n == 0 {
        return false;
    }
    let mut forward = vec![Vec::new(); n];
    let mut reverse = vec![Vec::new(); n];
    for &(s, t) in compact.endpoints() {
        forward[s].push(t);
        reverse[t].push(s);
    }
    sweep(&forward, 0) == n && sweep(&reverse, 0) == n
}

/// Weak connectivity over the vertices that carry at least one edge.
///
/// This is the connectivity condition of the directed Eulerian-path test:
/// isolated vertices cannot appear in an open walk anyway, so they are
/// ignored. Returns `false` when the graph has no edges at all.
pub(crate) fn weakly_connected_ignoring_isolates<V: Clone + Eq + Hash + fmt::Debug>(
    compact: &CompactGraph<V>,
) -> bool {
    let n = compact.vertex_count();
    let adjacency = symmetric_adjacency(compact);
    let Some(root) = (0..n).find(|&v| !adjacency[v].is_empty()) else {
        return false;
    };
    let reached = sweep(&adjacency, root);
    let incident = (0..n).filter(|&v| !adjacency[v].is_empty()).count();
    reached == incident
}

fn symmetric_adjacency<V: Clone + Eq + Hash + fmt::Debug>(
    compact: &CompactGraph<V>,
) -> Vec<Vec<usize>> {
    let mut adjacency = vec![Vec::new(); compact.vertex_count()];
    for &(s, t) in compact.endpoints() {
        adjacency[s].push(t);
        if s != t {
            adjacency[t].push(s);
        }
    }
    adjacency
}

/// BFS from `root`; returns how many vertices were reached.
fn sweep(adjacency: &[Vec<usize>], root: usize) -> usize {
    let mut visited = vec![false; adjacency.len()];
    let mut queue = VecDeque::new();
    visited[root] = true;
    queue.push_back(root);
    let mut reached = 0;
    while let Some(vertex) = queue.pop_front() {
        reached += 1;
        for &next in &adjacency[vertex] {
            if !visited[next] {
                visited[next] = true;
                queue.push_back(next);
            }
        }
    }
    reached
}
