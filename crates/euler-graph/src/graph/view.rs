//! Read-only facade over the caller's graph.
//!
//! The crate never owns or mutates the host graph. Everything the
//! classification and traversal code needs is reachable through
//! [`GraphView`]: the directedness flag and the vertex and edge sets in a
//! stable order. Adjacency, degrees, and the per-traversal edge snapshot
//! are derived internally, so host graphs only have to enumerate.

use std::fmt;
use std::hash::Hash;

/// Read-only view of a (multi)graph.
///
/// Implementations must be deterministic: repeated calls to [`vertices`]
/// and [`edges`] on an unchanged graph must yield the same sequences in
/// the same order. The edge order doubles as the traversal tie-break rule
/// (see [`eulerian_circuit`]), so a stable insertion order is the natural
/// choice.
///
/// [`vertices`]: GraphView::vertices
/// [`edges`]: GraphView::edges
/// [`eulerian_circuit`]: crate::walk::eulerian_circuit
pub trait GraphView {
    /// Vertex identifier supplied by the host graph.
    type Vertex: Clone + Eq + Hash + fmt::Debug;

    /// Whether edges are directed.
    fn is_directed(&self) -> bool;

    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Number of edges, counting each parallel copy separately.
    fn edge_count(&self) -> usize;

    /// Vertices in a stable, deterministic order.
    ///
    /// The first vertex of nonzero degree in this order is the default
    /// start vertex of a circuit traversal.
    fn vertices(&self) -> Box<dyn Iterator<Item = Self::Vertex> + '_>;

    /// Edges as `(source, target)` pairs in a stable order.
    ///
    /// Parallel edges appear once per copy. A self-loop appears once but
    /// contributes two to the degree of its vertex. For undirected graphs
    /// the pair orientation is whatever the host stored; traversal treats
    /// the edge as walkable in both directions.
    fn edges(&self) -> Box<dyn Iterator<Item = (Self::Vertex, Self::Vertex)> + '_>;

    /// Whether `vertex` is in the graph.
    fn contains_vertex(&self, vertex: &Self::Vertex) -> bool {
        self.vertices().any(|v| &v == vertex)
    }
}
