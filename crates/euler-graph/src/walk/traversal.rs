//! Traversal entry points.

use crate::error::EulerResult;
use crate::graph::GraphView;

use super::iterator::{EulerianCircuit, EulerianPath};

/// Lazily walks an Eulerian circuit of `graph`.
///
/// The returned sequence does no work until pulled. The first `next()`
/// classifies the graph and yields one `Err` if it admits no circuit;
/// otherwise the sequence yields every edge exactly once as the
/// `(from, to)` pair actually walked, closing back at the start vertex.
///
/// `source`, when given, must be a vertex of the graph and becomes the
/// first edge's origin (the circuit is produced rotated to start there).
/// Without it the walk starts at the first vertex of nonzero degree in
/// [`GraphView::vertices`] order.
///
/// Ties are deterministic: at every vertex the walk consumes the first
/// remaining incident edge in the graph's edge insertion order (for
/// directed graphs, in-edge insertion order of the reversed view).
///
/// # Example
///
/// ```
/// use euler_graph::{eulerian_circuit, Multigraph};
///
/// let square = Multigraph::undirected_from_edges([(0, 1), (1, 2), (2, 3), (3, 0)]);
/// let edges: Result<Vec<_>, _> = eulerian_circuit(&square, Some(&0)).collect();
/// assert_eq!(edges.unwrap(), vec![(0, 3), (3, 2), (2, 1), (1, 0)]);
/// ```
#[must_use]
pub fn eulerian_circuit<'a, G: GraphView>(
    graph: &'a G,
    source: Option<&G::Vertex>,
) -> EulerianCircuit<'a, G> {
    EulerianCircuit::new(graph, source.cloned())
}

/// Lazily walks an Eulerian path of `graph`.
///
/// Like [`eulerian_circuit`] but for open walks: on a semi-Eulerian
/// graph the sequence starts at a mandatory path endpoint (an odd-degree
/// vertex, or the out-excess vertex of a directed graph) and ends at the
/// other. `source`, when given, must be such an endpoint. On a fully
/// Eulerian graph the path degenerates to a circuit and any `source` is
/// accepted.
#[must_use]
pub fn eulerian_path<'a, G: GraphView>(
    graph: &'a G,
    source: Option<&G::Vertex>,
) -> EulerianPath<'a, G> {
    EulerianPath::new(graph, source.cloned())
}

/// Collects [`eulerian_circuit`] into a vector, or the classification
/// error if the graph admits no circuit.
pub fn eulerian_circuit_edges<G: GraphView>(
    graph: &G,
    source: Option<&G::Vertex>,
) -> EulerResult<Vec<(G::Vertex, G::Vertex)>> {
    eulerian_circuit(graph, source).collect()
}

/// Collects [`eulerian_path`] into a vector, or the classification error
/// if the graph admits no path.
pub fn eulerian_path_edges<G: GraphView>(
    graph: &G,
    source: Option<&G::Vertex>,
) -> EulerResult<Vec<(G::Vertex, G::Vertex)>> {
    eulerian_path(graph, source).collect()
}
