//! Tests for classification queries.

mod undirected;

use crate::graph::Multigraph;

/// Complete graph on `n` vertices, edges in lexicographic order.
pub(crate) fn complete_graph(n: usize) -> Multigraph<usize> {
    let mut graph = Multigraph::undirected();
    for v in 0..n {
        graph.add_vertex(v);
    }
    for u in 0..n {
        for v in (u + 1)..n {
            graph.add_edge(u, v);
        }
    }
    graph
}

/// Cycle graph 0 - 1 - ... - (n-1) - 0.
pub(crate) fn cycle_graph(n: usize) -> Multigraph<usize> {
    let mut graph = Multigraph::undirected();
    for v in 0..n {
        graph.add_vertex(v);
    }
    for v in 0..n {
        graph.add_edge(v, (v + 1) % n);
    }
    graph
}

/// The seven bridges of Königsberg: four landmasses, seven bridges,
/// famously not traversable.
pub(crate) fn koenigsberg() -> Multigraph<&'static str> {
    Multigraph::undirected_from_edges([
        ("W", "N"),
        ("W", "N"),
        ("N", "E"),
        ("E", "W"),
        ("W", "S"),
        ("W", "S"),
        ("S", "E"),
    ])
}
