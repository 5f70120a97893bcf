//! Public classification queries.
//!
//! These are pure, read-only, and never error: any disqualifying
//! condition, including a graph with zero vertices, answers `false` or
//! [`EulerClass::Neither`]. The traversal entry points reuse the same
//! checks internally and surface the condition as an [`EulerError`]
//! instead.
//!
//! [`EulerError`]: crate::error::EulerError

use tracing::debug;

use crate::classify::degree::{self, Degrees};
use crate::classify::types::{DegreeSummary, EulerClass};
use crate::graph::{CompactGraph, GraphView};

/// Classifies a graph as Eulerian, semi-Eulerian, or neither.
///
/// Undirected graphs are Eulerian when connected with all degrees even,
/// and semi-Eulerian when connected with exactly two odd-degree vertices.
/// Directed graphs are Eulerian when strongly connected with in-degree
/// equal to out-degree everywhere, and semi-Eulerian when one vertex has
/// one excess out-edge, one has one excess in-edge, every other vertex is
/// balanced, and the non-isolated vertices are weakly connected.
///
/// A single vertex with no edges is trivially Eulerian (its circuit is
/// empty); a graph with zero vertices is `Neither`.
pub fn classify<G: GraphView>(graph: &G) -> EulerClass {
    let compact = CompactGraph::from_view(graph);
    let class = if degree::circuit_violation(&compact).is_none() {
        EulerClass::Eulerian
    } else if degree::path_violation(&compact, None).is_none() {
        EulerClass::SemiEulerian
    } else {
        EulerClass::Neither
    };
    debug!(class = ?class, "classified graph");
    class
}

/// Whether the graph admits an Eulerian circuit.
pub fn is_eulerian<G: GraphView>(graph: &G) -> bool {
    let compact = CompactGraph::from_view(graph);
    degree::circuit_violation(&compact).is_none()
}

/// Whether the graph admits an Eulerian path but no circuit.
pub fn is_semieulerian<G: GraphView>(graph: &G) -> bool {
    classify(graph) == EulerClass::SemiEulerian
}

/// Whether the graph admits an Eulerian path (open or closed), optionally
/// starting at `source`.
///
/// An Eulerian graph answers `true` for every `source`. A semi-Eulerian
/// graph answers `true` only when `source` is absent or is a mandatory
/// path start. An unknown `source` vertex answers `false`.
pub fn has_eulerian_path<G: GraphView>(graph: &G, source: Option<&G::Vertex>) -> bool {
    let compact = CompactGraph::from_view(graph);
    let start = match source {
        Some(vertex) => match compact.index_of(vertex) {
            Some(index) => Some(index),
            None => return false,
        },
        None => None,
    };
    degree::path_violation(&compact, start).is_none()
}

/// Degree-parity report for the graph. Connectivity is not part of the
/// summary; see [`is_connected`](crate::classify::is_connected).
pub fn degree_summary<G: GraphView>(graph: &G) -> DegreeSummary {
    let compact = CompactGraph::from_view(graph);
    match degree::degrees_of(&compact) {
        Degrees::Undirected(degree) => DegreeSummary::Undirected {
            odd_degree: degree.iter().filter(|d| *d % 2 == 1).count(),
        },
        Degrees::Directed {
            in_degree,
            out_degree,
        } => {
            let mut excess_out = 0;
            let mut excess_in = 0;
            let mut unbalanced = 0;
            for v in 0..compact.vertex_count() {
                match out_degree[v] as isize - in_degree[v] as isize {
                    0 => {}
                    1 => excess_out += 1,
                    -1 => excess_in += 1,
                    _ => unbalanced += 1,
                }
            }
            DegreeSummary::Directed {
                excess_out,
                excess_in,
                unbalanced,
            }
        }
    }
}

/// Vertices violating the degree condition for a circuit, in vertex order:
/// odd-degree vertices of an undirected graph, or vertices with in-degree
/// different from out-degree in a directed one.
pub fn non_eulerian_vertices<G: GraphView>(graph: &G) -> Vec<G::Vertex> {
    let compact = CompactGraph::from_view(graph);
    let offenders: Vec<usize> = match degree::degrees_of(&compact) {
        Degrees::Undirected(degree) => (0..compact.vertex_count())
            .filter(|&v| degree[v] % 2 == 1)
            .collect(),
        Degrees::Directed {
            in_degree,
            out_degree,
        } => (0..compact.vertex_count())
            .filter(|&v| in_degree[v] != out_degree[v])
            .collect(),
    };
    offenders
        .into_iter()
        .map(|v| compact.vertex(v).clone())
        .collect()
}
