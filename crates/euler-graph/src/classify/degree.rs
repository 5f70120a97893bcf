//! Degree-parity computation and the circuit/path precondition checks.
//!
//! The checks return the *disqualifying condition* rather than a bare
//! boolean so the traversal layer can surface it unchanged as an error.

use std::fmt;
use std::hash::Hash;

use crate::classify::connectivity;
use crate::error::EulerError;
use crate::graph::CompactGraph;

/// Per-vertex degrees of a snapshot.
pub(crate) enum Degrees {
    /// Total degree per vertex; self-loops count twice.
    Undirected(Vec<usize>),
    /// In-degree and out-degree per vertex.
    Directed {
        in_degree: Vec<usize>,
        out_degree: Vec<usize>,
    },
}

pub(crate) fn degrees_of<V: Clone + Eq + Hash + fmt::Debug>(
    compact: &CompactGraph<V>,
) -> Degrees {
    let n = compact.vertex_count();
    if compact.is_directed() {
        let mut in_degree = vec![0usize; n];
        let mut out_degree = vec![0usize; n];
        for &(s, t) in compact.endpoints() {
            out_degree[s] += 1;
            in_degree[t] += 1;
        }
        Degrees::Directed {
            in_degree,
            out_degree,
        }
    } else {
        let mut degree = vec![0usize; n];
        for &(s, t) in compact.endpoints() {
            degree[s] += 1;
            degree[t] += 1;
        }
        Degrees::Undirected(degree)
    }
}

/// First vertex in table order with odd degree, if any.
pub(crate) fn first_odd_vertex<V: Clone + Eq + Hash + fmt::Debug>(
    compact: &CompactGraph<V>,
) -> Option<usize> {
    match degrees_of(compact) {
        Degrees::Undirected(degree) => degree.iter().position(|d| d % 2 == 1),
        Degrees::Directed { .. } => None,
    }
}

/// The mandatory end of a directed Eulerian path: in-degree exceeds
/// out-degree by one. The reversed walk starts here.
pub(crate) fn directed_path_end<V: Clone + Eq + Hash + fmt::Debug>(
    compact: &CompactGraph<V>,
) -> Option<usize> {
    match degrees_of(compact) {
        Degrees::Directed {
            in_degree,
            out_degree,
        } => (0..compact.vertex_count()).find(|&v| in_degree[v] == out_degree[v] + 1),
        Degrees::Undirected(_) => None,
    }
}

/// Why the graph admits no Eulerian circuit, or `None` if it does.
///
/// Degree parity is checked before connectivity, so a graph failing both
/// reports the parity condition.
pub(crate) fn circuit_violation<V: Clone + Eq + Hash + fmt::Debug>(
    compact: &CompactGraph<V>,
) -> Option<EulerError> {
    if compact.vertex_count() == 0 {
        return Some(EulerError::EmptyGraph);
    }
    match degrees_of(compact) {
        Degrees::Undirected(degree) => {
            let odd = degree.iter().filter(|d| *d % 2 == 1).count();
            if odd != 0 {
                return Some(EulerError::OddDegreeVertices { count: odd });
            }
            if !connectivity::undirected_connected(compact) {
                return Some(EulerError::Disconnected);
            }
        }
        Degrees::Directed {
            in_degree,
            out_degree,
        } => {
            for v in 0..compact.vertex_count() {
                if in_degree[v] != out_degree[v] {
                    return Some(EulerError::DegreeImbalance {
                        vertex: format!("{:?}", compact.vertex(v)),
                        in_degree: in_degree[v],
                        out_degree: out_degree[v],
                    });
                }
            }
            if !connectivity::strongly_connected(compact) {
                return Some(EulerError::NotStronglyConnected);
            }
        }
    }
    None
}

/// Why the graph admits no Eulerian path, or `None` if it does.
///
/// An Eulerian graph passes for any `source`. Otherwise `source`, when
/// given as a snapshot index, must be a legal path start: an odd-degree
/// vertex (undirected) or the unique out-excess vertex (directed).
pub(crate) fn path_violation<V: Clone + Eq + Hash + fmt::Debug>(
    compact: &CompactGraph<V>,
    source: Option<usize>,
) -> Option<EulerError> {
    if circuit_violation(compact).is_none() {
        return None;
    }
    if compact.vertex_count() == 0 {
        return Some(EulerError::EmptyGraph);
    }
    match degrees_of(compact) {
        Degrees::Undirected(degree) => {
            let odd: Vec<usize> = (0..degree.len()).filter(|&v| degree[v] % 2 == 1).collect();
            match odd.len() {
                // Even degrees everywhere but not Eulerian: connectivity
                // is what failed.
                0 => return Some(EulerError::Disconnected),
                2 => {}
                count => return Some(EulerError::OddDegreeVertices { count }),
            }
            if !connectivity::undirected_connected(compact) {
                return Some(EulerError::Disconnected);
            }
            if let Some(start) = source {
                if !odd.contains(&start) {
                    return Some(EulerError::InvalidSource {
                        vertex: format!("{:?}", compact.vertex(start)),
                    });
                }
            }
        }
        Degrees::Directed {
            in_degree,
            out_degree,
        } => {
            let mut excess_out = None;
            let mut excess_in = None;
            for v in 0..compact.vertex_count() {
                match out_degree[v] as isize - in_degree[v] as isize {
                    0 => {}
                    1 if excess_out.is_none() => excess_out = Some(v),
                    -1 if excess_in.is_none() => excess_in = Some(v),
                    _ => {
                        return Some(EulerError::DegreeImbalance {
                            vertex: format!("{:?}", compact.vertex(v)),
                            in_degree: in_degree[v],
                            out_degree: out_degree[v],
                        })
                    }
                }
            }
            if !connectivity::weakly_connected_ignoring_isolates(compact) {
                return Some(EulerError::Disconnected);
            }
            if let Some(start) = source {
                if excess_out != Some(start) {
                    return Some(EulerError::InvalidSource {
                        vertex: format!("{:?}", compact.vertex(start)),
                    });
                }
            }
        }
    }
    None
}
