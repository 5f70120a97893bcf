//! Start selection and walk construction for Eulerian paths.
//!
//! A semi-Eulerian graph fixes its path endpoints: the two odd-degree
//! vertices (undirected) or the out-excess and in-excess vertices
//! (directed). The walk itself reuses the circuit machine.
//!
//! Undirected paths run the machine from the chosen start on the direct
//! snapshot; the machine's output is the walk traversed from the *other*
//! endpoint, so it is buffered and emitted reversed with each edge
//! flipped. Directed paths run the machine on the reversed snapshot from
//! the in-excess vertex, which already emits the forward walk lazily.

use std::fmt;
use std::hash::Hash;

use super::circuit::WalkMachine;
use super::remaining::RemainingEdges;
use crate::classify;
use crate::error::{EulerError, EulerResult};
use crate::graph::CompactGraph;

/// Start vertex for the undirected path machine: the validated `source`
/// or the first odd-degree vertex in table order.
pub(crate) fn undirected_path_start<V: Clone + Eq + Hash + fmt::Debug>(
    compact: &CompactGraph<V>,
    source: Option<usize>,
) -> EulerResult<usize> {
    match source {
        Some(start) => Ok(start),
        None => classify::first_odd_vertex(compact).ok_or(EulerError::NoEulerianPath),
    }
}

/// Start vertex for the directed path machine on the reversed snapshot:
/// the unique vertex with one excess in-edge, where the reversed walk
/// begins and the forward path ends.
pub(crate) fn directed_path_start<V: Clone + Eq + Hash + fmt::Debug>(
    compact: &CompactGraph<V>,
) -> EulerResult<usize> {
    classify::directed_path_end(compact).ok_or(EulerError::NoEulerianPath)
}

/// Runs an undirected path walk to completion and returns the forward
/// edge sequence, resolved to the caller's vertices.
pub(crate) fn buffered_undirected_path<V: Clone + Eq + Hash + fmt::Debug>(
    compact: CompactGraph<V>,
    start: usize,
) -> Vec<(V, V)> {
    let remaining = RemainingEdges::build(&compact);
    let reversed = WalkMachine::new(remaining, start).drain();
    let vertices = compact.into_vertices();
    reversed
        .iter()
        .rev()
        .map(|&(from, to)| (vertices[to].clone(), vertices[from].clone()))
        .collect()
}
