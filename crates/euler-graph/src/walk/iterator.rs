//! Lazy, single-pass walk iterators.
//!
//! Building an iterator does no work and cannot fail; classification and
//! snapshot construction happen on the first `next()` call, which is
//! also where a disqualified graph surfaces its [`EulerError`]. The
//! internal state machine moves `NotStarted` into `Walking` (lazy
//! emission), `Buffered` (undirected paths, see
//! [`path`](super::path)), `Exhausted`, or `Failed`, and never restarts.

use std::fmt;
use std::hash::Hash;
use std::iter::FusedIterator;

use tracing::debug;

use super::circuit::WalkMachine;
use super::path;
use super::remaining::RemainingEdges;
use crate::classify;
use crate::error::{EulerError, EulerResult};
use crate::graph::{CompactGraph, GraphView};

#[derive(Debug, Clone, Copy)]
enum Mode {
    Circuit,
    Path,
}

enum WalkPhase<V> {
    NotStarted,
    Walking {
        machine: WalkMachine,
        vertices: Vec<V>,
    },
    Buffered {
        edges: std::vec::IntoIter<(V, V)>,
    },
    Exhausted,
    Failed,
}

struct WalkIter<'g, G: GraphView> {
    graph: &'g G,
    source: Option<G::Vertex>,
    mode: Mode,
    phase: WalkPhase<G::Vertex>,
}

impl<'g, G: GraphView> WalkIter<'g, G> {
    fn new(graph: &'g G, source: Option<G::Vertex>, mode: Mode) -> Self {
        Self {
            graph,
            source,
            mode,
            phase: WalkPhase::NotStarted,
        }
    }

    /// Validates the graph and builds the walk state. Runs once, on the
    /// first pull.
    fn start(&mut self) -> EulerResult<WalkPhase<G::Vertex>> {
        let compact = CompactGraph::from_view(self.graph);
        let source = match &self.source {
            Some(vertex) => Some(compact.index_of(vertex).ok_or_else(|| {
                EulerError::UnknownVertex {
                    vertex: format!("{:?}", vertex),
                }
            })?),
            None => None,
        };
        debug!(mode = ?self.mode, "starting eulerian walk");
        match self.mode {
            Mode::Circuit => {
                if let Some(error) = classify::circuit_violation(&compact) {
                    return Err(error);
                }
                Ok(circuit_phase(compact, source))
            }
            Mode::Path => {
                if classify::circuit_violation(&compact).is_none() {
                    // Degenerate case: the path of an Eulerian graph is
                    // its circuit.
                    return Ok(circuit_phase(compact, source));
                }
                if let Some(error) = classify::path_violation(&compact, source) {
                    return Err(error);
                }
                if compact.is_directed() {
                    let start = path::directed_path_start(&compact)?;
                    Ok(walking_phase(compact, start))
                } else {
                    let start = path::undirected_path_start(&compact, source)?;
                    Ok(WalkPhase::Buffered {
                        edges: path::buffered_undirected_path(compact, start).into_iter(),
                    })
                }
            }
        }
    }
}

fn circuit_phase<V: Clone + Eq + Hash + fmt::Debug>(
    compact: CompactGraph<V>,
    source: Option<usize>,
) -> WalkPhase<V> {
    match source.or_else(|| compact.first_incident_vertex()) {
        Some(start) => walking_phase(compact, start),
        // No edges at all: the circuit of a trivially Eulerian graph is
        // the empty sequence.
        None => WalkPhase::Exhausted,
    }
}

fn walking_phase<V: Clone + Eq + Hash + fmt::Debug>(
    compact: CompactGraph<V>,
    start: usize,
) -> WalkPhase<V> {
    let remaining = RemainingEdges::build(&compact);
    WalkPhase::Walking {
        machine: WalkMachine::new(remaining, start),
        vertices: compact.into_vertices(),
    }
}

impl<'g, G: GraphView> Iterator for WalkIter<'g, G> {
    type Item = EulerResult<(G::Vertex, G::Vertex)>;

    fn next(&mut self) -> Option<Self::Item> {
        if matches!(self.phase, WalkPhase::NotStarted) {
            match self.start() {
                Ok(phase) => self.phase = phase,
                Err(error) => {
                    self.phase = WalkPhase::Failed;
                    return Some(Err(error));
                }
            }
        }
        match &mut self.phase {
            WalkPhase::Walking { machine, vertices } => match machine.advance() {
                Some((from, to)) => {
                    Some(Ok((vertices[from].clone(), vertices[to].clone())))
                }
                None => {
                    self.phase = WalkPhase::Exhausted;
                    None
                }
            },
            WalkPhase::Buffered { edges } => match edges.next() {
                Some(edge) => Some(Ok(edge)),
                None => {
                    self.phase = WalkPhase::Exhausted;
                    None
                }
            },
            WalkPhase::Exhausted | WalkPhase::Failed => None,
            // start() always replaces NotStarted before this match.
            WalkPhase::NotStarted => None,
        }
    }
}

impl<'g, G: GraphView> FusedIterator for WalkIter<'g, G> {}

/// Lazy edge sequence of an Eulerian circuit.
///
/// Created by [`eulerian_circuit`](super::eulerian_circuit). Yields the
/// walked `(from, to)` vertex pairs; the first pull validates the graph
/// and yields `Err` once if it admits no circuit. Single-pass and fused.
pub struct EulerianCircuit<'g, G: GraphView> {
    inner: WalkIter<'g, G>,
}

impl<'g, G: GraphView> EulerianCircuit<'g, G> {
    /// Builds the sequence without validating or walking anything yet.
    #[must_use]
    pub fn new(graph: &'g G, source: Option<G::Vertex>) -> Self {
        Self {
            inner: WalkIter::new(graph, source, Mode::Circuit),
        }
    }
}

impl<'g, G: GraphView> Iterator for EulerianCircuit<'g, G> {
    type Item = EulerResult<(G::Vertex, G::Vertex)>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<'g, G: GraphView> FusedIterator for EulerianCircuit<'g, G> {}

/// Lazy edge sequence of an Eulerian path.
///
/// Created by [`eulerian_path`](super::eulerian_path). Behaves like
/// [`EulerianCircuit`], degenerating to a circuit when the graph is fully
/// Eulerian.
pub struct EulerianPath<'g, G: GraphView> {
    inner: WalkIter<'g, G>,
}

impl<'g, G: GraphView> EulerianPath<'g, G> {
    /// Builds the sequence without validating or walking anything yet.
    #[must_use]
    pub fn new(graph: &'g G, source: Option<G::Vertex>) -> Self {
        Self {
            inner: WalkIter::new(graph, source, Mode::Path),
        }
    }
}

impl<'g, G: GraphView> Iterator for EulerianPath<'g, G> {
    type Item = EulerResult<(G::Vertex, G::Vertex)>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<'g, G: GraphView> FusedIterator for EulerianPath<'g, G> {}
