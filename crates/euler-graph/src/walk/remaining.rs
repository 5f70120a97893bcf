//! Mutable per-traversal snapshot of unconsumed edges.
//!
//! One shared edge table with an aliveness flag per edge, plus per-vertex
//! incidence lists in edge-insertion order. Both endpoints of an
//! undirected edge reference the same table entry, so consuming the edge
//! at one endpoint instantly removes it from the other endpoint's view.
//! A per-vertex cursor skips entries already consumed elsewhere, which
//! keeps a full traversal at O(total degree) aggregate work.
//!
//! For directed graphs the incidence lists hold *incoming* edges: the
//! walk machine runs on the reversed graph and restores the original
//! orientation when it emits (see [`circuit`](super::circuit)).

use std::fmt;
use std::hash::Hash;

use crate::graph::CompactGraph;

/// Not-yet-walked edges, owned by a single traversal invocation.
pub(crate) struct RemainingEdges {
    directed: bool,
    endpoints: Vec<(usize, usize)>,
    incidence: Vec<Vec<usize>>,
    alive: Vec<bool>,
    cursor: Vec<usize>,
    remaining_at: Vec<usize>,
    remaining_total: usize,
}

impl RemainingEdges {
    pub(crate) fn build<V: Clone + Eq + Hash + fmt::Debug>(compact: &CompactGraph<V>) -> Self {
        let n = compact.vertex_count();
        let endpoints = compact.endpoints().to_vec();
        let mut incidence = vec![Vec::new(); n];
        let mut remaining_at = vec![0usize; n];
        for (edge, &(s, t)) in endpoints.iter().enumerate() {
            if compact.is_directed() {
                incidence[t].push(edge);
                remaining_at[t] += 1;
            } else {
                incidence[s].push(edge);
                if t != s {
                    incidence[t].push(edge);
                }
                remaining_at[s] += 1;
                remaining_at[t] += 1;
            }
        }
        let total = endpoints.len();
        Self {
            directed: compact.is_directed(),
            endpoints,
            incidence,
            alive: vec![true; total],
            cursor: vec![0; n],
            remaining_at,
            remaining_total: total,
        }
    }

    /// Consumes the first remaining edge at `vertex` in insertion order
    /// and returns the vertex at its far end, or `None` when `vertex` is
    /// exhausted. For directed graphs `vertex` is the edge's target and
    /// the far end its source, because the walk runs reversed.
    pub(crate) fn take_first(&mut self, vertex: usize) -> Option<usize> {
        if self.remaining_at[vertex] == 0 {
            return None;
        }
        loop {
            let edge = self.incidence[vertex][self.cursor[vertex]];
            self.cursor[vertex] += 1;
            if !self.alive[edge] {
                continue;
            }
            self.alive[edge] = false;
            self.remaining_total -= 1;
            let (s, t) = self.endpoints[edge];
            if self.directed {
                self.remaining_at[vertex] -= 1;
                return Some(s);
            }
            // Shared identity: both endpoint counts drop, and a
            // self-loop (s == t) drops its vertex by two.
            self.remaining_at[s] -= 1;
            self.remaining_at[t] -= 1;
            return Some(if s == vertex { t } else { s });
        }
    }

    /// Edges not yet consumed anywhere in the graph.
    pub(crate) fn remaining_total(&self) -> usize {
        self.remaining_total
    }
}
