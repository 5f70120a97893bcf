//! Stack-based Hierholzer walk machine.
//!
//! Iterative, with an explicit vertex stack and no recursion. The machine
//! pushes greedily: while the top vertex has a remaining edge it consumes
//! the first one (insertion order) and pushes the far endpoint. When the
//! top vertex is exhausted it pops and emits the edge between the two
//! most recently popped vertices. Sub-circuits discovered at revisited
//! vertices are therefore spliced in place by the stack discipline
//! itself; edges come out in reverse discovery order, which is exactly
//! what makes the first emitted edge leave the start vertex.
//!
//! Directed graphs feed the machine the reversed snapshot, so the
//! reversed emission order restores both the forward walk order and the
//! original edge orientation.

use tracing::trace;

use super::remaining::RemainingEdges;

/// In-progress Hierholzer walk over a [`RemainingEdges`] snapshot.
pub(crate) struct WalkMachine {
    remaining: RemainingEdges,
    stack: Vec<usize>,
    last: Option<usize>,
}

impl WalkMachine {
    pub(crate) fn new(remaining: RemainingEdges, start: usize) -> Self {
        Self {
            remaining,
            stack: vec![start],
            last: None,
        }
    }

    /// Advances the walk until the next edge can be emitted.
    ///
    /// Returns the edge as `(from, to)` snapshot indices in the
    /// orientation actually walked, or `None` once every edge reachable
    /// from the start has been emitted. On a graph that passed
    /// classification, exhaustion implies every edge was consumed.
    pub(crate) fn advance(&mut self) -> Option<(usize, usize)> {
        while let Some(&current) = self.stack.last() {
            if let Some(next) = self.remaining.take_first(current) {
                self.stack.push(next);
                continue;
            }
            self.stack.pop();
            if let Some(previous) = self.last.replace(current) {
                trace!(from = previous, to = current, "emit edge");
                return Some((previous, current));
            }
        }
        debug_assert_eq!(
            self.remaining.remaining_total(),
            0,
            "walk exhausted with unconsumed edges"
        );
        None
    }

    /// Runs the machine to exhaustion and collects the emitted edges.
    pub(crate) fn drain(mut self) -> Vec<(usize, usize)> {
        let mut edges = Vec::with_capacity(self.remaining.remaining_total());
        while let Some(edge) = self.advance() {
            edges.push(edge);
        }
        edges
    }
}
