//! Eulerian classification: connectivity and degree-parity queries.
//!
//! Splits the precondition testing of a traversal into its two halves:
//! reachability ([`connectivity`]) and degree parity ([`degree`]). The
//! public queries combine both and never error; the traversal layer
//! reuses the same internal checks to produce its lazy errors.
//!
//! # Performance
//!
//! Every query is a single pass over the graph view plus O(V + E)
//! index-based sweeps. Nothing is cached between calls.

mod connectivity;
mod degree;
mod queries;
mod types;

#[cfg(test)]
mod tests;

pub(crate) use degree::{circuit_violation, directed_path_end, first_odd_vertex, path_violation};

pub use connectivity::is_connected;
pub use queries::{
    classify, degree_summary, has_eulerian_path, is_eulerian, is_semieulerian,
    non_eulerian_vertices,
};
pub use types::{DegreeSummary, EulerClass};
