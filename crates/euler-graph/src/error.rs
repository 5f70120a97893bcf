//! Error types for Eulerian classification and traversal.
//!
//! All fallible operations in this crate return [`EulerResult`]. The
//! classification queries (`is_eulerian`, `is_semieulerian`,
//! `has_eulerian_path`) never error; they answer `false` for any
//! disqualifying input, including degenerate graphs. The traversal
//! iterators surface an [`EulerError`] on the first pull instead,
//! naming the condition that disqualified the graph.

use thiserror::Error;

/// Result type alias for Eulerian operations.
pub type EulerResult<T> = Result<T, EulerError>;

/// Why a graph admits no Eulerian circuit or path.
///
/// Vertex identities are carried as their `Debug` rendering so the error
/// type stays independent of the caller's vertex type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EulerError {
    /// The graph has no vertices at all.
    #[error("graph has no vertices")]
    EmptyGraph,

    /// An undirected graph whose vertices are not all mutually reachable.
    #[error("graph is not connected")]
    Disconnected,

    /// A directed graph that is not strongly connected.
    #[error("directed graph is not strongly connected")]
    NotStronglyConnected,

    /// An undirected graph with the wrong number of odd-degree vertices
    /// (a circuit requires zero, a path exactly two).
    #[error("graph has {count} vertices of odd degree")]
    OddDegreeVertices {
        /// How many vertices have odd degree.
        count: usize,
    },

    /// A directed graph whose in/out degrees rule out the requested walk.
    #[error("vertex {vertex} has in-degree {in_degree} but out-degree {out_degree}")]
    DegreeImbalance {
        /// Offending vertex, rendered with `Debug`.
        vertex: String,
        /// Edges entering the vertex.
        in_degree: usize,
        /// Edges leaving the vertex.
        out_degree: usize,
    },

    /// The degree and connectivity conditions for an open walk do not hold.
    #[error("graph has no Eulerian path")]
    NoEulerianPath,

    /// An explicit `source` that is not a legal starting vertex for the
    /// requested walk.
    #[error("vertex {vertex} is not a valid starting point for this walk")]
    InvalidSource {
        /// Rejected vertex, rendered with `Debug`.
        vertex: String,
    },

    /// An explicit `source` that is not a vertex of the graph.
    #[error("vertex {vertex} is not in the graph")]
    UnknownVertex {
        /// Missing vertex, rendered with `Debug`.
        vertex: String,
    },
}
