//! Eulerian circuit and path traversal for in-memory multigraphs.
//!
//! Answers whether a graph admits an Eulerian circuit (a closed walk
//! using every edge exactly once) or an Eulerian path (the open
//! variant), and produces the walk itself as a lazy edge sequence.
//! Directed and undirected graphs, parallel edges, and self-loops are
//! all supported.
//!
//! # Architecture
//!
//! - **graph**: the [`GraphView`] facade over the caller's graph, plus
//!   the bundled [`Multigraph`] implementation
//! - **classify**: connectivity and degree-parity queries
//!   ([`is_eulerian`], [`is_semieulerian`], [`has_eulerian_path`])
//! - **walk**: the iterative Hierholzer machine behind
//!   [`eulerian_circuit`] and [`eulerian_path`]
//! - **error**: [`EulerError`] naming the condition that disqualified a
//!   graph
//!
//! Classification queries are pure and never error. Traversals are lazy:
//! constructing the sequence is free and infallible, and a disqualified
//! graph surfaces its [`EulerError`] on the first pull. The traversal
//! works on a private snapshot, so the host graph is never mutated and
//! partially consumed walks leave no trace.
//!
//! # Example
//!
//! ```
//! use euler_graph::{eulerian_circuit_edges, is_eulerian, Multigraph};
//!
//! let mut square = Multigraph::undirected();
//! square.extend_edges([(0, 1), (1, 2), (2, 3), (3, 0)]);
//!
//! assert!(is_eulerian(&square));
//! let edges = eulerian_circuit_edges(&square, Some(&0))?;
//! assert_eq!(edges, vec![(0, 3), (3, 2), (2, 1), (1, 0)]);
//! # Ok::<(), euler_graph::EulerError>(())
//! ```

pub mod classify;
pub mod error;
pub mod graph;
pub mod walk;

pub use classify::{
    classify, degree_summary, has_eulerian_path, is_connected, is_eulerian, is_semieulerian,
    non_eulerian_vertices, DegreeSummary, EulerClass,
};
pub use error::{EulerError, EulerResult};
pub use graph::{GraphView, Multigraph};
pub use walk::{
    eulerian_circuit, eulerian_circuit_edges, eulerian_path, eulerian_path_edges,
    EulerianCircuit, EulerianPath,
};
