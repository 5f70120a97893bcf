//! Eulerian walk construction (Hierholzer, iterative).
//!
//! The walk runs over a private [`remaining`] snapshot derived from the
//! graph view, so traversal never touches the host graph and concurrent
//! walks of one graph are independent. Emission is lazy: see
//! [`iterator`] for the deferred-validation contract.
//!
//! # Performance
//!
//! O(V + E) per full walk including validation, with no recursion; the
//! splice points of Hierholzer's algorithm are absorbed by the explicit
//! vertex stack.

mod circuit;
mod iterator;
mod path;
mod remaining;
mod traversal;

#[cfg(test)]
mod tests;

pub use iterator::{EulerianCircuit, EulerianPath};
pub use traversal::{
    eulerian_circuit, eulerian_circuit_edges, eulerian_path, eulerian_path_edges,
};
