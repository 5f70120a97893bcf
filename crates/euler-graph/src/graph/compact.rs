//! Dense snapshot of a [`GraphView`], shared by classification and traversal.
//!
//! Vertices are interned into contiguous `usize` indices once per
//! operation; every algorithm downstream works on plain index vectors.
//! The snapshot is private to a single call and never outlives it.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use tracing::debug;

use super::view::GraphView;

/// Interned copy of a graph: vertex table plus an edge list of index pairs.
///
/// Edge order is the host's [`GraphView::edges`] order, which downstream
/// code relies on as the traversal tie-break rule.
pub(crate) struct CompactGraph<V> {
    directed: bool,
    vertices: Vec<V>,
    index_of: HashMap<V, usize>,
    endpoints: Vec<(usize, usize)>,
}

impl<V: Clone + Eq + Hash + fmt::Debug> CompactGraph<V> {
    pub(crate) fn from_view<G: GraphView<Vertex = V>>(graph: &G) -> Self {
        let mut snapshot = Self {
            directed: graph.is_directed(),
            vertices: Vec::with_capacity(graph.vertex_count()),
            index_of: HashMap::with_capacity(graph.vertex_count()),
            endpoints: Vec::with_capacity(graph.edge_count()),
        };
        for vertex in graph.vertices() {
            snapshot.intern(vertex);
        }
        for (source, target) in graph.edges() {
            let s = snapshot.intern(source);
            let t = snapshot.intern(target);
            snapshot.endpoints.push((s, t));
        }
        debug!(
            vertices = snapshot.vertices.len(),
            edges = snapshot.endpoints.len(),
            directed = snapshot.directed,
            "built traversal snapshot"
        );
        snapshot
    }

    fn intern(&mut self, vertex: V) -> usize {
        if let Some(&index) = self.index_of.get(&vertex) {
            return index;
        }
        let index = self.vertices.len();
        self.index_of.insert(vertex.clone(), index);
        self.vertices.push(vertex);
        index
    }

    pub(crate) fn is_directed(&self) -> bool {
        self.directed
    }

    pub(crate) fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub(crate) fn index_of(&self, vertex: &V) -> Option<usize> {
        self.index_of.get(vertex).copied()
    }

    pub(crate) fn vertex(&self, index: usize) -> &V {
        &self.vertices[index]
    }

    /// Edge list as `(source, target)` index pairs, in insertion order.
    pub(crate) fn endpoints(&self) -> &[(usize, usize)] {
        &self.endpoints
    }

    /// First vertex in table order touched by at least one edge.
    pub(crate) fn first_incident_vertex(&self) -> Option<usize> {
        let mut incident = vec![false; self.vertices.len()];
        for &(s, t) in &self.endpoints {
            incident[s] = true;
            incident[t] = true;
        }
        incident.iter().position(|&touched| touched)
    }

    /// Consumes the snapshot, keeping only the index-to-vertex table.
    pub(crate) fn into_vertices(self) -> Vec<V> {
        self.vertices
    }
}
