//! In-memory multigraph, the crate's reference [`GraphView`] implementation.
//!
//! Hosts with their own graph types implement [`GraphView`] directly;
//! `Multigraph` exists for callers without one and for tests. It keeps the
//! construction surface deliberately small: vertices and edges go in,
//! nothing comes back out besides the view. Insertion order is preserved
//! for both vertices and edges, which makes traversal output reproducible.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use super::view::GraphView;

/// A directed or undirected graph permitting parallel edges and self-loops.
///
/// Vertices are interned on first sight; `add_edge` inserts unknown
/// endpoints automatically, so edge-list construction needs no explicit
/// vertex registration.
#[derive(Debug, Clone)]
pub struct Multigraph<V> {
    directed: bool,
    vertices: Vec<V>,
    index_of: HashMap<V, usize>,
    edges: Vec<(usize, usize)>,
}

impl<V: Clone + Eq + Hash + fmt::Debug> Multigraph<V> {
    /// Creates an empty undirected multigraph.
    #[must_use]
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Creates an empty directed multigraph.
    #[must_use]
    pub fn directed() -> Self {
        Self::new(true)
    }

    fn new(directed: bool) -> Self {
        Self {
            directed,
            vertices: Vec::new(),
            index_of: HashMap::new(),
            edges: Vec::new(),
        }
    }

    /// Builds an undirected multigraph from an edge list.
    #[must_use]
    pub fn undirected_from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V)>,
    {
        let mut graph = Self::undirected();
        graph.extend_edges(edges);
        graph
    }

    /// Builds a directed multigraph from an edge list.
    #[must_use]
    pub fn directed_from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V)>,
    {
        let mut graph = Self::directed();
        graph.extend_edges(edges);
        graph
    }

    /// Adds a vertex. Returns `false` if it was already present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        let known = self.index_of.contains_key(&vertex);
        if !known {
            self.intern(vertex);
        }
        !known
    }

    /// Adds an edge, interning unknown endpoints.
    ///
    /// For undirected graphs the stored orientation is incidental; the
    /// edge is walkable both ways. Calling this twice with the same
    /// endpoints records two parallel edges.
    pub fn add_edge(&mut self, source: V, target: V) {
        let s = self.intern(source);
        let t = self.intern(target);
        self.edges.push((s, t));
    }

    /// Adds every edge from `edges`, in order.
    pub fn extend_edges<I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = (V, V)>,
    {
        for (source, target) in edges {
            self.add_edge(source, target);
        }
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
}

impl<V: Clone + Eq + Hash + fmt::Debug> GraphView for Multigraph<V> {
    type Vertex = V;

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = V> + '_> {
        Box::new(self.vertices.iter().cloned())
    }

    fn edges(&self) -> Box<dyn Iterator<Item = (V, V)> + '_> {
        Box::new(
            self.edges
                .iter()
                .map(|&(s, t)| (self.vertices[s].clone(), self.vertices[t].clone())),
        )
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.index_of.contains_key(vertex)
    }
}
