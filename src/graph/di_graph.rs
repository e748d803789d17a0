/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::RandomAccessGraph;
use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// A mutable directed graph over vertices of type `V`.
///
/// Vertices can be any value that can be hashed and compared for equality.
/// Each vertex is assigned a dense node index the first time it is inserted,
/// either explicitly with [`add_vertex`](DiGraph::add_vertex) or as an
/// endpoint of [`add_edge`](DiGraph::add_edge); indices are never reused, as
/// vertices cannot be removed.
///
/// Enumeration order is deterministic: vertices are enumerated in insertion
/// order, and the successors of a vertex in the order in which the
/// corresponding edges were first inserted. Visits inherit this order, so
/// among the several valid topological orders of a graph the one returned
/// depends on insertion order only.
///
/// Visits borrow the graph immutably, so the graph cannot be modified while
/// a visit is in progress. Sharing a graph among threads that modify it
/// requires external locking.
///
/// # Examples
///
/// ```
/// use digraph_dfs::graph::DiGraph;
///
/// let mut graph = DiGraph::new();
/// assert!(graph.add_edge('a', 'b'));
/// assert!(!graph.add_edge('a', 'b'));
/// graph.add_edge('b', 'b');
///
/// assert_eq!(graph.num_nodes(), 2);
/// assert_eq!(graph.num_arcs(), 2);
/// assert_eq!(graph.neighbors(&'a').collect::<Vec<_>>(), vec![&'b']);
/// assert_eq!(graph.neighbors(&'z').count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct DiGraph<V> {
    /// Maps each vertex to its node index.
    nodes: HashMap<V, usize>,
    /// The vertices, indexed by node index.
    vertices: Vec<V>,
    /// The successor lists, indexed by node index.
    successors: Vec<Vec<usize>>,
    /// The arcs, used to keep successor lists free of duplicates.
    arcs: HashSet<(usize, usize)>,
}

impl<V> Default for DiGraph<V> {
    fn default() -> Self {
        Self {
            nodes: HashMap::new(),
            vertices: Vec::new(),
            successors: Vec::new(),
            arcs: HashSet::new(),
        }
    }
}

impl<V> DiGraph<V> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of vertices.
    #[inline(always)]
    pub fn num_nodes(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of distinct edges.
    #[inline(always)]
    pub fn num_arcs(&self) -> usize {
        self.arcs.len()
    }

    /// Returns true if the graph has no vertices.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the vertex with the given node index.
    ///
    /// # Panics
    ///
    /// If `node` is not smaller than [`num_nodes`](DiGraph::num_nodes).
    #[inline(always)]
    pub fn vertex(&self, node: usize) -> &V {
        &self.vertices[node]
    }

    /// Returns an iterator over the vertices in node-index order.
    pub fn vertices(&self) -> std::slice::Iter<'_, V> {
        self.vertices.iter()
    }

    /// Calls `visitor` on every vertex, in node-index order.
    ///
    /// The enumeration stops at the first error returned by `visitor`, and
    /// the error is returned.
    pub fn do_vertices<E>(&self, mut visitor: impl FnMut(&V) -> Result<(), E>) -> Result<(), E> {
        for vertex in &self.vertices {
            visitor(vertex)?;
        }
        Ok(())
    }

    /// Calls `visitor` on every edge, passing the source and the target.
    ///
    /// Every edge is enumerated exactly once. Sources follow node-index
    /// order, and the edges leaving a source follow insertion order. The
    /// enumeration stops at the first error returned by `visitor`, and the
    /// error is returned.
    pub fn do_edges<E>(&self, mut visitor: impl FnMut(&V, &V) -> Result<(), E>) -> Result<(), E> {
        for (source, succ) in self.vertices.iter().zip(&self.successors) {
            for &target in succ {
                visitor(source, &self.vertices[target])?;
            }
        }
        Ok(())
    }
}

impl<V: Eq + Hash + Clone> DiGraph<V> {
    /// Creates an empty graph with room for `num_nodes` vertices.
    pub fn with_capacity(num_nodes: usize) -> Self {
        Self {
            nodes: HashMap::with_capacity(num_nodes),
            vertices: Vec::with_capacity(num_nodes),
            successors: Vec::with_capacity(num_nodes),
            arcs: HashSet::new(),
        }
    }

    /// Creates a graph from a sequence of edges, adding them in order.
    pub fn from_arcs(arcs: impl IntoIterator<Item = (V, V)>) -> Self {
        let mut graph = Self::new();
        graph.extend(arcs);
        graph
    }

    /// Adds a vertex with no edges, if not already present, and returns its
    /// node index.
    pub fn add_vertex(&mut self, vertex: V) -> usize {
        if let Some(&node) = self.nodes.get(&vertex) {
            return node;
        }
        let node = self.vertices.len();
        self.nodes.insert(vertex.clone(), node);
        self.vertices.push(vertex);
        self.successors.push(Vec::new());
        node
    }

    /// Adds an edge from `source` to `target`, adding missing endpoints.
    ///
    /// Returns true if the edge was not already present. Adding an edge
    /// twice has no further effect.
    pub fn add_edge(&mut self, source: V, target: V) -> bool {
        let source = self.add_vertex(source);
        let target = self.add_vertex(target);
        if !self.arcs.insert((source, target)) {
            return false;
        }
        self.successors[source].push(target);
        true
    }

    /// Returns the node index of `vertex`, if present.
    #[inline]
    pub fn node<Q>(&self, vertex: &Q) -> Option<usize>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.nodes.get(vertex).copied()
    }

    /// Returns true if `vertex` is in the graph.
    #[inline]
    pub fn contains<Q>(&self, vertex: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.nodes.contains_key(vertex)
    }

    /// Returns an iterator over the direct successors of `vertex`.
    ///
    /// The iterator is empty if `vertex` has no outgoing edges or is not in
    /// the graph.
    pub fn neighbors<Q>(&self, vertex: &Q) -> Neighbors<'_, V>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let succ: &[usize] = match self.node(vertex) {
            Some(node) => &self.successors[node],
            None => &[],
        };
        Neighbors {
            vertices: &self.vertices,
            iter: succ.iter(),
        }
    }
}

impl<V: Eq + Hash + Clone> Extend<(V, V)> for DiGraph<V> {
    fn extend<T: IntoIterator<Item = (V, V)>>(&mut self, iter: T) {
        for (source, target) in iter {
            self.add_edge(source, target);
        }
    }
}

impl<V> RandomAccessGraph for DiGraph<V> {
    #[inline(always)]
    fn num_nodes(&self) -> usize {
        self.vertices.len()
    }

    #[inline(always)]
    fn successors(&self, node: usize) -> &[usize] {
        &self.successors[node]
    }
}

/// The iterator returned by [`DiGraph::neighbors`].
#[derive(Debug, Clone)]
pub struct Neighbors<'a, V> {
    vertices: &'a [V],
    iter: std::slice::Iter<'a, usize>,
}

impl<'a, V> Iterator for Neighbors<'a, V> {
    type Item = &'a V;

    #[inline]
    fn next(&mut self) -> Option<&'a V> {
        self.iter.next().map(|&node| &self.vertices[node])
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<V> ExactSizeIterator for Neighbors<'_, V> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_indices_follow_insertion() {
        let mut graph = DiGraph::new();
        assert_eq!(graph.add_vertex("c"), 0);
        graph.add_edge("a", "b");
        assert_eq!(graph.add_vertex("a"), 1);
        assert_eq!(graph.node("b"), Some(2));
        assert_eq!(graph.node("z"), None);
        assert_eq!(graph.vertex(1), &"a");
        assert_eq!(graph.vertices().copied().collect::<Vec<_>>(), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_successor_lists() {
        let graph = DiGraph::from_arcs([(0, 1), (0, 2), (0, 1), (2, 2)]);
        assert_eq!(RandomAccessGraph::num_nodes(&graph), 3);
        assert_eq!(graph.successors(0), &[1, 2]);
        assert_eq!(graph.successors(1), &[] as &[usize]);
        assert_eq!(graph.successors(2), &[2]);
        assert_eq!(graph.neighbors(&0).len(), 2);
    }
}
