/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Graph storage.
//!
//! Algorithms access graphs through [`RandomAccessGraph`], which exposes
//! nodes as dense indices in `0..num_nodes()`. [`DiGraph`] implements it on
//! top of a hash-based store of arbitrary vertices.

mod di_graph;
pub use di_graph::*;

mod walks;

/// A graph whose successor lists can be accessed by node index.
///
/// Nodes are the integers in `0..num_nodes()`. Successor lists may contain
/// the node itself (a self-loop), but never contain duplicates.
pub trait RandomAccessGraph {
    /// Returns the number of nodes in the graph.
    fn num_nodes(&self) -> usize;

    /// Returns the successors of `node`.
    ///
    /// # Panics
    ///
    /// Implementations may panic if `node` is not smaller than
    /// [`num_nodes`](RandomAccessGraph::num_nodes).
    fn successors(&self, node: usize) -> &[usize];
}

impl<G: RandomAccessGraph + ?Sized> RandomAccessGraph for &G {
    #[inline(always)]
    fn num_nodes(&self) -> usize {
        (**self).num_nodes()
    }

    #[inline(always)]
    fn successors(&self, node: usize) -> &[usize] {
        (**self).successors(node)
    }
}
