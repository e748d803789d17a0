/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::DiGraph;
use crate::algo::visits::depth_first::{EventPred, SeqPred};
use crate::algo::visits::Sequential;
use crate::algo::{checked_top_sort, top_sort, CycleError};
use dsi_progress_logger::prelude::*;

impl<V> DiGraph<V> {
    /// Performs a depth-first visit of the whole graph.
    ///
    /// Every vertex is discovered exactly once, no matter whether it is
    /// reachable from other vertices: roots are tried in node-index order,
    /// and successors in insertion order. `on_discover` is called when a
    /// vertex is reached for the first time, and `on_finish` when all its
    /// successors have been enumerated. Successors that have already been
    /// discovered (including the vertex itself, in the case of a self-loop)
    /// are skipped, so the visit terminates on cyclic graphs.
    ///
    /// If discovery and finish events are numbered consecutively, the
    /// resulting intervals of any two vertices are either disjoint or nested
    /// (the parenthesis theorem).
    ///
    /// The visit stops at the first error returned by a callback, and the
    /// error is returned.
    ///
    /// The visit is iterative, so its depth is not limited by the stack
    /// size.
    ///
    /// # Examples
    ///
    /// ```
    /// use digraph_dfs::graph::DiGraph;
    /// use std::convert::Infallible;
    ///
    /// let graph = DiGraph::from_arcs([(1, 2), (2, 1), (3, 3)]);
    /// let mut events = vec![];
    /// let mut finished = vec![];
    /// graph
    ///     .do_depth_first(
    ///         |&v| {
    ///             events.push(v);
    ///             Ok::<_, Infallible>(())
    ///         },
    ///         |&v| {
    ///             finished.push(v);
    ///             Ok(())
    ///         },
    ///     )
    ///     .unwrap();
    /// assert_eq!(events, vec![1, 2, 3]);
    /// assert_eq!(finished, vec![2, 1, 3]);
    /// ```
    pub fn do_depth_first<E>(
        &self,
        mut on_discover: impl FnMut(&V) -> Result<(), E>,
        mut on_finish: impl FnMut(&V) -> Result<(), E>,
    ) -> Result<(), E> {
        let mut visit = SeqPred::new(self);
        visit.visit_all(
            |event| match event {
                EventPred::Previsit { curr, .. } => on_discover(self.vertex(curr)),
                EventPred::Postvisit { curr, .. } => on_finish(self.vertex(curr)),
                _ => Ok(()),
            },
            no_logging![],
        )
    }

    /// Calls `visitor` on every vertex in reverse order of depth-first
    /// finish.
    ///
    /// If the graph is acyclic, the order is topological: for every edge,
    /// the source is passed to `visitor` before the target. Cycles are not
    /// detected: on a cyclic graph the order is still the reverse finish
    /// order, which is not topological for the edges along cycles. Use
    /// [`checked_topological_order`](DiGraph::checked_topological_order)
    /// to reject cyclic graphs.
    ///
    /// The enumeration stops at the first error returned by `visitor`, and
    /// the error is returned.
    pub fn do_topological<E>(&self, mut visitor: impl FnMut(&V) -> Result<(), E>) -> Result<(), E> {
        for &node in top_sort(self, no_logging![]).iter() {
            visitor(self.vertex(node))?;
        }
        Ok(())
    }
}

impl<V: Clone> DiGraph<V> {
    /// Returns the vertices in the order used by
    /// [`do_topological`](DiGraph::do_topological).
    pub fn topological_order(&self) -> Vec<V> {
        top_sort(self, no_logging![])
            .iter()
            .map(|&node| self.vertex(node).clone())
            .collect()
    }

    /// Returns the vertices in topological order, or a cycle if the graph is
    /// not acyclic.
    ///
    /// On acyclic graphs the order is the same of
    /// [`topological_order`](DiGraph::topological_order).
    ///
    /// # Examples
    ///
    /// ```
    /// use digraph_dfs::graph::DiGraph;
    ///
    /// let graph = DiGraph::from_arcs([("a", "b"), ("b", "c"), ("c", "b")]);
    /// let err = graph.checked_topological_order().unwrap_err();
    /// assert_eq!(err.cycle, vec!["b", "c"]);
    /// ```
    pub fn checked_topological_order(&self) -> Result<Vec<V>, CycleError<V>> {
        match checked_top_sort(self, no_logging![]) {
            Ok(top_sort) => Ok(top_sort
                .iter()
                .map(|&node| self.vertex(node).clone())
                .collect()),
            Err(CycleError { cycle }) => Err(CycleError {
                cycle: cycle
                    .into_iter()
                    .map(|node| self.vertex(node).clone())
                    .collect(),
            }),
        }
    }
}
