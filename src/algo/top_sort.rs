/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::algo::visits::{depth_first::*, Sequential, StoppedWhenDone};
use crate::graph::RandomAccessGraph;
use dsi_progress_logger::ProgressLog;
use std::convert::Infallible;

/// The error returned by [`checked_top_sort`] when the graph is not acyclic.
///
/// The cycle is listed in arc order: there is an arc from each element to
/// the next, and from the last element to the first. A self-loop yields a
/// cycle of length one.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("the graph is not acyclic (found a cycle of length {})", .cycle.len())]
pub struct CycleError<N> {
    /// The nodes on the cycle.
    pub cycle: Vec<N>,
}

/// Returns the node of the graph in topological-sort order, if the graph is
/// acyclic.
///
/// Otherwise, the order is just the reverse of the order of completion of
/// a depth-first visit, that is, nodes whose successors are enumerated
/// later come first. Cycles are not detected: use [`checked_top_sort`] if
/// you need to know whether the result is a topological sort.
///
/// Roots of the visit are tried in node-index order.
pub fn top_sort(graph: impl RandomAccessGraph, pl: &mut impl ProgressLog) -> Box<[usize]> {
    let num_nodes = graph.num_nodes();
    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Computing topological sort");

    let mut visit = SeqPred::new(&graph);
    let mut top_sort = vec![0; num_nodes].into_boxed_slice();
    let mut pos = num_nodes;

    let result = visit.visit_all(
        |event| {
            if let EventPred::Postvisit { curr, .. } = event {
                pos -= 1;
                top_sort[pos] = curr;
            }
            Ok::<(), Infallible>(())
        },
        pl,
    );
    if let Err(never) = result {
        match never {}
    }

    pl.done();
    top_sort
}

/// Returns the nodes of the graph in topological-sort order, or a cycle if
/// the graph is not acyclic.
///
/// On acyclic graphs the result is the same of [`top_sort`]. Otherwise,
/// the visit stops at the first back arc and the returned error contains
/// the cycle formed by the back arc and the visit path.
pub fn checked_top_sort(
    graph: impl RandomAccessGraph,
    pl: &mut impl ProgressLog,
) -> Result<Box<[usize]>, CycleError<usize>> {
    let num_nodes = graph.num_nodes();
    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Computing checked topological sort");

    let mut visit = SeqPath::new(&graph);
    let mut top_sort = vec![0; num_nodes].into_boxed_slice();
    let mut pos = num_nodes;
    // The endpoints of the back arc, if any
    let mut back_arc = None;

    let result = visit.visit_all(
        |event| {
            match event {
                EventPred::Revisit {
                    curr,
                    pred,
                    on_stack: true,
                    ..
                } => {
                    back_arc = Some((pred, curr));
                    return Err(StoppedWhenDone {});
                }
                EventPred::Postvisit { curr, .. } => {
                    pos -= 1;
                    top_sort[pos] = curr;
                }
                _ => {}
            }
            Ok(())
        },
        pl,
    );

    pl.done();

    match (result, back_arc) {
        (Err(StoppedWhenDone {}), Some((pred, curr))) => {
            // The path runs from pred, on top, back down to curr
            debug_assert_eq!(visit.stack().next(), Some(pred));
            let mut cycle = vec![];
            for node in visit.stack() {
                cycle.push(node);
                if node == curr {
                    break;
                }
            }
            cycle.reverse();
            Err(CycleError { cycle })
        }
        _ => Ok(top_sort),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DiGraph;
    use dsi_progress_logger::prelude::*;

    #[test]
    fn test_cycle_is_in_arc_order() {
        let graph = DiGraph::from_arcs([(0, 1), (1, 2), (2, 3), (3, 1)]);
        assert_eq!(
            checked_top_sort(&graph, no_logging![]),
            Err(CycleError {
                cycle: vec![1, 2, 3]
            })
        );
    }

    #[test]
    fn test_self_loop_cycle() {
        let graph = DiGraph::from_arcs([(0, 1), (1, 1)]);
        assert_eq!(
            checked_top_sort(&graph, no_logging![]),
            Err(CycleError { cycle: vec![1] })
        );
        // The permissive version ignores the self-loop
        assert_eq!(top_sort(&graph, no_logging![]), vec![0, 1].into_boxed_slice());
    }

    #[test]
    fn test_empty_graph() {
        let graph = DiGraph::<u8>::new();
        assert!(top_sort(&graph, no_logging![]).is_empty());
        assert_eq!(checked_top_sort(&graph, no_logging![]), Ok(Box::default()));
    }
}
