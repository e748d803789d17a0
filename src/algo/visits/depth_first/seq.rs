/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::algo::visits::{
    depth_first::{EventPred, FilterArgsPred},
    Sequential,
};
use crate::graph::RandomAccessGraph;
use dsi_progress_logger::ProgressLog;
use sealed::sealed;
use sux::bits::BitVec;

/// A depth-first visit that does not know which nodes are on the visit path.
pub type SeqPred<'a, G> = SeqIter<'a, KnownMarks, G>;

/// A depth-first visit that knows which nodes are on the visit path, and
/// thus can tell back arcs apart.
pub type SeqPath<'a, G> = SeqIter<'a, PathMarks, G>;

/// Sequential depth-first visits.
///
/// The visit keeps its own stack of frames, one for each node on
/// the visit path, so the depth of the graph is limited only by memory. Each
/// frame stores the node and the position of the next successor to examine
/// in its successor slice; the parent of a node is the node of the frame
/// below it.
///
/// Use one of the two type aliases rather than this type directly:
///
/// * [`SeqPred`] marks discovered nodes using one bit per node. It is
///   enough for a [topological sort](crate::algo::top_sort()).
/// * [`SeqPath`] uses a second bit per node to remember which nodes are
///   on the visit path, so [`Revisit`](EventPred::Revisit) events report
///   back arcs with `on_stack` set to true. It is used to test
///   [acyclicity](crate::algo::acyclicity()). With [`SeqPred`], `on_stack`
///   is always false.
///
/// After an interrupted visit, [`stack`](SeqIter::stack) returns the nodes
/// on the visit path at the moment of the interruption. The visit must then
/// be [reset](Sequential::reset) before being used again.
///
/// The progress logger is [updated](ProgressLog::light_update) after each
/// [postvisit event](EventPred::Postvisit).
///
/// # Examples
///
/// Looking for a back arc:
///
/// ```
/// use digraph_dfs::prelude::*;
/// use dsi_progress_logger::prelude::*;
///
/// let graph = DiGraph::from_arcs([(0, 1), (1, 2), (2, 0), (1, 3)]);
/// let mut visit = depth_first::SeqPath::new(&graph);
///
/// let res = visit.visit_all(
///     |event| match event {
///         depth_first::EventPred::Revisit { on_stack: true, .. } => Err(StoppedWhenDone),
///         _ => Ok(()),
///     },
///     no_logging![],
/// );
/// assert!(res.is_err());
/// // 2 -> 0 closes the cycle
/// assert_eq!(visit.stack().collect::<Vec<_>>(), vec![2, 1, 0]);
/// ```
///
/// Collecting nodes in order of completion, which on an acyclic graph is a
/// reversed topological sort:
///
/// ```
/// use digraph_dfs::prelude::*;
/// use dsi_progress_logger::prelude::*;
/// use std::convert::Infallible;
///
/// let graph = DiGraph::from_arcs([(0, 1), (1, 2), (1, 3), (0, 3)]);
/// let mut visit = depth_first::SeqPred::new(&graph);
/// let mut completed = vec![];
///
/// visit
///     .visit_all(
///         |event| {
///             if let depth_first::EventPred::Postvisit { curr, .. } = event {
///                 completed.push(curr);
///             }
///             Ok::<(), Infallible>(())
///         },
///         no_logging![],
///     )
///     .unwrap();
///
/// assert_eq!(completed, vec![2, 3, 1, 0]);
/// ```
pub struct SeqIter<'a, S, G: RandomAccessGraph> {
    graph: &'a G,
    path: Vec<Frame>,
    marks: S,
}

/// A node on the visit path.
#[derive(Debug, Clone, Copy)]
struct Frame {
    node: usize,
    /// Index in the successor slice of `node` of the next arc to follow.
    next: usize,
}

impl<'a, S: Marks, G: RandomAccessGraph> SeqIter<'a, S, G> {
    /// Creates a new visit of `graph`.
    pub fn new(graph: &'a G) -> SeqIter<'a, S, G> {
        Self {
            graph,
            path: Vec::with_capacity(16),
            marks: S::with_len(graph.num_nodes()),
        }
    }
}

impl<S, G: RandomAccessGraph> SeqIter<'_, S, G> {
    /// Returns the nodes on the visit path, from the most recently
    /// discovered one back to the root.
    ///
    /// The path is empty after a visit that ran to completion, so this is
    /// useful only after a callback interrupted the visit. If the
    /// interruption happened at a [`Previsit`](EventPred::Previsit) event,
    /// the node being previsited is not yet on the path.
    pub fn stack(&self) -> impl Iterator<Item = usize> + '_ {
        self.path.iter().rev().map(|frame| frame.node)
    }

    /// The parent of the node on top of the path (the root is its own
    /// parent).
    #[inline(always)]
    fn parent_of_top(&self) -> usize {
        let len = self.path.len();
        self.path[len.saturating_sub(2)].node
    }
}

/// Per-node marks used by [`SeqIter`].
#[doc(hidden)]
#[sealed]
pub trait Marks {
    fn with_len(num_nodes: usize) -> Self;
    fn is_known(&self, node: usize) -> bool;
    fn mark_known(&mut self, node: usize);
    fn on_path(&self, node: usize) -> bool;
    fn enter_path(&mut self, node: usize);
    fn leave_path(&mut self, node: usize);
    fn clear(&mut self);
}

/// Marks for [`SeqPred`]: discovered nodes only.
#[doc(hidden)]
pub struct KnownMarks {
    known: BitVec,
}

/// Marks for [`SeqPath`]: discovered nodes and nodes on the visit path.
#[doc(hidden)]
pub struct PathMarks {
    known: BitVec,
    on_path: BitVec,
}

#[sealed]
impl Marks for KnownMarks {
    fn with_len(num_nodes: usize) -> Self {
        KnownMarks {
            known: BitVec::new(num_nodes),
        }
    }
    #[inline(always)]
    fn is_known(&self, node: usize) -> bool {
        self.known.get(node)
    }
    #[inline(always)]
    fn mark_known(&mut self, node: usize) {
        self.known.set(node, true);
    }
    #[inline(always)]
    fn on_path(&self, _node: usize) -> bool {
        false
    }
    #[inline(always)]
    fn enter_path(&mut self, _node: usize) {}
    #[inline(always)]
    fn leave_path(&mut self, _node: usize) {}
    fn clear(&mut self) {
        self.known.reset();
    }
}

#[sealed]
impl Marks for PathMarks {
    fn with_len(num_nodes: usize) -> Self {
        PathMarks {
            known: BitVec::new(num_nodes),
            on_path: BitVec::new(num_nodes),
        }
    }
    #[inline(always)]
    fn is_known(&self, node: usize) -> bool {
        self.known.get(node)
    }
    #[inline(always)]
    fn mark_known(&mut self, node: usize) {
        self.known.set(node, true);
    }
    #[inline(always)]
    fn on_path(&self, node: usize) -> bool {
        self.on_path.get(node)
    }
    #[inline(always)]
    fn enter_path(&mut self, node: usize) {
        self.on_path.set(node, true);
    }
    #[inline(always)]
    fn leave_path(&mut self, node: usize) {
        self.on_path.set(node, false);
    }
    fn clear(&mut self) {
        self.known.reset();
        self.on_path.reset();
    }
}

impl<S: Marks, G: RandomAccessGraph> Sequential<EventPred> for SeqIter<'_, S, G> {
    fn visit_filtered<
        E,
        C: FnMut(EventPred) -> Result<(), E>,
        F: FnMut(FilterArgsPred) -> bool,
    >(
        &mut self,
        root: usize,
        mut callback: C,
        mut filter: F,
        pl: &mut impl ProgressLog,
    ) -> Result<(), E> {
        if self.marks.is_known(root)
            || !filter(FilterArgsPred {
                curr: root,
                pred: root,
                root,
                depth: 0,
            })
        {
            return Ok(());
        }

        callback(EventPred::Init { root })?;
        self.marks.mark_known(root);
        callback(EventPred::Previsit {
            curr: root,
            pred: root,
            root,
            depth: 0,
        })?;
        self.marks.enter_path(root);
        self.path.push(Frame {
            node: root,
            next: 0,
        });

        // Each iteration either follows one arc out of the node on top of
        // the path, or retreats from it when its successors are exhausted.
        // Successors of the top node are at depth path.len().
        while let Some(&Frame { node, next }) = self.path.last() {
            let depth = self.path.len();
            let Some(&succ) = self.graph.successors(node).get(next) else {
                callback(EventPred::Postvisit {
                    curr: node,
                    pred: self.parent_of_top(),
                    root,
                    depth: depth - 1,
                })?;
                pl.light_update();
                self.marks.leave_path(node);
                self.path.pop();
                continue;
            };

            if let Some(top) = self.path.last_mut() {
                top.next += 1;
            }

            if self.marks.is_known(succ) {
                callback(EventPred::Revisit {
                    curr: succ,
                    pred: node,
                    root,
                    depth,
                    on_stack: self.marks.on_path(succ),
                })?;
            } else if filter(FilterArgsPred {
                curr: succ,
                pred: node,
                root,
                depth,
            }) {
                self.marks.mark_known(succ);
                callback(EventPred::Previsit {
                    curr: succ,
                    pred: node,
                    root,
                    depth,
                })?;
                self.marks.enter_path(succ);
                self.path.push(Frame {
                    node: succ,
                    next: 0,
                });
            }
            // A rejected node stays unknown, so another arc may reach it
        }

        callback(EventPred::Done { root })
    }

    fn visit_all_filtered<
        E,
        C: FnMut(EventPred) -> Result<(), E>,
        F: FnMut(FilterArgsPred) -> bool,
    >(
        &mut self,
        mut callback: C,
        mut filter: F,
        pl: &mut impl ProgressLog,
    ) -> Result<(), E> {
        (0..self.graph.num_nodes())
            .try_for_each(|root| self.visit_filtered(root, &mut callback, &mut filter, pl))
    }

    fn reset(&mut self) {
        self.path.clear();
        self.marks.clear();
    }
}
