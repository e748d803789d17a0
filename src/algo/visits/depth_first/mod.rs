/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Depth-first visits.
//!
//! Implementations must accept a callback function with argument
//! [`EventPred`]. The callback must be called at the [start of a
//! visit](EventPred::Init), [every time a new node is
//! discovered](EventPred::Previsit), [every time a node is
//! revisited](EventPred::Revisit), [every time the enumeration of the
//! successors of a node is completed](EventPred::Postvisit), and at the
//! [end of a visit](EventPred::Done).
//!
//! Note that since [`EventPred`] contains the predecessor of the visited
//! node, all post-start visit events can be interpreted as arc events. The
//! only exception are the previsit and postvisit events of the root.
//!
//! If previsit and postvisit events are numbered consecutively in the order
//! they are generated, the intervals of any two nodes are either disjoint
//! or nested (the parenthesis theorem). This holds also across the visit
//! trees of a [whole-graph visit](super::Sequential::visit_all), as each
//! tree is completed before the next one is started.

mod seq;
pub use seq::*;

/// Types of callback events generated during a depth-first visit
/// keeping track of parent nodes.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum EventPred {
    /// Initialization: the visit from `root` is starting. This event should
    /// be used to set up state at the start of the visit.
    Init {
        /// The root of the current visit tree.
        root: usize,
    },
    /// The node has been encountered for the first time: we are traversing a
    /// new tree arc, unless all fields are equal to the root.
    Previsit {
        /// The current node.
        curr: usize,
        /// The parent of [curr](`EventPred::Previsit::curr`) in the visit
        /// tree.
        pred: usize,
        /// The root of the current visit tree.
        root: usize,
        /// The depth of the visit, that is, the length of the visit path
        /// from the [root](`EventPred::Previsit::root`) to
        /// [curr](`EventPred::Previsit::curr`).
        depth: usize,
    },
    /// The node has been encountered before: we are traversing a back arc, a
    /// forward arc, or a cross arc.
    Revisit {
        /// The current node.
        curr: usize,
        /// The predecessor of [curr](`EventPred::Revisit::curr`), that is,
        /// the source of the arc being traversed.
        pred: usize,
        /// The root of the current visit tree.
        root: usize,
        /// The depth of the visit, that is, the length of the visit path
        /// from the [root](`EventPred::Revisit::root`) to
        /// [pred](`EventPred::Revisit::pred`) plus one.
        depth: usize,
        /// Whether the node is currently on the visit path, that is, if we
        /// are traversing a back arc. Visits not keeping track of the visit
        /// path always set this field to false.
        on_stack: bool,
    },
    /// The enumeration of the successors of the node has been completed: we
    /// are retreating from a tree arc, unless all fields are equal to the
    /// root.
    Postvisit {
        /// The current node.
        curr: usize,
        /// The parent of [curr](`EventPred::Postvisit::curr`) in the visit
        /// tree.
        pred: usize,
        /// The root of the current visit tree.
        root: usize,
        /// The depth of the visit, that is, the length of the visit path
        /// from the [root](`EventPred::Postvisit::root`) to
        /// [curr](`EventPred::Postvisit::curr`).
        depth: usize,
    },
    /// The visit from `root` has been completed.
    Done {
        /// The root of the current visit tree.
        root: usize,
    },
}

/// Filter arguments for visits that keep track of predecessors.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct FilterArgsPred {
    /// The node to be filtered.
    pub curr: usize,
    /// The predecessor of [curr](`Self::curr`).
    pub pred: usize,
    /// The root of the current visit tree.
    pub root: usize,
    /// The depth of the visit, that is, the length of the visit path from
    /// the [root](`Self::root`) to [curr](`Self::curr`).
    pub depth: usize,
}

impl super::Event for EventPred {
    type FilterArgs = FilterArgsPred;
}
