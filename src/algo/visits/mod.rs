/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Visits on graphs.
//!
//! Visits are driven by callbacks. Implementations of [`Sequential`] accept
//! a callback receiving events (e.g., [`depth_first::EventPred`]), and a
//! filter deciding whether a newly encountered node should be visited.
//!
//! Callbacks return a [`Result`]: the visit stops at the first error, which
//! is returned to the caller unchanged. The error type is chosen by the
//! caller: visits that cannot fail can use [`Infallible`], whereas visits
//! that just need to stop once they have found what they were looking for
//! can use [`StoppedWhenDone`].
//!
//! The same protocol is used by the vertex-level methods of
//! [`DiGraph`](crate::graph::DiGraph): vertex visitors have type
//! `FnMut(&V) -> Result<(), E>`, and edge visitors `FnMut(&V, &V) ->
//! Result<(), E>`.
//!
//! [`Infallible`]: std::convert::Infallible

pub mod depth_first;

use dsi_progress_logger::ProgressLog;
use thiserror::Error;

/// Types of events generated by a visit.
pub trait Event {
    /// The type of the argument passed to the filter.
    type FilterArgs;
}

/// An error that can be returned by a callback to stop a visit early.
///
/// This is useful when the callback has gathered all the information it
/// needs, as in the case of an [acyclicity test](crate::algo::acyclicity()).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("stopped when done")]
pub struct StoppedWhenDone;

/// A sequential visit.
///
/// Implementation of this trait must provide the
/// [`visit_filtered`](Sequential::visit_filtered) method, which should
/// perform a visit of a graph starting from a given node, and the
/// [`visit_all_filtered`](Sequential::visit_all_filtered) method, which
/// should perform a visit of the whole graph.
///
/// For each node, the visit invokes a callback with argument of type `A`,
/// returning a `Result`. The visit is interrupted as soon as the callback
/// returns an error, and the error is returned.
pub trait Sequential<A: Event> {
    /// Visits the graph from the specified node.
    ///
    /// # Arguments:
    /// * `root`: The node to start the visit from.
    ///
    /// * `callback`: The callback function.
    ///
    /// * `filter`: The filter function; nodes for which it returns false
    ///   are not visited (but they might be visited later through other
    ///   paths).
    ///
    /// * `pl`: A progress logger that implements
    ///   [`dsi_progress_logger::ProgressLog`] may be passed to the method to
    ///   log the progress of the visit. If `no_logging![]` is passed,
    ///   logging code should be optimized away by the compiler.
    fn visit_filtered<E, C: FnMut(A) -> Result<(), E>, F: FnMut(A::FilterArgs) -> bool>(
        &mut self,
        root: usize,
        callback: C,
        filter: F,
        pl: &mut impl ProgressLog,
    ) -> Result<(), E>;

    /// Visits the graph from the specified node without a filter.
    ///
    /// See [`visit_filtered`](Sequential::visit_filtered) for more details.
    fn visit<E, C: FnMut(A) -> Result<(), E>>(
        &mut self,
        root: usize,
        callback: C,
        pl: &mut impl ProgressLog,
    ) -> Result<(), E> {
        self.visit_filtered(root, callback, |_| true, pl)
    }

    /// Visits the whole graph.
    ///
    /// Visits are started from every node in increasing order; nodes that
    /// have already been visited are skipped.
    ///
    /// See [`visit_filtered`](Sequential::visit_filtered) for more details.
    fn visit_all_filtered<E, C: FnMut(A) -> Result<(), E>, F: FnMut(A::FilterArgs) -> bool>(
        &mut self,
        callback: C,
        filter: F,
        pl: &mut impl ProgressLog,
    ) -> Result<(), E>;

    /// Visits the whole graph without a filter.
    ///
    /// See [`visit_all_filtered`](Sequential::visit_all_filtered) for more
    /// details.
    fn visit_all<E, C: FnMut(A) -> Result<(), E>>(
        &mut self,
        callback: C,
        pl: &mut impl ProgressLog,
    ) -> Result<(), E> {
        self.visit_all_filtered(callback, |_| true, pl)
    }

    /// Resets the visit status, making it possible to reuse it.
    fn reset(&mut self);
}
