/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::algo::visits::{depth_first::*, Sequential, StoppedWhenDone};
use crate::graph::RandomAccessGraph;
use dsi_progress_logger::ProgressLog;

/// Returns whether the graph is acyclic.
///
/// This method uses a [three-state depth-first visit](SeqPath) and stops as
/// soon as a back arc, that is, an arc towards a node on the visit path, is
/// found. Self-loops are back arcs, so a graph with a self-loop is not
/// acyclic.
pub fn acyclicity(graph: impl RandomAccessGraph, pl: &mut impl ProgressLog) -> bool {
    let num_nodes = graph.num_nodes();
    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Checking acyclicity");

    let mut visit = SeqPath::new(&graph);

    let acyclic = visit.visit_all(
        |event| {
            // Stop the visit as soon as a back arc is found
            match event {
                EventPred::Revisit { on_stack: true, .. } => Err(StoppedWhenDone {}),
                _ => Ok(()),
            }
        },
        pl,
    );

    pl.done();
    acyclic.is_ok()
}
