/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::acyclicity;
use crate::graph::RandomAccessGraph;
use dsi_progress_logger::prelude::*;

pub use super::visits::{Event, Sequential};

/// Convenience trait to test acyclicity directly on a graph.
///
/// See [`acyclicity`](super::acyclicity()) for the underlying function,
/// which also accepts a progress logger.
pub trait Acyclicity {
    /// Returns true if the graph contains no cycles (including self-loops).
    fn is_acyclic(&self) -> bool;
}

impl<G: RandomAccessGraph> Acyclicity for G {
    fn is_acyclic(&self) -> bool {
        acyclicity(self, no_logging![])
    }
}
