/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Generic directed graphs with depth-first visits.
//!
//! A [`DiGraph`](graph::DiGraph) stores vertices of any type that can be
//! hashed and compared for equality, interning them to dense node indices in
//! insertion order. Algorithms in [`algo`] work on node indices through the
//! [`RandomAccessGraph`](traits::RandomAccessGraph) trait, whereas the
//! visitor-style methods of [`DiGraph`](graph::DiGraph) map indices back to
//! vertices.
//!
//! ```
//! use digraph_dfs::prelude::*;
//! use std::convert::Infallible;
//!
//! let graph = DiGraph::from_arcs([("shirt", "tie"), ("tie", "jacket"), ("shirt", "belt")]);
//! let mut order = vec![];
//! graph
//!     .do_topological(|v| {
//!         order.push(*v);
//!         Ok::<_, Infallible>(())
//!     })
//!     .unwrap();
//! assert_eq!(order[0], "shirt");
//! ```

pub mod algo;
pub mod graph;

/// Module exposing all traits in a single level.
pub mod traits {
    use super::*;
    pub use algo::traits::*;
    pub use graph::RandomAccessGraph;
}

/// Use `use digraph_dfs::prelude::*;` to import common utilities, modules and
/// all traits.
pub mod prelude {
    use super::*;
    pub use algo::visits::depth_first;
    pub use algo::visits::{Sequential, StoppedWhenDone};
    pub use algo::{acyclicity, checked_top_sort, top_sort, CycleError};
    pub use graph::DiGraph;
    pub use traits::*;
}
