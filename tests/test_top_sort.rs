/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use digraph_dfs::prelude::*;
use dsi_progress_logger::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use std::convert::Infallible;

fn topological<V: Clone>(graph: &DiGraph<V>) -> Vec<V> {
    let mut order = vec![];
    graph
        .do_topological(|v| {
            order.push(v.clone());
            Ok::<_, Infallible>(())
        })
        .unwrap();
    order
}

/// Checks that every edge goes forward, ignoring self-loops.
fn assert_topological<V: Clone + Eq + std::hash::Hash + std::fmt::Debug>(
    graph: &DiGraph<V>,
    order: &[V],
) {
    assert_eq!(order.len(), graph.num_nodes());
    let pos = order
        .iter()
        .enumerate()
        .map(|(i, v)| (v.clone(), i))
        .collect::<HashMap<_, _>>();
    assert_eq!(pos.len(), graph.num_nodes());
    graph
        .do_edges(|s, t| {
            assert!(s == t || pos[s] < pos[t], "{:?} -> {:?} goes backwards", s, t);
            Ok::<_, Infallible>(())
        })
        .unwrap();
}

/// A random DAG: arcs go from smaller to larger vertices, but vertices are
/// inserted in random order.
fn random_dag(num_nodes: usize, num_arcs: usize, seed: u64) -> DiGraph<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = DiGraph::new();
    for _ in 0..num_arcs {
        let x = rng.random_range(0..num_nodes);
        let y = rng.random_range(0..num_nodes);
        if x != y {
            graph.add_edge(x.min(y), x.max(y));
        }
    }
    graph
}

#[test]
fn test_chain() {
    let graph = DiGraph::from_arcs([(1, 2), (2, 3), (3, 4)]);
    assert_eq!(topological(&graph), vec![1, 2, 3, 4]);

    // Insertion order does not matter
    let graph = DiGraph::from_arcs([(3, 4), (2, 3), (1, 2)]);
    assert_eq!(topological(&graph), vec![1, 2, 3, 4]);
}

#[test]
fn test_diamond() {
    let graph = DiGraph::from_arcs([(1_usize, 2), (1, 3), (2, 4), (3, 4)]);
    let order = topological(&graph);
    let mut when = [0; 5];
    for (time, &v) in order.iter().enumerate() {
        when[v] = time;
    }
    assert!(when[1] < when[2] && when[1] < when[3] && when[2] < when[4] && when[3] < when[4]);
    assert_topological(&graph, &order);
    assert_eq!(order, vec![1, 3, 2, 4]);
}

#[test]
fn test_top_sort() {
    assert_eq!(
        vec![0, 1, 2].into_boxed_slice(),
        top_sort(&DiGraph::from_arcs([(0, 1), (1, 2)]), no_logging![])
    );

    assert_eq!(
        vec![0, 1, 2].into_boxed_slice(),
        top_sort(&DiGraph::from_arcs([(0, 1), (1, 2), (2, 0)]), no_logging![])
    );

    assert_eq!(
        vec![0, 2, 1, 3].into_boxed_slice(),
        top_sort(
            &DiGraph::from_arcs([(0, 1), (0, 2), (2, 3), (1, 3)]),
            no_logging![]
        )
    );
}

#[test]
fn test_cycles_are_tolerated() {
    let graph = DiGraph::from_arcs([(1, 2), (2, 1)]);
    assert_eq!(topological(&graph), vec![1, 2]);

    // The vertices outside the cycle are still ordered correctly
    let graph = DiGraph::from_arcs([(0, 1), (1, 2), (2, 1), (2, 3), (3, 3)]);
    let order = topological(&graph);
    assert_eq!(order, vec![0, 1, 2, 3]);
    assert_eq!(graph.topological_order(), order);
}

#[test]
fn test_self_loops() {
    let graph = DiGraph::from_arcs([("b", "b"), ("a", "b"), ("a", "a")]);
    let order = topological(&graph);
    assert_topological(&graph, &order);
    assert_eq!(order, vec!["a", "b"]);
}

#[test]
fn test_fail_fast() {
    let graph = DiGraph::from_arcs([(1, 2), (2, 3), (3, 4)]);
    let mut emitted = vec![];
    let result = graph.do_topological(|&v| {
        emitted.push(v);
        if v == 2 {
            Err(v * 10)
        } else {
            Ok(())
        }
    });
    assert_eq!(result, Err(20));
    assert_eq!(emitted, vec![1, 2]);
}

#[test]
fn test_random_dags() {
    for seed in 0..10 {
        let graph = random_dag(100, 300, seed);
        assert!(graph.is_acyclic());
        let order = topological(&graph);
        assert_topological(&graph, &order);
        assert_eq!(graph.checked_topological_order(), Ok(order));
    }
}

#[cfg_attr(not(feature = "slow_tests"), ignore)]
#[test]
fn test_large_random_dags() {
    for seed in 0..3 {
        let graph = random_dag(10_000, 50_000, seed);
        assert_topological(&graph, &topological(&graph));
    }
}

#[test]
fn test_acyclicity() {
    let graph = DiGraph::from_arcs([(1, 2), (0, 1)]);

    assert!(acyclicity(&graph, no_logging![]));
    assert!(graph.is_acyclic());

    let graph = DiGraph::from_arcs([(0, 1), (1, 2), (2, 0)]);

    assert!(!acyclicity(&graph, no_logging![]));
    assert!(!graph.is_acyclic());

    let graph = DiGraph::from_arcs([(0, 1), (0, 2), (2, 3), (1, 3)]);

    assert!(acyclicity(&graph, no_logging![]));
    assert!(graph.is_acyclic());

    let graph = DiGraph::from_arcs([(0, 1), (1, 1)]);

    assert!(!graph.is_acyclic());
}

#[test]
fn test_checked_top_sort() {
    let graph = DiGraph::from_arcs([(0, 1), (0, 2), (2, 3), (1, 3)]);
    assert_eq!(
        checked_top_sort(&graph, no_logging![]),
        Ok(top_sort(&graph, no_logging![]))
    );

    let graph = DiGraph::from_arcs([("u", "v"), ("v", "w"), ("w", "x"), ("x", "v")]);
    let err = graph.checked_topological_order().unwrap_err();
    assert_eq!(err.cycle, vec!["v", "w", "x"]);
    assert_eq!(
        err.to_string(),
        "the graph is not acyclic (found a cycle of length 3)"
    );

    let graph = DiGraph::from_arcs([(7, 7)]);
    assert_eq!(
        graph.checked_topological_order(),
        Err(CycleError { cycle: vec![7] })
    );
}
