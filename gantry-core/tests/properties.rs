//! Property-based tests using proptest.
//!
//! Invariants that must hold for any dependency graph, not just the
//! hand-written cases in the unit and integration suites.

use gantry_core::{DependencyGraph, GraphError};
use proptest::prelude::*;

const NODE_COUNT: usize = 12;

fn module_name(i: usize) -> String {
    format!("mod_{i:02}")
}

/// Builds a graph over `NODE_COUNT` registered modules where every edge
/// points from a higher-numbered module to a lower-numbered one, so the
/// result is acyclic by construction. Self-pairs are skipped; duplicate
/// pairs rely on edge insertion being idempotent.
fn layered_graph(edges: &[(usize, usize)]) -> DependencyGraph {
    let mut graph = DependencyGraph::new();
    for i in 0..NODE_COUNT {
        graph.register(&module_name(i), &[]).unwrap();
    }
    for &(a, b) in edges {
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        if lo == hi {
            continue;
        }
        graph
            .add_dependency(&module_name(hi), &module_name(lo))
            .unwrap();
    }
    graph
}

proptest! {
    // ========================================================================
    // Ordering Properties
    // ========================================================================

    /// Test that any acyclic graph validates and orders into a
    /// dependency-respecting permutation of its modules.
    #[test]
    fn acyclic_graphs_order_completely(
        edges in prop::collection::vec((0usize..NODE_COUNT, 0usize..NODE_COUNT), 0..40)
    ) {
        let graph = layered_graph(&edges);
        prop_assert!(graph.detect_cycle().is_ok());

        let order = graph.topological_order().unwrap();

        // Exactly the registered modules, each once.
        prop_assert_eq!(order.len(), graph.len());
        let mut sorted = order.clone();
        sorted.sort();
        let mut names: Vec<String> = graph.names().map(str::to_string).collect();
        names.sort();
        prop_assert_eq!(sorted, names);

        // Every edge is respected: the dependency comes first.
        for &(a, b) in &edges {
            let (lo, hi) = if a < b { (a, b) } else { (b, a) };
            if lo == hi {
                continue;
            }
            let lo_pos = order.iter().position(|n| *n == module_name(lo)).unwrap();
            let hi_pos = order.iter().position(|n| *n == module_name(hi)).unwrap();
            prop_assert!(lo_pos < hi_pos);
        }
    }

    /// Test that the computed order depends only on the edge set, never
    /// on the sequence modules were registered in.
    #[test]
    fn order_ignores_registration_sequence(
        edges in prop::collection::vec((0usize..NODE_COUNT, 0usize..NODE_COUNT), 0..40),
        shuffled in Just((0..NODE_COUNT).collect::<Vec<usize>>()).prop_shuffle(),
    ) {
        let forward = layered_graph(&edges);

        let mut scrambled = DependencyGraph::new();
        for &i in &shuffled {
            scrambled.register(&module_name(i), &[]).unwrap();
        }
        for &(a, b) in &edges {
            let (lo, hi) = if a < b { (a, b) } else { (b, a) };
            if lo == hi {
                continue;
            }
            scrambled
                .add_dependency(&module_name(hi), &module_name(lo))
                .unwrap();
        }

        prop_assert_eq!(
            forward.topological_order().unwrap(),
            scrambled.topological_order().unwrap()
        );
    }

    /// Test that nothing in the order transitively depends on a module
    /// placed after it.
    #[test]
    fn reachability_agrees_with_order(
        edges in prop::collection::vec((0usize..NODE_COUNT, 0usize..NODE_COUNT), 0..40)
    ) {
        let graph = layered_graph(&edges);
        let order = graph.topological_order().unwrap();

        for (i, name) in order.iter().enumerate() {
            for later in &order[i + 1..] {
                prop_assert!(!graph.depends_on(name, later));
            }
        }
    }

    // ========================================================================
    // Cycle and Resolution Properties
    // ========================================================================

    /// Test that a graph seeded with a ring always fails validation with
    /// a well-formed cycle path: closed, and walking real edges.
    #[test]
    fn cycles_are_always_detected(
        len in 2usize..8,
        extra in prop::collection::vec((0usize..8, 0usize..8), 0..10),
    ) {
        let mut graph = DependencyGraph::new();
        for i in 0..8 {
            graph.register(&module_name(i), &[]).unwrap();
        }
        // Ring over the first `len` modules.
        for i in 0..len {
            graph
                .add_dependency(&module_name(i), &module_name((i + 1) % len))
                .unwrap();
        }
        // Extra edges may add more cycles; any report stays valid.
        for &(a, b) in &extra {
            if a != b {
                graph
                    .add_dependency(&module_name(a), &module_name(b))
                    .unwrap();
            }
        }

        let err = graph.detect_cycle().unwrap_err();
        match err {
            GraphError::Cycle { path } => {
                prop_assert!(path.len() >= 2);
                prop_assert_eq!(path.first(), path.last());
                for pair in path.windows(2) {
                    let node = graph.get(&pair[0]).unwrap();
                    prop_assert!(
                        node.depends_directly_on(&pair[1]),
                        "path edge {} -> {} is not declared",
                        pair[0],
                        pair[1]
                    );
                }
            }
            other => prop_assert!(false, "expected cycle, got {:?}", other),
        }
    }

    /// Test that a dangling edge in an otherwise acyclic graph is
    /// reported as unresolved, never as a cycle or a silent pass.
    #[test]
    fn dangling_edges_are_unresolved_not_cyclic(
        edges in prop::collection::vec((0usize..NODE_COUNT, 0usize..NODE_COUNT), 0..40),
        broken in 0usize..NODE_COUNT,
    ) {
        let mut graph = layered_graph(&edges);
        graph.add_dependency(&module_name(broken), "zz_missing").unwrap();

        let expected = GraphError::UnresolvedDependency {
            from: module_name(broken),
            missing: "zz_missing".to_string(),
        };
        prop_assert_eq!(graph.detect_cycle().unwrap_err(), expected.clone());
        prop_assert_eq!(graph.topological_order().unwrap_err(), expected);
    }

    // ========================================================================
    // Query Properties
    // ========================================================================

    /// Test that reachability along a chain is exactly "higher index
    /// reaches lower index".
    #[test]
    fn chains_are_transitively_reachable(len in 2usize..16) {
        let mut graph = DependencyGraph::new();
        graph.register(&module_name(0), &[]).unwrap();
        for i in 1..len {
            let prev = module_name(i - 1);
            graph.register(&module_name(i), &[prev.as_str()]).unwrap();
        }

        for i in 0..len {
            for j in 0..len {
                prop_assert_eq!(
                    graph.depends_on(&module_name(i), &module_name(j)),
                    i > j
                );
            }
        }
    }

    // ========================================================================
    // Robustness
    // ========================================================================

    /// Test that arbitrary registration input yields errors, never
    /// panics, and leaves the store queryable.
    #[test]
    fn registration_never_panics(
        name in "[ -~]{0,16}",
        deps in prop::collection::vec("[ -~]{0,8}", 0..6),
    ) {
        let mut graph = DependencyGraph::new();
        let dep_refs: Vec<&str> = deps.iter().map(String::as_str).collect();
        let _ = graph.register(&name, &dep_refs);
        let _ = graph.detect_cycle();
        let _ = graph.topological_order();
    }

    /// Test that re-registering any name fails and leaves the original
    /// dependency list untouched.
    #[test]
    fn duplicate_names_are_always_rejected(
        suffix in "[a-z0-9]{1,12}",
        deps in prop::collection::vec("[a-z]{1,8}", 0..4),
    ) {
        let name = format!("unit_{suffix}");
        let dep_names: Vec<String> = deps.iter().map(|d| format!("dep_{d}")).collect();
        let dep_refs: Vec<&str> = dep_names.iter().map(String::as_str).collect();

        let mut graph = DependencyGraph::new();
        graph.register(&name, &dep_refs).unwrap();
        let before: Vec<String> = graph.direct_dependencies(&name).unwrap().to_vec();

        let err = graph.register(&name, &["anything"]).unwrap_err();
        prop_assert_eq!(err, GraphError::DuplicateNode { name: name.clone() });
        prop_assert_eq!(graph.direct_dependencies(&name).unwrap().to_vec(), before);
        prop_assert_eq!(graph.len(), 1);
    }
}
