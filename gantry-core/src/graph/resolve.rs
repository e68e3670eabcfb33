//! Cycle Detection and Build Ordering
//!
//! This module certifies that the dependency relation is acyclic and
//! computes the order in which build units must be processed so that
//! every dependency is built before its dependents.
//!
//! # Cycle Detection
//!
//! Depth-first search over every registered node, in registration order,
//! with three-state marking:
//!
//! 1. Unvisited nodes are in neither set.
//! 2. In-progress nodes sit on the current DFS path (`in_progress` set
//!    plus an explicit `stack` that records the path itself).
//! 3. Done nodes are in `visited` but no longer in progress; a root
//!    already finished by an earlier traversal is skipped, so the whole
//!    pass is O(V + E).
//!
//! An edge into an in-progress node closes a loop; the reported path is
//! the slice of the stack from that node onward, with the entry name
//! repeated at the end. An edge to an unregistered name stops the
//! traversal immediately with `UnresolvedDependency`, which is a
//! distinct failure from a cycle. When several disjoint cycles exist,
//! exactly one is reported: the first found in traversal order.
//!
//! # Build Ordering
//!
//! Kahn's algorithm over a graph already certified acyclic:
//!
//! 1. Count each node's unsatisfied dependencies.
//! 2. Keep every currently emittable node (count zero) in a min-heap
//!    keyed by name.
//! 3. Repeatedly emit the lexicographically smallest ready name and
//!    decrement its dependents' counts.
//!
//! The lexicographic tie-break makes the output a function of the graph
//! alone, independent of registration order, which keeps builds
//! reproducible and test assertions stable.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use tracing::debug;

use super::error::{GraphError, GraphResult};
use super::node::Node;
use super::store::DependencyGraph;

impl DependencyGraph {
    /// Check the dependency relation for cycles and unresolved names.
    ///
    /// Returns `Ok(())` when every declared dependency resolves to a
    /// registered module and no dependency chain loops back on itself.
    /// Otherwise returns the first [`GraphError::Cycle`] or
    /// [`GraphError::UnresolvedDependency`] found in traversal order.
    pub fn detect_cycle(&self) -> GraphResult<()> {
        let mut visited: HashSet<&str> = HashSet::new();
        let mut in_progress: HashSet<&str> = HashSet::new();
        let mut stack: Vec<&str> = Vec::new();

        for (name, node) in &self.nodes {
            if !visited.contains(name.as_str()) {
                self.visit(name, node, &mut visited, &mut in_progress, &mut stack)?;
            }
        }

        debug!(
            modules = self.len(),
            edges = self.edge_count(),
            "dependency graph is acyclic"
        );
        Ok(())
    }

    /// DFS helper for cycle detection.
    fn visit<'a>(
        &'a self,
        name: &'a str,
        node: &'a Node,
        visited: &mut HashSet<&'a str>,
        in_progress: &mut HashSet<&'a str>,
        stack: &mut Vec<&'a str>,
    ) -> GraphResult<()> {
        visited.insert(name);
        in_progress.insert(name);
        stack.push(name);

        for dep in node.dependencies() {
            let dep_node = match self.nodes.get(dep) {
                Some(dep_node) => dep_node,
                None => {
                    return Err(GraphError::UnresolvedDependency {
                        from: name.to_string(),
                        missing: dep.clone(),
                    });
                }
            };

            if in_progress.contains(dep.as_str()) {
                return Err(GraphError::Cycle {
                    path: close_cycle(stack, dep),
                });
            }
            if !visited.contains(dep.as_str()) {
                self.visit(dep, dep_node, visited, in_progress, stack)?;
            }
        }

        stack.pop();
        in_progress.remove(name);
        Ok(())
    }

    /// Compute a build order in which every dependency precedes its
    /// dependents.
    ///
    /// The graph is re-checked with [`detect_cycle`] first, so a cyclic
    /// or unresolved graph yields the same precise diagnostic here as it
    /// does there. On success the returned sequence contains every
    /// registered module exactly once, with ties broken by picking the
    /// lexicographically smallest emittable name.
    ///
    /// [`detect_cycle`]: Self::detect_cycle
    pub fn topological_order(&self) -> GraphResult<Vec<String>> {
        self.detect_cycle()?;

        // Unsatisfied-dependency counts, and the reverse adjacency used
        // to decrement them. The reverse view is rebuilt per call; the
        // store keeps no persistent reverse index.
        let mut remaining: HashMap<&str, usize> = HashMap::with_capacity(self.nodes.len());
        let mut dependents: HashMap<&str, Vec<&str>> = HashMap::new();
        for (name, node) in &self.nodes {
            remaining.insert(name, node.dependencies().len());
            for dep in node.dependencies() {
                dependents.entry(dep.as_str()).or_default().push(name);
            }
        }

        // Min-heap of currently emittable modules, smallest name first.
        let mut ready: BinaryHeap<Reverse<&str>> = BinaryHeap::new();
        for (name, node) in &self.nodes {
            if node.dependencies().is_empty() {
                ready.push(Reverse(name.as_str()));
            }
        }

        let mut order: Vec<String> = Vec::with_capacity(self.nodes.len());
        while let Some(Reverse(name)) = ready.pop() {
            order.push(name.to_string());

            if let Some(list) = dependents.get(name) {
                for &dependent in list {
                    if let Some(count) = remaining.get_mut(dependent) {
                        *count -= 1;
                        if *count == 0 {
                            ready.push(Reverse(dependent));
                        }
                    }
                }
            }
        }

        // Modules left unemitted are blocked on each other. The cycle
        // check above makes this unreachable; it stays as a terminating
        // failure path for the raw Kahn pass.
        if order.len() != self.nodes.len() {
            let emitted: HashSet<&str> = order.iter().map(String::as_str).collect();
            let path: Vec<String> = self
                .nodes
                .keys()
                .filter(|name| !emitted.contains(name.as_str()))
                .cloned()
                .collect();
            return Err(GraphError::Cycle { path });
        }

        debug!(modules = order.len(), "computed build order");
        Ok(order)
    }
}

/// Slice the DFS stack from the first occurrence of `entry` and close
/// the loop by repeating the entry name at the end.
fn close_cycle(stack: &[&str], entry: &str) -> Vec<String> {
    let start = stack
        .iter()
        .position(|name| *name == entry)
        .expect("cycle entry is on the in-progress stack");
    let mut path: Vec<String> = stack[start..].iter().map(|name| name.to_string()).collect();
    path.push(entry.to_string());
    path
}
