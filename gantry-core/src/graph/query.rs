//! Reachability Queries
//!
//! Read-only views over the dependency relation: transitive
//! reachability, the derived dependents index, and the root/leaf sets.
//!
//! # Design Decisions
//!
//! 1. **No persistent reverse index.** `dependents_of` is computed by
//!    scanning every registered node and asking [`depends_on`] for each.
//!    Graphs in the target domain are small, so the derived view is
//!    recomputed on demand instead of being maintained on every edge
//!    insert.
//!
//! 2. **Reachability is not reflexive.** `depends_on(a, a)` is false
//!    unless some dependency chain actually leads from `a` back to
//!    itself. Traversal starts at `a`'s direct dependencies, never at
//!    `a`.
//!
//! 3. **Unresolved names are endpoints.** A declared dependency that was
//!    never registered is still reachable (the edge to it exists), but
//!    it has no outgoing edges to follow. Queries never fail on
//!    unresolved names; that is the job of
//!    [`detect_cycle`](super::DependencyGraph::detect_cycle).
//!
//! [`depends_on`]: super::DependencyGraph::depends_on

use std::collections::{HashSet, VecDeque};

use super::error::{GraphError, GraphResult};
use super::store::DependencyGraph;

impl DependencyGraph {
    /// Whether `target` is reachable from `name` via one or more
    /// dependency edges.
    ///
    /// Returns `false` when `name` is unregistered: an unknown module
    /// has no outgoing edges, so nothing is reachable from it.
    pub fn depends_on(&self, name: &str, target: &str) -> bool {
        let start = match self.nodes.get(name) {
            Some(node) => node,
            None => return false,
        };

        let mut queue: VecDeque<&str> = start.dependencies().iter().map(String::as_str).collect();
        let mut seen: HashSet<&str> = queue.iter().copied().collect();

        while let Some(current) = queue.pop_front() {
            if current == target {
                return true;
            }
            // Unresolved names are reachable endpoints with no outgoing
            // edges to follow.
            if let Some(node) = self.nodes.get(current) {
                for dep in node.dependencies() {
                    if seen.insert(dep.as_str()) {
                        queue.push_back(dep.as_str());
                    }
                }
            }
        }

        false
    }

    /// Every registered module that transitively depends on `target`,
    /// in registration order.
    pub fn dependents_of(&self, target: &str) -> Vec<String> {
        self.nodes
            .keys()
            .filter(|name| self.depends_on(name.as_str(), target))
            .cloned()
            .collect()
    }

    /// The declared dependency list for `name`, in declaration order.
    pub fn direct_dependencies(&self, name: &str) -> GraphResult<&[String]> {
        let node = self
            .nodes
            .get(name)
            .ok_or_else(|| GraphError::UnknownNode {
                name: name.to_string(),
            })?;
        Ok(node.dependencies())
    }

    /// Modules that declare no dependencies, in registration order.
    ///
    /// In a resolved graph these are the candidates a build can start
    /// from.
    pub fn roots(&self) -> Vec<String> {
        self.nodes
            .iter()
            .filter(|(_, node)| node.dependencies().is_empty())
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Modules no other module directly depends on, in registration
    /// order.
    pub fn leaves(&self) -> Vec<String> {
        let mut depended_on: HashSet<&str> = HashSet::new();
        for node in self.nodes.values() {
            for dep in node.dependencies() {
                depended_on.insert(dep.as_str());
            }
        }

        self.nodes
            .keys()
            .filter(|name| !depended_on.contains(name.as_str()))
            .cloned()
            .collect()
    }
}
