//! Node Store
//!
//! The store owns the mapping from module name to [`Node`], in
//! registration order. It is the single place where nodes are created
//! and where dependency declarations are validated.
//!
//! # Validation Rules
//!
//! 1. Names are unique. Registering a taken name fails with
//!    `DuplicateNode` and leaves the existing node untouched.
//!
//! 2. Names are non-empty, on both sides of an edge. An empty
//!    dependency name could never resolve, so it is rejected when it is
//!    declared rather than later at query time.
//!
//! 3. No self-loops. A module declaring itself fails with
//!    `SelfDependency`, whether in the initial list or added later.
//!
//! 4. Forward references are allowed. A dependency may name a module
//!    that has not been registered yet; resolution is deferred until the
//!    graph is checked for cycles or ordered.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::error::{GraphError, GraphResult};
use super::node::Node;

/// Registry of named build units and their declared dependencies.
///
/// The graph is constructed by a single caller, populated through
/// [`register`] and [`add_dependency`], queried, and discarded with the
/// build invocation. It holds no locks, threads, or external resources;
/// callers that want to share one instance across threads must wrap it
/// in their own synchronization. Independent instances share nothing.
///
/// Iteration follows registration order, which keeps traversals and
/// diagnostics deterministic for a given declaration sequence.
///
/// [`register`]: Self::register
/// [`add_dependency`]: Self::add_dependency
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DependencyGraph {
    /// All nodes, keyed by name, in registration order.
    pub(super) nodes: IndexMap<String, Node>,
}

impl DependencyGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            nodes: IndexMap::new(),
        }
    }

    /// Register a module with its initial dependency list.
    ///
    /// Duplicates within `dependencies` are deduplicated silently. The
    /// listed names do not need to be registered yet. On any error the
    /// store is left exactly as it was.
    pub fn register(&mut self, name: &str, dependencies: &[&str]) -> GraphResult<()> {
        if name.is_empty() {
            return Err(GraphError::EmptyName);
        }
        if self.nodes.contains_key(name) {
            return Err(GraphError::DuplicateNode {
                name: name.to_string(),
            });
        }

        let mut node = Node::new(name.to_string());
        for &dep in dependencies {
            if dep.is_empty() {
                return Err(GraphError::EmptyName);
            }
            if dep == name {
                return Err(GraphError::SelfDependency {
                    name: name.to_string(),
                });
            }
            node.push_dependency(dep.to_string());
        }

        self.nodes.insert(name.to_string(), node);
        Ok(())
    }

    /// Declare one more dependency for an already-registered module.
    ///
    /// `dependency` does not need to be registered yet. Re-declaring an
    /// existing dependency is a silent no-op.
    pub fn add_dependency(&mut self, name: &str, dependency: &str) -> GraphResult<()> {
        if dependency.is_empty() {
            return Err(GraphError::EmptyName);
        }
        if name == dependency {
            return Err(GraphError::SelfDependency {
                name: name.to_string(),
            });
        }

        let node = self
            .nodes
            .get_mut(name)
            .ok_or_else(|| GraphError::UnknownNode {
                name: name.to_string(),
            })?;
        node.push_dependency(dependency.to_string());
        Ok(())
    }

    /// Get a node by name.
    pub fn get(&self, name: &str) -> Option<&Node> {
        self.nodes.get(name)
    }

    /// Check whether a module is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    /// Iterate over all registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    /// Number of registered modules.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check whether the graph has no modules.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total number of declared dependency edges.
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(|node| node.dependencies().len()).sum()
    }
}
