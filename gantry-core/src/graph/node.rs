//! Graph Nodes
//!
//! This module defines the node type that lives in the dependency graph.
//! A node is one named build unit, such as a module or a library target,
//! together with the names it declares as direct dependencies.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A named build unit and its declared direct dependencies.
///
/// Nodes are created only through [`DependencyGraph::register`] and are
/// identified by name. The dependency list keeps declaration order so
/// diagnostics are reproducible, and it is deduplicated on insert:
/// declaring the same dependency twice is not an error, it is simply
/// recorded once.
///
/// A dependency name may refer to a node that has not been registered
/// yet (forward reference). Such references must resolve before the
/// graph is checked for cycles or ordered.
///
/// [`DependencyGraph::register`]: super::DependencyGraph::register
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Unique name this node was registered under. Immutable.
    name: String,

    /// Names this node directly requires, in declaration order.
    /// Most build units declare only a handful of dependencies, so the
    /// list stays inline until it outgrows four entries.
    dependencies: SmallVec<[String; 4]>,
}

impl Node {
    /// Create a node with no dependencies. The store validates the name
    /// before calling this.
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            dependencies: SmallVec::new(),
        }
    }

    /// Get the node's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the declared direct dependencies, in declaration order.
    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    /// Check whether `name` is declared as a direct dependency.
    pub fn depends_directly_on(&self, name: &str) -> bool {
        self.dependencies.iter().any(|dep| dep == name)
    }

    /// Append a dependency unless it is already declared.
    pub(crate) fn push_dependency(&mut self, name: String) {
        if !self.depends_directly_on(&name) {
            self.dependencies.push(name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dependencies_keep_declaration_order() {
        let mut node = Node::new("app".to_string());
        node.push_dependency("zlib".to_string());
        node.push_dependency("alloc".to_string());
        node.push_dependency("mem".to_string());

        assert_eq!(node.dependencies(), &["zlib", "alloc", "mem"]);
    }

    #[test]
    fn duplicate_dependencies_are_recorded_once() {
        let mut node = Node::new("app".to_string());
        node.push_dependency("core".to_string());
        node.push_dependency("core".to_string());
        node.push_dependency("core".to_string());

        assert_eq!(node.dependencies(), &["core"]);
    }

    #[test]
    fn direct_dependency_lookup() {
        let mut node = Node::new("app".to_string());
        node.push_dependency("core".to_string());

        assert!(node.depends_directly_on("core"));
        assert!(!node.depends_directly_on("app"));
        assert!(!node.depends_directly_on("missing"));
    }
}
