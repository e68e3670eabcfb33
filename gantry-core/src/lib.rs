//! Gantry Core
//!
//! This crate provides the dependency-resolution core for the Gantry
//! build toolkit. It implements:
//!
//! - A name-keyed registry of build units and their declared
//!   dependencies, with forward references allowed
//! - Cycle detection with a concrete cycle path for diagnostics
//! - Deterministic topological build ordering (lexicographic tie-break)
//! - Reachability queries over the dependency relation
//!
//! The crate is a plain in-process library: a build orchestrator
//! constructs a graph from its declaration source, validates it, and
//! executes build units in the resolved order.
//!
//! # Architecture
//!
//! The crate is organized around a single module:
//!
//! - `graph`: the dependency graph registry, validation, ordering, and
//!   query implementation
//!
//! # Example
//!
//! ```rust
//! use gantry_core::DependencyGraph;
//!
//! let mut graph = DependencyGraph::new();
//! graph.register("main", &["utils"]).unwrap();
//! graph.register("utils", &["core"]).unwrap();
//! graph.register("core", &[]).unwrap();
//!
//! // Validation reports cycles and unresolved names before any build
//! // action runs.
//! graph.detect_cycle().unwrap();
//!
//! let order = graph.topological_order().unwrap();
//! assert_eq!(order, vec!["core", "utils", "main"]);
//! ```

pub mod graph;

pub use graph::{DependencyGraph, GraphError, GraphResult, Node};
