//! Dependency Graph
//!
//! This module implements the directed dependency graph that tracks
//! relationships between named build units and resolves them into a
//! valid build order.
//!
//! # Overview
//!
//! The graph is a name-keyed registry of modules where:
//!
//! - Nodes represent build units (modules, library targets, build steps)
//! - Edges represent requirements: if A depends on B, then B must be
//!   built before A
//!
//! Callers register modules in any order, with forward references to
//! not-yet-registered dependencies allowed. Before any build action the
//! graph is validated: every declared name must resolve to a registered
//! module and no dependency chain may loop back on itself. A validated
//! graph yields a deterministic topological build order.
//!
//! # Design Decisions
//!
//! 1. Registration and validation are separate phases. Declaration-time
//!    checks catch only local mistakes (empty names, duplicates,
//!    self-loops); cross-module problems (unresolved names, cycles)
//!    surface when the graph is queried. This lets callers ingest
//!    declarations in whatever order their configuration provides them.
//!
//! 2. The registry is indexed by name and preserves registration order,
//!    so diagnostics and default traversals are reproducible run to run.
//!
//! 3. Only forward edges (dependencies) are stored. Reverse views such
//!    as `dependents_of` are derived on demand, since build graphs are
//!    small enough that a maintained reverse index would not pay for its
//!    bookkeeping.
//!
//! 4. Every failure is a value, never a panic. Graph mistakes come from
//!    user build configuration and are reported as [`GraphError`]
//!    diagnostics the orchestrator can print verbatim.

mod error;
mod node;
mod query;
mod resolve;
mod store;

pub use error::{GraphError, GraphResult};
pub use node::Node;
pub use store::DependencyGraph;
