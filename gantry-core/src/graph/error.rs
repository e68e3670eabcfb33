//! Error Types for Graph Operations
//!
//! Every fallible operation on the dependency graph returns one of the
//! variants below. All of them describe recoverable, caller-facing
//! situations (a misdeclared build manifest, a dependency loop) rather
//! than programming bugs, so nothing in this crate panics on bad input.

use thiserror::Error;

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors produced while declaring or resolving a dependency graph.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A registration or dependency declaration used the empty string as
    /// an identifier.
    #[error("module name cannot be empty")]
    EmptyName,

    /// A module was registered under a name that is already taken.
    /// The existing node is left untouched.
    #[error("module '{name}' is already registered")]
    DuplicateNode { name: String },

    /// An operation referenced a module that is not in the store.
    #[error("unknown module '{name}'")]
    UnknownNode { name: String },

    /// A module declared itself as its own dependency.
    #[error("module '{name}' cannot depend on itself")]
    SelfDependency { name: String },

    /// A declared dependency never resolved to a registered module.
    ///
    /// Forward references are legal at declaration time; this error is
    /// reported when the graph is checked or ordered and the name is
    /// still missing.
    #[error("module '{from}' depends on '{missing}', which is not registered")]
    UnresolvedDependency { from: String, missing: String },

    /// The dependency relation contains a cycle.
    ///
    /// `path` walks the cycle edge by edge, with the entry module
    /// repeated at the end, so it renders as `a -> b -> c -> a`.
    #[error("circular dependency: {}", join_path(.path))]
    Cycle { path: Vec<String> },
}

/// Joins a cycle path into the `a -> b -> c -> a` diagnostic form.
fn join_path(path: &[String]) -> String {
    path.join(" -> ")
}
