//! Structural error type shared by all container operations.
//!
//! Only *structural* failures surface here: duplicate names, duplicate edges,
//! missing endpoints. Algorithmic "no result" outcomes (unreachable target,
//! cyclic input to a topological sort, no Hamiltonian cycle) are not errors
//! and are modeled as `Option`/empty returns by the respective algorithms.

use thiserror::Error;

/// Errors raised by graph mutations and lookups.
///
/// Every variant is fatal to the single attempted operation and leaves the
/// container unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A node with this name already exists in the container.
    #[error("node {0:?} already exists")]
    DuplicateNode(String),

    /// An edge between this ordered pair of nodes already exists.
    #[error("edge {0:?} -> {1:?} already exists")]
    DuplicateEdge(String, String),

    /// The named node is not part of the container.
    #[error("node {0:?} does not exist")]
    MissingNode(String),

    /// No edge between this ordered pair of nodes.
    #[error("edge {0:?} -> {1:?} does not exist")]
    MissingEdge(String, String),

    /// Nodes must be created with a non-empty name.
    #[error("a node requires a non-empty name")]
    NameRequired,
}

impl GraphError {
    pub(crate) fn missing(name: &str) -> Self {
        Self::MissingNode(name.to_owned())
    }
}
