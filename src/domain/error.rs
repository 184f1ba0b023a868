//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::arena::NodeId;

/// Domain errors represent misuse of the catalog tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("child index {index} out of range (node has {len} children)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("unknown node: {0}")]
    UnknownNode(NodeId),
}

/// Result type for catalog operations.
pub type DomainResult<T> = Result<T, DomainError>;
