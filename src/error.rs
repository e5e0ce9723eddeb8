//! Error types for graphlab
//!
//! A single crate-wide error enum. Missing start/target nodes are deliberate
//! no-op conditions handled by the traversal routines themselves and never
//! surface here; observer failures propagate through traversal calls
//! unmodified, with no retry and no rollback of graph state.

use crate::graph::types::NodeId;
use thiserror::Error;

/// Errors that can occur during graphlab operations
#[derive(Error, Debug)]
pub enum GraphlabError {
    #[error("node not found: {id}")]
    NodeNotFound { id: NodeId },

    #[error("shortest-path parent chain loops back through {at}")]
    PathCycle { at: NodeId },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl GraphlabError {
    /// Create an error for a missing node id
    pub fn node_not_found(id: NodeId) -> Self {
        GraphlabError::NodeNotFound { id }
    }

    /// Create an error for an observer that wants to abort a traversal
    pub fn aborted(reason: impl std::fmt::Display) -> Self {
        GraphlabError::Other(reason.to_string())
    }
}

/// Result type alias for graphlab operations
pub type Result<T> = std::result::Result<T, GraphlabError>;
