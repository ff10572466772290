//! Error types for the costgraph library.

use thiserror::Error;

/// All errors that can occur in the costgraph library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex with this key already exists.
    #[error("Vertex {0:?} already exists")]
    DuplicateVertex(String),

    /// An operation referenced a vertex key that is not in the graph.
    #[error("Vertex {0:?} does not exist")]
    UnknownVertex(String),

    /// No edge exists between the two vertices.
    #[error("No edge from {from:?} to {to:?}")]
    UnknownEdge { from: String, to: String },

    /// Malformed command-line input.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience result type for costgraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
