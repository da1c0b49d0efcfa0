//! Error types shared by graph construction, loading and search.

use thiserror::Error;

use crate::graphs::{VertexId, Weight};

/// Result type for graph operations
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors that can occur while building, loading or querying a graph.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A vertex id outside the valid range was used.
    #[error("vertex {vertex} is out of range, graph has {number_of_vertices} vertices")]
    InvalidNode {
        vertex: VertexId,
        number_of_vertices: u32,
    },

    /// A weight that can not take part in a search.
    #[error("invalid edge weight {weight}")]
    InvalidWeight { weight: Weight },

    /// An input row with missing or non-numeric fields.
    #[error("malformed input in line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    /// Following the parent links of a vertex never reached the source. Only
    /// happens for graphs with negative cycles.
    #[error("parent links of vertex {vertex} form a cycle")]
    ParentCycle { vertex: VertexId },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unable to (de)serialize graph: {0}")]
    Serialization(#[from] bincode::Error),
}
