//! Error types for the graph-walk library.

use thiserror::Error;

/// All errors that can occur in the graph-walk library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Start vertex is not registered in the graph.
    #[error("Vertex {0} not found")]
    VertexNotFound(String),

    /// Shortest-path search reached an edge it cannot relax.
    #[error("Negative or NaN edge weight {weight} on {from} -> {to}")]
    NegativeWeight {
        from: String,
        to: String,
        weight: f64,
    },

    /// Edge description could not be parsed.
    #[error("Invalid edge: {0}")]
    InvalidEdge(String),

    /// Edge-list document is malformed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

impl GraphError {
    /// Build a `VertexNotFound` from any debuggable vertex id.
    pub fn vertex_not_found<V: std::fmt::Debug>(vertex: &V) -> Self {
        Self::VertexNotFound(format!("{:?}", vertex))
    }
}
