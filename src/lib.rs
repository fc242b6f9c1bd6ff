//! graph-walk — an in-memory adjacency-list graph.
//!
//! Vertices keep their insertion order and each neighbor list keeps edge
//! insertion order, so breadth-first, depth-first and shortest-distance
//! traversals are deterministic for a given insertion history.

pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{Graph, GraphBuilder, ShortestPaths, TraversalOrder, TraversalResult};
pub use types::{
    EdgeDirection, EdgeList, EdgeSpec, GraphError, GraphResult, Neighbor, DEFAULT_WEIGHT,
};
