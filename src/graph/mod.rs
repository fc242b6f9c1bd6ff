//! In-memory graph operations — the core data structure.

pub mod adjacency;
pub mod builder;
pub mod shortest_path;
pub mod traversal;

pub use adjacency::Graph;
pub use builder::GraphBuilder;
pub use shortest_path::ShortestPaths;
pub use traversal::{bfs, dfs, TraversalOrder, TraversalResult};
