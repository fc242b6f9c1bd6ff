//! All data types for the graph-walk library.

pub mod edge;
pub mod error;

pub use edge::{EdgeDirection, EdgeList, EdgeSpec, Neighbor};
pub use error::{GraphError, GraphResult};

/// Weight given to edges inserted without an explicit weight.
pub const DEFAULT_WEIGHT: f64 = 1.0;
