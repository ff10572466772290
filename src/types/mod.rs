//! All data types for the costgraph library.

pub mod error;
pub mod path;

pub use error::{GraphError, GraphResult};
pub use path::{Distance, Route, ShortestPath};

/// Edge cost. Shortest-path results are only meaningful for non-negative costs.
pub type Cost = i64;

/// Legacy integer encoding of an unreachable distance.
pub const UNREACHABLE_SENTINEL: Cost = -1;
