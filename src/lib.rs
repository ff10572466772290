//! costgraph — an in-memory directed graph with weighted edges.
//!
//! Vertices are identified by string keys and carry a caller-chosen payload.
//! Edges are directed and carry an integer cost. On top of the container the
//! crate provides depth-first and breadth-first traversal with a per-vertex
//! callback, and Dijkstra shortest paths with explicit handling of
//! unreachable targets.

pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{
    Adjacency, Graph, GraphBuilder, Label, ShortestPathTree, Strategy, Traversal,
};
pub use types::{
    Cost, Distance, GraphError, GraphResult, Route, ShortestPath, UNREACHABLE_SENTINEL,
};
