//! In-memory graph operations — the core data structure and its algorithms.

pub mod builder;
pub mod digraph;
pub mod shortest_path;
pub mod traversal;

pub use builder::GraphBuilder;
pub use digraph::{Adjacency, Graph};
pub use shortest_path::{dijkstra, Label, ShortestPathTree, Strategy};
pub use traversal::{traverse, Traversal};
