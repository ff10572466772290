//! Core graph structure — keyed vertices with payloads and weighted out-edges.

use std::collections::BTreeMap;
use std::fmt;

use crate::types::{Cost, GraphError, GraphResult, ShortestPath};

use super::shortest_path::{dijkstra, ShortestPathTree, Strategy};
use super::traversal::{traverse, Traversal};

/// Outgoing edges of one vertex: neighbor key -> edge cost.
pub type Adjacency = BTreeMap<String, Cost>;

/// Payload and out-edges of a single vertex. Keeping both in one record means a
/// vertex can never exist without its adjacency entry.
#[derive(Debug, Clone)]
pub(crate) struct VertexEntry<E> {
    pub(crate) data: E,
    pub(crate) adjacent: Adjacency,
}

/// A directed graph with string-keyed vertices, per-vertex payloads of type `E`
/// and integer edge costs.
///
/// Vertices and edges are kept in key order, so every iteration (vertex listing,
/// neighbor expansion during traversal, tie-breaks in shortest-path search) is
/// deterministic.
#[derive(Debug, Clone)]
pub struct Graph<E> {
    vertices: BTreeMap<String, VertexEntry<E>>,
    edge_count: usize,
}

impl<E> Graph<E> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            vertices: BTreeMap::new(),
            edge_count: 0,
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains_vertex(&self, key: &str) -> bool {
        self.vertices.contains_key(key)
    }

    /// Whether the edge `from -> to` exists. Unknown vertices simply yield `false`.
    pub fn contains_edge(&self, from: &str, to: &str) -> bool {
        self.vertices
            .get(from)
            .is_some_and(|entry| entry.adjacent.contains_key(to))
    }

    /// Add a vertex carrying `data`. Fails if the key is already taken, in which
    /// case the graph is left untouched.
    pub fn add_vertex(&mut self, key: impl Into<String>, data: E) -> GraphResult<()> {
        let key = key.into();
        if self.vertices.contains_key(&key) {
            return Err(GraphError::DuplicateVertex(key));
        }
        self.vertices.insert(
            key,
            VertexEntry {
                data,
                adjacent: Adjacency::new(),
            },
        );
        Ok(())
    }

    /// Add the directed edge `from -> to`, replacing the cost of an existing edge
    /// between the same pair. Returns the replaced cost, if any.
    pub fn add_directed_edge(
        &mut self,
        from: &str,
        to: &str,
        cost: Cost,
    ) -> GraphResult<Option<Cost>> {
        self.entry(from)?;
        self.entry(to)?;
        let entry = self
            .vertices
            .get_mut(from)
            .ok_or_else(|| GraphError::UnknownVertex(from.to_string()))?;

        let previous = entry.adjacent.insert(to.to_string(), cost);
        if previous.is_none() {
            self.edge_count += 1;
        }
        Ok(previous)
    }

    /// Outgoing edges of `key`.
    pub fn adjacent(&self, key: &str) -> GraphResult<&Adjacency> {
        Ok(&self.entry(key)?.adjacent)
    }

    /// Cost of the edge `from -> to`.
    pub fn cost(&self, from: &str, to: &str) -> GraphResult<Cost> {
        let adjacent = self.adjacent(from)?;
        if !self.vertices.contains_key(to) {
            return Err(GraphError::UnknownVertex(to.to_string()));
        }
        adjacent
            .get(to)
            .copied()
            .ok_or_else(|| GraphError::UnknownEdge {
                from: from.to_string(),
                to: to.to_string(),
            })
    }

    /// All vertex keys, in ascending order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.vertices.keys().map(String::as_str)
    }

    /// All edges as `(from, to, cost)`, ordered by source then target.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, Cost)> + '_ {
        self.vertices.iter().flat_map(|(from, entry)| {
            entry
                .adjacent
                .iter()
                .map(move |(to, &cost)| (from.as_str(), to.as_str(), cost))
        })
    }

    /// Payload of `key`.
    pub fn data(&self, key: &str) -> GraphResult<&E> {
        Ok(&self.entry(key)?.data)
    }

    /// Depth-first traversal from `start`, calling `visit` once per reachable vertex.
    /// Returns the number of vertices visited.
    pub fn depth_first_search<F>(&self, start: &str, visit: F) -> GraphResult<usize>
    where
        F: FnMut(&str, &E),
    {
        traverse(self, start, Traversal::DepthFirst, visit)
    }

    /// Breadth-first traversal from `start`, calling `visit` once per reachable vertex.
    /// Returns the number of vertices visited.
    pub fn breadth_first_search<F>(&self, start: &str, visit: F) -> GraphResult<usize>
    where
        F: FnMut(&str, &E),
    {
        traverse(self, start, Traversal::BreadthFirst, visit)
    }

    /// Run either traversal from `start`.
    pub fn traverse<F>(&self, start: &str, order: Traversal, visit: F) -> GraphResult<usize>
    where
        F: FnMut(&str, &E),
    {
        traverse(self, start, order, visit)
    }

    /// Keys in the order a traversal from `start` visits them.
    pub fn visit_order(&self, start: &str, order: Traversal) -> GraphResult<Vec<String>> {
        let mut keys = Vec::new();
        traverse(self, start, order, |key, _| keys.push(key.to_string()))?;
        Ok(keys)
    }

    /// Cheapest path from `start` to `end` using the default selection strategy.
    pub fn shortest_path(&self, start: &str, end: &str) -> GraphResult<ShortestPath> {
        self.shortest_path_with(start, end, Strategy::default())
    }

    /// Cheapest path from `start` to `end` using `strategy` for minimum selection.
    pub fn shortest_path_with(
        &self,
        start: &str,
        end: &str,
        strategy: Strategy,
    ) -> GraphResult<ShortestPath> {
        self.entry(start)?;
        self.entry(end)?;
        dijkstra(self, start, strategy)?.path_to(end)
    }

    /// Distances and predecessors from `start` to every vertex.
    pub fn shortest_path_tree(
        &self,
        start: &str,
        strategy: Strategy,
    ) -> GraphResult<ShortestPathTree> {
        dijkstra(self, start, strategy)
    }

    /// Look up a vertex, returning the graph-owned key alongside its entry.
    pub(crate) fn key_entry(&self, key: &str) -> GraphResult<(&str, &VertexEntry<E>)> {
        self.vertices
            .get_key_value(key)
            .map(|(k, entry)| (k.as_str(), entry))
            .ok_or_else(|| GraphError::UnknownVertex(key.to_string()))
    }

    pub(crate) fn entry(&self, key: &str) -> GraphResult<&VertexEntry<E>> {
        self.key_entry(key).map(|(_, entry)| entry)
    }
}

impl<E> Default for Graph<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the sorted vertex list followed by each vertex's out-edges:
///
/// ```text
/// Vertices: [A, B]
/// Edges:
/// Vertex(A)--->{B=1}
/// Vertex(B)--->{}
/// ```
impl<E> fmt::Display for Graph<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys: Vec<&str> = self.vertices().collect();
        writeln!(f, "Vertices: [{}]", keys.join(", "))?;
        writeln!(f, "Edges:")?;
        for (key, entry) in &self.vertices {
            let edges: Vec<String> = entry
                .adjacent
                .iter()
                .map(|(to, cost)| format!("{}={}", to, cost))
                .collect();
            writeln!(f, "Vertex({})--->{{{}}}", key, edges.join(", "))?;
        }
        Ok(())
    }
}
