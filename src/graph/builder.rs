//! Fluent API for building Graph instances.

use crate::types::{Cost, GraphResult};

use super::Graph;

/// Fluent builder for constructing a Graph.
///
/// Vertices and edges are recorded as given and validated by [`GraphBuilder::build`],
/// vertices first, each group in insertion order. The first invalid entry is the
/// error returned.
pub struct GraphBuilder<E> {
    vertices: Vec<(String, E)>,
    edges: Vec<(String, String, Cost)>,
}

impl<E> GraphBuilder<E> {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Add a vertex.
    pub fn vertex(&mut self, key: impl Into<String>, data: E) -> &mut Self {
        self.vertices.push((key.into(), data));
        self
    }

    /// Add a directed edge.
    pub fn edge(
        &mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        cost: Cost,
    ) -> &mut Self {
        self.edges.push((from.into(), to.into(), cost));
        self
    }

    /// Add a pair of directed edges with the same cost, one in each direction.
    pub fn undirected_edge(
        &mut self,
        a: impl Into<String>,
        b: impl Into<String>,
        cost: Cost,
    ) -> &mut Self {
        let (a, b) = (a.into(), b.into());
        self.edges.push((a.clone(), b.clone(), cost));
        self.edges.push((b, a, cost));
        self
    }

    /// Build the final Graph.
    pub fn build(self) -> GraphResult<Graph<E>> {
        let mut graph = Graph::new();
        for (key, data) in self.vertices {
            graph.add_vertex(key, data)?;
        }
        for (from, to, cost) in &self.edges {
            graph.add_directed_edge(from, to, *cost)?;
        }
        Ok(graph)
    }
}

impl<E> Default for GraphBuilder<E> {
    fn default() -> Self {
        Self::new()
    }
}
