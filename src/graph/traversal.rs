//! Graph traversal algorithms (DFS and BFS).

use std::collections::{HashSet, VecDeque};

use log::debug;

use crate::types::GraphResult;

use super::Graph;

/// Order in which a traversal expands vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    /// Last discovered, first visited (stack).
    DepthFirst,
    /// First discovered, first visited (queue).
    BreadthFirst,
}

impl Traversal {
    /// Return a human-readable name for this traversal.
    pub fn name(&self) -> &'static str {
        match self {
            Self::DepthFirst => "dfs",
            Self::BreadthFirst => "bfs",
        }
    }

    /// Parse a traversal from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "dfs" | "depth_first" | "depth-first" => Some(Self::DepthFirst),
            "bfs" | "breadth_first" | "breadth-first" => Some(Self::BreadthFirst),
            _ => None,
        }
    }
}

impl std::fmt::Display for Traversal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Visit every vertex reachable from `start` exactly once, in `order`.
///
/// Neighbors are pushed without checking whether they were already visited;
/// duplicates are discarded when they come off the frontier. Siblings are
/// expanded in ascending key order for both traversals.
pub fn traverse<E, F>(
    graph: &Graph<E>,
    start: &str,
    order: Traversal,
    visit: F,
) -> GraphResult<usize>
where
    F: FnMut(&str, &E),
{
    let (start, _) = graph.key_entry(start)?;
    debug!("{} traversal from {:?}", order, start);

    let visited = match order {
        Traversal::DepthFirst => dfs_traverse(graph, start, visit)?,
        Traversal::BreadthFirst => bfs_traverse(graph, start, visit)?,
    };

    debug!("{} traversal from {:?} visited {} vertices", order, start, visited);
    Ok(visited)
}

fn dfs_traverse<'g, E, F>(graph: &'g Graph<E>, start: &'g str, mut visit: F) -> GraphResult<usize>
where
    F: FnMut(&str, &E),
{
    let mut visited: HashSet<&str> = HashSet::new();
    let mut stack: Vec<&'g str> = vec![start];

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        let entry = graph.entry(current)?;
        visit(current, &entry.data);

        // Reversed so the smallest key is on top of the stack.
        stack.extend(entry.adjacent.keys().rev().map(String::as_str));
    }

    Ok(visited.len())
}

fn bfs_traverse<'g, E, F>(graph: &'g Graph<E>, start: &'g str, mut visit: F) -> GraphResult<usize>
where
    F: FnMut(&str, &E),
{
    let mut visited: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<&'g str> = VecDeque::new();
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if !visited.insert(current) {
            continue;
        }
        let entry = graph.entry(current)?;
        visit(current, &entry.data);

        queue.extend(entry.adjacent.keys().map(String::as_str));
    }

    Ok(visited.len())
}
