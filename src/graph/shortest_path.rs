//! Single-source shortest paths (Dijkstra).
//!
//! Costs are tracked as `Option<Cost>` where `None` is infinity. Every vertex
//! ends up with a label; vertices that cannot be reached keep an infinite
//! distance and no predecessor.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet};

use log::{debug, trace};
use serde::Serialize;

use crate::types::{Cost, Distance, GraphError, GraphResult, Route, ShortestPath};

use super::Graph;

/// How the next vertex to finalize is chosen.
///
/// Both strategies finalize vertices in the same `(cost, key)` order, so they
/// produce identical labels on graphs with non-negative costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Scan every remaining vertex for the minimum. O(V²), finalizes all
    /// vertices including unreachable ones.
    #[default]
    LinearScan,
    /// Min-heap keyed by `(cost, key)` with lazy deletion. O((V + E) log V).
    BinaryHeap,
}

impl Strategy {
    /// Return a human-readable name for this strategy.
    pub fn name(&self) -> &'static str {
        match self {
            Self::LinearScan => "linear",
            Self::BinaryHeap => "heap",
        }
    }

    /// Parse a strategy from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "linear" | "linear_scan" | "scan" => Some(Self::LinearScan),
            "heap" | "binary_heap" | "binaryheap" => Some(Self::BinaryHeap),
            _ => None,
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Shortest-path label of one vertex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Label {
    /// Cost of the cheapest known path from the start.
    pub distance: Distance,
    /// Previous vertex on that path. `None` for the start and for unreachable vertices.
    pub predecessor: Option<String>,
}

/// Shortest-path labels for every vertex, relative to a single start vertex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPathTree {
    start: String,
    labels: BTreeMap<String, Label>,
}

impl ShortestPathTree {
    /// The vertex all distances are measured from.
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Label of `key`.
    pub fn label(&self, key: &str) -> GraphResult<&Label> {
        self.labels
            .get(key)
            .ok_or_else(|| GraphError::UnknownVertex(key.to_string()))
    }

    /// All labels in key order.
    pub fn labels(&self) -> impl Iterator<Item = (&str, &Label)> + '_ {
        self.labels.iter().map(|(key, label)| (key.as_str(), label))
    }

    pub fn distance_to(&self, end: &str) -> GraphResult<Distance> {
        Ok(self.label(end)?.distance)
    }

    /// Walk predecessor links back from `end` and return the path in travel order.
    pub fn route_to(&self, end: &str) -> GraphResult<Route> {
        let label = self.label(end)?;
        if end == self.start {
            return Ok(Route::Vertices(vec![self.start.clone()]));
        }
        if label.predecessor.is_none() {
            return Ok(Route::NoPath);
        }

        let mut path = vec![end.to_string()];
        let mut predecessor = label.predecessor.as_deref();
        while let Some(previous) = predecessor {
            path.push(previous.to_string());
            predecessor = self.label(previous)?.predecessor.as_deref();
        }
        path.reverse();
        Ok(Route::Vertices(path))
    }

    /// Cost and route to `end` as a single result.
    pub fn path_to(&self, end: &str) -> GraphResult<ShortestPath> {
        Ok(ShortestPath {
            cost: self.distance_to(end)?,
            route: self.route_to(end)?,
        })
    }

    /// Number of vertices with a finite distance, the start included.
    pub fn reachable_count(&self) -> usize {
        self.labels
            .values()
            .filter(|label| label.distance.is_reachable())
            .count()
    }
}

/// Working state shared by both selection strategies.
struct Search<'g> {
    cost: HashMap<&'g str, Cost>,
    predecessor: HashMap<&'g str, &'g str>,
    finalized: HashSet<&'g str>,
}

impl<'g> Search<'g> {
    fn new(start: &'g str) -> Self {
        Self {
            cost: HashMap::from([(start, 0)]),
            predecessor: HashMap::new(),
            finalized: HashSet::new(),
        }
    }

    fn cost_of(&self, key: &str) -> Option<Cost> {
        self.cost.get(key).copied()
    }

    /// Finalize `u` and relax its out-edges. Returns the neighbors whose cost
    /// improved, with their new cost.
    fn settle<E>(&mut self, graph: &'g Graph<E>, u: &'g str) -> GraphResult<Vec<(Cost, &'g str)>> {
        self.finalized.insert(u);
        let base = self.cost_of(u);
        trace!("finalized {:?} at {}", u, Distance::from(base));

        let mut improved = Vec::new();
        let Some(base) = base else {
            return Ok(improved);
        };

        for (v, &w) in &graph.entry(u)?.adjacent {
            let v = v.as_str();
            if self.finalized.contains(v) {
                continue;
            }
            let Some(candidate) = base.checked_add(w) else {
                continue;
            };
            if closer(Some(candidate), self.cost_of(v)) {
                self.cost.insert(v, candidate);
                self.predecessor.insert(v, u);
                improved.push((candidate, v));
            }
        }
        Ok(improved)
    }

    fn into_tree<E>(self, graph: &Graph<E>, start: &str) -> ShortestPathTree {
        let labels = graph
            .vertices()
            .map(|key| {
                let label = Label {
                    distance: Distance::from(self.cost_of(key)),
                    predecessor: self.predecessor.get(key).map(|p| p.to_string()),
                };
                (key.to_string(), label)
            })
            .collect();

        ShortestPathTree {
            start: start.to_string(),
            labels,
        }
    }
}

/// `a` strictly cheaper than `b`, with `None` as infinity.
fn closer(a: Option<Cost>, b: Option<Cost>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a < b,
        (Some(_), None) => true,
        (None, _) => false,
    }
}

/// Compute shortest-path labels from `start` to every vertex of `graph`.
pub fn dijkstra<E>(
    graph: &Graph<E>,
    start: &str,
    strategy: Strategy,
) -> GraphResult<ShortestPathTree> {
    let (start, _) = graph.key_entry(start)?;
    debug!(
        "shortest paths from {:?} over {} vertices ({} selection)",
        start,
        graph.vertex_count(),
        strategy
    );

    let search = match strategy {
        Strategy::LinearScan => linear_scan(graph, start)?,
        Strategy::BinaryHeap => binary_heap(graph, start)?,
    };
    let tree = search.into_tree(graph, start);

    debug!(
        "shortest paths from {:?}: {} of {} vertices reachable",
        start,
        tree.reachable_count(),
        graph.vertex_count()
    );
    Ok(tree)
}

fn linear_scan<'g, E>(graph: &'g Graph<E>, start: &'g str) -> GraphResult<Search<'g>> {
    let mut search = Search::new(start);
    let mut remaining: BTreeSet<&'g str> = graph.vertices().collect();

    while let Some(u) = select_min(&search, &remaining) {
        remaining.remove(u);
        search.settle(graph, u)?;
    }

    Ok(search)
}

/// First remaining vertex (in key order) with the smallest cost. Vertices at
/// infinity are still selected once nothing finite is left.
fn select_min<'g>(search: &Search<'g>, remaining: &BTreeSet<&'g str>) -> Option<&'g str> {
    let mut best: Option<(&'g str, Option<Cost>)> = None;
    for &key in remaining {
        let cost = search.cost_of(key);
        match best {
            Some((_, best_cost)) if !closer(cost, best_cost) => {}
            _ => best = Some((key, cost)),
        }
    }
    best.map(|(key, _)| key)
}

fn binary_heap<'g, E>(graph: &'g Graph<E>, start: &'g str) -> GraphResult<Search<'g>> {
    let mut search = Search::new(start);
    let mut heap: BinaryHeap<Reverse<(Cost, &'g str)>> = BinaryHeap::new();
    heap.push(Reverse((0, start)));

    while let Some(Reverse((_, u))) = heap.pop() {
        // Stale entry left behind by a later improvement.
        if search.finalized.contains(u) {
            continue;
        }
        for (cost, v) in search.settle(graph, u)? {
            heap.push(Reverse((cost, v)));
        }
    }

    Ok(search)
}
