//! CLI command implementations.
//!
//! The graph is described entirely on the command line: `--vertex NAME[=DATA]`
//! declares a vertex with an optional text payload and `--edge FROM:TO:COST`
//! declares a directed edge between declared vertices.

use crate::graph::{Graph, Strategy, Traversal};
use crate::types::{Cost, GraphError, GraphResult};

/// Parse a `NAME[=DATA]` vertex argument. A missing payload is the empty string.
pub fn parse_vertex(arg: &str) -> GraphResult<(String, String)> {
    let (name, data) = match arg.split_once('=') {
        Some((name, data)) => (name.trim(), data),
        None => (arg.trim(), ""),
    };
    if name.is_empty() {
        return Err(GraphError::InvalidArgument(format!(
            "vertex {:?} has an empty name",
            arg
        )));
    }
    Ok((name.to_string(), data.to_string()))
}

/// Parse a `FROM:TO:COST` edge argument.
pub fn parse_edge(arg: &str) -> GraphResult<(String, String, Cost)> {
    let parts: Vec<&str> = arg.split(':').map(str::trim).collect();
    let [from, to, cost] = parts.as_slice() else {
        return Err(GraphError::InvalidArgument(format!(
            "edge {:?} is not of the form FROM:TO:COST",
            arg
        )));
    };
    if from.is_empty() || to.is_empty() {
        return Err(GraphError::InvalidArgument(format!(
            "edge {:?} has an empty endpoint",
            arg
        )));
    }
    let cost: Cost = cost.parse().map_err(|_| {
        GraphError::InvalidArgument(format!("edge {:?} has a non-integer cost {:?}", arg, cost))
    })?;
    Ok((from.to_string(), to.to_string(), cost))
}

/// Build a graph from raw `--vertex` and `--edge` arguments.
pub fn build_graph(vertices: &[String], edges: &[String]) -> GraphResult<Graph<String>> {
    let mut graph = Graph::new();
    for arg in vertices {
        let (name, data) = parse_vertex(arg)?;
        graph.add_vertex(name, data)?;
    }
    for arg in edges {
        let (from, to, cost) = parse_edge(arg)?;
        graph.add_directed_edge(&from, &to, cost)?;
    }
    log::debug!(
        "built graph with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Print the graph.
pub fn cmd_show(graph: &Graph<String>, json: bool) -> GraphResult<()> {
    if json {
        let vertices: Vec<serde_json::Value> = graph
            .vertices()
            .map(|key| {
                serde_json::json!({
                    "key": key,
                    "data": graph.data(key).ok(),
                })
            })
            .collect();
        let edges: Vec<serde_json::Value> = graph
            .edges()
            .map(|(from, to, cost)| serde_json::json!({"from": from, "to": to, "cost": cost}))
            .collect();
        let info = serde_json::json!({
            "vertex_count": graph.vertex_count(),
            "edge_count": graph.edge_count(),
            "vertices": vertices,
            "edges": edges,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        print!("{}", graph);
    }
    Ok(())
}

/// Run a DFS or BFS and print the visitation order.
pub fn cmd_traverse(
    graph: &Graph<String>,
    start: &str,
    order: Traversal,
    json: bool,
) -> GraphResult<()> {
    let mut visited: Vec<(String, String)> = Vec::new();
    graph.traverse(start, order, |key, data| {
        visited.push((key.to_string(), data.clone()));
    })?;

    if json {
        let info: Vec<serde_json::Value> = visited
            .iter()
            .enumerate()
            .map(|(step, (key, data))| serde_json::json!({"step": step, "key": key, "data": data}))
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("{} from {}: {} vertices", order, start, visited.len());
        for (step, (key, data)) in visited.iter().enumerate() {
            if data.is_empty() {
                println!("  [{}] {}", step, key);
            } else {
                println!("  [{}] {} ({})", step, key, data);
            }
        }
    }
    Ok(())
}

/// Print the cheapest path between two vertices.
pub fn cmd_path(
    graph: &Graph<String>,
    start: &str,
    end: &str,
    strategy: Strategy,
    json: bool,
) -> GraphResult<()> {
    let result = graph.shortest_path_with(start, end, strategy)?;

    if json {
        let info = serde_json::json!({
            "start": start,
            "end": end,
            "cost": result.cost,
            "route": result.route,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("Cost: {}", result.cost);
        println!("Path: {}", result.route);
        if let Some(hops) = result.route.hops() {
            println!("Hops: {}", hops);
        }
    }
    Ok(())
}

/// Print the distance and predecessor of every vertex relative to `start`.
pub fn cmd_labels(
    graph: &Graph<String>,
    start: &str,
    strategy: Strategy,
    json: bool,
) -> GraphResult<()> {
    let tree = graph.shortest_path_tree(start, strategy)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&tree).unwrap_or_default()
        );
    } else {
        println!(
            "Shortest paths from {} ({} of {} reachable)",
            tree.start(),
            tree.reachable_count(),
            graph.vertex_count()
        );
        for (key, label) in tree.labels() {
            println!(
                "  {:<12} {:>12}  via {}",
                key,
                label.distance.to_string(),
                label.predecessor.as_deref().unwrap_or("-")
            );
        }
    }
    Ok(())
}
