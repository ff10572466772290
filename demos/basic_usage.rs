//! Basic build -> traverse -> shortest path flow.

use costgraph::*;

fn main() -> GraphResult<()> {
    env_logger::init();

    // Cities with their population as payload
    let mut builder = GraphBuilder::new();
    builder
        .vertex("Amsterdam", 921_000)
        .vertex("Berlin", 3_645_000)
        .vertex("Copenhagen", 644_000)
        .vertex("Dublin", 592_000)
        .vertex("Edinburgh", 527_000);

    // Travel times in minutes; roads go both ways, the ferry only one way
    builder
        .undirected_edge("Amsterdam", "Berlin", 370)
        .undirected_edge("Berlin", "Copenhagen", 440)
        .undirected_edge("Amsterdam", "Copenhagen", 900)
        .edge("Edinburgh", "Dublin", 480);

    let graph = builder.build()?;

    println!(
        "Graph created with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    print!("{}", graph);

    println!("\nDepth-first from Amsterdam:");
    graph.depth_first_search("Amsterdam", |city, population| {
        println!("  {} (pop. {})", city, population);
    })?;

    println!("\nBreadth-first from Copenhagen:");
    graph.breadth_first_search("Copenhagen", |city, population| {
        println!("  {} (pop. {})", city, population);
    })?;

    for (from, to) in [("Amsterdam", "Copenhagen"), ("Amsterdam", "Dublin")] {
        let result = graph.shortest_path(from, to)?;
        println!("\n{} -> {}: cost {}, route {}", from, to, result.cost, result.route);
    }

    let tree = graph.shortest_path_tree("Berlin", Strategy::BinaryHeap)?;
    println!("\nFrom Berlin:");
    for (city, label) in tree.labels() {
        println!(
            "  {:<12} {:>12}  via {}",
            city,
            label.distance.to_string(),
            label.predecessor.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}
