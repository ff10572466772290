//! Phase 1 tests: graph container, builder and display.

use std::collections::BTreeSet;

use costgraph::graph::{Graph, GraphBuilder};
use costgraph::types::{GraphError, GraphResult};

// ==================== Helper ====================

/// A -> B (1), B -> C (2), A -> C (10).
fn build_abc() -> Graph<u32> {
    let mut graph = Graph::new();
    graph.add_vertex("A", 1).unwrap();
    graph.add_vertex("B", 2).unwrap();
    graph.add_vertex("C", 3).unwrap();
    graph.add_directed_edge("A", "B", 1).unwrap();
    graph.add_directed_edge("B", "C", 2).unwrap();
    graph.add_directed_edge("A", "C", 10).unwrap();
    graph
}

// ==================== Vertex Tests ====================

#[test]
fn test_new_graph_is_empty() {
    let graph: Graph<()> = Graph::new();
    assert!(graph.is_empty());
    assert_eq!(graph.vertex_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.vertices().count(), 0);
}

#[test]
fn test_add_vertex_stores_data_with_empty_adjacency() {
    let mut graph = Graph::new();
    graph.add_vertex("home", String::from("127.0.0.1")).unwrap();

    assert_eq!(graph.data("home").unwrap(), "127.0.0.1");
    assert!(graph.adjacent("home").unwrap().is_empty());
    assert!(graph.contains_vertex("home"));
    assert_eq!(graph.vertex_count(), 1);
}

#[test]
fn test_duplicate_vertex_rejected_and_graph_unchanged() {
    let mut graph = Graph::new();
    graph.add_vertex("A", "first").unwrap();
    graph.add_vertex("B", "other").unwrap();
    graph.add_directed_edge("A", "B", 4).unwrap();

    let result = graph.add_vertex("A", "second");
    match result.unwrap_err() {
        GraphError::DuplicateVertex(key) => assert_eq!(key, "A"),
        e => panic!("Expected DuplicateVertex error, got {:?}", e),
    }

    assert_eq!(*graph.data("A").unwrap(), "first");
    assert_eq!(graph.cost("A", "B").unwrap(), 4);
    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_data_unknown_vertex() {
    let graph = build_abc();
    assert_eq!(
        graph.data("Z").unwrap_err(),
        GraphError::UnknownVertex("Z".into())
    );
}

#[test]
fn test_vertices_returns_every_key_in_order() {
    let mut graph = Graph::new();
    for key in ["delta", "alpha", "charlie", "bravo"] {
        graph.add_vertex(key, ()).unwrap();
    }
    let keys: Vec<&str> = graph.vertices().collect();
    assert_eq!(keys, vec!["alpha", "bravo", "charlie", "delta"]);

    let set: BTreeSet<&str> = graph.vertices().collect();
    assert_eq!(set.len(), 4);
}

// ==================== Edge Tests ====================

#[test]
fn test_add_edge_then_cost() {
    let graph = build_abc();
    assert_eq!(graph.cost("A", "B").unwrap(), 1);
    assert_eq!(graph.cost("B", "C").unwrap(), 2);
    assert_eq!(graph.cost("A", "C").unwrap(), 10);
    assert_eq!(graph.edge_count(), 3);
}

#[test]
fn test_edges_are_directed() {
    let graph = build_abc();
    assert!(graph.contains_edge("A", "B"));
    assert!(!graph.contains_edge("B", "A"));
    match graph.cost("B", "A").unwrap_err() {
        GraphError::UnknownEdge { from, to } => {
            assert_eq!(from, "B");
            assert_eq!(to, "A");
        }
        e => panic!("Expected UnknownEdge error, got {:?}", e),
    }
}

#[test]
fn test_edge_with_unknown_endpoint_rejected() {
    let mut graph = build_abc();

    assert_eq!(
        graph.add_directed_edge("A", "Z", 1).unwrap_err(),
        GraphError::UnknownVertex("Z".into())
    );
    assert_eq!(
        graph.add_directed_edge("Z", "A", 1).unwrap_err(),
        GraphError::UnknownVertex("Z".into())
    );
    // Source is reported first when both are missing.
    assert_eq!(
        graph.add_directed_edge("X", "Y", 1).unwrap_err(),
        GraphError::UnknownVertex("X".into())
    );

    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.adjacent("A").unwrap().len(), 2);
}

#[test]
fn test_edge_overwrite_last_write_wins() {
    let mut graph = Graph::new();
    graph.add_vertex("a", ()).unwrap();
    graph.add_vertex("b", ()).unwrap();

    assert_eq!(graph.add_directed_edge("a", "b", 5).unwrap(), None);
    assert_eq!(graph.add_directed_edge("a", "b", 9).unwrap(), Some(5));

    assert_eq!(graph.cost("a", "b").unwrap(), 9);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.adjacent("a").unwrap().len(), 1);
}

#[test]
fn test_self_loop_allowed() {
    let mut graph = Graph::new();
    graph.add_vertex("a", ()).unwrap();
    graph.add_directed_edge("a", "a", 3).unwrap();
    assert_eq!(graph.cost("a", "a").unwrap(), 3);
}

#[test]
fn test_negative_cost_is_stored_as_given() {
    let mut graph = Graph::new();
    graph.add_vertex("a", ()).unwrap();
    graph.add_vertex("b", ()).unwrap();
    graph.add_directed_edge("a", "b", -7).unwrap();
    assert_eq!(graph.cost("a", "b").unwrap(), -7);
}

#[test]
fn test_adjacent_lists_neighbors_with_costs() {
    let graph = build_abc();
    let adjacent = graph.adjacent("A").unwrap();
    let pairs: Vec<(&str, i64)> = adjacent.iter().map(|(k, &c)| (k.as_str(), c)).collect();
    assert_eq!(pairs, vec![("B", 1), ("C", 10)]);
    assert!(graph.adjacent("C").unwrap().is_empty());
}

#[test]
fn test_adjacent_and_cost_validate_both_endpoints() {
    let graph = build_abc();
    assert_eq!(
        graph.adjacent("nope").unwrap_err(),
        GraphError::UnknownVertex("nope".into())
    );
    assert_eq!(
        graph.cost("nope", "A").unwrap_err(),
        GraphError::UnknownVertex("nope".into())
    );
    assert_eq!(
        graph.cost("A", "nope").unwrap_err(),
        GraphError::UnknownVertex("nope".into())
    );
}

#[test]
fn test_edges_iterator() {
    let graph = build_abc();
    let edges: Vec<(&str, &str, i64)> = graph.edges().collect();
    assert_eq!(edges, vec![("A", "B", 1), ("A", "C", 10), ("B", "C", 2)]);
}

#[test]
fn test_queries_are_idempotent() {
    let graph = build_abc();

    let first: Vec<String> = graph.vertices().map(String::from).collect();
    let second: Vec<String> = graph.vertices().map(String::from).collect();
    assert_eq!(first, second);

    assert_eq!(graph.data("B").unwrap(), graph.data("B").unwrap());
    assert_eq!(graph.cost("A", "C").unwrap(), graph.cost("A", "C").unwrap());
    assert_eq!(graph.adjacent("A").unwrap(), graph.adjacent("A").unwrap());
    assert_eq!(graph.cost("C", "A"), graph.cost("C", "A"));
}

// ==================== Builder Tests ====================

#[test]
fn test_builder_builds_graph() -> GraphResult<()> {
    let mut builder = GraphBuilder::new();
    builder
        .vertex("A", 'a')
        .vertex("B", 'b')
        .vertex("C", 'c')
        .edge("A", "B", 1)
        .undirected_edge("B", "C", 4);
    let graph = builder.build()?;

    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(*graph.data("C")?, 'c');
    assert_eq!(graph.cost("B", "C")?, 4);
    assert_eq!(graph.cost("C", "B")?, 4);
    Ok(())
}

#[test]
fn test_builder_reports_first_error() {
    let mut builder = GraphBuilder::new();
    builder
        .vertex("A", ())
        .vertex("A", ())
        .edge("A", "missing", 1);
    match builder.build() {
        Err(GraphError::DuplicateVertex(key)) => assert_eq!(key, "A"),
        other => panic!("Expected DuplicateVertex error, got {:?}", other.map(|_| ())),
    }

    let mut builder = GraphBuilder::new();
    builder.vertex("A", ()).edge("A", "missing", 1);
    match builder.build() {
        Err(GraphError::UnknownVertex(key)) => assert_eq!(key, "missing"),
        other => panic!("Expected UnknownVertex error, got {:?}", other.map(|_| ())),
    }
}

// ==================== Display Tests ====================

#[test]
fn test_display_lists_sorted_vertices_and_edges() {
    let mut graph = Graph::new();
    graph.add_vertex("C", ()).unwrap();
    graph.add_vertex("A", ()).unwrap();
    graph.add_vertex("B", ()).unwrap();
    graph.add_directed_edge("A", "C", 10).unwrap();
    graph.add_directed_edge("A", "B", 1).unwrap();
    graph.add_directed_edge("B", "C", 2).unwrap();

    let expected = "Vertices: [A, B, C]\n\
                    Edges:\n\
                    Vertex(A)--->{B=1, C=10}\n\
                    Vertex(B)--->{C=2}\n\
                    Vertex(C)--->{}\n";
    assert_eq!(graph.to_string(), expected);
}

#[test]
fn test_display_empty_graph() {
    let graph: Graph<()> = Graph::default();
    assert_eq!(graph.to_string(), "Vertices: []\nEdges:\n");
}

#[test]
fn test_error_messages() {
    assert_eq!(
        GraphError::DuplicateVertex("A".into()).to_string(),
        "Vertex \"A\" already exists"
    );
    assert_eq!(
        GraphError::UnknownVertex("A".into()).to_string(),
        "Vertex \"A\" does not exist"
    );
    assert_eq!(
        GraphError::UnknownEdge {
            from: "A".into(),
            to: "B".into()
        }
        .to_string(),
        "No edge from \"A\" to \"B\""
    );
}
