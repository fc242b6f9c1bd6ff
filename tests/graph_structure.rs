//! Structure tests: vertex/edge insertion and read access.

use std::collections::HashSet;

use rand::Rng;

use graph_walk::graph::{Graph, GraphBuilder};
use graph_walk::types::{EdgeDirection, DEFAULT_WEIGHT};

fn ids(graph: &Graph<&'static str>, v: &'static str) -> Vec<&'static str> {
    graph
        .neighbor_ids(&v)
        .unwrap_or_default()
        .into_iter()
        .copied()
        .collect()
}

// ==================== Vertex Tests ====================

#[test]
fn test_empty_graph() {
    let graph: Graph<&str> = Graph::new();
    assert!(graph.is_empty());
    assert_eq!(graph.vertex_count(), 0);
    assert_eq!(graph.adjacency_entry_count(), 0);
    assert!(graph.neighbors(&"A").is_none());
}

#[test]
fn test_add_vertex_idempotent() {
    let mut once = Graph::new();
    once.add_vertex("X");

    let mut twice = Graph::new();
    assert!(twice.add_vertex("X"));
    assert!(!twice.add_vertex("X"));

    assert_eq!(
        once.vertices().collect::<Vec<_>>(),
        twice.vertices().collect::<Vec<_>>()
    );
    assert_eq!(twice.degree(&"X"), Some(0));
}

#[test]
fn test_add_vertex_keeps_existing_neighbors() {
    let mut graph = Graph::new();
    graph.add_edge("A", "B", EdgeDirection::Undirected);
    graph.add_vertex("A");
    assert_eq!(ids(&graph, "A"), vec!["B"]);
}

#[test]
fn test_vertices_in_insertion_order() {
    let mut graph = Graph::new();
    graph.add_vertex("C");
    graph.add_edge("A", "C", EdgeDirection::Undirected);
    graph.add_edge("B", "A", EdgeDirection::Directed);
    assert_eq!(graph.vertices().copied().collect::<Vec<_>>(), vec!["C", "A", "B"]);
}

// ==================== Edge Tests ====================

#[test]
fn test_add_edge_registers_endpoints() {
    let mut graph = Graph::new();
    graph.add_edge("A", "B", EdgeDirection::Undirected);
    assert!(graph.contains_vertex(&"A"));
    assert!(graph.contains_vertex(&"B"));
    assert_eq!(graph.vertex_count(), 2);
}

#[test]
fn test_undirected_edge_symmetric() {
    let mut graph = Graph::new();
    graph.add_edge("A", "B", EdgeDirection::Undirected);
    assert_eq!(ids(&graph, "A"), vec!["B"]);
    assert_eq!(ids(&graph, "B"), vec!["A"]);
}

#[test]
fn test_directed_edge_one_way() {
    let mut graph = Graph::new();
    graph.add_edge("A", "B", EdgeDirection::Directed);
    assert_eq!(ids(&graph, "A"), vec!["B"]);
    assert!(ids(&graph, "B").is_empty());

    graph.add_edge("B", "A", EdgeDirection::Directed);
    assert_eq!(ids(&graph, "B"), vec!["A"]);
}

#[test]
fn test_neighbor_order_follows_edge_insertion() {
    let mut graph = Graph::new();
    graph.add_edge("A", "D", EdgeDirection::Undirected);
    graph.add_edge("A", "B", EdgeDirection::Undirected);
    graph.add_edge("C", "A", EdgeDirection::Undirected);
    assert_eq!(ids(&graph, "A"), vec!["D", "B", "C"]);
}

#[test]
fn test_parallel_edges_are_stored() {
    let mut graph = Graph::new();
    graph.add_edge("A", "B", EdgeDirection::Undirected);
    graph.add_edge("A", "B", EdgeDirection::Undirected);
    assert_eq!(ids(&graph, "A"), vec!["B", "B"]);
    assert_eq!(ids(&graph, "B"), vec!["A", "A"]);
    assert_eq!(graph.adjacency_entry_count(), 4);
}

#[test]
fn test_undirected_self_loop_listed_twice() {
    let mut graph = Graph::new();
    graph.add_edge("A", "A", EdgeDirection::Undirected);
    assert_eq!(graph.vertex_count(), 1);
    assert_eq!(ids(&graph, "A"), vec!["A", "A"]);
}

#[test]
fn test_weights() {
    let mut graph = Graph::new();
    graph.add_edge("A", "B", EdgeDirection::Undirected);
    graph.add_weighted_edge("A", "C", 5.0, EdgeDirection::Undirected);

    let a = graph.neighbors(&"A").unwrap();
    assert_eq!(a.len(), 2);
    assert_eq!(a[0].weight, DEFAULT_WEIGHT);
    assert_eq!(a[1].vertex, "C");
    assert_eq!(a[1].weight, 5.0);
    assert_eq!(graph.neighbors(&"C").unwrap()[0].weight, 5.0);
}

// ==================== Builder Tests ====================

#[test]
fn test_builder() {
    let graph = GraphBuilder::new()
        .vertex("X")
        .edge("A", "B")
        .directed_edge("B", "C")
        .weighted_edge("C", "A", 2.0, EdgeDirection::Undirected)
        .build();

    assert_eq!(graph.vertices().copied().collect::<Vec<_>>(), vec!["X", "A", "B", "C"]);
    assert_eq!(ids(&graph, "B"), vec!["A", "C"]);
    assert_eq!(ids(&graph, "C"), vec!["A"]);
    assert_eq!(ids(&graph, "A"), vec!["B", "C"]);
}

#[test]
fn test_builder_from_json() {
    let json = r#"{
        "directed": true,
        "vertices": ["Z"],
        "edges": [
            {"from": "A", "to": "B"},
            {"from": "B", "to": "C", "weight": 3.5, "directed": false}
        ]
    }"#;
    let graph = GraphBuilder::from_json(json).unwrap().build();

    let order: Vec<&String> = graph.vertices().collect();
    assert_eq!(order, vec!["Z", "A", "B", "C"]);
    assert!(graph.neighbors(&"B".to_string()).unwrap().iter().all(|n| n.vertex != "A"));
    assert_eq!(graph.neighbors(&"C".to_string()).unwrap()[0].weight, 3.5);
}

#[test]
fn test_builder_from_bad_json() {
    assert!(matches!(
        GraphBuilder::from_json("{\"edges\": 3}"),
        Err(graph_walk::GraphError::Json(_))
    ));
}

// ==================== Invariant Tests ====================

#[test]
fn test_structural_invariant_random() {
    let mut rng = rand::thread_rng();
    let mut graph: Graph<u32> = Graph::new();
    let mut expected: HashSet<u32> = HashSet::new();

    for _ in 0..500 {
        let a = rng.gen_range(0..60);
        let b = rng.gen_range(0..60);
        match rng.gen_range(0..3) {
            0 => {
                graph.add_vertex(a);
                expected.insert(a);
            }
            1 => {
                graph.add_edge(a, b, EdgeDirection::Undirected);
                expected.extend([a, b]);
            }
            _ => {
                graph.add_edge(a, b, EdgeDirection::Directed);
                expected.extend([a, b]);
            }
        }
    }

    let listed: Vec<u32> = graph.vertices().copied().collect();
    let unique: HashSet<u32> = listed.iter().copied().collect();
    assert_eq!(listed.len(), unique.len(), "vertex listed twice");
    assert_eq!(unique, expected);

    for v in &listed {
        let neighbors = graph.neighbors(v).expect("listed vertex has a neighbor list");
        for n in neighbors {
            assert!(graph.contains_vertex(&n.vertex));
        }
    }
}
