//! Build a few small graphs and walk them.

use graph_walk::*;

fn main() -> GraphResult<()> {
    // Four vertices on a cycle
    let mut graph = Graph::new();
    graph.add_edge("A", "B", EdgeDirection::Undirected);
    graph.add_edge("A", "D", EdgeDirection::Undirected);
    graph.add_edge("B", "C", EdgeDirection::Undirected);
    graph.add_edge("C", "D", EdgeDirection::Undirected);

    println!("BFS from A: {:?}", graph.breadth_first(&"A")?);
    println!("DFS from A: {:?}", graph.depth_first(&"A")?);

    println!("\nGraph info:");
    println!(
        "  Vertices: {:?}",
        graph.vertices().collect::<Vec<_>>()
    );
    print!("{}", graph);

    // Directed graph
    let directed = GraphBuilder::new()
        .directed_edge("A", "B")
        .directed_edge("A", "C")
        .directed_edge("B", "D")
        .directed_edge("C", "B")
        .directed_edge("D", "C")
        .directed_edge("D", "E")
        .build();
    println!("\nDirected BFS from A: {:?}", directed.breadth_first(&"A")?);

    // Road map with distances in km
    let mut roads = GraphBuilder::new();
    for (a, b, km) in [
        ("Madrid", "Barcelona", 600.0),
        ("Madrid", "Valencia", 360.0),
        ("Barcelona", "Valencia", 400.0),
        ("Madrid", "Sevilla", 540.0),
        ("Valencia", "Sevilla", 540.0),
    ] {
        roads.weighted_edge(a, b, km, EdgeDirection::Undirected);
    }
    let roads = roads.build();

    let paths = roads.shortest_distances(&"Madrid")?;
    println!("\nShortest routes from Madrid:");
    for (city, km) in &paths.distances {
        if *city != "Madrid" {
            println!("  Madrid -> {}: {} km", city, km);
        }
    }

    match roads.breadth_first(&"Bilbao") {
        Err(e) => println!("\nExpected failure: {}", e),
        Ok(order) => println!("\nUnexpected traversal: {:?}", order),
    }

    Ok(())
}
