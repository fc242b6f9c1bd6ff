//! CLI command implementations.

use std::collections::HashSet;
use std::path::PathBuf;

use crate::graph::{Graph, GraphBuilder, TraversalOrder};
use crate::types::{EdgeList, EdgeSpec, GraphResult};

/// Where a command's graph comes from: an edge-list file, inline edges, or both.
#[derive(Debug, Clone, Default)]
pub struct GraphSource {
    /// JSON edge-list document.
    pub file: Option<PathBuf>,
    /// Inline edges in `A-B`, `A>B` or `A-B:4` form, applied after the file.
    pub edges: Vec<String>,
    /// Treat inline edges without a `>` marker as directed.
    pub directed: bool,
}

impl GraphSource {
    /// Read the file (if any), then append inline edges in order.
    pub fn load(&self) -> GraphResult<Graph<String>> {
        let mut list: EdgeList = match &self.file {
            Some(path) => {
                let json = std::fs::read_to_string(path)?;
                log::debug!("loaded edge list from {}", path.display());
                serde_json::from_str(&json)?
            }
            None => EdgeList::default(),
        };

        for text in &self.edges {
            let mut spec = EdgeSpec::parse(text)?;
            spec.directed.get_or_insert(self.directed);
            list.edges.push(spec);
        }

        Ok(GraphBuilder::from_edge_list(&list).build())
    }
}

/// Print the adjacency listing.
pub fn cmd_show(source: &GraphSource, json: bool) -> GraphResult<()> {
    let graph = source.load()?;

    if json {
        let vertices: Vec<serde_json::Value> = graph
            .iter()
            .map(|(vertex, neighbors)| {
                serde_json::json!({
                    "vertex": vertex,
                    "neighbors": neighbors,
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({ "vertices": vertices }))
                .unwrap_or_default()
        );
    } else {
        print!("{}", graph);
    }
    Ok(())
}

/// Run a breadth-first or depth-first traversal.
pub fn cmd_traverse(
    source: &GraphSource,
    start: &str,
    order: TraversalOrder,
    json: bool,
) -> GraphResult<()> {
    let graph = source.load()?;
    let result = graph.traverse(&start.to_string(), order)?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "start": start,
                "order": order.name(),
                "visited": result.visited,
                "depths": result.depths,
            })
        );
    } else {
        println!(
            "{} from {}: [{}]",
            order.name().to_uppercase(),
            start,
            result.visited.join(", ")
        );
        for vertex in &result.visited {
            let depth = result.depths.get(vertex).copied().unwrap_or(0);
            println!("  [depth {}] {}", depth, vertex);
        }
    }
    Ok(())
}

/// Shortest distances from a start vertex to every vertex.
pub fn cmd_shortest(source: &GraphSource, start: &str, json: bool) -> GraphResult<()> {
    let graph = source.load()?;
    let paths = graph.shortest_distances(&start.to_string())?;

    if json {
        let entries: Vec<serde_json::Value> = paths
            .distances
            .iter()
            .map(|(vertex, &d)| {
                serde_json::json!({
                    "vertex": vertex,
                    "distance": d.is_finite().then_some(d),
                    "path": paths.path_to(vertex),
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::json!({"start": start, "distances": entries})
        );
    } else {
        println!("Shortest distances from {}:", start);
        for (vertex, &d) in &paths.distances {
            match paths.path_to(vertex) {
                Some(path) => println!("  {} -> {}: {} via {}", start, vertex, d, path.join(" -> ")),
                None => println!("  {} -> {}: unreachable", start, vertex),
            }
        }
    }
    Ok(())
}

/// Summary statistics about the graph.
pub fn cmd_stats(source: &GraphSource, json: bool) -> GraphResult<()> {
    let graph = source.load()?;

    let vertex_count = graph.vertex_count();
    let entry_count = graph.adjacency_entry_count();
    let max_degree = graph
        .iter()
        .map(|(_, neighbors)| neighbors.len())
        .max()
        .unwrap_or(0);
    // A sink with incoming edges is not isolated.
    let targets: HashSet<&String> = graph
        .iter()
        .flat_map(|(_, neighbors)| neighbors.iter().map(|n| &n.vertex))
        .collect();
    let isolated = graph
        .iter()
        .filter(|(v, n)| n.is_empty() && !targets.contains(v))
        .count();
    let avg_degree = if vertex_count > 0 {
        entry_count as f64 / vertex_count as f64
    } else {
        0.0
    };

    if json {
        let info = serde_json::json!({
            "vertices": vertex_count,
            "adjacency_entries": entry_count,
            "avg_degree": avg_degree,
            "max_degree": max_degree,
            "isolated": isolated,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("Vertices: {}", vertex_count);
        println!("Adjacency entries: {}", entry_count);
        println!("Avg degree: {:.2}", avg_degree);
        println!("Max degree: {}", max_degree);
        println!("Isolated vertices: {}", isolated);
    }
    Ok(())
}
