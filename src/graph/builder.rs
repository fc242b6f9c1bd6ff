//! Fluent API for building Graph instances.

use std::fmt;
use std::hash::Hash;

use crate::types::{EdgeDirection, EdgeList, GraphResult};

use super::Graph;

/// Fluent builder for constructing a Graph.
pub struct GraphBuilder<V> {
    graph: Graph<V>,
}

impl<V> GraphBuilder<V>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
        }
    }

    /// Register a vertex (no-op if present).
    pub fn vertex(&mut self, vertex: V) -> &mut Self {
        self.graph.add_vertex(vertex);
        self
    }

    /// Add an undirected edge with the default weight.
    pub fn edge(&mut self, from: V, to: V) -> &mut Self {
        self.graph.add_edge(from, to, EdgeDirection::Undirected);
        self
    }

    /// Add a directed edge with the default weight.
    pub fn directed_edge(&mut self, from: V, to: V) -> &mut Self {
        self.graph.add_edge(from, to, EdgeDirection::Directed);
        self
    }

    /// Add an edge with an explicit weight and direction.
    pub fn weighted_edge(
        &mut self,
        from: V,
        to: V,
        weight: f64,
        direction: EdgeDirection,
    ) -> &mut Self {
        self.graph.add_weighted_edge(from, to, weight, direction);
        self
    }

    /// Build the final Graph.
    pub fn build(&mut self) -> Graph<V> {
        std::mem::take(&mut self.graph)
    }
}

impl<V> Default for GraphBuilder<V>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBuilder<String> {
    /// Seed a builder from an edge-list document.
    ///
    /// Isolated vertices are registered first, then edges in document order.
    pub fn from_edge_list(list: &EdgeList) -> Self {
        let mut builder = Self::new();
        for vertex in &list.vertices {
            builder.vertex(vertex.clone());
        }
        for spec in &list.edges {
            builder.weighted_edge(
                spec.from.clone(),
                spec.to.clone(),
                spec.weight,
                spec.direction(list.directed),
            );
        }
        builder
    }

    /// Parse a JSON edge-list document into a builder.
    pub fn from_json(json: &str) -> GraphResult<Self> {
        let list: EdgeList = serde_json::from_str(json)?;
        Ok(Self::from_edge_list(&list))
    }
}
