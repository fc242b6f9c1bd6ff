//! Core graph structure — an insertion-ordered adjacency list.

use std::fmt;
use std::hash::Hash;

use indexmap::IndexMap;

use crate::types::{EdgeDirection, GraphError, GraphResult, Neighbor};

/// An adjacency-list graph keyed by vertex identifier.
///
/// The map's key order is the vertex insertion order, and each neighbor list
/// keeps edge insertion order. Parallel edges and self-loops are stored as
/// given.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    adjacency: IndexMap<V, Vec<Neighbor<V>>>,
}

impl<V> Graph<V>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: IndexMap::new(),
        }
    }

    /// Register a vertex. Returns `false` if it was already present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        log::trace!("registering vertex {:?}", vertex);
        self.adjacency.insert(vertex, Vec::new());
        true
    }

    /// Add an edge with the default weight, registering missing endpoints.
    pub fn add_edge(&mut self, from: V, to: V, direction: EdgeDirection) {
        self.add_weighted_edge(from, to, crate::types::DEFAULT_WEIGHT, direction);
    }

    /// Add an edge with an explicit weight, registering missing endpoints.
    pub fn add_weighted_edge(&mut self, from: V, to: V, weight: f64, direction: EdgeDirection) {
        self.add_vertex(from.clone());
        self.add_vertex(to.clone());

        if let Some(list) = self.adjacency.get_mut(&from) {
            list.push(Neighbor::weighted(to.clone(), weight));
        }
        if direction == EdgeDirection::Undirected {
            if let Some(list) = self.adjacency.get_mut(&to) {
                list.push(Neighbor::weighted(from, weight));
            }
        }
    }

    /// Whether the vertex is registered.
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Number of registered vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Total length of all neighbor lists (an undirected edge counts twice).
    pub fn adjacency_entry_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Registered vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.adjacency.keys()
    }

    /// Stored neighbor records of a vertex, or `None` if it is not registered.
    pub fn neighbors(&self, vertex: &V) -> Option<&[Neighbor<V>]> {
        self.adjacency.get(vertex).map(Vec::as_slice)
    }

    /// Neighbor identifiers of a vertex in stored order (duplicates included).
    pub fn neighbor_ids(&self, vertex: &V) -> Option<Vec<&V>> {
        self.adjacency
            .get(vertex)
            .map(|list| list.iter().map(|n| &n.vertex).collect())
    }

    /// Length of a vertex's neighbor list.
    pub fn degree(&self, vertex: &V) -> Option<usize> {
        self.adjacency.get(vertex).map(Vec::len)
    }

    /// Iterate `(vertex, neighbors)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&V, &[Neighbor<V>])> + '_ {
        self.adjacency.iter().map(|(v, list)| (v, list.as_slice()))
    }

    /// Neighbor list of a registered vertex, or `VertexNotFound`.
    pub(crate) fn require(&self, vertex: &V) -> GraphResult<&[Neighbor<V>]> {
        self.neighbors(vertex)
            .ok_or_else(|| GraphError::vertex_not_found(vertex))
    }

    /// Position of a vertex in the insertion order.
    pub(crate) fn index_of(&self, vertex: &V) -> Option<usize> {
        self.adjacency.get_index_of(vertex)
    }

    /// Vertex and neighbor list at an insertion-order position.
    pub(crate) fn vertex_at(&self, index: usize) -> Option<(&V, &[Neighbor<V>])> {
        self.adjacency
            .get_index(index)
            .map(|(v, list)| (v, list.as_slice()))
    }
}

impl<V> Default for Graph<V>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Display for Graph<V>
where
    V: fmt::Display,
{
    /// One line per vertex: `A: [B(1), D(1)]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, list) in &self.adjacency {
            write!(f, "{}: [", vertex)?;
            for (i, n) in list.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}({})", n.vertex, n.weight)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lists_vertices_in_insertion_order() {
        let mut graph = Graph::new();
        graph.add_edge("B", "A", EdgeDirection::Undirected);
        graph.add_weighted_edge("A", "C", 2.5, EdgeDirection::Directed);
        graph.add_vertex("X");

        assert_eq!(graph.to_string(), "B: [A(1)]\nA: [B(1), C(2.5)]\nC: []\nX: []\n");
    }

    #[test]
    fn index_follows_registration() {
        let mut graph = Graph::new();
        graph.add_edge(10, 20, EdgeDirection::Directed);
        graph.add_vertex(5);
        assert_eq!(graph.index_of(&10), Some(0));
        assert_eq!(graph.index_of(&20), Some(1));
        assert_eq!(graph.index_of(&5), Some(2));
        assert_eq!(graph.index_of(&99), None);
        assert_eq!(graph.vertex_at(2).map(|(v, _)| *v), Some(5));
        assert!(graph.vertex_at(3).is_none());
    }
}
