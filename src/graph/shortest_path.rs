//! Single-source shortest distances over edge weights (Dijkstra).

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::fmt;
use std::hash::Hash;

use indexmap::IndexMap;

use crate::types::{GraphError, GraphResult};

use super::Graph;

/// Heap entry; ordering is reversed so `BinaryHeap` pops the smallest cost.
#[derive(Debug, Clone, Copy)]
struct Frontier {
    cost: f64,
    index: usize,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        // Costs are never NaN here; ties fall back to insertion order.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.index.cmp(&self.index))
    }
}

/// Distances from one start vertex to every registered vertex.
#[derive(Debug, Clone)]
pub struct ShortestPaths<V> {
    /// The source of the search.
    pub start: V,
    /// Distance per vertex, in vertex insertion order. Unreachable vertices
    /// hold `f64::INFINITY`.
    pub distances: IndexMap<V, f64>,
    /// Predecessor on a shortest path, for every reachable vertex but `start`.
    pub previous: HashMap<V, V>,
}

impl<V> ShortestPaths<V>
where
    V: Eq + Hash + Clone,
{
    /// Distance to `target`, or `None` if it is not a registered vertex.
    pub fn distance(&self, target: &V) -> Option<f64> {
        self.distances.get(target).copied()
    }

    pub fn is_reachable(&self, target: &V) -> bool {
        self.distance(target).is_some_and(f64::is_finite)
    }

    /// Vertices on a shortest path from `start` to `target`, both included.
    pub fn path_to(&self, target: &V) -> Option<Vec<V>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = vec![target.clone()];
        let mut current = target;
        while let Some(prev) = self.previous.get(current) {
            path.push(prev.clone());
            current = prev;
        }
        path.reverse();
        Some(path)
    }
}

impl<V> Graph<V>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    /// Dijkstra from `start` over stored edge weights.
    ///
    /// Fails with `NegativeWeight` as soon as a negative or NaN weight is
    /// reachable, since the greedy settle order is no longer sound.
    pub fn shortest_distances(&self, start: &V) -> GraphResult<ShortestPaths<V>> {
        let start_index = self
            .index_of(start)
            .ok_or_else(|| GraphError::vertex_not_found(start))?;

        let n = self.vertex_count();
        let mut dist = vec![f64::INFINITY; n];
        let mut prev: Vec<Option<usize>> = vec![None; n];
        let mut settled = vec![false; n];
        let mut heap = BinaryHeap::new();

        dist[start_index] = 0.0;
        heap.push(Frontier {
            cost: 0.0,
            index: start_index,
        });

        while let Some(Frontier { cost, index }) = heap.pop() {
            if settled[index] {
                continue;
            }
            settled[index] = true;

            let Some((vertex, neighbors)) = self.vertex_at(index) else {
                continue;
            };

            for neighbor in neighbors {
                if neighbor.weight.is_nan() || neighbor.weight < 0.0 {
                    log::warn!(
                        "aborting shortest-path search: weight {} on {:?} -> {:?}",
                        neighbor.weight,
                        vertex,
                        neighbor.vertex
                    );
                    return Err(GraphError::NegativeWeight {
                        from: format!("{:?}", vertex),
                        to: format!("{:?}", neighbor.vertex),
                        weight: neighbor.weight,
                    });
                }

                let Some(next) = self.index_of(&neighbor.vertex) else {
                    continue;
                };
                let candidate = cost + neighbor.weight;
                if candidate < dist[next] {
                    dist[next] = candidate;
                    prev[next] = Some(index);
                    heap.push(Frontier {
                        cost: candidate,
                        index: next,
                    });
                }
            }
        }

        let mut distances = IndexMap::with_capacity(n);
        let mut previous = HashMap::new();
        for (index, (vertex, _)) in self.iter().enumerate() {
            distances.insert(vertex.clone(), dist[index]);
            if let Some((p, _)) = prev[index].and_then(|p| self.vertex_at(p)) {
                previous.insert(vertex.clone(), p.clone());
            }
        }

        log::debug!(
            "shortest distances from {:?}: {} of {} vertices reachable",
            start,
            settled.iter().filter(|s| **s).count(),
            n
        );

        Ok(ShortestPaths {
            start: start.clone(),
            distances,
            previous,
        })
    }
}
