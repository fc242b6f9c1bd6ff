//! Graph traversal algorithms (BFS, DFS).

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;
use std::hash::Hash;

use crate::types::GraphResult;

use super::Graph;

/// Visitation strategy for [`Graph::traverse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOrder {
    /// FIFO frontier; vertices come out in non-decreasing hop distance.
    BreadthFirst,
    /// Pre-order descent, exhausting one branch before backtracking.
    DepthFirst,
}

impl TraversalOrder {
    pub fn name(&self) -> &'static str {
        match self {
            Self::BreadthFirst => "bfs",
            Self::DepthFirst => "dfs",
        }
    }
}

/// Result of a traversal.
#[derive(Debug, Clone)]
pub struct TraversalResult<V> {
    /// Strategy that produced this result.
    pub order: TraversalOrder,
    /// Vertices in visitation order; each reachable vertex exactly once.
    pub visited: Vec<V>,
    /// Depth at which each vertex was discovered.
    pub depths: HashMap<V, usize>,
}

impl<V> Graph<V>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    /// Vertices reachable from `start` in breadth-first order.
    pub fn breadth_first(&self, start: &V) -> GraphResult<Vec<V>> {
        Ok(bfs(self, start)?.visited)
    }

    /// Vertices reachable from `start` in depth-first pre-order.
    pub fn depth_first(&self, start: &V) -> GraphResult<Vec<V>> {
        Ok(dfs(self, start)?.visited)
    }

    /// Run a traversal and keep the discovery depths.
    pub fn traverse(&self, start: &V, order: TraversalOrder) -> GraphResult<TraversalResult<V>> {
        match order {
            TraversalOrder::BreadthFirst => bfs(self, start),
            TraversalOrder::DepthFirst => dfs(self, start),
        }
    }
}

/// BFS from `start`. A vertex is marked when enqueued, so it is queued once.
pub fn bfs<V>(graph: &Graph<V>, start: &V) -> GraphResult<TraversalResult<V>>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    graph.require(start)?;

    let mut visited: HashSet<&V> = HashSet::new();
    let mut visited_order: Vec<V> = Vec::new();
    let mut depths: HashMap<V, usize> = HashMap::new();
    let mut queue: VecDeque<(&V, usize)> = VecDeque::new();

    visited.insert(start);
    queue.push_back((start, 0));

    while let Some((current, depth)) = queue.pop_front() {
        visited_order.push(current.clone());
        depths.insert(current.clone(), depth);

        for neighbor in graph.require(current)? {
            if visited.insert(&neighbor.vertex) {
                queue.push_back((&neighbor.vertex, depth + 1));
            }
        }
    }

    log::debug!(
        "bfs from {:?} visited {} of {} vertices",
        start,
        visited_order.len(),
        graph.vertex_count()
    );

    Ok(TraversalResult {
        order: TraversalOrder::BreadthFirst,
        visited: visited_order,
        depths,
    })
}

/// DFS from `start` with an explicit stack.
///
/// Neighbors are pushed in reverse so the first stored neighbor is expanded
/// first, giving the same pre-order as the recursive formulation. A vertex is
/// marked when it is popped and visited; stale stack entries are skipped.
pub fn dfs<V>(graph: &Graph<V>, start: &V) -> GraphResult<TraversalResult<V>>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    graph.require(start)?;

    let mut visited: HashSet<&V> = HashSet::new();
    let mut visited_order: Vec<V> = Vec::new();
    let mut depths: HashMap<V, usize> = HashMap::new();
    let mut stack: Vec<(&V, usize)> = vec![(start, 0)];

    while let Some((current, depth)) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        visited_order.push(current.clone());
        depths.insert(current.clone(), depth);

        for neighbor in graph.require(current)?.iter().rev() {
            if !visited.contains(&neighbor.vertex) {
                stack.push((&neighbor.vertex, depth + 1));
            }
        }
    }

    log::debug!(
        "dfs from {:?} visited {} of {} vertices",
        start,
        visited_order.len(),
        graph.vertex_count()
    );

    Ok(TraversalResult {
        order: TraversalOrder::DepthFirst,
        visited: visited_order,
        depths,
    })
}
