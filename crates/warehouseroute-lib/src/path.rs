use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::error::Result;
use crate::graph::{Graph, NodeId};

/// Route between two nodes in a graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Node ids along the path, start and end inclusive.
    pub path: Vec<NodeId>,
    /// Total cost to traverse the path.
    pub cost: f64,
}

impl Route {
    /// Number of edges traversed along the path.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Shortest-path search over a [`Graph`].
///
/// Currently holds only the A* strategy. The finder is stateless, so one
/// value can serve any number of queries; further algorithms or inputs such
/// as grids would slot in beside [`PathFinder::shortest_path`].
#[derive(Debug, Default, Clone, Copy)]
pub struct PathFinder;

impl PathFinder {
    pub fn new() -> Self {
        Self
    }

    /// Calculate the lowest-cost path from `start` to `end` using A* search.
    ///
    /// The frontier is ordered by the cost so far plus the straight-line
    /// estimate from [`Graph::heuristic`]. The estimate never overestimates
    /// the remaining cost, so the first time the end node leaves the
    /// frontier its recorded cost is minimal.
    ///
    /// Returns `Ok(None)` when the end node cannot be reached. Node lookups
    /// fail with [`Error::UnknownNode`](crate::Error::UnknownNode) when the
    /// search touches an id the graph does not contain.
    ///
    /// Equally priced frontier entries fall back to node id, which keeps
    /// runs deterministic but is not a contract: for forklift traffic the
    /// number of turns dominates travel time and would make a better tie
    /// rule.
    pub fn shortest_path(
        &self,
        graph: &Graph,
        start: NodeId,
        end: NodeId,
    ) -> Result<Option<Route>> {
        if start == end {
            return Ok(Some(Route {
                path: vec![start],
                cost: 0.0,
            }));
        }

        let mut frontier = BinaryHeap::new();
        let mut came_from: HashMap<NodeId, Option<NodeId>> = HashMap::new();
        let mut cost_so_far: HashMap<NodeId, f64> = HashMap::new();

        frontier.push(FrontierEntry::new(start, 0.0));
        came_from.insert(start, None);
        cost_so_far.insert(start, 0.0);

        while let Some(entry) = frontier.pop() {
            let current = entry.node;
            let Some(&current_cost) = cost_so_far.get(&current) else {
                continue;
            };

            if current == end {
                let path = reconstruct_path(&came_from, start, end);
                return Ok(Some(Route {
                    path,
                    cost: current_cost,
                }));
            }

            for edge in graph.node(current)?.edges() {
                let next = edge.to_node;
                let new_cost = current_cost + edge.cost;
                // Revisit a node only when a cheaper path to it was found.
                if new_cost < *cost_so_far.get(&next).unwrap_or(&f64::INFINITY) {
                    cost_so_far.insert(next, new_cost);
                    came_from.insert(next, Some(current));
                    let priority = new_cost + graph.heuristic(next, end)?;
                    frontier.push(FrontierEntry::new(next, priority));
                }
            }
        }

        Ok(None)
    }
}

fn reconstruct_path(
    came_from: &HashMap<NodeId, Option<NodeId>>,
    start: NodeId,
    end: NodeId,
) -> Vec<NodeId> {
    let mut path = Vec::new();
    let mut current = Some(end);
    while let Some(node) = current {
        path.push(node);
        if node == start {
            break;
        }
        current = came_from.get(&node).copied().flatten();
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct FrontierEntry {
    node: NodeId,
    priority: FloatOrd,
}

impl FrontierEntry {
    fn new(node: NodeId, priority: f64) -> Self {
        Self {
            node,
            priority: FloatOrd(priority),
        }
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by priority.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
