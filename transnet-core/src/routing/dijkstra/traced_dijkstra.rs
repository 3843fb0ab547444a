use std::collections::BinaryHeap;

use hashbrown::HashMap;
use petgraph::{graph::NodeIndex, visit::EdgeRef};

use super::state::State;
use crate::{Error, model::TransitGraph};

/// Shortest paths from one source to every reachable node
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    source: NodeIndex,
    distances: HashMap<NodeIndex, f64>,
    predecessors: HashMap<NodeIndex, NodeIndex>,
}

impl ShortestPathTree {
    pub fn source(&self) -> NodeIndex {
        self.source
    }

    /// Total weight of the shortest path to `target`, `None` if unreachable
    pub fn distance(&self, target: NodeIndex) -> Option<f64> {
        self.distances.get(&target).copied()
    }

    pub fn is_reachable(&self, target: NodeIndex) -> bool {
        self.distances.contains_key(&target)
    }

    pub fn reachable_count(&self) -> usize {
        self.distances.len()
    }

    /// Nodes of the shortest path from the source to `target`, both included
    pub fn path(&self, target: NodeIndex) -> Option<Vec<NodeIndex>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut node_path = Vec::new();
        let mut current = target;
        // Follow predecessors backward from target to start
        while current != self.source {
            node_path.push(current);
            current = *self.predecessors.get(&current)?;
        }
        node_path.push(self.source);
        node_path.reverse();
        Some(node_path)
    }
}

/// Dijkstra's algorithm over the connection weights.
/// Keeps the first predecessor found among paths of equal cost.
pub fn shortest_paths(graph: &TransitGraph, start: NodeIndex) -> ShortestPathTree {
    let estimated_nodes = graph.node_count();
    let mut distances: HashMap<NodeIndex, f64> = HashMap::with_capacity(estimated_nodes);
    let mut predecessors: HashMap<NodeIndex, NodeIndex> = HashMap::with_capacity(estimated_nodes);
    let mut heap = BinaryHeap::with_capacity(estimated_nodes / 4);

    // Start node has distance 0
    heap.push(State {
        cost: 0.0,
        node: start,
    });
    distances.insert(start, 0.0);

    while let Some(State { cost, node }) = heap.pop() {
        // Skip if we've found a better path
        if let Some(&best) = distances.get(&node) {
            if cost > best {
                continue;
            }
        }

        for edge in graph.edges(node) {
            let next = edge.target();
            let next_cost = cost + edge.weight().weight;

            match distances.entry(next) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    heap.push(State {
                        cost: next_cost,
                        node: next,
                    });
                    predecessors.insert(next, node);
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        heap.push(State {
                            cost: next_cost,
                            node: next,
                        });
                        predecessors.insert(next, node);
                    }
                }
            }
        }
    }

    ShortestPathTree {
        source: start,
        distances,
        predecessors,
    }
}

/// Shortest path from `from` to `to`
///
/// # Errors
///
/// Returns [`Error::Disconnected`] if `to` cannot be reached
pub fn shortest_path(
    graph: &TransitGraph,
    from: NodeIndex,
    to: NodeIndex,
) -> Result<Vec<NodeIndex>, Error> {
    graph.node(from)?;
    shortest_paths(graph, from)
        .path(to)
        .ok_or_else(|| disconnected(graph, from, to))
}

/// Total weight of the shortest path from `from` to `to`
///
/// # Errors
///
/// Returns [`Error::Disconnected`] if `to` cannot be reached
pub fn shortest_path_length(
    graph: &TransitGraph,
    from: NodeIndex,
    to: NodeIndex,
) -> Result<f64, Error> {
    graph.node(from)?;
    shortest_paths(graph, from)
        .distance(to)
        .ok_or_else(|| disconnected(graph, from, to))
}

pub(crate) fn disconnected(graph: &TransitGraph, from: NodeIndex, to: NodeIndex) -> Error {
    Error::Disconnected {
        from: graph.display_name(from),
        to: graph.display_name(to),
    }
}
