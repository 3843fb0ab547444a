//! Directed stop network

use petgraph::graph::{DiGraph, EdgeReference, NodeIndex};
use petgraph::visit::EdgeRef;

use super::components::{Connection, RouteNode};
use crate::Error;

/// Weighted directed graph of route nodes.
///
/// Built once by [`crate::loading::GraphBuilder`] and read-only afterwards.
/// Parallel edges are allowed.
#[derive(Debug, Clone, Default)]
pub struct TransitGraph {
    pub(crate) graph: DiGraph<RouteNode, Connection>,
}

impl TransitGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Underlying petgraph graph, for algorithms working on petgraph traits
    pub fn inner(&self) -> &DiGraph<RouteNode, Connection> {
        &self.graph
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    /// Route node for the index
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidNodeIndex`] if the node does not exist
    pub fn node(&self, index: NodeIndex) -> Result<&RouteNode, Error> {
        self.graph.node_weight(index).ok_or(Error::InvalidNodeIndex)
    }

    /// Display name of the node, `?` for unknown indices
    pub fn display_name(&self, index: NodeIndex) -> String {
        self.graph
            .node_weight(index)
            .map_or_else(|| "?".to_string(), RouteNode::display_name)
    }

    /// Outgoing edges of the node
    pub fn edges(&self, index: NodeIndex) -> impl Iterator<Item = EdgeReference<'_, Connection>> {
        self.graph.edges(index)
    }

    /// Weights of all edges from `a` to `b`
    pub fn connections(&self, a: NodeIndex, b: NodeIndex) -> Vec<Connection> {
        self.graph
            .edges_connecting(a, b)
            .map(|edge| *edge.weight())
            .collect()
    }

    /// Finds the first node with the given display name
    pub fn find(&self, display_name: &str) -> Option<NodeIndex> {
        self.graph
            .node_indices()
            .find(|&idx| self.graph[idx].display_name() == display_name)
    }

    pub fn transfer_count(&self) -> usize {
        self.graph
            .edge_references()
            .filter(|edge| edge.weight().is_transfer())
            .count()
    }

    pub(crate) fn add_node(&mut self, node: RouteNode) -> NodeIndex {
        self.graph.add_node(node)
    }

    pub(crate) fn add_edge(&mut self, from: NodeIndex, to: NodeIndex, connection: Connection) {
        debug_assert!(connection.weight >= 0.0);
        self.graph.add_edge(from, to, connection);
    }
}
