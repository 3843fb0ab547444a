use itertools::Itertools;
use petgraph::graph::NodeIndex;
use rayon::prelude::*;

use super::{geodesic::geo_dist, scores::NodeScores};
use crate::{
    Error,
    model::{RouteNode, TransitGraph},
    routing::dijkstra::{shortest_paths, traced_dijkstra::disconnected},
};

/// Average beeline in meters from each node to all nodes, itself included
pub fn beeline(graph: &TransitGraph) -> NodeScores {
    let nodes: Vec<&RouteNode> = graph.inner().node_weights().collect();
    nodes
        .par_iter()
        .map(|from| average_beeline(graph, from))
        .collect::<Vec<_>>()
        .into()
}

/// Average beeline in meters from `source` to all nodes
///
/// # Errors
///
/// Returns [`Error::InvalidNodeIndex`] for an unknown source
pub fn beeline_from(graph: &TransitGraph, source: NodeIndex) -> Result<f64, Error> {
    Ok(average_beeline(graph, graph.node(source)?))
}

#[allow(clippy::cast_precision_loss)]
fn average_beeline(graph: &TransitGraph, from: &RouteNode) -> f64 {
    let total: f64 = graph
        .inner()
        .node_weights()
        .map(|to| geo_dist(from, to))
        .sum();
    total / graph.node_count() as f64
}

/// Like [`beeline`], but follows the shortest path between two nodes and
/// sums the beelines of its hops, e.g. A-C-D-B instead of A-B.
///
/// # Errors
///
/// Returns [`Error::Disconnected`] if some node cannot reach another one
pub fn beeline_intermediate(graph: &TransitGraph) -> Result<NodeScores, Error> {
    let nodes: Vec<NodeIndex> = graph.node_indices().collect();
    let values = nodes
        .par_iter()
        .map(|&source| beeline_intermediate_from(graph, source))
        .collect::<Result<Vec<_>, Error>>()?;
    Ok(values.into())
}

/// Average path following beeline in meters from `source` to all nodes
///
/// # Errors
///
/// Returns [`Error::Disconnected`] if `source` cannot reach some node
#[allow(clippy::cast_precision_loss)]
pub fn beeline_intermediate_from(graph: &TransitGraph, source: NodeIndex) -> Result<f64, Error> {
    graph.node(source)?;
    let tree = shortest_paths(graph, source);

    let mut total = 0.0;
    for target in graph.node_indices() {
        let path = tree
            .path(target)
            .ok_or_else(|| disconnected(graph, source, target))?;
        total += path
            .iter()
            .map(|&idx| &graph.inner()[idx])
            .tuple_windows()
            .map(|(a, b)| geo_dist(a, b))
            .sum::<f64>();
    }
    Ok(total / graph.node_count() as f64)
}
