use petgraph::graph::NodeIndex;
use rayon::prelude::*;

use super::scores::NodeScores;
use crate::{
    Error,
    model::TransitGraph,
    routing::dijkstra::{shortest_paths, traced_dijkstra::disconnected},
};

/// Expected travel time in minutes from each node.
///
/// The average shortest path weight to all other nodes plus the own wait
/// interval of the node, scaled down by the network size:
/// `(sum / n + interval) / n`.
///
/// # Errors
///
/// Returns [`Error::Disconnected`] if some node cannot reach another one
pub fn travel_time(graph: &TransitGraph) -> Result<NodeScores, Error> {
    let nodes: Vec<NodeIndex> = graph.node_indices().collect();
    let values = nodes
        .par_iter()
        .map(|&source| travel_time_from(graph, source))
        .collect::<Result<Vec<_>, Error>>()?;
    Ok(values.into())
}

/// Expected travel time in minutes from `source`, see [`travel_time`]
///
/// # Errors
///
/// Returns [`Error::Disconnected`] if `source` cannot reach some node
#[allow(clippy::cast_precision_loss)]
pub fn travel_time_from(graph: &TransitGraph, source: NodeIndex) -> Result<f64, Error> {
    let interval = graph.node(source)?.interval;
    let tree = shortest_paths(graph, source);

    let mut total = 0.0;
    for target in graph.node_indices().filter(|&target| target != source) {
        total += tree
            .distance(target)
            .ok_or_else(|| disconnected(graph, source, target))?;
    }

    let n = graph.node_count() as f64;
    Ok((total / n + interval) / n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Connection, RouteNode, Stop};

    fn node(name: &str, interval: f64) -> RouteNode {
        let mut node = RouteNode::new(&Stop::new(name, name, 47.0, 15.0).unwrap(), "1");
        node.interval = interval;
        node
    }

    #[test]
    fn test_single_edge() {
        let mut graph = TransitGraph::new();
        let a = graph.add_node(node("A", 7.5));
        let b = graph.add_node(node("B", 7.5));
        graph.add_edge(a, b, Connection::travel(4.0));

        let value = travel_time_from(&graph, a).unwrap();
        assert!((value - (4.0 / 2.0 + 7.5) / 2.0).abs() < 1e-12);
        assert!(matches!(
            travel_time_from(&graph, b),
            Err(Error::Disconnected { .. })
        ));
    }

    #[test]
    fn test_single_node_is_own_interval() {
        let mut graph = TransitGraph::new();
        let a = graph.add_node(node("A", 12.0));
        assert_eq!(travel_time(&graph).unwrap().get(a), Some(12.0));
    }

    #[test]
    fn test_uses_shortest_paths() {
        // ring a -> b -> c -> a with a transfer shortcut a -> c
        let mut graph = TransitGraph::new();
        let a = graph.add_node(node("A", 3.0));
        let b = graph.add_node(node("B", 6.0));
        let c = graph.add_node(node("C", 9.0));
        graph.add_edge(a, b, Connection::travel(2.0));
        graph.add_edge(b, c, Connection::travel(2.0));
        graph.add_edge(c, a, Connection::travel(2.0));
        graph.add_edge(a, c, Connection::transfer(1.0));

        let scores = travel_time(&graph).unwrap();
        // a: 2 + 1, b: 2 + 4, c: 2 + 4
        assert!((scores.get(a).unwrap() - (3.0 / 3.0 + 3.0) / 3.0).abs() < 1e-12);
        assert!((scores.get(b).unwrap() - (6.0 / 3.0 + 6.0) / 3.0).abs() < 1e-12);
        assert!((scores.get(c).unwrap() - (6.0 / 3.0 + 9.0) / 3.0).abs() < 1e-12);
    }
}
