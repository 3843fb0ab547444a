use hashbrown::HashMap;
use log::{debug, info};
use petgraph::graph::NodeIndex;

use crate::{
    Error,
    model::{Connection, TransitGraph, components::physical_name},
};

/// Expected wait per route title from its accumulated schedule.
///
/// The wait is half the average headway over an hour:
/// `60 / (departures / 2) / 2`, with departures counted as whitespace
/// separated tokens over all schedules of the title.
pub(crate) fn wait_intervals(
    schedules: &HashMap<String, String>,
) -> Result<HashMap<String, f64>, Error> {
    schedules
        .iter()
        .map(|(title, schedule)| {
            let departures = schedule.split_whitespace().count();
            if departures == 0 {
                return Err(Error::EmptySchedule(title.clone()));
            }
            #[allow(clippy::cast_precision_loss)]
            let interval = 60.0 / (departures as f64 / 2.0) / 2.0;
            debug!("Route {title}: {departures} departures, interval {interval:.2} min");
            Ok((title.clone(), interval))
        })
        .collect()
}

/// Assigns every node the interval of its route
pub(crate) fn assign_intervals(
    graph: &mut TransitGraph,
    intervals: &HashMap<String, f64>,
) -> Result<(), Error> {
    for node in graph.graph.node_weights_mut() {
        node.interval = intervals
            .get(&node.route)
            .copied()
            .ok_or_else(|| Error::MissingSchedule(node.route.clone()))?;
    }
    Ok(())
}

/// Links all nodes of the same physical stop with each other.
///
/// Nodes are grouped by their display name without the route suffix. Each
/// member gets an edge to every other member weighted by the interval of the
/// target, the expected wait before boarding there. Returns the number of
/// edges added.
pub(crate) fn add_transfer_edges(graph: &mut TransitGraph) -> usize {
    let mut groups: HashMap<String, Vec<NodeIndex>> = HashMap::new();
    for idx in graph.node_indices() {
        let display_name = graph.graph[idx].display_name();
        groups
            .entry(physical_name(&display_name).to_string())
            .or_default()
            .push(idx);
    }

    let nodes: Vec<NodeIndex> = graph.node_indices().collect();
    let mut added = 0;
    for from in nodes {
        let display_name = graph.graph[from].display_name();
        let Some(members) = groups.get(physical_name(&display_name)) else {
            continue;
        };
        for &to in members {
            if to == from {
                continue;
            }
            let weight = graph.graph[to].interval;
            graph.add_edge(from, to, Connection::transfer(weight));
            added += 1;
        }
    }

    info!(
        "Added {added} transfer edges across {} stops",
        groups.values().filter(|members| members.len() > 1).count()
    );
    added
}
