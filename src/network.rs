use std::fmt;

use log::info;
use rayon::prelude::*;
use transnet_core::prelude::*;

use crate::Metric;

/// Stop network built from route and stop records.
///
/// Holds the graph built once from the input; all metrics read it without
/// modification.
#[derive(Debug, Clone)]
pub struct Network {
    graph: TransitGraph,
}

impl Network {
    /// Builds the network from records supplied by the caller
    ///
    /// # Errors
    ///
    /// Returns an error if the records are inconsistent
    pub fn from_records(
        stops: &[StopRecord],
        routes: &[RouteRecord],
        config: &NetworkConfig,
    ) -> Result<Self, Error> {
        let graph = build_graph(stops, routes, config)?;
        Ok(Self { graph })
    }

    /// Builds the network from the feed directories of the config
    ///
    /// # Errors
    ///
    /// Returns an error if a feed cannot be read or its records are inconsistent
    pub fn from_feed(config: &NetworkConfig) -> Result<Self, Error> {
        let graph = transnet_core::create_network(config)?;
        Ok(Self { graph })
    }

    pub fn graph(&self) -> &TransitGraph {
        &self.graph
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Scores of one metric keyed by route qualified stop name, in node order
    ///
    /// # Errors
    ///
    /// See [`Metric::compute`]
    pub fn scores(&self, metric: Metric) -> Result<Vec<(String, f64)>, Error> {
        info!("Computing {metric} for {} nodes", self.node_count());
        Ok(metric.compute(&self.graph)?.named(&self.graph))
    }

    /// Scores of every metric, computed in parallel
    ///
    /// # Errors
    ///
    /// Fails if any metric fails, see [`Metric::compute`]
    pub fn all_scores(&self) -> Result<Vec<(Metric, Vec<(String, f64)>)>, Error> {
        Metric::ALL
            .par_iter()
            .map(|&metric| self.scores(metric).map(|scores| (metric, scores)))
            .collect()
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Network with {} nodes and {} edges ({} transfers)",
            self.graph.node_count(),
            self.graph.edge_count(),
            self.graph.transfer_count()
        )
    }
}
