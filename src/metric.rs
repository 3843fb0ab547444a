use std::fmt;
use std::str::FromStr;

use transnet_core::prelude::*;

/// Per-node metric of the stop network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Betweenness,
    Eigenvector,
    /// Average beeline in meters to all stops
    Beeline,
    /// Average beeline in meters along shortest paths
    BeelineIntermediate,
    /// Expected travel time in minutes including the wait at the stop
    TravelTime,
}

impl Metric {
    pub const ALL: [Metric; 5] = [
        Metric::Betweenness,
        Metric::Eigenvector,
        Metric::Beeline,
        Metric::BeelineIntermediate,
        Metric::TravelTime,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Metric::Betweenness => "betweenness",
            Metric::Eigenvector => "eigenvector",
            Metric::Beeline => "beeline",
            Metric::BeelineIntermediate => "beeline_intermediate",
            Metric::TravelTime => "travel_time",
        }
    }

    /// Computes the metric for every node of the graph
    ///
    /// # Errors
    ///
    /// Returns an error if the graph is disconnected for path based metrics,
    /// or the eigenvector iteration does not converge
    pub fn compute(self, graph: &TransitGraph) -> Result<NodeScores, Error> {
        match self {
            Metric::Betweenness => Ok(betweenness(graph)),
            Metric::Eigenvector => eigenvector(graph),
            Metric::Beeline => Ok(beeline(graph)),
            Metric::BeelineIntermediate => beeline_intermediate(graph),
            Metric::TravelTime => travel_time(graph),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .into_iter()
            .find(|metric| metric.name() == s)
            .ok_or_else(|| Error::InvalidData(format!("Unknown metric '{s}'")))
    }
}
