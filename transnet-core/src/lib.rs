//! Stop network construction and accessibility metrics.
//!
//! Route and stop records are turned into a weighted directed graph with one
//! node per stop and route. Consecutive stops of a route are linked by their
//! travel time, nodes of the same stop on different routes by the expected
//! wait for the target route. The metrics aggregate beeline distances and
//! shortest paths over all pairs of nodes.

pub mod algo;
pub mod error;
pub mod loading;
pub mod metrics;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;
pub use loading::{GraphBuilder, NetworkConfig, build_graph};
pub use model::{Connection, ConnectionKind, RouteNode, Stop, TransitGraph};

/// Builds the network from the feed directories of the config
///
/// # Errors
///
/// Returns an error if the feed cannot be read or its records are inconsistent
pub fn create_network(config: &NetworkConfig) -> Result<TransitGraph, Error> {
    let (stops, routes) = loading::feed::read_feed(config)?;
    build_graph(&stops, &routes, config)
}
