pub use crate::{Error, create_network};

// Building the network
pub use crate::loading::{
    GraphBuilder, NetworkConfig, RouteEntry, RouteRecord, StopRecord, build_graph,
    is_urban_daytime,
};
pub use crate::loading::feed::read_feed;
pub use crate::model::{Connection, ConnectionKind, RouteNode, Stop, TransitGraph};

// Metrics
pub use crate::algo::{betweenness, eigenvector};
pub use crate::metrics::{
    NodeScores, beeline, beeline_intermediate, geo_dist, travel_time,
};
pub use crate::routing::{ShortestPathTree, shortest_path, shortest_path_length, shortest_paths};

pub use petgraph::graph::NodeIndex;
