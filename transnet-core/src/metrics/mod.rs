//! Per-stop accessibility metrics.
//!
//! Every metric aggregates over all pairs of nodes, so the outer loop over
//! source nodes runs in parallel. Shortest paths are computed once per source.

pub mod beeline;
pub mod geodesic;
pub mod scores;
pub mod travel_time;

pub use beeline::{beeline, beeline_from, beeline_intermediate, beeline_intermediate_from};
pub use geodesic::{EARTH_RADIUS_KM, geo_dist, haversine};
pub use scores::NodeScores;
pub use travel_time::{travel_time, travel_time_from};
