//! This module is responsible for reading route and stop records and
//! building the stop network from them.

mod builder;
mod config;
pub mod feed;
pub mod records;
pub mod route_filter;
mod transfers;

pub use builder::{GraphBuilder, build_graph};
pub use config::NetworkConfig;
pub use records::{RouteEntry, RouteRecord, StopRecord};
pub use route_filter::{FilterDecision, is_urban_daytime};
