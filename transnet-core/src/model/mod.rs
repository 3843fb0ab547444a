//! Data model for the stop network
//!
//! Contains the physical stops, their per-route instantiations and the
//! weighted directed graph connecting them.

pub mod components;
pub mod graph;

pub use components::{Connection, ConnectionKind, RouteNode, Stop};
pub use graph::TransitGraph;
