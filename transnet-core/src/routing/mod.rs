//! Shortest paths over the stop network

pub mod dijkstra;

pub use dijkstra::{ShortestPathTree, shortest_path, shortest_path_length, shortest_paths};
