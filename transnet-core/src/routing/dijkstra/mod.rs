mod state;
pub mod traced_dijkstra;

pub use traced_dijkstra::{ShortestPathTree, shortest_path, shortest_path_length, shortest_paths};
