use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Route {0} has no schedule")]
    MissingSchedule(String),
    #[error("Route {0} has an empty schedule")]
    EmptySchedule(String),
    #[error("Stop {stop_id} referenced by route {route} is not in the stop index")]
    UnknownStop { stop_id: String, route: String },
    #[error("Stop {stop_id} has invalid coordinates ({lat}, {lon})")]
    InvalidCoordinate { stop_id: String, lat: f64, lon: f64 },
    #[error("No path from {from} to {to}")]
    Disconnected { from: String, to: String },
    #[error("Invalid node index")]
    InvalidNodeIndex,
    #[error("Centrality error: {0}")]
    Centrality(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}
