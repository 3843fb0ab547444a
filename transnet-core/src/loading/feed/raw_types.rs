use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct FeedStop {
    pub stop_id: String,
    pub stop_lat: f64,
    pub stop_lon: f64,
    #[serde(default)]
    pub stop_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedRoute {
    pub route_id: String,
    #[serde(default)]
    pub route_ref: Option<String>,
    #[serde(default)]
    pub route_mode: String,
    #[serde(default)]
    pub schedule: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedMember {
    pub route_id: String,
    pub member_sequence: u32,
    pub stop_id: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub travel_time: Option<u32>,
}
