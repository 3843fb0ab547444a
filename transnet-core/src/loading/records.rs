//! Records handed over by a route record source

/// Stop as supplied by the source
#[derive(Debug, Clone, PartialEq)]
pub struct StopRecord {
    pub id: String,
    pub lat: f64,
    pub lon: f64,
    pub name: String,
}

impl StopRecord {
    pub fn new(id: impl Into<String>, lat: f64, lon: f64, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            lat,
            lon,
            name: name.into(),
        }
    }
}

/// One member of a route, in traversal order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub stop_id: String,
    /// Member role, e.g. `platform` or `stop`
    pub role: String,
    /// Minutes from the previous member of the route
    pub travel_time: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RouteRecord {
    /// Route reference, e.g. `34E`
    pub title: Option<String>,
    /// Transport mode, e.g. `tram` or `bus`
    pub mode: String,
    pub entries: Vec<RouteEntry>,
    /// Whitespace separated departures
    pub schedule: Option<String>,
}
