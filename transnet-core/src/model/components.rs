//! Network components - stops, route nodes and connections

use geo::Point;

use crate::Error;

/// Physical stop as read from the stop records
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    /// External ID of the stop
    pub id: String,
    /// Display name, shared by all platforms of the stop
    pub name: String,
    /// Stop coordinates (x = longitude, y = latitude)
    pub geometry: Point<f64>,
    /// Expected wait in minutes, known once the stop is bound to a route
    pub interval: Option<f64>,
}

impl Stop {
    /// Creates a stop after checking that the coordinates are valid decimal degrees
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoordinate`] for non-finite or out of range coordinates
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        lat: f64,
        lon: f64,
    ) -> Result<Self, Error> {
        let id = id.into();
        if !(lat.is_finite() && lon.is_finite())
            || !(-90.0..=90.0).contains(&lat)
            || !(-180.0..=180.0).contains(&lon)
        {
            return Err(Error::InvalidCoordinate { stop_id: id, lat, lon });
        }

        Ok(Self {
            id,
            name: name.into(),
            geometry: Point::new(lon, lat),
            interval: None,
        })
    }

    pub fn lat(&self) -> f64 {
        self.geometry.y()
    }

    pub fn lon(&self) -> f64 {
        self.geometry.x()
    }
}

/// A stop as served by one route traversal.
///
/// Every route visiting a stop gets its own node, so that changing between
/// routes is an explicit transfer edge carrying the wait of the next route.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteNode {
    pub stop_id: String,
    /// Name of the physical stop, without the route suffix
    pub stop_name: String,
    /// Title of the route serving this node
    pub route: String,
    pub geometry: Point<f64>,
    /// Expected wait in minutes for the route at this stop
    pub interval: f64,
}

impl RouteNode {
    /// Instantiates `stop` for the route titled `route`.
    /// The interval is filled in once every schedule of the route is known.
    pub fn new(stop: &Stop, route: &str) -> Self {
        Self {
            stop_id: stop.id.clone(),
            stop_name: stop.name.clone(),
            route: route.to_string(),
            geometry: stop.geometry,
            interval: stop.interval.unwrap_or(0.0),
        }
    }

    /// Route qualified name, e.g. `Jakominiplatz (1)`
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.stop_name, self.route)
    }
}

/// Name of the physical stop behind a route qualified display name.
pub fn physical_name(display_name: &str) -> &str {
    match display_name.rfind('(') {
        Some(pos) => display_name[..pos].strip_suffix(' ').unwrap_or(&display_name[..pos]),
        None => display_name,
    }
}

/// Route title behind a route qualified display name.
pub fn route_title(display_name: &str) -> &str {
    match display_name.rfind('(') {
        Some(pos) => display_name[pos..].trim_matches(|c| c == '(' || c == ')' || c == ' '),
        None => "",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionKind {
    /// Scheduled ride between consecutive stops of one route
    Travel,
    /// Change between two routes at the same physical stop
    Transfer,
}

/// Graph edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    pub kind: ConnectionKind,
    /// Cost in minutes
    pub weight: f64,
}

impl Connection {
    pub fn travel(minutes: f64) -> Self {
        Self {
            kind: ConnectionKind::Travel,
            weight: minutes,
        }
    }

    pub fn transfer(minutes: f64) -> Self {
        Self {
            kind: ConnectionKind::Transfer,
            weight: minutes,
        }
    }

    pub fn is_transfer(&self) -> bool {
        self.kind == ConnectionKind::Transfer
    }
}
