use geo::Point;

use crate::model::RouteNode;

/// Earth radius used for beeline distances
pub const EARTH_RADIUS_KM: f64 = 6367.0;

/// Great circle distance in meters between two points (x = longitude, y = latitude)
pub fn haversine(a: Point<f64>, b: Point<f64>) -> f64 {
    let (lon1, lat1) = (a.x().to_radians(), a.y().to_radians());
    let (lon2, lat2) = (b.x().to_radians(), b.y().to_radians());

    let dlon = lon2 - lon1;
    let dlat = lat2 - lat1;
    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // guard asin against rounding slightly above 1 for antipodal points
    let c = 2.0 * h.sqrt().min(1.0).asin();
    EARTH_RADIUS_KM * c * 1000.0
}

/// Beeline between two nodes in meters
pub fn geo_dist(a: &RouteNode, b: &RouteNode) -> f64 {
    haversine(a.geometry, b.geometry)
}
