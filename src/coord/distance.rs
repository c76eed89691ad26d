//! Distance metrics
//!
//! Two metrics are used on purpose and must not be mixed up:
//! - [`planar_distance`] works in raw degree space and decides overlap
//! - [`haversine_km`] is a great-circle distance used for coverage area

use crate::constants::geo::EARTH_RADIUS_KM;
use crate::coord::Coordinates;

/// Euclidean distance in degree space, `sqrt(dlat^2 + dlng^2)`
///
/// Not corrected for latitude: one degree of longitude counts the same as
/// one degree of latitude everywhere.
pub fn planar_distance(p1: Coordinates, p2: Coordinates) -> f64 {
    (p2.lat - p1.lat).hypot(p2.lng - p1.lng)
}

/// Great-circle distance between two points in kilometers (Haversine formula)
pub fn haversine_km(p1: Coordinates, p2: Coordinates) -> f64 {
    let lat1 = p1.lat.to_radians();
    let lat2 = p2.lat.to_radians();
    let delta_lat = (p2.lat - p1.lat).to_radians();
    let delta_lng = (p2.lng - p1.lng).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
