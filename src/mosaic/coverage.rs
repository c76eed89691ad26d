//! Coverage geometry
//!
//! Bounding box of the whole collection, measured on the ground with the
//! Haversine distance along each edge. The area is the flat rectangle
//! `width_km * height_km`, which is close enough for the sub-hundred-km
//! extents a photo mosaic spans.

use crate::coord::distance::haversine_km;
use crate::coord::{Coordinates, GeoPoint};
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box of all points, with ground extents in km
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageBox {
    pub southwest: Coordinates,
    pub northeast: Coordinates,
    pub width_km: f64,
    pub height_km: f64,
    pub area_km2: f64,
}

impl CoverageBox {
    /// Longitude extent in degrees
    pub fn width_degrees(&self) -> f64 {
        self.northeast.lng - self.southwest.lng
    }

    /// Latitude extent in degrees
    pub fn height_degrees(&self) -> f64 {
        self.northeast.lat - self.southwest.lat
    }

    /// Latitude of the box's vertical midpoint
    pub fn center_lat(&self) -> f64 {
        (self.northeast.lat + self.southwest.lat) / 2.0
    }
}

/// Compute the coverage box for a point set
///
/// Returns `None` for an empty set. A single point yields a zero-sized box.
pub fn calculate_coverage(points: &[GeoPoint]) -> Option<CoverageBox> {
    if points.is_empty() {
        return None;
    }

    let mut min_lat = f64::INFINITY;
    let mut max_lat = f64::NEG_INFINITY;
    let mut min_lng = f64::INFINITY;
    let mut max_lng = f64::NEG_INFINITY;
    for p in points {
        min_lat = min_lat.min(p.latitude);
        max_lat = max_lat.max(p.latitude);
        min_lng = min_lng.min(p.longitude);
        max_lng = max_lng.max(p.longitude);
    }

    let southwest = Coordinates::new(min_lat, min_lng);
    let northwest = Coordinates::new(max_lat, min_lng);
    let southeast = Coordinates::new(min_lat, max_lng);

    let height_km = finite_or_zero(haversine_km(southwest, northwest));
    let width_km = finite_or_zero(haversine_km(southwest, southeast));

    Some(CoverageBox {
        southwest,
        northeast: Coordinates::new(max_lat, max_lng),
        width_km,
        height_km,
        area_km2: finite_or_zero(width_km * height_km),
    })
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
