//! Zoom level estimation
//!
//! Picks a slippy-map zoom level from the coverage area and estimates how
//! many pixels the coverage box spans when rendered at that zoom.

use crate::constants::tiles::{LARGE_PIXEL_DIMENSION, TILE_SIZE_PIXELS};
use crate::mosaic::coverage::CoverageBox;
use serde::{Deserialize, Serialize};

/// Zoom used when no coverage box is available
pub const DEFAULT_ZOOM: u8 = 15;

/// Placeholder footprint when no coverage box is available
pub const NO_COVERAGE: &str = "—";

/// Suggested zoom and rendered footprint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoomEstimate {
    pub zoom: u8,
    pub pixel_coverage: String,
}

impl Default for ZoomEstimate {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            pixel_coverage: NO_COVERAGE.to_string(),
        }
    }
}

/// Zoom level for a coverage area in km²
pub fn zoom_for_area(area_km2: f64) -> u8 {
    if area_km2 > 100.0 {
        12
    } else if area_km2 > 10.0 {
        13
    } else if area_km2 > 1.0 {
        14
    } else if area_km2 > 0.1 {
        15
    } else {
        16
    }
}

/// Pixel width and height of a coverage box at a zoom level
///
/// Longitude maps linearly onto the world width. Latitude uses the world
/// height over 180 degrees, stretched by `1 / cos(lat)` at the box's
/// vertical midpoint to approximate Mercator distortion.
pub fn pixel_dimensions(bbox: &CoverageBox, zoom: u8) -> (f64, f64) {
    let world_pixels = TILE_SIZE_PIXELS * 2f64.powi(i32::from(zoom));
    let pixels_per_lng_degree = world_pixels / 360.0;
    let pixels_per_lat_degree = world_pixels / 180.0;

    let lat_stretch = 1.0 / bbox.center_lat().to_radians().cos();

    let width = bbox.width_degrees() * pixels_per_lng_degree;
    let height = bbox.height_degrees() * pixels_per_lat_degree * lat_stretch;
    (width, height)
}

/// Human-readable pixel footprint
pub fn format_pixel_coverage(width: f64, height: f64) -> String {
    if width > LARGE_PIXEL_DIMENSION || height > LARGE_PIXEL_DIMENSION {
        format!("~{:.1}K × {:.1}K pixels", width / 1000.0, height / 1000.0)
    } else {
        format!("~{} × {} pixels", width.round(), height.round())
    }
}

/// Best zoom level for a coverage box
///
/// Without a box (nothing analyzed yet) the default estimate is returned.
pub fn optimal_zoom_level(bbox: Option<&CoverageBox>) -> ZoomEstimate {
    let Some(bbox) = bbox else {
        return ZoomEstimate::default();
    };

    let zoom = zoom_for_area(bbox.area_km2);
    let (width, height) = pixel_dimensions(bbox, zoom);

    ZoomEstimate {
        zoom,
        pixel_coverage: format_pixel_coverage(width, height),
    }
}
