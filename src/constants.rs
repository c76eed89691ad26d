//! Centralized constants for the mosaic-scout crate
//!
//! This module consolidates constants that are used across multiple modules
//! to avoid duplication and ensure consistency.

/// Geographic constants
pub mod geo {
    /// Mean Earth radius in kilometers
    pub const EARTH_RADIUS_KM: f64 = 6_371.0;
}

/// Slippy-map tiling constants
pub mod tiles {
    /// Tile edge length in pixels; the whole world is one tile at zoom 0
    pub const TILE_SIZE_PIXELS: f64 = 256.0;

    /// Pixel dimension above which coverage is reported in thousands
    pub const LARGE_PIXEL_DIMENSION: f64 = 10_000.0;
}
