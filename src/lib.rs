//! mosaic-scout: Photo mosaic suitability analysis
//!
//! A library and CLI tool for judging whether a set of geotagged photos can
//! be stitched into a mosaic or orthophoto.
//!
//! ## Features
//!
//! - Overlap grouping with union-find over a spatial hash grid
//! - Haversine coverage area and image density tiers
//! - 0-100 suitability score with a plain-language recommendation
//! - Zoom level and pixel footprint estimates
//! - HTTP API + CLI interface
//!
//! ## Quick Start
//!
//! ```rust
//! use mosaic_scout::{analyze, AnalysisConfig, GeoPoint};
//!
//! let points: Vec<GeoPoint> = (0..9)
//!     .map(|i| {
//!         GeoPoint::new(
//!             format!("IMG_{:04}.jpg", i),
//!             48.8584 + (i / 3) as f64 * 0.0001,
//!             2.2945 + (i % 3) as f64 * 0.0001,
//!         )
//!     })
//!     .collect();
//!
//! let result = analyze(&points, &AnalysisConfig::default());
//! println!("Suitability: {}%", result.suitability);
//! println!("{}", result.recommendation);
//!
//! assert_eq!(result.overlap_groups.len(), 1);
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod coord;
pub mod error;
pub mod format;
pub mod input;
pub mod mosaic;
pub mod report;
pub mod server;

// Re-export commonly used types
pub use config::Config;
pub use coord::{Coordinates, GeoPoint};
pub use error::{Error, Result};
pub use mosaic::{analyze, AnalysisConfig, AnalysisResult};
