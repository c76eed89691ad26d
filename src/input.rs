//! Point loading
//!
//! Reads point collections produced by an external metadata extractor. Two
//! JSON shapes are accepted: a bare array of points, or an object with a
//! `points` array.

use crate::coord::GeoPoint;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum PointsDocument {
    Bare(Vec<GeoPoint>),
    Wrapped { points: Vec<GeoPoint> },
}

/// Parse points from a JSON string
pub fn parse_points(content: &str) -> Result<Vec<GeoPoint>> {
    let document: PointsDocument = serde_json::from_str(content).map_err(|e| {
        Error::Input(format!(
            "Expected a JSON array of points or an object with a \"points\" array: {}",
            e
        ))
    })?;

    Ok(match document {
        PointsDocument::Bare(points) => points,
        PointsDocument::Wrapped { points } => points,
    })
}

/// Load points from a file, or from stdin when the path is `-`
pub fn load_points(path: &str) -> Result<Vec<GeoPoint>> {
    let content = if path == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(Path::new(path)).map_err(|e| {
            Error::Input(format!("Failed to read {}: {}", path, e))
        })?
    };

    parse_points(&content)
}
