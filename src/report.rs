//! Analysis report envelope
//!
//! Wraps a deterministic [`AnalysisResult`] with the request parameters, the
//! zoom estimate and generation metadata for output and the HTTP API.

use crate::coord::GeoPoint;
use crate::error::Result;
use crate::mosaic::density::DensityThresholds;
use crate::mosaic::zoom::ZoomEstimate;
use crate::mosaic::{analyze_checked, AnalysisConfig, AnalysisResult};
use serde::{Deserialize, Serialize};

/// Full analysis report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Unique ID for this report
    pub id: String,

    /// Parameters the analysis ran with
    pub request: AnalysisRequest,

    /// The analysis itself
    pub analysis: AnalysisResult,

    /// Suggested zoom for the coverage box
    pub zoom: ZoomEstimate,

    /// Metadata about the report
    pub metadata: ReportMetadata,
}

/// Echo of the analysis inputs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub point_count: usize,
    pub overlap_threshold_degrees: f64,
    pub density_thresholds: DensityThresholds,
}

/// Metadata about the report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// When this was generated
    pub timestamp: String,
    /// Crate version that produced the report
    pub version: String,
}

impl AnalysisReport {
    /// Wrap an existing result
    pub fn new(result: AnalysisResult, point_count: usize, config: &AnalysisConfig) -> Self {
        let zoom = result.optimal_zoom_level();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            request: AnalysisRequest {
                point_count,
                overlap_threshold_degrees: config.overlap_threshold_degrees,
                density_thresholds: config.density_thresholds,
            },
            analysis: result,
            zoom,
            metadata: ReportMetadata {
                timestamp: chrono::Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }
}

/// Validate, analyze and wrap in one step
pub fn build_report(points: &[GeoPoint], config: &AnalysisConfig) -> Result<AnalysisReport> {
    let result = analyze_checked(points, config)?;
    Ok(AnalysisReport::new(result, points.len(), config))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points() -> Vec<GeoPoint> {
        (0..12)
            .map(|i| {
                GeoPoint::new(
                    format!("IMG_{:04}.jpg", i),
                    48.8584 + (i / 4) as f64 * 0.0001,
                    2.2945 + (i % 4) as f64 * 0.0001,
                )
            })
            .collect()
    }

    #[test]
    fn test_build_report() {
        let config = AnalysisConfig::default();
        let report = build_report(&sample_points(), &config).unwrap();

        assert_eq!(report.request.point_count, 12);
        assert_eq!(report.analysis.total_images, 12);
        assert_eq!(report.zoom, report.analysis.optimal_zoom_level());
        assert!(uuid::Uuid::parse_str(&report.id).is_ok());
        assert!(chrono::DateTime::parse_from_rfc3339(&report.metadata.timestamp).is_ok());
    }

    #[test]
    fn test_build_report_validates() {
        let points = vec![GeoPoint::new("bad", 0.0, 200.0)];
        assert!(build_report(&points, &AnalysisConfig::default()).is_err());
    }

    #[test]
    fn test_reports_differ_only_in_envelope() {
        let config = AnalysisConfig::default();
        let a = build_report(&sample_points(), &config).unwrap();
        let b = build_report(&sample_points(), &config).unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(a.analysis, b.analysis);
    }
}
