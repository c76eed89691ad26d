//! Mosaic suitability analysis
//!
//! This module handles:
//! - Grouping overlapping photos into connected clusters
//! - Coverage area and density of the whole collection
//! - A 0-100 suitability score and matching guidance text
//! - Zoom level and pixel footprint estimates
//!
//! Every entry point is a pure function of its inputs. Nothing is cached
//! between calls, so one analysis never observes another.
//!
//! Overlap uses the planar degree distance while coverage uses the Haversine
//! distance in km; see [`crate::coord::distance`].

pub mod coverage;
pub mod density;
pub mod grouping;
pub mod recommendation;
pub mod scoring;
pub mod zoom;

use crate::coord::{validate_points, Coordinates, GeoPoint};
use crate::error::Result;
use coverage::{calculate_coverage, CoverageBox};
use density::{density_report, DensityReport, DensityThresholds};
use grouping::{find_overlap_groups, GroupStats, OverlapGroup, DEFAULT_OVERLAP_THRESHOLD};
use recommendation::recommend;
use scoring::ScoreComponents;
use serde::{Deserialize, Serialize};
use tracing::debug;
use zoom::{optimal_zoom_level, ZoomEstimate};

/// Message reported when there is nothing to analyze
pub const NO_IMAGES_ERROR: &str = "No images to analyze";

/// Tunable analysis parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Maximum planar distance in degrees for two photos to overlap
    pub overlap_threshold_degrees: f64,

    /// Density tier boundaries in images per km²
    pub density_thresholds: DensityThresholds,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            overlap_threshold_degrees: DEFAULT_OVERLAP_THRESHOLD,
            density_thresholds: DensityThresholds::default(),
        }
    }
}

/// The largest group, as shown in a "best region" summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestArea {
    pub center: Coordinates,
    pub count: usize,
    /// Share of all images in this group, as a rounded percentage
    pub coverage_percent: u8,
}

/// Diagnostic detail behind the headline numbers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedAnalysis {
    pub group_stats: GroupStats,
    pub bounding_box: CoverageBox,
    pub density: DensityReport,
    pub score_components: ScoreComponents,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_area: Option<BestArea>,
}

/// Outcome of one analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Set only when the input was empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub total_images: usize,
    /// Largest first; equal sizes in discovery order
    pub overlap_groups: Vec<OverlapGroup>,
    /// Coverage area in km²
    pub coverage_area: f64,
    /// Images per km²
    pub average_density: f64,
    pub suitability: u8,
    pub recommendation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detailed_analysis: Option<DetailedAnalysis>,
}

impl AnalysisResult {
    fn empty() -> Self {
        Self {
            error: Some(NO_IMAGES_ERROR.to_string()),
            total_images: 0,
            overlap_groups: Vec::new(),
            coverage_area: 0.0,
            average_density: 0.0,
            suitability: 0,
            recommendation: recommendation::UPLOAD_PROMPT.to_string(),
            detailed_analysis: None,
        }
    }

    /// Coverage box of the analyzed collection, if there was one
    pub fn bounding_box(&self) -> Option<&CoverageBox> {
        self.detailed_analysis.as_ref().map(|d| &d.bounding_box)
    }

    /// Zoom estimate for this result's coverage box
    pub fn optimal_zoom_level(&self) -> ZoomEstimate {
        optimal_zoom_level(self.bounding_box())
    }
}

/// Analyze a collection of points for mosaic suitability
///
/// Coordinates are used as given; see [`analyze_checked`] for a variant that
/// rejects out-of-range or non-finite values first.
pub fn analyze(points: &[GeoPoint], config: &AnalysisConfig) -> AnalysisResult {
    let Some(bounding_box) = calculate_coverage(points) else {
        return AnalysisResult::empty();
    };

    let total_images = points.len();
    let groups = find_overlap_groups(points, config.overlap_threshold_degrees);
    let group_stats = GroupStats::from_groups(&groups);

    let coverage_area = bounding_box.area_km2;
    let density = density_report(total_images, coverage_area, &config.density_thresholds);

    let score_components = scoring::score(
        &groups,
        total_images,
        density.images_per_km2,
        &config.density_thresholds,
    );
    let suitability = score_components.total;

    let recommendation = recommend(
        total_images,
        suitability,
        density.category,
        &group_stats,
        groups.first(),
    );

    let best_area = groups.first().map(|g| BestArea {
        center: g.center,
        count: g.count,
        coverage_percent: (g.count as f64 / total_images as f64 * 100.0).round() as u8,
    });

    debug!(
        total_images,
        groups = group_stats.total_groups,
        largest_group = group_stats.largest_group,
        coverage_km2 = coverage_area,
        suitability,
        "Mosaic analysis complete"
    );

    AnalysisResult {
        error: None,
        total_images,
        coverage_area,
        average_density: density.images_per_km2,
        suitability,
        recommendation,
        detailed_analysis: Some(DetailedAnalysis {
            group_stats,
            bounding_box,
            density,
            score_components,
            best_area,
        }),
        overlap_groups: groups,
    }
}

/// Validate all coordinates, then analyze
pub fn analyze_checked(points: &[GeoPoint], config: &AnalysisConfig) -> Result<AnalysisResult> {
    validate_points(points)?;
    Ok(analyze(points, config))
}

/// Heatmap input: one `[lat, lng, weight]` triple per point, weight 1
pub fn heatmap_data(points: &[GeoPoint]) -> Vec<[f64; 3]> {
    points
        .iter()
        .map(|p| [p.latitude, p.longitude, 1.0])
        .collect()
}
