//! Density classification
//!
//! Images per square kilometer of coverage, bucketed into tiers.

use serde::{Deserialize, Serialize};

/// Tier boundaries in images per km²
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DensityThresholds {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl Default for DensityThresholds {
    fn default() -> Self {
        Self {
            low: 10.0,
            medium: 30.0,
            high: 100.0,
        }
    }
}

/// Density tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DensityCategory {
    #[serde(rename = "low")]
    Low,
    #[serde(rename = "medium")]
    Medium,
    #[serde(rename = "high")]
    High,
    #[serde(rename = "very high")]
    VeryHigh,
}

impl std::fmt::Display for DensityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
            Self::VeryHigh => write!(f, "very high"),
        }
    }
}

/// Density figures for one analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityReport {
    pub images_per_km2: f64,
    pub category: DensityCategory,
}

/// Images per km², or 0 when the area is degenerate
pub fn average_density(total_images: usize, coverage_area_km2: f64) -> f64 {
    if coverage_area_km2 <= 0.0 || !coverage_area_km2.is_finite() {
        return 0.0;
    }
    total_images as f64 / coverage_area_km2
}

/// Place a density value into its tier
pub fn classify(density: f64, thresholds: &DensityThresholds) -> DensityCategory {
    if density < thresholds.low {
        DensityCategory::Low
    } else if density < thresholds.medium {
        DensityCategory::Medium
    } else if density < thresholds.high {
        DensityCategory::High
    } else {
        DensityCategory::VeryHigh
    }
}

/// Compute density and its tier in one step
pub fn density_report(
    total_images: usize,
    coverage_area_km2: f64,
    thresholds: &DensityThresholds,
) -> DensityReport {
    let images_per_km2 = average_density(total_images, coverage_area_km2);
    DensityReport {
        images_per_km2,
        category: classify(images_per_km2, thresholds),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_density() {
        assert_eq!(average_density(50, 2.0), 25.0);
        assert_eq!(average_density(50, 0.0), 0.0);
        assert_eq!(average_density(50, -1.0), 0.0);
        assert_eq!(average_density(0, 0.0), 0.0);
    }

    #[test]
    fn test_classify_boundaries() {
        let t = DensityThresholds::default();

        assert_eq!(classify(0.0, &t), DensityCategory::Low);
        assert_eq!(classify(9.99, &t), DensityCategory::Low);
        assert_eq!(classify(10.0, &t), DensityCategory::Medium);
        assert_eq!(classify(29.99, &t), DensityCategory::Medium);
        assert_eq!(classify(30.0, &t), DensityCategory::High);
        assert_eq!(classify(50.0, &t), DensityCategory::High);
        assert_eq!(classify(100.0, &t), DensityCategory::VeryHigh);
    }

    #[test]
    fn test_custom_thresholds() {
        let t = DensityThresholds {
            low: 1.0,
            medium: 2.0,
            high: 3.0,
        };
        assert_eq!(classify(2.5, &t), DensityCategory::High);
    }

    #[test]
    fn test_partial_thresholds_fill_defaults() {
        let t: DensityThresholds = serde_json::from_str(r#"{"high": 50.0}"#).unwrap();
        assert_eq!(t.low, 10.0);
        assert_eq!(t.medium, 30.0);
        assert_eq!(t.high, 50.0);
    }

    #[test]
    fn test_category_serialization() {
        assert_eq!(
            serde_json::to_string(&DensityCategory::VeryHigh).unwrap(),
            "\"very high\""
        );
        assert_eq!(DensityCategory::Medium.to_string(), "medium");
    }
}
