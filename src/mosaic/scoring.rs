//! Suitability scoring
//!
//! The score is the rounded sum of four capped components:
//!
//! | Component    | Max | Basis                                        |
//! |--------------|-----|----------------------------------------------|
//! | Image count  | 20  | `min(n, 100) / 100`                          |
//! | Overlap      | 40  | share of points in groups of two or more     |
//! | Density      | 30  | density tier                                 |
//! | Distribution | 10  | `1 - min(largest group share, 0.9)`          |

use crate::mosaic::density::DensityThresholds;
use crate::mosaic::grouping::OverlapGroup;
use serde::{Deserialize, Serialize};

const IMAGE_COUNT_WEIGHT: f64 = 20.0;
const IMAGE_COUNT_SATURATION: usize = 100;
const OVERLAP_WEIGHT: f64 = 40.0;
const DISTRIBUTION_WEIGHT: f64 = 10.0;
const LARGEST_GROUP_SHARE_CAP: f64 = 0.9;

/// Per-component breakdown of the suitability score
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponents {
    pub image_count: u32,
    pub overlap: u32,
    pub density: u32,
    pub distribution: u32,
    pub total: u8,
}

/// Image count component, unrounded
pub fn image_count_score(total_images: usize) -> f64 {
    total_images.min(IMAGE_COUNT_SATURATION) as f64 / IMAGE_COUNT_SATURATION as f64
        * IMAGE_COUNT_WEIGHT
}

/// Overlap component, unrounded
pub fn overlap_score(groups: &[OverlapGroup], total_images: usize) -> f64 {
    if total_images == 0 {
        return 0.0;
    }
    let overlapping: usize = groups.iter().filter(|g| g.count > 1).map(|g| g.count).sum();
    overlapping as f64 / total_images as f64 * OVERLAP_WEIGHT
}

/// Density component: a fixed value per tier
pub fn density_score(density: f64, thresholds: &DensityThresholds) -> u32 {
    if density <= 0.0 || density.is_nan() {
        0
    } else if density >= thresholds.high {
        30
    } else if density >= thresholds.medium {
        25
    } else if density >= thresholds.low {
        15
    } else {
        5
    }
}

/// Distribution component, unrounded
///
/// `groups` must be sorted largest first.
pub fn distribution_score(groups: &[OverlapGroup], total_images: usize) -> f64 {
    match groups.first() {
        Some(largest) if total_images > 0 => {
            let share = largest.count as f64 / total_images as f64;
            DISTRIBUTION_WEIGHT * (1.0 - share.min(LARGEST_GROUP_SHARE_CAP))
        }
        _ => 0.0,
    }
}

/// Combine all components into a 0-100 score
pub fn score(
    groups: &[OverlapGroup],
    total_images: usize,
    density: f64,
    thresholds: &DensityThresholds,
) -> ScoreComponents {
    let image_count = image_count_score(total_images);
    let overlap = overlap_score(groups, total_images);
    let density = density_score(density, thresholds);
    let distribution = distribution_score(groups, total_images);

    let sum = image_count + overlap + f64::from(density) + distribution;
    let total = round_half_up(sum).clamp(0.0, 100.0) as u8;

    ScoreComponents {
        image_count: round_half_up(image_count) as u32,
        overlap: round_half_up(overlap) as u32,
        density,
        distribution: round_half_up(distribution) as u32,
        total,
    }
}

fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::GeoPoint;
    use crate::mosaic::grouping::find_overlap_groups;
    use approx::assert_abs_diff_eq;

    fn groups_with_sizes(sizes: &[usize]) -> (Vec<OverlapGroup>, usize) {
        let mut points = Vec::new();
        for (g, &size) in sizes.iter().enumerate() {
            for i in 0..size {
                points.push(GeoPoint::new(
                    format!("g{}-{}", g, i),
                    g as f64,
                    i as f64 * 0.0001,
                ));
            }
        }
        let total = points.len();
        (find_overlap_groups(&points, 0.0002), total)
    }

    #[test]
    fn test_image_count_saturates() {
        assert_abs_diff_eq!(image_count_score(0), 0.0);
        assert_abs_diff_eq!(image_count_score(50), 10.0);
        assert_abs_diff_eq!(image_count_score(100), 20.0);
        assert_abs_diff_eq!(image_count_score(5000), 20.0);
    }

    #[test]
    fn test_overlap_counts_only_multi_groups() {
        let (groups, total) = groups_with_sizes(&[3, 1, 1]);
        assert_abs_diff_eq!(overlap_score(&groups, total), 3.0 / 5.0 * 40.0, epsilon = 1e-12);
    }

    #[test]
    fn test_density_tiers() {
        let t = DensityThresholds::default();
        assert_eq!(density_score(0.0, &t), 0);
        assert_eq!(density_score(0.5, &t), 5);
        assert_eq!(density_score(10.0, &t), 15);
        assert_eq!(density_score(30.0, &t), 25);
        assert_eq!(density_score(50.0, &t), 25);
        assert_eq!(density_score(100.0, &t), 30);
    }

    #[test]
    fn test_distribution_caps_largest_share() {
        // One group holding everything still earns the 10% floor
        let (groups, total) = groups_with_sizes(&[10]);
        assert_abs_diff_eq!(distribution_score(&groups, total), 1.0, epsilon = 1e-12);

        let (groups, total) = groups_with_sizes(&[2, 2, 2, 2, 2]);
        assert_abs_diff_eq!(distribution_score(&groups, total), 8.0, epsilon = 1e-12);

        assert_eq!(distribution_score(&[], 0), 0.0);
    }

    #[test]
    fn test_score_sums_and_rounds() {
        // 5 points: count 1.0, overlap 24.0, density 0, distribution 4.0 -> 29
        let (groups, total) = groups_with_sizes(&[3, 1, 1]);
        let components = score(&groups, total, 0.0, &DensityThresholds::default());

        assert_eq!(components.image_count, 1);
        assert_eq!(components.overlap, 24);
        assert_eq!(components.density, 0);
        assert_eq!(components.distribution, 4);
        assert_eq!(components.total, 29);
    }

    #[test]
    fn test_score_rounds_half_up() {
        assert_eq!(round_half_up(12.5), 13.0);
        assert_eq!(round_half_up(12.49), 12.0);
        assert_eq!(round_half_up(0.0), 0.0);
    }

    #[test]
    fn test_score_upper_bound() {
        let (groups, total) = groups_with_sizes(&[20; 10]);
        let components = score(&groups, total, 500.0, &DensityThresholds::default());

        // 20 + 40 + 30 + 9 = 99
        assert_eq!(components.total, 99);
        assert!(components.total <= 100);
    }
}
