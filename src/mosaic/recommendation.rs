//! Recommendation text
//!
//! Guidance is assembled from independent clauses. The first two cases are
//! terminal; otherwise a base sentence picked by score band is followed by
//! any caveats that apply.

use crate::mosaic::density::DensityCategory;
use crate::mosaic::grouping::{GroupStats, OverlapGroup};

pub const UPLOAD_PROMPT: &str = "Upload geotagged images to analyze mosaic potential.";

pub const MORE_IMAGES_NEEDED: &str = "More images needed: For a good mosaic map, try to collect at least 10-20 geotagged images covering your area of interest.";

const EXCELLENT: &str = "Excellent mosaic potential! Your images have good overlap and density for creating a high-quality mosaic map. We recommend proceeding with mosaic creation.";

const GOOD: &str = "Good mosaic potential. Your images can create a reasonable mosaic map, though there may be some gaps or lower-quality areas. For best results, try adding more images in sparse areas.";

const FAIR: &str = "Fair mosaic potential. While a mosaic can be created, expect significant gaps or quality issues. Consider collecting more images with better overlap between them.";

const LIMITED: &str = "Limited mosaic potential. Your current image set is not ideal for creating a cohesive mosaic map. The images may be too spread out or have insufficient overlap. Try collecting more images in a more concentrated area.";

const LOW_DENSITY_CAVEAT: &str =
    " The image density is low; try collecting more images within the same area.";

const PATCHY_CAVEAT: &str = " Many of your images lack overlap with others, which may result in a patchy mosaic. Try capturing images with more overlap between them.";

/// Minimum image count before the score bands apply
pub const MIN_IMAGES_FOR_GUIDANCE: usize = 5;

/// Minimum size of the largest group for a best-area pointer
pub const BEST_AREA_MIN_COUNT: usize = 5;

/// Share of singleton groups above which the patchy caveat is added
const SINGLE_GROUP_SHARE: f64 = 0.7;

/// Build the recommendation for one analysis
pub fn recommend(
    total_images: usize,
    suitability: u8,
    density: DensityCategory,
    stats: &GroupStats,
    best_group: Option<&OverlapGroup>,
) -> String {
    if total_images == 0 {
        return UPLOAD_PROMPT.to_string();
    }
    if total_images < MIN_IMAGES_FOR_GUIDANCE {
        return MORE_IMAGES_NEEDED.to_string();
    }

    let mut text = match suitability {
        80.. => EXCELLENT,
        60..=79 => GOOD,
        40..=59 => FAIR,
        _ => LIMITED,
    }
    .to_string();

    if density == DensityCategory::Low {
        text.push_str(LOW_DENSITY_CAVEAT);
    }

    if stats.single_image_groups as f64 > stats.total_groups as f64 * SINGLE_GROUP_SHARE {
        text.push_str(PATCHY_CAVEAT);
    }

    if let Some(group) = best_group.filter(|g| g.count >= BEST_AREA_MIN_COUNT) {
        text.push_str(&format!(
            " Your best mosaic area is centered around {:.6}, {:.6} with {} overlapping images.",
            group.center.lat, group.center.lng, group.count
        ));
    }

    text
}
