//! Human-readable text output formatter

use crate::config::Config;
use crate::error::Result;
use crate::format::OutputFormatter;
use crate::report::AnalysisReport;

/// Largest groups listed in the summary
const MAX_LISTED_GROUPS: usize = 5;

/// Text formatter - outputs human-readable summary
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Human-readable text"
    }

    fn format(&self, report: &AnalysisReport, _config: &Config) -> Result<String> {
        let analysis = &report.analysis;
        let mut output = String::new();

        output.push_str(&format!("mosaic-scout analysis ({})\n", report.id));

        if let Some(error) = &analysis.error {
            output.push_str(&format!("Error: {}\n", error));
            output.push_str(&format!("\n{}\n", analysis.recommendation));
            return Ok(output);
        }

        output.push_str(&format!("Suitability: {}/100\n", analysis.suitability));
        output.push_str(&format!("Images: {}\n", analysis.total_images));
        output.push_str(&format!("Overlap groups: {}\n", analysis.overlap_groups.len()));
        output.push_str(&format!("Coverage: {:.2} km²\n", analysis.coverage_area));
        output.push_str(&format!("Density: {:.1} images/km²", analysis.average_density));
        if let Some(detail) = &analysis.detailed_analysis {
            output.push_str(&format!(" ({})", detail.density.category));
        }
        output.push('\n');
        output.push_str(&format!(
            "Optimal zoom: {} ({})\n",
            report.zoom.zoom, report.zoom.pixel_coverage
        ));

        if let Some(detail) = &analysis.detailed_analysis {
            let scores = &detail.score_components;
            output.push_str("\nScore components:\n");
            output.push_str(&format!("  Image count:  {:>2}/20\n", scores.image_count));
            output.push_str(&format!("  Overlap:      {:>2}/40\n", scores.overlap));
            output.push_str(&format!("  Density:      {:>2}/30\n", scores.density));
            output.push_str(&format!("  Distribution: {:>2}/10\n", scores.distribution));

            if let Some(best) = &detail.best_area {
                output.push_str(&format!(
                    "\nBest region: {:.6}, {:.6} ({}% of images)\n",
                    best.center.lat, best.center.lng, best.coverage_percent
                ));
            }
        }

        if !analysis.overlap_groups.is_empty() {
            output.push_str("\nLargest groups:\n");
            for (i, group) in analysis.overlap_groups.iter().take(MAX_LISTED_GROUPS).enumerate() {
                output.push_str(&format!(
                    "  {}. {} image{} around ({:.6}, {:.6})\n",
                    i + 1,
                    group.count,
                    if group.count == 1 { "" } else { "s" },
                    group.center.lat,
                    group.center.lng
                ));
            }
            let hidden = analysis.overlap_groups.len().saturating_sub(MAX_LISTED_GROUPS);
            if hidden > 0 {
                output.push_str(&format!("  ... and {} more\n", hidden));
            }
        }

        output.push_str(&format!("\n{}\n", analysis.recommendation));
        Ok(output)
    }
}
