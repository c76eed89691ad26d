//! URL output formatter

use crate::config::Config;
use crate::error::{Error, Result};
use crate::format::OutputFormatter;
use crate::report::AnalysisReport;

/// URL formatter - outputs a map URL centered on the best mosaic area
#[derive(Debug, Default)]
pub struct UrlFormatter {
    /// Provider override; the configured default is used when unset
    pub provider: Option<String>,
}

impl UrlFormatter {
    /// Formatter that always uses the given provider
    pub fn with_provider(provider: impl Into<String>) -> Self {
        Self {
            provider: Some(provider.into()),
        }
    }
}

impl OutputFormatter for UrlFormatter {
    fn name(&self) -> &str {
        "url"
    }

    fn description(&self) -> &str {
        "Map URL for the best mosaic area"
    }

    fn format(&self, report: &AnalysisReport, config: &Config) -> Result<String> {
        let best = report
            .analysis
            .overlap_groups
            .first()
            .ok_or_else(|| Error::Input("No overlap groups to link to".to_string()))?;

        config.format_url(
            self.provider.as_deref(),
            best.center.lat,
            best.center.lng,
            report.zoom.zoom,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::test_support::{empty_report, sample_report};

    #[test]
    fn test_url_format_default_provider() {
        let report = sample_report();
        let output = UrlFormatter::default()
            .format(&report, &Config::default())
            .unwrap();

        assert!(output.starts_with("https://www.openstreetmap.org/#map="));
        assert!(output.contains(&format!("map={}/", report.zoom.zoom)));
    }

    #[test]
    fn test_url_format_with_provider() {
        let output = UrlFormatter::with_provider("google")
            .format(&sample_report(), &Config::default())
            .unwrap();

        assert!(output.contains("google.com/maps"));
    }

    #[test]
    fn test_url_format_points_at_best_group() {
        let report = sample_report();
        let center = report.analysis.overlap_groups[0].center;
        let output = UrlFormatter::default()
            .format(&report, &Config::default())
            .unwrap();

        assert!(output.contains(&format!("{:.6}/{:.6}", center.lat, center.lng)));
    }

    #[test]
    fn test_url_format_empty_report() {
        let result = UrlFormatter::default().format(&empty_report(), &Config::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_url_formatter_info() {
        let formatter = UrlFormatter::default();
        assert_eq!(formatter.name(), "url");
        assert!(!formatter.description().is_empty());
    }
}
