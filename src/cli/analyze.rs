//! Analyze command handler
//!
//! Loads a point collection and reports its mosaic suitability.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::format::url::UrlFormatter;
use crate::format::{available_formats, get_formatter, OutputFormatter};
use crate::input::load_points;
use crate::report::build_report;
use clap::Args;
use tracing::info;

/// Analyze command arguments
#[derive(Args)]
pub struct AnalyzeArgs {
    /// JSON file with points (`-` for stdin)
    #[arg(required_unless_present = "list_formats")]
    pub file: Option<String>,

    /// Overlap threshold in degrees
    #[arg(long, short = 't')]
    pub threshold: Option<f64>,

    /// Output format
    #[arg(long, short = 'f')]
    pub format: Option<String>,

    /// Map provider for the url format
    #[arg(long)]
    pub provider: Option<String>,

    /// Write output to file
    #[arg(long, short = 'o')]
    pub output: Option<String>,

    /// List available formats
    #[arg(short = 'F', long = "list-formats")]
    pub list_formats: bool,
}

/// Run the analyze command
pub fn run(args: AnalyzeArgs) -> Result<()> {
    if args.list_formats {
        list_formats();
        return Ok(());
    }

    let config = Config::load()?;

    let mut analysis_config = config.analysis;
    if let Some(threshold) = args.threshold {
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(Error::Config(format!("Invalid threshold: {}", threshold)));
        }
        analysis_config.overlap_threshold_degrees = threshold;
    }

    let path = args
        .file
        .ok_or_else(|| Error::Input("No input file given".to_string()))?;
    let points = load_points(&path)?;
    info!(points = points.len(), source = %path, "Loaded points");

    let report = build_report(&points, &analysis_config)?;

    let format = args.format.unwrap_or(config.output.format.clone());
    let formatter: Box<dyn OutputFormatter> = match (format.to_lowercase().as_str(), args.provider) {
        ("url", Some(provider)) => Box::new(UrlFormatter::with_provider(provider)),
        _ => get_formatter(&format)
            .ok_or_else(|| Error::Config(format!("Unknown format: {}", format)))?,
    };
    let output = formatter.format(&report, &config)?;

    if let Some(path) = args.output {
        std::fs::write(&path, &output)?;
        eprintln!("Output written to {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}

/// Print available output formats
fn list_formats() {
    println!("Available output formats:");
    for format in available_formats() {
        println!("  {:6} - {}", format.name, format.description);
    }
}
