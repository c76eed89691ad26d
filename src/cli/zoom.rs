//! Zoom command handler
//!
//! Suggests a zoom level and pixel footprint for a collection's coverage.

use crate::coord::validate_points;
use crate::error::Result;
use crate::input::load_points;
use crate::mosaic::coverage::calculate_coverage;
use crate::mosaic::zoom::optimal_zoom_level;
use clap::Args;

/// Zoom command arguments
#[derive(Args)]
pub struct ZoomArgs {
    /// JSON file with points (`-` for stdin)
    pub file: String,
}

/// Run the zoom command
pub fn run(args: ZoomArgs) -> Result<()> {
    let points = load_points(&args.file)?;
    validate_points(&points)?;

    let coverage = calculate_coverage(&points);
    let estimate = optimal_zoom_level(coverage.as_ref());

    println!("{}", serde_json::to_string_pretty(&estimate)?);
    Ok(())
}
