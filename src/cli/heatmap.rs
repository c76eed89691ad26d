//! Heatmap command handler
//!
//! Prints `[lat, lng, weight]` triples for a heat layer.

use crate::coord::validate_points;
use crate::error::Result;
use crate::input::load_points;
use crate::mosaic::heatmap_data;
use clap::Args;

/// Heatmap command arguments
#[derive(Args)]
pub struct HeatmapArgs {
    /// JSON file with points (`-` for stdin)
    pub file: String,
}

/// Run the heatmap command
pub fn run(args: HeatmapArgs) -> Result<()> {
    let points = load_points(&args.file)?;
    validate_points(&points)?;

    println!("{}", serde_json::to_string(&heatmap_data(&points))?);
    Ok(())
}
