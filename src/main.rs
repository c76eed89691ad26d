//! mosaic-scout CLI entry point
//!
//! Photo mosaic suitability analysis - CLI + web app

use mosaic_scout::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
