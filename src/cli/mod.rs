//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod analyze;
pub mod config;
pub mod heatmap;
pub mod serve;
pub mod zoom;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Mosaic suitability analysis for geotagged photos
#[derive(Parser)]
#[command(name = "mosaic-scout")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a point collection for mosaic suitability
    Analyze(analyze::AnalyzeArgs),

    /// Print heatmap points for a collection
    Heatmap(heatmap::HeatmapArgs),

    /// Estimate the optimal zoom level for a collection
    Zoom(zoom::ZoomArgs),

    /// Start web server (foreground)
    Serve(serve::ServeArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

/// Default log level for a command, or `None` to leave logging off
///
/// `serve` logs at `info`, one-shot commands at `warn`.
pub fn default_log_level(command: &Commands) -> Option<&'static str> {
    match command {
        Commands::Serve(_) => Some("info"),
        Commands::Analyze(_) | Commands::Heatmap(_) | Commands::Zoom(_) => Some("warn"),
        Commands::Config(_) => None,
    }
}

/// Install the stderr log subscriber
///
/// `RUST_LOG` takes precedence over `default_level`. Must be called at most
/// once per process.
pub fn init_logging(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run the CLI
pub async fn run() -> crate::error::Result<()> {
    let cli = Cli::parse();

    if let Some(level) = default_log_level(&cli.command) {
        init_logging(level);
    }

    match cli.command {
        Commands::Analyze(args) => analyze::run(args),
        Commands::Heatmap(args) => heatmap::run(args),
        Commands::Zoom(args) => zoom::run(args),
        Commands::Serve(args) => serve::run(args).await,
        Commands::Config(args) => config::run(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level_for(args: &[&str]) -> Option<&'static str> {
        let cli = Cli::try_parse_from(args).unwrap();
        default_log_level(&cli.command)
    }

    #[test]
    fn test_serve_logs_at_info() {
        assert_eq!(level_for(&["mosaic-scout", "serve"]), Some("info"));
    }

    #[test]
    fn test_one_shot_commands_log_at_warn() {
        assert_eq!(level_for(&["mosaic-scout", "analyze", "points.json"]), Some("warn"));
        assert_eq!(level_for(&["mosaic-scout", "heatmap", "points.json"]), Some("warn"));
        assert_eq!(level_for(&["mosaic-scout", "zoom", "-"]), Some("warn"));
    }

    #[test]
    fn test_config_command_skips_logging() {
        assert_eq!(level_for(&["mosaic-scout", "config", "--path"]), None);
    }
}
