//! Serve command handler
//!
//! Starts the analysis HTTP server in foreground mode, with flags
//! overriding the configured address and request size cap.

use crate::config::Config;
use crate::error::Result;
use crate::server;
use clap::Args;
use tracing::info;

/// Serve command arguments
#[derive(Args)]
pub struct ServeArgs {
    /// Host address to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, short = 'p')]
    pub port: Option<u16>,

    /// Largest point set accepted per request
    #[arg(long)]
    pub max_points: Option<usize>,
}

/// Run the serve command
pub async fn run(args: ServeArgs) -> Result<()> {
    let config = apply_overrides(Config::load()?, args);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        addr = %config.server_addr(),
        max_points = config.server.max_points,
        overlap_threshold = config.analysis.overlap_threshold_degrees,
        "Starting mosaic-scout server"
    );

    server::run(config).await
}

/// Command-line flags win over the config file
fn apply_overrides(mut config: Config, args: ServeArgs) -> Config {
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(max_points) = args.max_points {
        config.server.max_points = max_points;
    }
    config
}
