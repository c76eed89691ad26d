//! Server shared state
//!
//! Holds configuration for the HTTP server. Analyses themselves share
//! nothing; each request works on its own copy of the parameters.

use crate::config::Config;
use crate::mosaic::AnalysisConfig;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;

/// Shared state for the HTTP server
pub struct AppState {
    /// Configuration
    pub config: Arc<RwLock<Config>>,

    /// When the server started
    started: Instant,
}

impl AppState {
    /// Create new application state
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            started: Instant::now(),
        }
    }

    /// Snapshot of the configured analysis parameters
    pub async fn analysis_config(&self) -> AnalysisConfig {
        self.config.read().await.analysis
    }

    /// Largest point set accepted per request
    pub async fn max_points(&self) -> usize {
        self.config.read().await.server.max_points
    }

    /// Seconds since the server started
    pub fn uptime_secs(&self) -> u64 {
        self.started.elapsed().as_secs()
    }
}
