//! Error types for mosaic-scout

use thiserror::Error;

/// Main error type for mosaic-scout operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input error: {0}")]
    Input(String),

    #[error("Too many points: {count} exceeds the limit of {limit}")]
    TooManyPoints { count: usize, limit: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server error: {0}")]
    Server(String),
}

/// Result type alias for mosaic-scout operations
pub type Result<T> = std::result::Result<T, Error>;
