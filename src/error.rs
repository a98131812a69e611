//! Error types
//!
//! One error enum for the whole pipeline. Configuration problems are reported
//! before any work starts; everything else aborts the current analysis.

use thiserror::Error;

/// Pipeline error types
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Vision model error: {0}")]
    Model(String),

    #[error("Unexpected model output: {0}")]
    ModelOutput(String),

    #[error("No ingredients recognized in the image")]
    NothingRecognized,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;
