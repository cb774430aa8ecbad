//! Error types for the site renderer and scroll engine

use thiserror::Error;

/// Result type alias for starfolio operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading, rendering or measuring a site
///
/// An unknown section id is not an error: callers log it and do nothing.
#[derive(Error, Debug)]
pub enum Error {
    /// Content failed to load or validate
    #[error("Invalid content: {0}")]
    ContentError(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Failed to measure page geometry
    #[error("Layout failed: {0}")]
    LayoutError(String),

    /// Filesystem error while reading content or writing a build
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON content or configuration
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
