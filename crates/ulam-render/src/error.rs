//! Error types for ulam-render.

use thiserror::Error;

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering a grid.
#[derive(Debug, Error)]
pub enum Error {
    /// Writing to the output failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Renderer name not recognised
    #[error("unknown renderer {0:?} (expected text, html, code or json)")]
    UnknownRenderer(String),
}
