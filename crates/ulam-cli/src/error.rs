//! Error types for the ulam CLI.

use thiserror::Error;

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while running the CLI.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading input or writing output failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Rendering failed or the renderer could not be selected
    #[error("Render error: {0}")]
    Render(#[from] ulam_render::Error),

    /// Bad command-line argument or environment variable
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
