//! Error types for rendering.

use thiserror::Error;

/// Errors that can occur while setting up a render.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Tile edge length of zero.
    #[error("tile size must be positive")]
    InvalidTileSize,

    /// Worker pool could not be started.
    #[error("failed to build render thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, RenderError>;
