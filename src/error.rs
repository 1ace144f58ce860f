//! Error types for the wallpaper renderer

use thiserror::Error;

/// Result type alias for renderer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering, encoding or delivering a wallpaper
#[derive(Error, Debug)]
pub enum Error {
    /// No drawing context could be acquired (zero-area backing store)
    #[error("Drawing surface unavailable")]
    SurfaceUnavailable,

    /// Rasterized pixels could not be serialized
    #[error("Encoding failed: {0}")]
    EncodeError(String),

    /// The host refused or failed to accept the exported file
    #[error("Delivery failed: {0}")]
    DeliveryError(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// The export worker has shut down
    #[error("Export worker is no longer running")]
    WorkerClosed,

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
