//! Application-wide error types.

use wirecube_core::SurfaceError;

/// Top-level error for the terminal front end.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Terminal I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The canvas rejected a draw call
    #[error("Surface error: {0}")]
    Surface(#[from] SurfaceError),

    /// Logger initialization errors
    #[error("Logger error: {0}")]
    Logger(String),
}

/// Convenience type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
