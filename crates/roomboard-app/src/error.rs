//! Application error types.

use std::fmt;

/// Result type for application operations.
pub type AppResult<T> = Result<T, AppError>;

/// Errors that can occur in the application.
#[derive(Debug)]
pub enum AppError {
    /// Configuration error.
    Config(String),
    /// Booking backend error.
    Api(roomboard_api::ApiError),
    /// IO error.
    Io(std::io::Error),
    /// Output serialization error.
    Json(serde_json::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "configuration error: {}", msg),
            Self::Api(err) => write!(f, "backend error: {}", err),
            Self::Io(err) => write!(f, "IO error: {}", err),
            Self::Json(err) => write!(f, "output error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::Config(_) => None,
        }
    }
}

impl From<roomboard_api::ApiError> for AppError {
    fn from(err: roomboard_api::ApiError) -> Self {
        Self::Api(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}
