//! Application-wide error types
//!
//! This module defines a centralized error type using `thiserror` for
//! clean error handling across the workspace.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application-wide error type
///
/// This provides a centralized error handling strategy with:
/// - Structured error variants for different failure modes
/// - Serde support for surfacing errors over the wire
/// - Automatic Display implementation via thiserror
/// - Automatic conversion from common error types
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    /// JSON serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(String),

    /// Generic error with custom message
    #[error("{0}")]
    Other(String),
}

/// Convert AppError to String at the process boundary
impl From<AppError> for String {
    fn from(error: AppError) -> String {
        error.to_string()
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

// Automatic conversions from common error types
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = AppError::SerializationError("bad json".to_string());
        assert_eq!(err.to_string(), "Serialization error: bad json");
    }

    #[test]
    fn test_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: AppError = json_err.into();
        assert!(matches!(err, AppError::SerializationError(_)));
    }

    #[test]
    fn test_into_string() {
        let err = AppError::Other("boom".to_string());
        let s: String = err.into();
        assert_eq!(s, "boom");
    }
}
