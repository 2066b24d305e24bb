//! Error types for sales_rank
//!
//! This module defines the error types used throughout the library.
//! All errors are designed to be informative and actionable.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SalesRankError>;

/// Main error type for sales_rank
#[derive(Error, Debug, Clone)]
pub enum SalesRankError {
    /// Input bundle failed shape validation (missing/empty collections)
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Pipeline configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Internal error (should not occur in normal usage)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl SalesRankError {
    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Check if this error came from input shape validation
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

impl From<serde_json::Error> for SalesRankError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}
