//! Structured input validation errors.
//!
//! [`InputError`] carries a stable [`ErrorCode`] for programmatic matching,
//! a JSON pointer `path` locating the problem in the input bundle, a
//! human-readable `message`, and an optional `hint` suggesting a fix.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::error_code::ErrorCode;

/// A validation finding in the input bundle.
///
/// # Display format
///
/// ```text
/// [empty_collection] /sellers: sellers must contain at least one record
/// ```
///
/// # JSON format
///
/// ```json
/// {
///   "code": "empty_collection",
///   "path": "/sellers",
///   "message": "sellers must contain at least one record",
///   "hint": "Supply at least one seller record"
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[error("[{code}] {path}: {message}")]
pub struct InputError {
    /// Stable error code for programmatic matching.
    pub code: ErrorCode,

    /// JSON pointer into the input bundle identifying the problem.
    ///
    /// Examples: `"/sellers"`, `"/purchases/3/seller_id"`.
    pub path: String,

    /// Human-readable description of the problem.
    pub message: String,

    /// Optional suggestion for how to fix the problem.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl InputError {
    /// Create a new input error.
    pub fn new(code: ErrorCode, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            path: path.into(),
            message: message.into(),
            hint: None,
        }
    }

    /// Attach a hint suggesting how to fix the problem.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}
