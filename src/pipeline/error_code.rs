//! Stable error codes for input validation diagnostics.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Machine-readable code identifying a class of validation finding.
///
/// Codes are stable across releases so callers can match on them
/// programmatically; the human-readable message may change freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// A required collection is present but contains no records.
    EmptyCollection,
    /// Two input records share an identifier that should be unique.
    DuplicateId,
    /// A record references a seller id or SKU that matches nothing.
    UnknownReference,
    /// A field value is outside its allowed range.
    InvalidValue,
    /// Catch-all for validation failures without a more specific code.
    ValidationFailed,
}

impl ErrorCode {
    /// The snake_case name used in JSON output and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmptyCollection => "empty_collection",
            Self::DuplicateId => "duplicate_id",
            Self::UnknownReference => "unknown_reference",
            Self::InvalidValue => "invalid_value",
            Self::ValidationFailed => "validation_failed",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
