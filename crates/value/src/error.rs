//! Value error types (standalone).
//!
//! Self-contained `thiserror` enum, no central error crate dependency.

use thiserror::Error;

use crate::core::kind::ValueKind;

/// Errors produced by value operations.
///
/// All fallible operations in this crate return this error type.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// The value's variant does not match the requested shape.
    #[error("incompatible type: expected {expected}, got {actual}")]
    IncompatibleType {
        /// Shape the caller asked for.
        expected: ValueKind,
        /// Variant the value actually holds.
        actual: ValueKind,
    },

    /// A required key-path extraction found no value.
    #[error("no value at key '{key}'")]
    NoValueAtKey {
        /// The key that was looked up.
        key: String,
    },

    /// Array index out of bounds.
    #[error("index {index} out of bounds (length: {length})")]
    IndexOutOfBounds {
        /// The index that was addressed.
        index: usize,
        /// Length of the array at the time of the call.
        length: usize,
    },

    /// A configured size limit was exceeded.
    #[error("{limit} exceeded: {actual} > {max}")]
    LimitExceeded {
        /// Name of the limit.
        limit: String,
        /// Configured maximum.
        max: usize,
        /// Observed size.
        actual: usize,
    },

    /// Input could not be parsed into a value.
    #[error("invalid {format} input: {reason}")]
    Parse {
        /// The input format (e.g. "JSON", "base64").
        format: String,
        /// Underlying parser diagnostic.
        reason: String,
    },
}

impl ValueError {
    /// Create an incompatible-type error.
    pub fn incompatible_type(expected: ValueKind, actual: ValueKind) -> Self {
        Self::IncompatibleType { expected, actual }
    }

    /// Create a no-value-at-key error.
    pub fn no_value_at_key(key: impl Into<String>) -> Self {
        Self::NoValueAtKey { key: key.into() }
    }

    /// Create an index-out-of-bounds error.
    pub fn index_out_of_bounds(index: usize, length: usize) -> Self {
        Self::IndexOutOfBounds { index, length }
    }

    /// Create a limit-exceeded error.
    pub fn limit_exceeded(limit: impl Into<String>, max: usize, actual: usize) -> Self {
        Self::LimitExceeded {
            limit: limit.into(),
            max,
            actual,
        }
    }

    /// Create a parse error.
    pub fn parse(format: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            format: format.into(),
            reason: reason.into(),
        }
    }

    /// Stable error code for monitoring.
    pub fn code(&self) -> &'static str {
        match self {
            Self::IncompatibleType { .. } => "VALUE_INCOMPATIBLE_TYPE",
            Self::NoValueAtKey { .. } => "VALUE_NO_VALUE_AT_KEY",
            Self::IndexOutOfBounds { .. } => "VALUE_INDEX_OUT_OF_BOUNDS",
            Self::LimitExceeded { .. } => "VALUE_LIMIT_EXCEEDED",
            Self::Parse { .. } => "VALUE_PARSE_ERROR",
        }
    }
}

impl From<serde_json::Error> for ValueError {
    fn from(error: serde_json::Error) -> Self {
        Self::parse("JSON", error.to_string())
    }
}

/// Result type alias for value operations.
pub type ValueResult<T> = Result<T, ValueError>;
