//! Mapper error types.

use thiserror::Error;

use interchange_value::ValueError;

/// Errors produced by key-path extraction and outbound mapping.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MapError {
    /// An underlying value operation failed (wrong shape, absent key).
    #[error(transparent)]
    Value(#[from] ValueError),

    /// A raw value was extracted but no enumeration case corresponds to it.
    #[error("no enumeration case matches the raw value at key '{key}'")]
    RawConstructionFailed {
        /// The key whose raw value had no matching case.
        key: String,
    },

    /// A custom constructor yielded no value where one was required.
    #[error("required value at '{key}' could not be constructed")]
    UnwrapOfAbsent {
        /// The key or path segment that came up empty.
        key: String,
    },

    /// A multi-segment path was given to a sink that only supports one level.
    #[error("deep set with {depth} path segments is not supported")]
    DeepSetUnsupported {
        /// Number of segments in the rejected path.
        depth: usize,
    },
}

impl MapError {
    /// Create a raw-construction-failed error.
    pub fn raw_construction_failed(key: impl Into<String>) -> Self {
        Self::RawConstructionFailed { key: key.into() }
    }

    /// Create an unwrap-of-absent error.
    pub fn unwrap_of_absent(key: impl Into<String>) -> Self {
        Self::UnwrapOfAbsent { key: key.into() }
    }

    /// Create a deep-set-unsupported error.
    pub fn deep_set_unsupported(depth: usize) -> Self {
        Self::DeepSetUnsupported { depth }
    }

    /// Stable error code for monitoring.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Value(inner) => inner.code(),
            Self::RawConstructionFailed { .. } => "MAP_RAW_CONSTRUCTION_FAILED",
            Self::UnwrapOfAbsent { .. } => "MAP_UNWRAP_OF_ABSENT",
            Self::DeepSetUnsupported { .. } => "MAP_DEEP_SET_UNSUPPORTED",
        }
    }

    /// Whether this failure means "nothing was there", as opposed to
    /// "something was there but had the wrong shape".
    pub fn is_absence(&self) -> bool {
        matches!(
            self,
            Self::Value(ValueError::NoValueAtKey { .. }) | Self::UnwrapOfAbsent { .. }
        )
    }
}

/// Result type alias for mapper operations.
pub type MapResult<T> = Result<T, MapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_errors_keep_their_code() {
        let err = MapError::from(ValueError::no_value_at_key("k"));
        assert_eq!(err.code(), "VALUE_NO_VALUE_AT_KEY");
        assert!(err.is_absence());
    }

    #[test]
    fn raw_construction_message_names_the_key() {
        let err = MapError::raw_construction_failed("suit");
        assert!(err.to_string().contains("suit"));
        assert_eq!(err.code(), "MAP_RAW_CONSTRUCTION_FAILED");
        assert!(!err.is_absence());
    }

    #[test]
    fn deep_set_reports_depth() {
        let err = MapError::deep_set_unsupported(3);
        assert!(err.to_string().contains('3'));
    }
}
