//! UTF-8 text payload.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use crate::core::limits::ValueLimits;
use crate::error::ValueResult;

/// UTF-8 text with cheap cloning.
///
/// Uses `Arc<str>` internally so that cloning a text-bearing value never
/// copies the string data.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Text {
    inner: Arc<str>,
}

impl Text {
    /// Create a new `Text`.
    pub fn new(s: impl Into<String>) -> Self {
        Self {
            inner: Arc::from(s.into().into_boxed_str()),
        }
    }

    /// Create a new `Text`, validating its byte length against `limits`.
    pub fn with_limits(s: impl Into<String>, limits: &ValueLimits) -> ValueResult<Self> {
        let s = s.into();
        limits.check_text_bytes(s.len())?;
        Ok(Self::new(s))
    }

    /// The text as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Byte length.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the text is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Deref for Text {
    type Target = str;

    fn deref(&self) -> &str {
        &self.inner
    }
}

impl AsRef<str> for Text {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner)
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Self {
            inner: Arc::from(s),
        }
    }
}

impl From<String> for Text {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<Text> for String {
    fn from(text: Text) -> Self {
        text.inner.as_ref().to_owned()
    }
}

impl PartialEq<str> for Text {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Text {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
