//! Opaque binary payload.

use base64::Engine;
use bytes::Bytes as BytesBuf;

use crate::core::limits::ValueLimits;
use crate::error::{ValueError, ValueResult};

/// Binary data with zero-copy cloning.
///
/// Uses `bytes::Bytes` internally: reference-counted, immutable, cheap to
/// clone. The textual projection (rendering, JSON conversion) is standard
/// base64.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Bytes {
    inner: BytesBuf,
}

impl Bytes {
    /// Create new `Bytes` from an owned buffer.
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            inner: BytesBuf::from(data),
        }
    }

    /// Create from a byte slice (allocates).
    pub fn from_slice(data: &[u8]) -> Self {
        Self {
            inner: BytesBuf::copy_from_slice(data),
        }
    }

    /// Create new `Bytes`, validating the length against `limits`.
    pub fn with_limits(data: Vec<u8>, limits: &ValueLimits) -> ValueResult<Self> {
        limits.check_bytes_len(data.len())?;
        Ok(Self::new(data))
    }

    /// Decode from a standard-base64 string.
    pub fn from_base64(encoded: &str) -> ValueResult<Self> {
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(encoded)
            .map_err(|e| ValueError::parse("base64", e.to_string()))?;
        Ok(Self::new(decoded))
    }

    /// Encode to a standard-base64 string.
    pub fn to_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(&self.inner)
    }

    /// The underlying byte slice.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.inner
    }

    /// Length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the payload is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Copy out to a `Vec<u8>`.
    pub fn to_vec(&self) -> Vec<u8> {
        self.inner.to_vec()
    }
}

impl From<Vec<u8>> for Bytes {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl From<&[u8]> for Bytes {
    fn from(data: &[u8]) -> Self {
        Self::from_slice(data)
    }
}

impl AsRef<[u8]> for Bytes {
    fn as_ref(&self) -> &[u8] {
        &self.inner
    }
}
