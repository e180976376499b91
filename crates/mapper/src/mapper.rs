//! The key-path extraction wrapper.

use tracing::trace;

use interchange_value::{Array, FromValue, Value, ValueError};

use crate::convertible::Convertible;
use crate::error::{MapError, MapResult};
use crate::mappable::Mappable;
use crate::raw::RawRepresentable;

/// A thin, immutable wrapper around one subject [`Value`].
///
/// Create one per decode operation, top-level or nested, pull the fields
/// you need, and let it go. Nested extractions construct fresh `Mapper`s
/// over the sub-value at the key; siblings share nothing.
#[derive(Debug, Clone, Copy)]
pub struct Mapper<'a> {
    subject: &'a Value,
}

impl<'a> Mapper<'a> {
    /// Wrap a subject value.
    pub fn new(subject: &'a Value) -> Self {
        Self { subject }
    }

    /// The wrapped subject.
    pub fn subject(&self) -> &'a Value {
        self.subject
    }

    // ==================== Plain ====================

    /// Extract a required `T` at `key`.
    ///
    /// Fails with [`ValueError::NoValueAtKey`] when the key is absent (or
    /// the subject is not an object), [`ValueError::IncompatibleType`] when
    /// the value has the wrong shape.
    pub fn from<T: FromValue>(&self, key: &str) -> MapResult<T> {
        Ok(self.subject.get_key_as(key)?)
    }

    /// Extract an optional `T` at `key`. Every failure collapses to `None`.
    pub fn optional_from<T: FromValue>(&self, key: &str) -> Option<T> {
        collapse(key, self.from(key))
    }

    /// Extract an array of `T` at `key`, dropping elements that fail.
    ///
    /// Only the outer lookup can fail; a malformed element never aborts the
    /// array, so the output length is at most the input length.
    pub fn array_from<T: FromValue>(&self, key: &str) -> MapResult<Vec<T>> {
        let array = self.require_array(key)?;
        Ok(keep_convertible(array, key, |element| {
            T::from_value(element).ok()
        }))
    }

    /// Extract an optional array of `T` at `key`.
    ///
    /// `None` when the key is absent or not an array; otherwise the same
    /// element filtering as [`array_from`](Self::array_from).
    pub fn optional_array_from<T: FromValue>(&self, key: &str) -> Option<Vec<T>> {
        collapse(key, self.array_from(key))
    }

    // ==================== Convertible ====================

    /// Extract a required `T` at `key` through its custom constructor.
    ///
    /// Fails with [`ValueError::NoValueAtKey`] when the key is absent and
    /// [`MapError::UnwrapOfAbsent`] when the constructor declines the value.
    pub fn from_convertible<T: Convertible>(&self, key: &str) -> MapResult<T> {
        let nested = self.require_key(key)?;
        T::from_custom(nested).ok_or_else(|| MapError::unwrap_of_absent(key))
    }

    /// Extract an optional `T` at `key` through its custom constructor.
    pub fn optional_from_convertible<T: Convertible>(&self, key: &str) -> Option<T> {
        collapse(key, self.from_convertible(key))
    }

    /// Extract an array of `T` at `key`, dropping elements whose custom
    /// constructor declines.
    pub fn array_from_convertible<T: Convertible>(&self, key: &str) -> MapResult<Vec<T>> {
        let array = self.require_array(key)?;
        Ok(keep_convertible(array, key, T::from_custom))
    }

    /// Optional-array form of
    /// [`array_from_convertible`](Self::array_from_convertible).
    pub fn optional_array_from_convertible<T: Convertible>(&self, key: &str) -> Option<Vec<T>> {
        collapse(key, self.array_from_convertible(key))
    }

    // ==================== Raw-representable ====================

    /// Extract a required enumeration `T` at `key` via its raw value.
    ///
    /// The raw value is extracted by the plain rule for `T::Raw`, then
    /// mapped to a case; [`MapError::RawConstructionFailed`] when no case
    /// matches. Integer-backed enumerations are supported like any other
    /// raw type.
    pub fn from_raw<T: RawRepresentable>(&self, key: &str) -> MapResult<T> {
        let raw: T::Raw = self.from(key)?;
        T::from_raw(raw).ok_or_else(|| MapError::raw_construction_failed(key))
    }

    /// Extract an optional enumeration `T` at `key`.
    pub fn optional_from_raw<T: RawRepresentable>(&self, key: &str) -> Option<T> {
        collapse(key, self.from_raw(key))
    }

    /// Extract an array of enumeration `T` at `key`, dropping elements that
    /// fail at either stage, raw extraction or case lookup.
    pub fn array_from_raw<T: RawRepresentable>(&self, key: &str) -> MapResult<Vec<T>> {
        let array = self.require_array(key)?;
        Ok(keep_convertible(array, key, |element| {
            T::Raw::from_value(element).ok().and_then(T::from_raw)
        }))
    }

    /// Optional-array form of [`array_from_raw`](Self::array_from_raw).
    pub fn optional_array_from_raw<T: RawRepresentable>(&self, key: &str) -> Option<Vec<T>> {
        collapse(key, self.array_from_raw(key))
    }

    // ==================== Nested mappable ====================

    /// Extract a required nested `T` at `key` by building it from a child
    /// mapper over the sub-value.
    ///
    /// Fails with [`ValueError::NoValueAtKey`] when the key is absent; a
    /// nested build failure propagates whole; there is no partially
    /// constructed `T`.
    pub fn from_mapped<T: Mappable>(&self, key: &str) -> MapResult<T> {
        let nested = self.require_key(key)?;
        T::from_map(&Mapper::new(nested))
    }

    /// Extract an optional nested `T` at `key`.
    pub fn optional_from_mapped<T: Mappable>(&self, key: &str) -> Option<T> {
        collapse(key, self.from_mapped(key))
    }

    /// Extract an array of nested `T` at `key`, dropping elements whose
    /// nested build fails.
    pub fn array_from_mapped<T: Mappable>(&self, key: &str) -> MapResult<Vec<T>> {
        let array = self.require_array(key)?;
        Ok(keep_convertible(array, key, T::from_value))
    }

    /// Optional-array form of [`array_from_mapped`](Self::array_from_mapped).
    pub fn optional_array_from_mapped<T: Mappable>(&self, key: &str) -> Option<Vec<T>> {
        collapse(key, self.array_from_mapped(key))
    }

    // ==================== Lookup helpers ====================

    fn require_key(&self, key: &str) -> MapResult<&'a Value> {
        self.subject
            .get_key(key)
            .ok_or_else(|| ValueError::no_value_at_key(key).into())
    }

    fn require_array(&self, key: &str) -> MapResult<&'a Array> {
        let value = self.require_key(key)?;
        Ok(value.try_array()?)
    }
}

/// Collapse any required-form failure into `None`, keeping the cause
/// visible at trace level.
fn collapse<T>(key: &str, outcome: MapResult<T>) -> Option<T> {
    match outcome {
        Ok(value) => Some(value),
        Err(err) => {
            trace!(key, error = %err, "optional extraction collapsed to absent");
            None
        }
    }
}

/// Per-element filter for the array forms: keep what converts, trace and
/// drop what does not. Order is preserved.
fn keep_convertible<T>(
    array: &Array,
    key: &str,
    mut convert: impl FnMut(&Value) -> Option<T>,
) -> Vec<T> {
    let mut kept = Vec::with_capacity(array.len());
    for (index, element) in array.iter().enumerate() {
        match convert(element) {
            Some(value) => kept.push(value),
            None => trace!(key, index, "dropped array element that failed extraction"),
        }
    }
    kept
}
