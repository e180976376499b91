//! The unified `Value` enum.
//!
//! This is the central type of the crate: a closed tagged union over the
//! shapes structured data can take.

use crate::collections::{Array, Object};
use crate::core::kind::ValueKind;
use crate::error::{ValueError, ValueResult};
use crate::scalar::{Bytes, Number, Text};

/// A dynamically-typed structured-data value.
///
/// Values have value semantics: cloning is cheap (scalar payloads are
/// reference-counted, collections are persistent structures) and no
/// mutation of one logical value is observable through another.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// Null value.
    #[default]
    Null,
    /// Boolean value.
    Boolean(bool),
    /// Double-precision number.
    Number(Number),
    /// UTF-8 text.
    Text(Text),
    /// Opaque byte sequence.
    Bytes(Bytes),
    /// Ordered sequence of values.
    Array(Array),
    /// String-keyed mapping, keys unique.
    Object(Object),
}

impl Value {
    // ==================== Constructors ====================

    /// Create a null value.
    pub const fn null() -> Self {
        Self::Null
    }

    /// Create a boolean value.
    pub const fn boolean(value: bool) -> Self {
        Self::Boolean(value)
    }

    /// Create a number value.
    pub const fn number(value: f64) -> Self {
        Self::Number(Number::new(value))
    }

    /// Create a number value from an integer (widens to `f64`).
    pub const fn int(value: i64) -> Self {
        Self::Number(Number::new(value as f64))
    }

    /// Create a text value.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(Text::new(value))
    }

    /// Create a bytes value.
    pub fn bytes(value: Vec<u8>) -> Self {
        Self::Bytes(Bytes::new(value))
    }

    /// Create an array value from elements.
    pub fn array(elements: impl IntoIterator<Item = Value>) -> Self {
        Self::Array(elements.into_iter().collect())
    }

    /// Create an object value from entries.
    pub fn object(entries: impl IntoIterator<Item = (String, Value)>) -> Self {
        Self::Object(entries.into_iter().collect())
    }

    /// Create an empty array value.
    pub fn array_empty() -> Self {
        Self::Array(Array::new())
    }

    /// Create an empty object value.
    pub fn object_empty() -> Self {
        Self::Object(Object::new())
    }

    // ==================== Type queries ====================

    /// The kind of this value.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Number(_) => ValueKind::Number,
            Self::Text(_) => ValueKind::Text,
            Self::Bytes(_) => ValueKind::Bytes,
            Self::Array(_) => ValueKind::Array,
            Self::Object(_) => ValueKind::Object,
        }
    }

    /// Check if this is null.
    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Check if this is a boolean.
    #[inline]
    #[must_use]
    pub fn is_boolean(&self) -> bool {
        matches!(self, Self::Boolean(_))
    }

    /// Check if this is a number.
    #[inline]
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// Check if this is text.
    #[inline]
    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Check if this is a byte sequence.
    #[inline]
    #[must_use]
    pub fn is_bytes(&self) -> bool {
        matches!(self, Self::Bytes(_))
    }

    /// Check if this is an array.
    #[inline]
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    /// Check if this is an object.
    #[inline]
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    // ==================== Accessors (as_*) ====================

    /// The boolean payload, if this is a boolean.
    #[inline]
    #[must_use]
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// The numeric payload, if this is a number.
    #[inline]
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(n.value()),
            _ => None,
        }
    }

    /// The numeric payload truncated toward zero, if this is a number.
    ///
    /// Lossy: no rounding, no range check.
    #[inline]
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(n.as_i64()),
            _ => None,
        }
    }

    /// The numeric payload truncated toward zero as unsigned, if this is a
    /// number. Lossy like [`as_int`](Self::as_int).
    #[inline]
    #[must_use]
    pub fn as_uint(&self) -> Option<u64> {
        match self {
            Self::Number(n) => Some(n.as_u64()),
            _ => None,
        }
    }

    /// The text payload as a string slice, if this is text.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(t) => Some(t.as_str()),
            _ => None,
        }
    }

    /// The text payload, if this is text.
    #[inline]
    #[must_use]
    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Self::Text(t) => Some(t),
            _ => None,
        }
    }

    /// The binary payload, if this is a byte sequence.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            Self::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// The array payload, if this is an array.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// The object payload, if this is an object.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    // ==================== Accessors (try_*) ====================

    /// The boolean payload, or [`ValueError::IncompatibleType`].
    pub fn try_boolean(&self) -> ValueResult<bool> {
        self.as_boolean()
            .ok_or_else(|| self.incompatible(ValueKind::Boolean))
    }

    /// The numeric payload, or [`ValueError::IncompatibleType`].
    pub fn try_number(&self) -> ValueResult<f64> {
        self.as_number()
            .ok_or_else(|| self.incompatible(ValueKind::Number))
    }

    /// The truncated integer payload, or [`ValueError::IncompatibleType`].
    pub fn try_int(&self) -> ValueResult<i64> {
        self.as_int()
            .ok_or_else(|| self.incompatible(ValueKind::Number))
    }

    /// The truncated unsigned payload, or [`ValueError::IncompatibleType`].
    pub fn try_uint(&self) -> ValueResult<u64> {
        self.as_uint()
            .ok_or_else(|| self.incompatible(ValueKind::Number))
    }

    /// The text payload, or [`ValueError::IncompatibleType`].
    pub fn try_str(&self) -> ValueResult<&str> {
        self.as_str()
            .ok_or_else(|| self.incompatible(ValueKind::Text))
    }

    /// The binary payload, or [`ValueError::IncompatibleType`].
    pub fn try_bytes(&self) -> ValueResult<&Bytes> {
        self.as_bytes()
            .ok_or_else(|| self.incompatible(ValueKind::Bytes))
    }

    /// The array payload, or [`ValueError::IncompatibleType`].
    pub fn try_array(&self) -> ValueResult<&Array> {
        self.as_array()
            .ok_or_else(|| self.incompatible(ValueKind::Array))
    }

    /// The object payload, or [`ValueError::IncompatibleType`].
    pub fn try_object(&self) -> ValueResult<&Object> {
        self.as_object()
            .ok_or_else(|| self.incompatible(ValueKind::Object))
    }

    fn incompatible(&self, expected: ValueKind) -> ValueError {
        ValueError::incompatible_type(expected, self.kind())
    }
}

// ==================== From implementations ====================

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::boolean(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::int(value as i64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::int(value as i64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::number(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::number(value as f64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::text(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::text(value)
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Self::bytes(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(elements: Vec<Value>) -> Self {
        Self::Array(elements.into())
    }
}

impl From<Vec<(String, Value)>> for Value {
    fn from(entries: Vec<(String, Value)>) -> Self {
        Self::Object(entries.into())
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Self::Number(value)
    }
}

impl From<Text> for Value {
    fn from(value: Text) -> Self {
        Self::Text(value)
    }
}

impl From<Bytes> for Value {
    fn from(value: Bytes) -> Self {
        Self::Bytes(value)
    }
}

impl From<Array> for Value {
    fn from(value: Array) -> Self {
        Self::Array(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Self::Object(value)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::Array(iter.into_iter().collect())
    }
}

impl FromIterator<(String, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self::Object(iter.into_iter().collect())
    }
}
