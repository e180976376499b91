//! Indexed and keyed structural access.

use crate::core::value::Value;

impl Value {
    /// Element at `index`, if this is an array and the index is in range.
    ///
    /// Any other variant, or an out-of-range index, yields `None`; lookup
    /// never errors.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        match self {
            Value::Array(array) => array.get(index),
            _ => None,
        }
    }

    /// Value at `key`, if this is an object containing the key.
    #[must_use]
    pub fn get_key(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(object) => object.get(key),
            _ => None,
        }
    }

    /// Replace the element at `index` in place.
    ///
    /// On anything other than an array with `index` in range, the call is a
    /// silent no-op: it neither coerces nor errors. Kept for compatibility
    /// with existing callers that rely on the lenient behavior.
    pub fn set_index(&mut self, index: usize, value: Value) {
        if let Value::Array(array) = self {
            array.set(index, value);
        }
    }

    /// Insert or replace the value at `key` in place.
    ///
    /// On anything other than an object the call is a silent no-op, like
    /// [`set_index`](Self::set_index).
    pub fn set_key(&mut self, key: &str, value: Value) {
        if let Value::Object(object) = self {
            object.insert(key, value);
        }
    }
}
