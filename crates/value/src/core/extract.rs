//! The typed extraction core.
//!
//! Coercion from a [`Value`] to a target shape is closed polymorphism over
//! the variant set: one [`FromValue`] implementation per target type, each a
//! match on the tag returning a strongly-typed result. There is no implicit
//! cross-variant coercion (a text is never read as a number), with the one
//! exception of the integer projections, which truncate the number payload
//! toward zero.

use crate::collections::{Array, Object};
use crate::core::kind::ValueKind;
use crate::core::value::Value;
use crate::error::{ValueError, ValueResult};
use crate::scalar::{Bytes, Number, Text};

/// A type that can be extracted from a [`Value`] whose variant matches.
pub trait FromValue: Sized {
    /// The variant this type extracts from, named in error payloads.
    fn expected() -> ValueKind;

    /// Extract from `value`, or fail with
    /// [`ValueError::IncompatibleType`].
    fn from_value(value: &Value) -> ValueResult<Self>;
}

fn incompatible<T: FromValue>(value: &Value) -> ValueError {
    ValueError::incompatible_type(T::expected(), value.kind())
}

impl FromValue for bool {
    fn expected() -> ValueKind {
        ValueKind::Boolean
    }

    fn from_value(value: &Value) -> ValueResult<Self> {
        value.as_boolean().ok_or_else(|| incompatible::<Self>(value))
    }
}

impl FromValue for f64 {
    fn expected() -> ValueKind {
        ValueKind::Number
    }

    fn from_value(value: &Value) -> ValueResult<Self> {
        value.as_number().ok_or_else(|| incompatible::<Self>(value))
    }
}

impl FromValue for i64 {
    fn expected() -> ValueKind {
        ValueKind::Number
    }

    fn from_value(value: &Value) -> ValueResult<Self> {
        value.as_int().ok_or_else(|| incompatible::<Self>(value))
    }
}

impl FromValue for u64 {
    fn expected() -> ValueKind {
        ValueKind::Number
    }

    fn from_value(value: &Value) -> ValueResult<Self> {
        value.as_uint().ok_or_else(|| incompatible::<Self>(value))
    }
}

impl FromValue for Number {
    fn expected() -> ValueKind {
        ValueKind::Number
    }

    fn from_value(value: &Value) -> ValueResult<Self> {
        value
            .as_number()
            .map(Number::new)
            .ok_or_else(|| incompatible::<Self>(value))
    }
}

impl FromValue for String {
    fn expected() -> ValueKind {
        ValueKind::Text
    }

    fn from_value(value: &Value) -> ValueResult<Self> {
        value
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| incompatible::<Self>(value))
    }
}

impl FromValue for Text {
    fn expected() -> ValueKind {
        ValueKind::Text
    }

    fn from_value(value: &Value) -> ValueResult<Self> {
        value
            .as_text()
            .cloned()
            .ok_or_else(|| incompatible::<Self>(value))
    }
}

impl FromValue for Bytes {
    fn expected() -> ValueKind {
        ValueKind::Bytes
    }

    fn from_value(value: &Value) -> ValueResult<Self> {
        value
            .as_bytes()
            .cloned()
            .ok_or_else(|| incompatible::<Self>(value))
    }
}

impl FromValue for Vec<u8> {
    fn expected() -> ValueKind {
        ValueKind::Bytes
    }

    fn from_value(value: &Value) -> ValueResult<Self> {
        value
            .as_bytes()
            .map(Bytes::to_vec)
            .ok_or_else(|| incompatible::<Self>(value))
    }
}

impl FromValue for Array {
    fn expected() -> ValueKind {
        ValueKind::Array
    }

    fn from_value(value: &Value) -> ValueResult<Self> {
        value
            .as_array()
            .cloned()
            .ok_or_else(|| incompatible::<Self>(value))
    }
}

impl FromValue for Vec<Value> {
    fn expected() -> ValueKind {
        ValueKind::Array
    }

    fn from_value(value: &Value) -> ValueResult<Self> {
        value
            .as_array()
            .map(|array| array.iter().cloned().collect())
            .ok_or_else(|| incompatible::<Self>(value))
    }
}

impl FromValue for Object {
    fn expected() -> ValueKind {
        ValueKind::Object
    }

    fn from_value(value: &Value) -> ValueResult<Self> {
        value
            .as_object()
            .cloned()
            .ok_or_else(|| incompatible::<Self>(value))
    }
}

impl Value {
    /// Extract this value as `T`.
    pub fn get_as<T: FromValue>(&self) -> ValueResult<T> {
        T::from_value(self)
    }

    /// Look up `key` and extract the sub-value as `T`.
    ///
    /// The two failure causes are distinguished: a missing key (or a
    /// non-object receiver) fails with [`ValueError::NoValueAtKey`], a
    /// present value of the wrong shape fails with
    /// [`ValueError::IncompatibleType`].
    pub fn get_key_as<T: FromValue>(&self, key: &str) -> ValueResult<T> {
        self.get_key(key)
            .ok_or_else(|| ValueError::no_value_at_key(key))?
            .get_as()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_variant_extracts() {
        assert_eq!(Value::boolean(true).get_as::<bool>().unwrap(), true);
        assert_eq!(Value::number(2.5).get_as::<f64>().unwrap(), 2.5);
        assert_eq!(Value::text("hi").get_as::<String>().unwrap(), "hi");
    }

    #[test]
    fn integer_extraction_truncates() {
        assert_eq!(Value::number(7.9).get_as::<i64>().unwrap(), 7);
        assert_eq!(Value::number(-7.9).get_as::<i64>().unwrap(), -7);
        assert_eq!(Value::number(7.9).get_as::<u64>().unwrap(), 7);
    }

    #[test]
    fn no_cross_variant_coercion() {
        let err = Value::text("42").get_as::<f64>().unwrap_err();
        assert_eq!(
            err,
            ValueError::incompatible_type(ValueKind::Number, ValueKind::Text)
        );
        assert!(Value::boolean(true).get_as::<String>().is_err());
    }

    #[test]
    fn array_extraction_clones_elements() {
        let value = Value::array(vec![Value::int(1), Value::int(2)]);
        let elements: Vec<Value> = value.get_as().unwrap();
        assert_eq!(elements, vec![Value::int(1), Value::int(2)]);
    }

    #[test]
    fn get_key_as_distinguishes_absent_from_mismatch() {
        let value = Value::object(vec![("n".to_owned(), Value::text("not a number"))]);

        let absent = value.get_key_as::<f64>("missing").unwrap_err();
        assert_eq!(absent, ValueError::no_value_at_key("missing"));

        let mismatch = value.get_key_as::<f64>("n").unwrap_err();
        assert_eq!(
            mismatch,
            ValueError::incompatible_type(ValueKind::Number, ValueKind::Text)
        );
    }

    #[test]
    fn get_key_as_on_non_object_is_absent() {
        let err = Value::int(1).get_key_as::<f64>("k").unwrap_err();
        assert_eq!(err, ValueError::no_value_at_key("k"));
    }
}
