//! The JSON boundary.
//!
//! This crate does not parse wire formats itself: conversion to and from
//! JSON delegates to `serde_json`, which acts as the external parser
//! collaborator. A byte sequence projects to a base64 string (JSON has no
//! binary shape), and a non-finite number projects to JSON null.

use std::str::FromStr;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::core::value::Value;
use crate::error::ValueError;

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::boolean(b),
            serde_json::Value::Number(n) => {
                n.as_f64().map(Value::number).unwrap_or(Value::Null)
            }
            serde_json::Value::String(s) => Value::text(s),
            serde_json::Value::Array(elements) => {
                Value::Array(elements.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Boolean(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => {
                if n.is_integral() && n.value() >= i64::MIN as f64 && n.value() <= i64::MAX as f64 {
                    serde_json::Value::Number(n.as_i64().into())
                } else {
                    serde_json::Number::from_f64(n.value())
                        .map(serde_json::Value::Number)
                        .unwrap_or(serde_json::Value::Null)
                }
            }
            Value::Text(t) => serde_json::Value::String(t.as_str().to_owned()),
            Value::Bytes(b) => serde_json::Value::String(b.to_base64()),
            Value::Array(array) => {
                serde_json::Value::Array(array.iter().map(serde_json::Value::from).collect())
            }
            Value::Object(object) => serde_json::Value::Object(
                object
                    .entries()
                    .map(|(key, value)| (key.clone(), serde_json::Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        Self::from(&value)
    }
}

impl FromStr for Value {
    type Err = ValueError;

    /// Parse a value from JSON text via `serde_json`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let json: serde_json::Value = serde_json::from_str(s)?;
        Ok(Value::from(json))
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Number(n) => {
                if n.is_integral() && n.value() >= i64::MIN as f64 && n.value() <= i64::MAX as f64 {
                    serializer.serialize_i64(n.as_i64())
                } else {
                    serializer.serialize_f64(n.value())
                }
            }
            Value::Text(t) => serializer.serialize_str(t.as_str()),
            Value::Bytes(b) => serializer.serialize_str(&b.to_base64()),
            Value::Array(array) => {
                let mut seq = serializer.serialize_seq(Some(array.len()))?;
                for element in array.iter() {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Object(object) => {
                let mut map = serializer.serialize_map(Some(object.len()))?;
                for (key, element) in object.entries() {
                    map.serialize_entry(key, element)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}
