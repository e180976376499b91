//! String-keyed mapping of values.

use im::OrdMap;

use crate::core::limits::ValueLimits;
use crate::core::value::Value;
use crate::error::ValueResult;

/// Persistent string-keyed map of [`Value`]s.
///
/// Backed by `im::OrdMap`: keys are unique and iteration is in sorted key
/// order, which makes rendering deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Object {
    inner: OrdMap<String, Value>,
}

impl Object {
    /// Create an empty object.
    pub fn new() -> Self {
        Self {
            inner: OrdMap::new(),
        }
    }

    /// Create from entries, validating the key count against `limits`.
    pub fn with_limits(
        entries: impl IntoIterator<Item = (String, Value)>,
        limits: &ValueLimits,
    ) -> ValueResult<Self> {
        let inner: OrdMap<String, Value> = entries.into_iter().collect();
        limits.check_object_keys(inner.len())?;
        Ok(Self { inner })
    }

    /// Number of keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the object is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Value at `key`, or `None` when absent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.inner.get(key)
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    /// Insert or replace the value at `key` in place.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.inner.insert(key.into(), value);
    }

    /// Remove the value at `key`, returning it if present.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.inner.remove(key)
    }

    /// Iterate over keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.inner.keys()
    }

    /// Iterate over values in sorted key order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.inner.values()
    }

    /// Iterate over entries in sorted key order.
    pub fn entries(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.inner.iter()
    }
}

impl FromIterator<(String, Value)> for Object {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<(&'a str, Value)> for Object {
    fn from_iter<I: IntoIterator<Item = (&'a str, Value)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(key, value)| (key.to_owned(), value))
            .collect()
    }
}

impl From<Vec<(String, Value)>> for Object {
    fn from(entries: Vec<(String, Value)>) -> Self {
        entries.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = (&'a String, &'a Value);
    type IntoIter = im::ordmap::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}
