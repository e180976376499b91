//! The outbound direction: mapping domain types into a structured sink.

use std::fmt;

use interchange_value::{Array, Object, Value, ValueError, ValueKind};

use crate::error::{MapError, MapResult};

/// One level of placement inside a sink: an array index or an object key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Array index.
    Index(usize),
    /// Object key.
    Key(String),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "[{index}]"),
            Self::Key(key) => f.write_str(key),
        }
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        Self::Key(key.to_owned())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

/// A structured-data sink that strongly-typed instances can be mapped into.
///
/// The base contract guarantees single-level placement only: the provided
/// [`set_path`](Self::set_path) resets on an empty path, delegates one
/// segment to [`set`](Self::set), and refuses anything deeper with
/// [`MapError::DeepSetUnsupported`].
pub trait OutMap: Sized {
    /// The blank (initial) state of the sink.
    fn blank() -> Self;

    /// Place `value` at a single path segment.
    fn set(&mut self, value: Self, at: &PathSegment) -> MapResult<()>;

    /// Place `value` at a path of segments.
    fn set_path(&mut self, value: Self, path: &[PathSegment]) -> MapResult<()> {
        match path.len() {
            0 => {
                *self = Self::blank();
                Ok(())
            }
            1 => self.set(value, &path[0]),
            depth => Err(MapError::deep_set_unsupported(depth)),
        }
    }

    /// Build a sink value from an array of sink values, or decline.
    fn from_array(array: Vec<Self>) -> Option<Self>;

    /// Build a sink value from an integer, or decline.
    fn from_int(value: i64) -> Option<Self>;

    /// Build a sink value from a double, or decline.
    fn from_double(value: f64) -> Option<Self>;

    /// Build a sink value from a boolean, or decline.
    fn from_bool(value: bool) -> Option<Self>;

    /// Build a sink value from a string, or decline.
    fn from_string(value: String) -> Option<Self>;
}

impl OutMap for Value {
    fn blank() -> Self {
        Value::Null
    }

    fn set(&mut self, value: Self, at: &PathSegment) -> MapResult<()> {
        match at {
            PathSegment::Key(key) => match self {
                Value::Object(object) => {
                    object.insert(key.clone(), value);
                    Ok(())
                }
                Value::Null => {
                    let mut object = Object::new();
                    object.insert(key.clone(), value);
                    *self = Value::Object(object);
                    Ok(())
                }
                other => {
                    Err(ValueError::incompatible_type(ValueKind::Object, other.kind()).into())
                }
            },
            PathSegment::Index(index) => match self {
                Value::Array(array) => {
                    if *index < array.len() {
                        array.set(*index, value);
                        Ok(())
                    } else if *index == array.len() {
                        array.push(value);
                        Ok(())
                    } else {
                        Err(ValueError::index_out_of_bounds(*index, array.len()).into())
                    }
                }
                Value::Null if *index == 0 => {
                    let mut array = Array::new();
                    array.push(value);
                    *self = Value::Array(array);
                    Ok(())
                }
                Value::Null => Err(ValueError::index_out_of_bounds(*index, 0).into()),
                other => Err(ValueError::incompatible_type(ValueKind::Array, other.kind()).into()),
            },
        }
    }

    fn from_array(array: Vec<Self>) -> Option<Self> {
        Some(Value::Array(array.into()))
    }

    fn from_int(value: i64) -> Option<Self> {
        Some(Value::int(value))
    }

    fn from_double(value: f64) -> Option<Self> {
        Some(Value::number(value))
    }

    fn from_bool(value: bool) -> Option<Self> {
        Some(Value::boolean(value))
    }

    fn from_string(value: String) -> Option<Self> {
        Some(Value::text(value))
    }
}

/// Owns the destination sink while a domain type maps itself into it.
#[derive(Debug)]
pub struct OutMapper<M: OutMap> {
    destination: M,
}

impl<M: OutMap> OutMapper<M> {
    /// Start from the sink's blank state.
    pub fn blank() -> Self {
        Self {
            destination: M::blank(),
        }
    }

    /// Start from an existing destination.
    pub fn with_destination(destination: M) -> Self {
        Self { destination }
    }

    /// Finish and hand back the destination.
    pub fn into_destination(self) -> M {
        self.destination
    }

    /// Place an already-built sink value.
    pub fn set_value(&mut self, value: M, at: impl Into<PathSegment>) -> MapResult<()> {
        self.destination.set(value, &at.into())
    }

    /// Place a boolean through the sink's constructor.
    pub fn set_bool(&mut self, value: bool, at: impl Into<PathSegment>) -> MapResult<()> {
        let at = at.into();
        let built = M::from_bool(value).ok_or_else(|| MapError::unwrap_of_absent(at.to_string()))?;
        self.destination.set(built, &at)
    }

    /// Place an integer through the sink's constructor.
    pub fn set_int(&mut self, value: i64, at: impl Into<PathSegment>) -> MapResult<()> {
        let at = at.into();
        let built = M::from_int(value).ok_or_else(|| MapError::unwrap_of_absent(at.to_string()))?;
        self.destination.set(built, &at)
    }

    /// Place a double through the sink's constructor.
    pub fn set_double(&mut self, value: f64, at: impl Into<PathSegment>) -> MapResult<()> {
        let at = at.into();
        let built =
            M::from_double(value).ok_or_else(|| MapError::unwrap_of_absent(at.to_string()))?;
        self.destination.set(built, &at)
    }

    /// Place a string through the sink's constructor.
    pub fn set_string(
        &mut self,
        value: impl Into<String>,
        at: impl Into<PathSegment>,
    ) -> MapResult<()> {
        let at = at.into();
        let built = M::from_string(value.into())
            .ok_or_else(|| MapError::unwrap_of_absent(at.to_string()))?;
        self.destination.set(built, &at)
    }

    /// Map a nested [`OutMappable`] and place the result.
    pub fn set_mapped<T: OutMappable>(
        &mut self,
        value: &T,
        at: impl Into<PathSegment>,
    ) -> MapResult<()> {
        let mapped = value.map_to::<M>()?;
        self.destination.set(mapped, &at.into())
    }

    /// Map a slice of [`OutMappable`]s into a sink array and place it.
    pub fn set_array_of_mapped<T: OutMappable>(
        &mut self,
        values: &[T],
        at: impl Into<PathSegment>,
    ) -> MapResult<()> {
        let at = at.into();
        let mapped = values
            .iter()
            .map(|value| value.map_to::<M>())
            .collect::<MapResult<Vec<M>>>()?;
        let array =
            M::from_array(mapped).ok_or_else(|| MapError::unwrap_of_absent(at.to_string()))?;
        self.destination.set(array, &at)
    }
}

/// A domain type that can map itself into any [`OutMap`] sink.
pub trait OutMappable {
    /// Write this instance's fields into `map`.
    fn out_map<M: OutMap>(&self, map: &mut OutMapper<M>) -> MapResult<()>;

    /// Map this instance into a fresh sink of type `M`.
    fn map_to<M: OutMap>(&self) -> MapResult<M> {
        let mut mapper = OutMapper::blank();
        self.out_map(&mut mapper)?;
        Ok(mapper.into_destination())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyed_set_materializes_an_object_from_blank() {
        let mut sink = Value::blank();
        sink.set(Value::int(1), &"a".into()).unwrap();
        sink.set(Value::int(2), &"b".into()).unwrap();
        assert_eq!(
            sink,
            Value::object(vec![
                ("a".to_owned(), Value::int(1)),
                ("b".to_owned(), Value::int(2)),
            ])
        );
    }

    #[test]
    fn indexed_set_appends_at_the_end() {
        let mut sink = Value::blank();
        sink.set(Value::int(1), &0.into()).unwrap();
        sink.set(Value::int(2), &1.into()).unwrap();
        sink.set(Value::int(99), &0.into()).unwrap();
        assert_eq!(sink, Value::array(vec![Value::int(99), Value::int(2)]));
    }

    #[test]
    fn indexed_set_past_the_end_fails() {
        let mut sink = Value::blank();
        let err = sink.set(Value::int(1), &5.into()).unwrap_err();
        assert_eq!(err, MapError::from(ValueError::index_out_of_bounds(5, 0)));
    }

    #[test]
    fn keyed_set_on_scalar_fails() {
        let mut sink = Value::int(3);
        let err = sink.set(Value::int(1), &"k".into()).unwrap_err();
        assert_eq!(
            err,
            MapError::from(ValueError::incompatible_type(
                ValueKind::Object,
                ValueKind::Number
            ))
        );
    }

    #[test]
    fn set_path_depth_rules() {
        let mut sink = Value::blank();
        let deep = [PathSegment::from("a"), PathSegment::from("b")];
        assert_eq!(
            sink.set_path(Value::int(1), &deep).unwrap_err(),
            MapError::deep_set_unsupported(2)
        );

        sink.set_path(Value::int(1), &["only".into()]).unwrap();
        assert_eq!(sink.get_key("only"), Some(&Value::int(1)));

        sink.set_path(Value::int(1), &[]).unwrap();
        assert_eq!(sink, Value::Null);
    }
}
