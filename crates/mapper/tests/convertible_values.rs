//! Custom-constructor extraction.

use std::str::FromStr;

use pretty_assertions::assert_eq;

use interchange_mapper::prelude::*;

/// A unix timestamp that only accepts non-negative integral numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Timestamp(i64);

impl Convertible for Timestamp {
    fn from_custom(value: &Value) -> Option<Self> {
        let seconds = value.as_number()?;
        if seconds < 0.0 || seconds.fract() != 0.0 {
            return None;
        }
        Some(Self(seconds as i64))
    }
}

#[test]
fn custom_constructor_accepts_valid_input() {
    let subject = Value::from_str(r#"{"created": 1700000000}"#).unwrap();
    let created: Timestamp = Mapper::new(&subject).from_convertible("created").unwrap();
    assert_eq!(created, Timestamp(1_700_000_000));
}

#[test]
fn declined_construction_is_an_unwrap_failure() {
    let subject = Value::from_str(r#"{"created": -5}"#).unwrap();
    let err = Mapper::new(&subject)
        .from_convertible::<Timestamp>("created")
        .unwrap_err();
    assert_eq!(err, MapError::unwrap_of_absent("created"));
}

#[test]
fn missing_key_is_no_value_at_key() {
    let subject = Value::object_empty();
    let err = Mapper::new(&subject)
        .from_convertible::<Timestamp>("created")
        .unwrap_err();
    assert_eq!(err, MapError::from(ValueError::no_value_at_key("created")));
}

#[test]
fn optional_collapses_declined_construction() {
    let subject = Value::from_str(r#"{"created": "not a number"}"#).unwrap();
    let created: Option<Timestamp> = Mapper::new(&subject).optional_from_convertible("created");
    assert_eq!(created, None);
}

#[test]
fn array_drops_declined_elements() {
    let subject = Value::from_str(r#"{"stamps": [10, -1, 20, 1.5, 30]}"#).unwrap();
    let stamps: Vec<Timestamp> = Mapper::new(&subject)
        .array_from_convertible("stamps")
        .unwrap();
    assert_eq!(stamps, [Timestamp(10), Timestamp(20), Timestamp(30)]);
}

#[test]
fn optional_array_absent_key() {
    let subject = Value::object_empty();
    let stamps: Option<Vec<Timestamp>> =
        Mapper::new(&subject).optional_array_from_convertible("stamps");
    assert_eq!(stamps, None);
}

#[test]
fn convertible_inside_a_mappable() {
    struct Event {
        name: String,
        at: Timestamp,
    }

    impl Mappable for Event {
        fn from_map(map: &Mapper<'_>) -> MapResult<Self> {
            Ok(Self {
                name: map.from("name")?,
                at: map.from_convertible("at")?,
            })
        }
    }

    let subject = Value::from_str(r#"{"name": "deploy", "at": 1700000000}"#).unwrap();
    let event = Event::from_map(&Mapper::new(&subject)).unwrap();
    assert_eq!(event.name, "deploy");
    assert_eq!(event.at, Timestamp(1_700_000_000));
}
