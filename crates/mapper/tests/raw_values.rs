//! Raw-backed enumeration extraction.

use std::str::FromStr;

use pretty_assertions::assert_eq;

use interchange_mapper::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Suit {
    Barney,
    Swarley,
}

impl RawRepresentable for Suit {
    type Raw = String;

    fn from_raw(raw: String) -> Option<Self> {
        match raw.as_str() {
            "barney" => Some(Self::Barney),
            "swarley" => Some(Self::Swarley),
            _ => None,
        }
    }

    fn raw(&self) -> String {
        match self {
            Self::Barney => "barney".to_owned(),
            Self::Swarley => "swarley".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Barney {
    Legendary,
    Stinson,
}

impl RawRepresentable for Barney {
    type Raw = String;

    fn from_raw(raw: String) -> Option<Self> {
        match raw.as_str() {
            "legendary" => Some(Self::Legendary),
            "stinson" => Some(Self::Stinson),
            _ => None,
        }
    }

    fn raw(&self) -> String {
        match self {
            Self::Legendary => "legendary".to_owned(),
            Self::Stinson => "stinson".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Rating {
    One,
    Two,
}

impl RawRepresentable for Rating {
    type Raw = i64;

    fn from_raw(raw: i64) -> Option<Self> {
        match raw {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            _ => None,
        }
    }

    fn raw(&self) -> i64 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }
}

#[test]
fn string_raw_case_extracts() {
    let subject = Value::from_str(r#"{"suit": "barney"}"#).unwrap();
    let suit: Suit = Mapper::new(&subject).from_raw("suit").unwrap();
    assert_eq!(suit, Suit::Barney);
}

#[test]
fn unknown_raw_value_fails_construction() {
    let subject = Value::from_str(r#"{"value": "cike"}"#).unwrap();
    let mapper = Mapper::new(&subject);

    let err = mapper.from_raw::<Suit>("value").unwrap_err();
    assert_eq!(err, MapError::raw_construction_failed("value"));

    let optional: Option<Suit> = mapper.optional_from_raw("value");
    assert_eq!(optional, None);
}

#[test]
fn missing_key_fails_before_case_lookup() {
    let subject = Value::object_empty();
    let err = Mapper::new(&subject).from_raw::<Suit>("suit").unwrap_err();
    assert_eq!(err, MapError::from(ValueError::no_value_at_key("suit")));
}

#[test]
fn array_of_cases_drops_the_unknown_ones() {
    let subject =
        Value::from_str(r#"{"barneys": ["legendary", "stinson", "captain"]}"#).unwrap();
    let barneys: Vec<Barney> = Mapper::new(&subject).array_from_raw("barneys").unwrap();
    assert_eq!(barneys, [Barney::Legendary, Barney::Stinson]);
}

#[test]
fn integer_backed_enumerations_are_supported() {
    let subject = Value::from_str(r#"{"rating": 2}"#).unwrap();
    let rating: Rating = Mapper::new(&subject).from_raw("rating").unwrap();
    assert_eq!(rating, Rating::Two);
}

#[test]
fn integer_array_drops_out_of_range_cases() {
    let subject = Value::from_str(r#"{"ratings": [1, 2, 9]}"#).unwrap();
    let ratings: Vec<Rating> = Mapper::new(&subject).array_from_raw("ratings").unwrap();
    assert_eq!(ratings, [Rating::One, Rating::Two]);
}

#[test]
fn optional_array_follows_the_outer_lookup() {
    let subject = Value::object_empty();
    let absent: Option<Vec<Suit>> = Mapper::new(&subject).optional_array_from_raw("suits");
    assert_eq!(absent, None);
}
