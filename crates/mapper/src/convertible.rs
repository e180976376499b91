//! The custom-constructor extraction contract.

use interchange_value::Value;

/// A type with its own "build me from a [`Value`]" constructor.
///
/// Use this for types whose construction is more than a variant match:
/// validated identifiers, timestamps, wrapped foreign types. Plain
/// primitives go through [`FromValue`](interchange_value::FromValue)
/// instead.
///
/// The constructor is total: it answers `None` rather than erroring, and
/// the mapper decides whether that absence is fatal (required form) or not
/// (optional and array forms).
pub trait Convertible: Sized {
    /// Build `Self` from `value`, or decline with `None`.
    fn from_custom(value: &Value) -> Option<Self>;
}
