//! The raw-backed enumeration contract.

use interchange_value::FromValue;

/// A closed enumeration backed by a primitive raw value.
///
/// The raw type must itself be extractable from a value; string-backed and
/// integer-backed enumerations are both supported.
pub trait RawRepresentable: Sized {
    /// The primitive raw type the cases are keyed by.
    type Raw: FromValue;

    /// Map a raw value to a case, or `None` when no case matches.
    fn from_raw(raw: Self::Raw) -> Option<Self>;

    /// The raw value of this case (the outbound projection).
    fn raw(&self) -> Self::Raw;
}
