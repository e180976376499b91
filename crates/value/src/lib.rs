//! Structured-data value model for the interchange toolkit.
//!
//! The central type is [`Value`], a closed tagged union over the shapes
//! structured data can take: null, boolean, number, text, bytes, array and
//! object. Values have structural equality, cheap clones (collection payloads
//! are persistent structures), a canonical indented textual rendering, and a
//! typed extraction layer ([`FromValue`]) that coerces a value into a
//! strongly-typed target or fails with a precise [`ValueError`].
//!
//! Parsing wire formats is not this crate's job: the JSON boundary in
//! [`core::convert`] delegates to `serde_json` and only converts between its
//! tree and ours.

#![warn(clippy::all)]

pub mod collections;
pub mod core;
pub mod error;
pub mod scalar;

pub use crate::collections::{Array, Object};
pub use crate::core::extract::FromValue;
pub use crate::core::kind::ValueKind;
pub use crate::core::limits::ValueLimits;
pub use crate::core::value::Value;
pub use crate::error::{ValueError, ValueResult};
pub use crate::scalar::{Bytes, Number, Text};

/// Prelude for common imports.
pub mod prelude {
    pub use crate::{
        Array, Bytes, FromValue, Number, Object, Text, Value, ValueError, ValueKind, ValueLimits,
        ValueResult,
    };
}
