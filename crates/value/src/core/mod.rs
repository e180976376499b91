//! Core building blocks of the value model.
//!
//! - [`value`]: the [`Value`](value::Value) tagged union itself.
//! - [`kind`]: variant classification used in queries and error payloads.
//! - [`access`]: indexed/keyed structural access.
//! - [`extract`]: the typed extraction core ([`FromValue`](extract::FromValue)).
//! - [`display`]: the canonical indented textual rendering.
//! - [`convert`]: the JSON boundary (serde + `serde_json` bridge).
//! - [`limits`]: configurable size limits for payload construction.

pub mod access;
pub mod convert;
pub mod display;
pub mod extract;
pub mod kind;
pub mod limits;
pub mod value;

pub use extract::FromValue;
pub use kind::ValueKind;
pub use limits::ValueLimits;
pub use value::Value;
