//! Key-path typed extraction over [`interchange_value::Value`].
//!
//! A [`Mapper`] wraps one subject value for the duration of a decode and
//! hands out strongly-typed fields by key. Four extraction families cover
//! the ways a target type can be built: directly ([`FromValue`]), through a
//! custom constructor ([`Convertible`]), through a raw-backed enumeration
//! ([`RawRepresentable`]), or through a nested decode ([`Mappable`]). Each
//! comes in required, optional, array and optional-array cardinalities.
//!
//! Required forms fail loudly with a [`MapError`]; a domain constructor
//! either fully succeeds or fully fails. Optional forms collapse every
//! failure to `None`. Array forms drop malformed elements instead of
//! aborting the whole array. The asymmetry is deliberate: strict callers use
//! the required forms and inspect the error, best-effort callers use the
//! permissive forms and accept silent omission (the omissions are still
//! visible at `trace!` level).
//!
//! The outbound direction is [`OutMappable`]/[`OutMap`]: a domain type maps
//! itself into any sink that supports blank construction, single-segment
//! placement and the primitive constructors. [`Value`] is the natural sink.
//!
//! [`FromValue`]: interchange_value::FromValue
//! [`Value`]: interchange_value::Value

#![warn(clippy::all)]

pub mod convertible;
pub mod error;
pub mod mappable;
pub mod mapper;
pub mod outmap;
pub mod raw;

pub use convertible::Convertible;
pub use error::{MapError, MapResult};
pub use mappable::Mappable;
pub use mapper::Mapper;
pub use outmap::{OutMap, OutMappable, OutMapper, PathSegment};
pub use raw::RawRepresentable;

/// Prelude for common imports.
pub mod prelude {
    pub use crate::{
        Convertible, MapError, MapResult, Mappable, Mapper, OutMap, OutMappable, OutMapper,
        PathSegment, RawRepresentable,
    };
    pub use interchange_value::prelude::*;
}
