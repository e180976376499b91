//! The contract for types buildable from a [`Mapper`].

use tracing::trace;

use interchange_value::Value;

use crate::error::MapResult;
use crate::mapper::Mapper;

/// A domain type that can construct itself from a [`Mapper`].
///
/// Implementations pull whatever fields they need through the mapper's
/// extraction operations; construction either fully succeeds or fully
/// fails.
pub trait Mappable: Sized {
    /// Build `Self` from the fields of `map`.
    fn from_map(map: &Mapper<'_>) -> MapResult<Self>;

    /// Try to build `Self` directly from a raw [`Value`], collapsing any
    /// failure to `None`.
    fn from_value(value: &Value) -> Option<Self> {
        match Self::from_map(&Mapper::new(value)) {
            Ok(built) => Some(built),
            Err(err) => {
                trace!(error = %err, "mappable construction from value failed");
                None
            }
        }
    }
}
