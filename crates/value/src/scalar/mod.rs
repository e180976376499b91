//! Scalar payload types: [`Number`], [`Text`] and [`Bytes`].

pub mod bytes;
pub mod number;
pub mod text;

pub use bytes::Bytes;
pub use number::Number;
pub use text::Text;
