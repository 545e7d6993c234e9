//! BSON wire encoding of binary elements.
//!
//! A binary element is a little-endian `i32` length, one subtype byte and the
//! payload. The UUID byte order is not part of the encoding; the decoder
//! takes it from [`BinarySettings`](crate::settings::BinarySettings).

pub mod decoder;
pub mod encoder;
pub mod error;

pub use decoder::BsonBinaryDecoder;
pub use encoder::BsonBinaryEncoder;
pub use error::BsonError;

/// Element type byte of a BSON binary element.
pub const BINARY_ELEMENT: u8 = 0x05;
