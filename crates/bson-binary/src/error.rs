//! Error type for binary value and UUID conversions.

use thiserror::Error;

use crate::binary::BinarySubtype;

/// Errors raised when building a binary value or reading it back as a UUID.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BinaryError {
    /// UUID extraction attempted on a value whose subtype is not `Uuid`.
    #[error("binary subtype 0x{:02x} cannot be read as a UUID", .0.tag())]
    InvalidSubtype(BinarySubtype),
    /// UUID payloads must be exactly 16 bytes.
    #[error("expected 16 bytes for a UUID, got {0}")]
    InvalidLength(usize),
    /// Conversion requested with `ByteOrderMode::Unspecified`.
    #[error("cannot convert between UUID and bytes when the byte order is unspecified")]
    UnsupportedConversion,
    /// A constructor was handed an absent byte sequence.
    #[error("binary value requires a byte sequence")]
    MissingBytes,
}
