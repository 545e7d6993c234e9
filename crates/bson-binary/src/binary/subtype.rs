//! BSON binary subtype tags.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Subtype byte of a BSON binary element.
///
/// Equality, hashing and ordering go through [`BinarySubtype::tag`], so
/// `Other(0x04)` and `Uuid` are the same subtype. Use
/// [`BinarySubtype::from_tag`] to get the canonical variant.
#[derive(Debug, Clone, Copy, Default)]
pub enum BinarySubtype {
    /// Generic binary data (0x00).
    #[default]
    Generic,
    /// Function (0x01).
    Function,
    /// Old binary (0x02). Carries an inner length prefix on the wire.
    BinaryOld,
    /// Legacy UUID (0x03).
    UuidLegacy,
    /// UUID (0x04).
    Uuid,
    /// MD5 digest (0x05).
    Md5,
    /// Encrypted BSON value (0x06).
    Encrypted,
    /// Compressed BSON column (0x07).
    Column,
    /// Sensitive data (0x08).
    Sensitive,
    /// Any other reserved or user-defined (0x80..=0xFF) tag.
    Other(u8),
}

impl BinarySubtype {
    pub const GENERIC: u8 = 0x00;
    pub const FUNCTION: u8 = 0x01;
    pub const BINARY_OLD: u8 = 0x02;
    pub const UUID_LEGACY: u8 = 0x03;
    pub const UUID: u8 = 0x04;
    pub const MD5: u8 = 0x05;
    pub const ENCRYPTED: u8 = 0x06;
    pub const COLUMN: u8 = 0x07;
    pub const SENSITIVE: u8 = 0x08;
    /// First tag of the user-defined range.
    pub const USER_DEFINED: u8 = 0x80;

    /// Maps a wire tag to its canonical variant.
    pub fn from_tag(tag: u8) -> Self {
        match tag {
            Self::GENERIC => BinarySubtype::Generic,
            Self::FUNCTION => BinarySubtype::Function,
            Self::BINARY_OLD => BinarySubtype::BinaryOld,
            Self::UUID_LEGACY => BinarySubtype::UuidLegacy,
            Self::UUID => BinarySubtype::Uuid,
            Self::MD5 => BinarySubtype::Md5,
            Self::ENCRYPTED => BinarySubtype::Encrypted,
            Self::COLUMN => BinarySubtype::Column,
            Self::SENSITIVE => BinarySubtype::Sensitive,
            other => BinarySubtype::Other(other),
        }
    }

    /// Wire tag (ordinal) of this subtype.
    pub fn tag(self) -> u8 {
        match self {
            BinarySubtype::Generic => Self::GENERIC,
            BinarySubtype::Function => Self::FUNCTION,
            BinarySubtype::BinaryOld => Self::BINARY_OLD,
            BinarySubtype::UuidLegacy => Self::UUID_LEGACY,
            BinarySubtype::Uuid => Self::UUID,
            BinarySubtype::Md5 => Self::MD5,
            BinarySubtype::Encrypted => Self::ENCRYPTED,
            BinarySubtype::Column => Self::COLUMN,
            BinarySubtype::Sensitive => Self::SENSITIVE,
            BinarySubtype::Other(tag) => tag,
        }
    }

    /// Returns `true` for tags in the user-defined range.
    pub fn is_user_defined(self) -> bool {
        self.tag() >= Self::USER_DEFINED
    }

    /// Returns `true` when [`BinaryValue::to_uuid`](super::BinaryValue::to_uuid)
    /// may succeed on a value of this subtype.
    pub fn is_uuid(self) -> bool {
        self.tag() == Self::UUID
    }
}

impl From<u8> for BinarySubtype {
    fn from(tag: u8) -> Self {
        BinarySubtype::from_tag(tag)
    }
}

impl From<BinarySubtype> for u8 {
    fn from(subtype: BinarySubtype) -> Self {
        subtype.tag()
    }
}

impl PartialEq for BinarySubtype {
    fn eq(&self, other: &Self) -> bool {
        self.tag() == other.tag()
    }
}

impl Eq for BinarySubtype {}

impl Hash for BinarySubtype {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tag().hash(state);
    }
}

impl PartialOrd for BinarySubtype {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BinarySubtype {
    fn cmp(&self, other: &Self) -> Ordering {
        self.tag().cmp(&other.tag())
    }
}

impl fmt::Display for BinarySubtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match BinarySubtype::from_tag(self.tag()) {
            BinarySubtype::Other(tag) => write!(f, "0x{tag:02x}"),
            named => fmt::Debug::fmt(&named, f),
        }
    }
}
