//! Immutable BSON binary value.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use uuid::Uuid;

use super::subtype::BinarySubtype;
use crate::error::BinaryError;
use crate::guid::{self, ByteOrderMode, UUID_LEN};
use crate::settings::BinarySettings;

/// Element type tag hashed ahead of the payload.
const HASH_DISCRIMINANT: u8 = 0x05;

/// A BSON binary element: a byte payload tagged with a [`BinarySubtype`].
///
/// Values built from a UUID remember the [`ByteOrderMode`] the bytes were
/// written under so they can be read back as the same UUID. The byte order is
/// metadata only: equality, hashing and ordering look at the subtype and the
/// bytes.
#[derive(Debug, Clone)]
pub struct BinaryValue {
    data: Vec<u8>,
    subtype: BinarySubtype,
    source_byte_order: ByteOrderMode,
}

impl BinaryValue {
    /// Wraps `bytes` as generic binary data.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self::with_byte_order(bytes, BinarySubtype::Generic, ByteOrderMode::Unspecified)
    }

    /// Wraps `bytes` with an explicit subtype.
    pub fn with_subtype(bytes: impl Into<Vec<u8>>, subtype: BinarySubtype) -> Self {
        Self::with_byte_order(bytes, subtype, ByteOrderMode::Unspecified)
    }

    /// Wraps `bytes` with a subtype and the byte order the bytes were written
    /// under. The byte order is kept for any subtype but only consulted for
    /// [`BinarySubtype::Uuid`].
    pub fn with_byte_order(
        bytes: impl Into<Vec<u8>>,
        subtype: BinarySubtype,
        source_byte_order: ByteOrderMode,
    ) -> Self {
        Self {
            data: bytes.into(),
            subtype: BinarySubtype::from_tag(subtype.tag()),
            source_byte_order,
        }
    }

    /// Writes `uuid` under `mode` and tags the result as [`BinarySubtype::Uuid`].
    pub fn from_uuid(uuid: Uuid, mode: ByteOrderMode) -> Result<Self, BinaryError> {
        let bytes = guid::to_bytes(uuid, mode)?;
        Ok(Self::with_byte_order(bytes.to_vec(), BinarySubtype::Uuid, mode))
    }

    /// Writes `uuid` under the configured default byte order.
    pub fn from_uuid_with_settings(
        uuid: Uuid,
        settings: &BinarySettings,
    ) -> Result<Self, BinaryError> {
        Self::from_uuid(uuid, settings.guid_byte_order)
    }

    /// Like [`BinaryValue::new`], but an absent input gives an absent value.
    pub fn create(bytes: Option<Vec<u8>>) -> Option<Self> {
        bytes.map(Self::new)
    }

    /// Like [`BinaryValue::with_subtype`], but an absent input gives an absent
    /// value.
    pub fn create_with_subtype(
        bytes: Option<Vec<u8>>,
        subtype: BinarySubtype,
    ) -> Option<Self> {
        bytes.map(|b| Self::with_subtype(b, subtype))
    }

    /// Like [`BinaryValue::with_byte_order`], but an absent input gives an
    /// absent value.
    pub fn create_with_byte_order(
        bytes: Option<Vec<u8>>,
        subtype: BinarySubtype,
        source_byte_order: ByteOrderMode,
    ) -> Option<Self> {
        bytes.map(|b| Self::with_byte_order(b, subtype, source_byte_order))
    }

    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn subtype(&self) -> BinarySubtype {
        self.subtype
    }

    /// Byte order recorded at construction. `Unspecified` unless the value
    /// was built from a UUID or given one explicitly.
    pub fn source_byte_order(&self) -> ByteOrderMode {
        self.source_byte_order
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Reads the value as a UUID if it looks like one, otherwise `None`.
    ///
    /// Never fails: a wrong subtype, a wrong length or an unspecified source
    /// byte order all give `None`.
    pub fn raw_interpretation(&self) -> Option<Uuid> {
        if !self.subtype.is_uuid() || self.data.len() != UUID_LEN {
            return None;
        }
        guid::from_bytes(&self.data, self.source_byte_order).ok()
    }

    /// Reads the value as a UUID using the byte order recorded at
    /// construction.
    pub fn to_uuid(&self) -> Result<Uuid, BinaryError> {
        self.to_uuid_with(self.source_byte_order)
    }

    /// Reads the value as a UUID under `mode`, ignoring the recorded byte
    /// order. Reading bytes written under one mode with another is allowed and
    /// yields a different UUID.
    pub fn to_uuid_with(&self, mode: ByteOrderMode) -> Result<Uuid, BinaryError> {
        if !self.subtype.is_uuid() {
            return Err(BinaryError::InvalidSubtype(self.subtype));
        }
        if self.data.len() != UUID_LEN {
            return Err(BinaryError::InvalidLength(self.data.len()));
        }
        guid::from_bytes(&self.data, mode)
    }

    /// Compares against a possibly absent value; a present value sorts after
    /// an absent one.
    pub fn compare_to(&self, other: Option<&BinaryValue>) -> Ordering {
        match other {
            Some(other) => self.cmp(other),
            None => Ordering::Greater,
        }
    }
}

impl TryFrom<Option<Vec<u8>>> for BinaryValue {
    type Error = BinaryError;

    fn try_from(bytes: Option<Vec<u8>>) -> Result<Self, Self::Error> {
        bytes.map(Self::new).ok_or(BinaryError::MissingBytes)
    }
}

impl AsRef<[u8]> for BinaryValue {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl PartialEq for BinaryValue {
    fn eq(&self, other: &Self) -> bool {
        self.subtype == other.subtype && self.data == other.data
    }
}

impl Eq for BinaryValue {}

impl Hash for BinaryValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        HASH_DISCRIMINANT.hash(state);
        self.data.hash(state);
        self.subtype.hash(state);
    }
}

impl PartialOrd for BinaryValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BinaryValue {
    /// Subtype tag first, then bytes lexicographically; a strict prefix sorts
    /// first.
    fn cmp(&self, other: &Self) -> Ordering {
        self.subtype
            .cmp(&other.subtype)
            .then_with(|| self.data.as_slice().cmp(other.data.as_slice()))
    }
}
