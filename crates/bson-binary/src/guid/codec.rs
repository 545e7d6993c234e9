//! UUID <-> 16-byte conversion for every [`ByteOrderMode`].
//!
//! A UUID's canonical bytes are its RFC 4122 network-order bytes
//! (`Uuid::as_bytes`). Each mode is a fixed permutation of those 16 bytes:
//! position `i` of the stored payload holds canonical byte `table[i]`.
//!
//! Reference layouts for `00112233-4455-6677-8899-aabbccddeeff`:
//!
//! | mode             | stored bytes                        |
//! |------------------|-------------------------------------|
//! | `BigEndian`      | `00112233 4455 6677 8899aabbccddeeff` |
//! | `LittleEndian`   | `33221100 5544 7766 8899aabbccddeeff` |
//! | `JavaHistorical` | `7766554433221100 ffeeddccbbaa9988` |

use uuid::Uuid;

use super::byte_order::ByteOrderMode;
use crate::error::BinaryError;

/// Number of bytes in a UUID payload.
pub const UUID_LEN: usize = 16;

type Permutation = [usize; UUID_LEN];

const BIG_ENDIAN: Permutation = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15];

// time_low (u32), time_mid (u16) and time_hi_and_version (u16) are
// little-endian; clock sequence and node stay in network order.
const LITTLE_ENDIAN: Permutation = [3, 2, 1, 0, 5, 4, 7, 6, 8, 9, 10, 11, 12, 13, 14, 15];

// Most and least significant 64-bit halves, each little-endian.
const JAVA_HISTORICAL: Permutation = [7, 6, 5, 4, 3, 2, 1, 0, 15, 14, 13, 12, 11, 10, 9, 8];

fn permutation(mode: ByteOrderMode) -> Result<&'static Permutation, BinaryError> {
    match mode {
        ByteOrderMode::Unspecified => Err(BinaryError::UnsupportedConversion),
        ByteOrderMode::LittleEndian => Ok(&LITTLE_ENDIAN),
        ByteOrderMode::BigEndian => Ok(&BIG_ENDIAN),
        ByteOrderMode::JavaHistorical => Ok(&JAVA_HISTORICAL),
    }
}

/// Writes `uuid` as 16 bytes laid out according to `mode`.
///
/// Fails with [`BinaryError::UnsupportedConversion`] for
/// [`ByteOrderMode::Unspecified`].
pub fn to_bytes(uuid: Uuid, mode: ByteOrderMode) -> Result<[u8; UUID_LEN], BinaryError> {
    let table = permutation(mode)?;
    let canonical = uuid.as_bytes();
    let mut out = [0u8; UUID_LEN];
    for (slot, &src) in out.iter_mut().zip(table.iter()) {
        *slot = canonical[src];
    }
    Ok(out)
}

/// Reads a UUID from 16 bytes laid out according to `mode`.
///
/// Fails with [`BinaryError::UnsupportedConversion`] for
/// [`ByteOrderMode::Unspecified`] and with [`BinaryError::InvalidLength`] when
/// `bytes` is not exactly 16 bytes long.
pub fn from_bytes(bytes: &[u8], mode: ByteOrderMode) -> Result<Uuid, BinaryError> {
    let table = permutation(mode)?;
    if bytes.len() != UUID_LEN {
        return Err(BinaryError::InvalidLength(bytes.len()));
    }
    let mut canonical = [0u8; UUID_LEN];
    for (&byte, &dst) in bytes.iter().zip(table.iter()) {
        canonical[dst] = byte;
    }
    Ok(Uuid::from_bytes(canonical))
}
