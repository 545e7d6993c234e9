//! UUID byte-order modes and the UUID <-> bytes codec.

pub mod byte_order;
pub mod codec;

pub use byte_order::ByteOrderMode;
pub use codec::{from_bytes, to_bytes, UUID_LEN};
