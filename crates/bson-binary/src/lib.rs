//! BSON binary values and UUID byte-order conversion.
//!
//! A UUID stored in a BSON binary element has no single byte layout: legacy
//! drivers each wrote their own. [`guid`] reproduces those layouts exactly,
//! [`binary`] wraps payloads as immutable, ordered values, and [`bson`]
//! reads and writes them on the wire.
//!
//! ```
//! use bson_binary::{BinaryValue, ByteOrderMode};
//! use uuid::Uuid;
//!
//! let id = Uuid::from_u128(0x0011_2233_4455_6677_8899_aabb_ccdd_eeff);
//! let value = BinaryValue::from_uuid(id, ByteOrderMode::JavaHistorical).unwrap();
//! assert_eq!(value.bytes()[0], 0x77);
//! assert_eq!(value.to_uuid().unwrap(), id);
//! ```

pub mod binary;
pub mod bson;
pub mod error;
pub mod guid;
pub mod settings;

pub use binary::{BinarySubtype, BinaryValue};
pub use error::BinaryError;
pub use guid::ByteOrderMode;
pub use settings::{BinarySettings, SettingsError};
