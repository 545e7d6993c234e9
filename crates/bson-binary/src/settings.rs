//! Configuration for UUID handling.
//!
//! The default byte order is process-wide configuration owned by the
//! embedding application. It is loaded once and passed to the constructors
//! and the wire decoder that need it.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::guid::ByteOrderMode;

/// Errors raised while loading settings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("invalid settings: {0}")]
    Parse(String),
    #[error("unknown UUID byte order: {0:?}")]
    UnknownByteOrder(String),
}

/// Settings consulted whenever a UUID byte order is not given explicitly.
///
/// ```toml
/// guid_byte_order = "big_endian"
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BinarySettings {
    /// Byte order used to write UUIDs built without an explicit mode, and to
    /// tag UUID payloads read from the wire.
    pub guid_byte_order: ByteOrderMode,
}

impl BinarySettings {
    pub fn new(guid_byte_order: ByteOrderMode) -> Self {
        Self { guid_byte_order }
    }

    /// Parses settings from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, SettingsError> {
        let settings: BinarySettings =
            toml::from_str(text).map_err(|e| SettingsError::Parse(e.to_string()))?;
        debug!(guid_byte_order = %settings.guid_byte_order, "loaded binary settings");
        Ok(settings)
    }

    /// Serializes settings back to TOML text.
    pub fn to_toml_string(&self) -> Result<String, SettingsError> {
        toml::to_string(self).map_err(|e| SettingsError::Parse(e.to_string()))
    }
}
