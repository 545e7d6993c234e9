//! Named UUID byte layouts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::settings::SettingsError;

/// Byte layout used when a UUID is stored as a 16-byte binary payload.
///
/// Different drivers historically wrote UUIDs in different byte orders. The
/// mode is never stored on the wire, so a reader must be told which layout
/// the bytes were written under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ByteOrderMode {
    /// No layout chosen. Conversion to or from a UUID is refused.
    #[default]
    Unspecified,
    /// Mixed-endian layout of the legacy C# driver: the first three UUID
    /// fields are little-endian, the last eight bytes are unchanged.
    #[serde(alias = "CSharpLegacy", alias = "csharp_legacy")]
    LittleEndian,
    /// RFC 4122 network order. Also written by the legacy Python driver.
    #[serde(
        alias = "Standard",
        alias = "standard",
        alias = "PythonLegacy",
        alias = "python_legacy"
    )]
    BigEndian,
    /// Layout of the legacy Java driver: the most and least significant
    /// 64-bit halves are each written little-endian.
    #[serde(alias = "JavaLegacy", alias = "java_legacy")]
    JavaHistorical,
}

impl ByteOrderMode {
    /// All modes, `Unspecified` first.
    pub const ALL: [ByteOrderMode; 4] = [
        ByteOrderMode::Unspecified,
        ByteOrderMode::LittleEndian,
        ByteOrderMode::BigEndian,
        ByteOrderMode::JavaHistorical,
    ];

    /// Returns `true` for every mode that defines a byte layout.
    pub fn is_specified(self) -> bool {
        !matches!(self, ByteOrderMode::Unspecified)
    }

    /// Snake-case name, as accepted by the settings loader.
    pub fn as_str(self) -> &'static str {
        match self {
            ByteOrderMode::Unspecified => "unspecified",
            ByteOrderMode::LittleEndian => "little_endian",
            ByteOrderMode::BigEndian => "big_endian",
            ByteOrderMode::JavaHistorical => "java_historical",
        }
    }
}

impl fmt::Display for ByteOrderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ByteOrderMode {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "unspecified" => Ok(ByteOrderMode::Unspecified),
            "littleendian" | "csharplegacy" => Ok(ByteOrderMode::LittleEndian),
            "bigendian" | "standard" | "pythonlegacy" => Ok(ByteOrderMode::BigEndian),
            "javahistorical" | "javalegacy" => Ok(ByteOrderMode::JavaHistorical),
            _ => Err(SettingsError::UnknownByteOrder(s.to_string())),
        }
    }
}
