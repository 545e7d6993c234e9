//! BSON binary element encoder.
//!
//! All multi-byte integers are written little-endian.

use super::BINARY_ELEMENT;
use crate::binary::{BinarySubtype, BinaryValue};

/// Encodes binary values as BSON elements and documents.
pub struct BsonBinaryEncoder;

impl Default for BsonBinaryEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl BsonBinaryEncoder {
    pub fn new() -> Self {
        Self
    }

    /// Encodes a document whose fields are all binary values.
    pub fn encode_document(&self, fields: &[(String, BinaryValue)]) -> Vec<u8> {
        let mut body: Vec<u8> = Vec::new();
        for (key, value) in fields {
            self.write_element(&mut body, key, value);
        }
        body.push(0); // terminating null byte
        let size = (body.len() as i32) + 4; // +4 for the 4-byte size field
        let mut result = Vec::with_capacity(4 + body.len());
        result.extend_from_slice(&size.to_le_bytes());
        result.extend_from_slice(&body);
        result
    }

    /// Encodes a single `0x05` element: type byte, key, payload.
    pub fn encode_element(&self, key: &str, value: &BinaryValue) -> Vec<u8> {
        let mut buf = Vec::new();
        self.write_element(&mut buf, key, value);
        buf
    }

    /// Encodes the element payload only (length, subtype, bytes).
    pub fn encode_binary(&self, value: &BinaryValue) -> Vec<u8> {
        let mut buf = Vec::with_capacity(5 + value.len());
        self.write_binary(&mut buf, value);
        buf
    }

    pub fn write_element(&self, buf: &mut Vec<u8>, key: &str, value: &BinaryValue) {
        buf.push(BINARY_ELEMENT);
        self.write_cstring(buf, key);
        self.write_binary(buf, value);
    }

    /// Writes the element payload. Old-style binary (0x02) repeats the length
    /// inside the payload.
    pub fn write_binary(&self, buf: &mut Vec<u8>, value: &BinaryValue) {
        let data = value.bytes();
        let subtype = value.subtype();
        if subtype == BinarySubtype::BinaryOld {
            buf.extend_from_slice(&((data.len() as i32) + 4).to_le_bytes());
            buf.push(subtype.tag());
            buf.extend_from_slice(&(data.len() as i32).to_le_bytes());
        } else {
            buf.extend_from_slice(&(data.len() as i32).to_le_bytes());
            buf.push(subtype.tag());
        }
        buf.extend_from_slice(data);
    }

    /// Writes a null-terminated C-string. Stops at any null byte in the input.
    fn write_cstring(&self, buf: &mut Vec<u8>, s: &str) {
        for byte in s.bytes() {
            if byte == 0 {
                break;
            }
            buf.push(byte);
        }
        buf.push(0);
    }
}
