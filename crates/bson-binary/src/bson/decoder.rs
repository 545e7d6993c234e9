//! BSON binary element decoder.

use tracing::trace;

use super::error::BsonError;
use super::BINARY_ELEMENT;
use crate::binary::{BinarySubtype, BinaryValue};
use crate::guid::{ByteOrderMode, UUID_LEN};
use crate::settings::BinarySettings;

/// Decodes BSON binary elements into [`BinaryValue`]s.
///
/// UUID payloads are tagged with the configured byte order so that
/// [`BinaryValue::to_uuid`] reads them back under the right layout.
pub struct BsonBinaryDecoder<'a> {
    data: &'a [u8],
    x: usize,
    settings: BinarySettings,
}

impl Default for BsonBinaryDecoder<'_> {
    fn default() -> Self {
        Self::new(BinarySettings::default())
    }
}

impl<'a> BsonBinaryDecoder<'a> {
    pub fn new(settings: BinarySettings) -> Self {
        Self {
            data: &[],
            x: 0,
            settings,
        }
    }

    /// Number of bytes consumed by the last decode call.
    pub fn position(&self) -> usize {
        self.x
    }

    /// Decodes a document whose fields are all binary elements.
    pub fn decode_document(
        &mut self,
        data: &'a [u8],
    ) -> Result<Vec<(String, BinaryValue)>, BsonError> {
        self.reset(data);
        self.read_document()
    }

    /// Decodes one `0x05` element, returning its key and value.
    pub fn decode_element(&mut self, data: &'a [u8]) -> Result<(String, BinaryValue), BsonError> {
        self.reset(data);
        self.read_element()
    }

    /// Decodes an element payload (length, subtype, bytes).
    pub fn decode_binary(&mut self, data: &'a [u8]) -> Result<BinaryValue, BsonError> {
        self.reset(data);
        self.read_binary()
    }

    fn reset(&mut self, data: &'a [u8]) {
        self.data = data;
        self.x = 0;
    }

    #[inline]
    fn check(&self, n: usize) -> Result<(), BsonError> {
        if self.x + n > self.data.len() {
            Err(BsonError::UnexpectedEof)
        } else {
            Ok(())
        }
    }

    fn u8(&mut self) -> Result<u8, BsonError> {
        self.check(1)?;
        let val = self.data[self.x];
        self.x += 1;
        Ok(val)
    }

    fn i32_le(&mut self) -> Result<i32, BsonError> {
        self.check(4)?;
        let val = i32::from_le_bytes([
            self.data[self.x],
            self.data[self.x + 1],
            self.data[self.x + 2],
            self.data[self.x + 3],
        ]);
        self.x += 4;
        Ok(val)
    }

    fn length(&mut self) -> Result<usize, BsonError> {
        let len = self.i32_le()?;
        usize::try_from(len).map_err(|_| BsonError::InvalidLength(len))
    }

    fn buf(&mut self, n: usize) -> Result<&'a [u8], BsonError> {
        self.check(n)?;
        let data = &self.data[self.x..self.x + n];
        self.x += n;
        Ok(data)
    }

    fn read_document(&mut self) -> Result<Vec<(String, BinaryValue)>, BsonError> {
        let document_size = self.i32_le()?;
        if document_size < 5 {
            return Err(BsonError::InvalidLength(document_size));
        }
        let start_pos = self.x;
        let body_len = document_size as usize - 4;
        self.check(body_len)?;
        let end_pos = start_pos + body_len - 1; // before terminating null
        let mut fields = Vec::new();

        while self.x < end_pos {
            fields.push(self.read_element()?);
        }
        if self.x != end_pos || self.data[end_pos] != 0 {
            return Err(BsonError::InvalidLength(document_size));
        }
        self.x = end_pos + 1;
        Ok(fields)
    }

    fn read_element(&mut self) -> Result<(String, BinaryValue), BsonError> {
        let element_type = self.u8()?;
        if element_type != BINARY_ELEMENT {
            return Err(BsonError::UnsupportedType(element_type));
        }
        let key = self.read_cstring()?;
        let value = self.read_binary()?;
        Ok((key, value))
    }

    fn read_cstring(&mut self) -> Result<String, BsonError> {
        let start = self.x;
        while self.x < self.data.len() && self.data[self.x] != 0 {
            self.x += 1;
        }
        if self.x >= self.data.len() {
            return Err(BsonError::UnexpectedEof);
        }
        let s = std::str::from_utf8(&self.data[start..self.x])
            .map_err(|_| BsonError::InvalidUtf8)?
            .to_string();
        self.x += 1; // skip null terminator
        Ok(s)
    }

    fn read_binary(&mut self) -> Result<BinaryValue, BsonError> {
        let length = self.length()?;
        let subtype = BinarySubtype::from_tag(self.u8()?);
        let data = match subtype {
            BinarySubtype::BinaryOld => {
                let outer = length as i32;
                let inner = self.length()?;
                if inner + 4 != length {
                    return Err(BsonError::InvalidLength(outer));
                }
                self.buf(inner)?
            }
            _ => self.buf(length)?,
        };
        let byte_order = self.byte_order_for(subtype, data.len());
        Ok(BinaryValue::with_byte_order(data.to_vec(), subtype, byte_order))
    }

    fn byte_order_for(&self, subtype: BinarySubtype, len: usize) -> ByteOrderMode {
        match subtype {
            BinarySubtype::Uuid if len == UUID_LEN => {
                trace!(byte_order = %self.settings.guid_byte_order, "tagging UUID payload");
                self.settings.guid_byte_order
            }
            BinarySubtype::Other(tag) => {
                trace!(tag, "passing through opaque binary subtype");
                ByteOrderMode::Unspecified
            }
            _ => ByteOrderMode::Unspecified,
        }
    }
}
