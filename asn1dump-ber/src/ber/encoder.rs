//! BER encoder for ASN.1 structures
//!
//! Builds TLV byte sequences, mainly to produce input for the dumper's
//! tests.
//!
//! # Usage Example
//!
//! ```rust
//! use asn1dump_ber::BerEncoder;
//!
//! let mut inner = BerEncoder::new();
//! inner.encode_integer(12345)?;
//! let mut encoder = BerEncoder::new();
//! encoder.encode_sequence(inner.as_bytes())?;
//! assert_eq!(encoder.into_bytes(), vec![0x30, 0x04, 0x02, 0x02, 0x30, 0x39]);
//! # Ok::<(), asn1dump_ber::DumpError>(())
//! ```

use crate::ber::types::{BerLength, BerTag, universal};
use asn1dump_core::{DumpError, DumpResult};

/// BER encoder for ASN.1 structures
///
/// The encoder accumulates TLVs in a `Vec<u8>` buffer. Constructed values
/// take their already encoded elements as a byte slice.
pub struct BerEncoder {
    buffer: Vec<u8>,
}

impl BerEncoder {
    /// Create a new BER encoder
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Encode a TLV (Tag-Length-Value) triplet with a definite length
    pub fn encode_tlv(&mut self, tag: &BerTag, value: &[u8]) -> DumpResult<()> {
        self.buffer.extend_from_slice(&tag.encode());
        self.buffer
            .extend_from_slice(&BerLength::new(value.len() as u64).encode());
        self.buffer.extend_from_slice(value);
        Ok(())
    }

    /// Encode a constructed value with indefinite length
    ///
    /// Writes the tag, the `0x80` length byte, the elements and the
    /// End-Of-Contents marker.
    pub fn encode_indefinite(&mut self, tag: &BerTag, elements: &[u8]) -> DumpResult<()> {
        if !tag.is_constructed() {
            return Err(DumpError::InvalidData(
                "Indefinite length requires a constructed tag".to_string(),
            ));
        }
        self.buffer.extend_from_slice(&tag.encode());
        self.buffer.extend_from_slice(&BerLength::Indefinite.encode());
        self.buffer.extend_from_slice(elements);
        self.encode_end_of_contents()
    }

    /// Encode an End-Of-Contents marker (`00 00`)
    pub fn encode_end_of_contents(&mut self) -> DumpResult<()> {
        self.buffer.extend_from_slice(&[0x00, 0x00]);
        Ok(())
    }

    /// Encode a BOOLEAN (`0xFF` for TRUE, `0x00` for FALSE)
    pub fn encode_boolean(&mut self, value: bool) -> DumpResult<()> {
        let tag = BerTag::universal(false, universal::BOOLEAN);
        self.encode_tlv(&tag, &[if value { 0xFF } else { 0x00 }])
    }

    /// Encode an INTEGER
    ///
    /// The value is written in minimal big-endian two's complement form.
    pub fn encode_integer(&mut self, value: i64) -> DumpResult<()> {
        let tag = BerTag::universal(false, universal::INTEGER);
        let bytes = Self::encode_integer_value(value);
        self.encode_tlv(&tag, &bytes)
    }

    fn encode_integer_value(value: i64) -> Vec<u8> {
        let bytes = value.to_be_bytes();
        let mut start = 0;
        // Drop leading bytes that only repeat the sign
        while start < bytes.len() - 1 {
            let redundant = (bytes[start] == 0x00 && bytes[start + 1] & 0x80 == 0)
                || (bytes[start] == 0xFF && bytes[start + 1] & 0x80 != 0);
            if !redundant {
                break;
            }
            start += 1;
        }
        bytes[start..].to_vec()
    }

    /// Encode an OCTET STRING
    pub fn encode_octet_string(&mut self, value: &[u8]) -> DumpResult<()> {
        let tag = BerTag::universal(false, universal::OCTET_STRING);
        self.encode_tlv(&tag, value)
    }

    /// Encode a NULL
    pub fn encode_null(&mut self) -> DumpResult<()> {
        let tag = BerTag::universal(false, universal::NULL);
        self.encode_tlv(&tag, &[])
    }

    /// Encode an OBJECT IDENTIFIER
    ///
    /// # Arguments
    /// * `oid` - Object identifier arcs (e.g., `[1, 2, 840, 113549]` for RSA)
    ///
    /// # OID Encoding Rules
    /// - The first two arcs (X.Y) form one sub-identifier: 40*X + Y
    /// - Every sub-identifier is written base-128, bit 8 set on all but its
    ///   last byte
    ///
    /// # Error Handling
    /// Returns error for fewer than two arcs, a first arc above 2, or a
    /// second arc of 40 or more under a first arc of 0 or 1.
    pub fn encode_object_identifier(&mut self, oid: &[u64]) -> DumpResult<()> {
        if oid.len() < 2 {
            return Err(DumpError::InvalidData(
                "Object identifier must have at least 2 components".to_string(),
            ));
        }
        if oid[0] > 2 || (oid[0] < 2 && oid[1] >= 40) {
            return Err(DumpError::InvalidData(format!(
                "Invalid leading arcs {}.{}",
                oid[0], oid[1]
            )));
        }

        let first = (oid[0] * 40)
            .checked_add(oid[1])
            .ok_or_else(|| DumpError::InvalidData("OID component too large".to_string()))?;

        let mut bytes = Vec::new();
        for &component in std::iter::once(&first).chain(&oid[2..]) {
            let mut temp = component;
            let mut component_bytes = vec![(temp & 0x7F) as u8];
            temp >>= 7;
            while temp > 0 {
                component_bytes.push((temp & 0x7F) as u8 | 0x80);
                temp >>= 7;
            }
            component_bytes.reverse();
            bytes.extend(component_bytes);
        }

        let tag = BerTag::universal(false, universal::OBJECT_IDENTIFIER);
        self.encode_tlv(&tag, &bytes)
    }

    /// Encode a SEQUENCE from already encoded elements
    pub fn encode_sequence(&mut self, elements: &[u8]) -> DumpResult<()> {
        let tag = BerTag::universal(true, universal::SEQUENCE);
        self.encode_tlv(&tag, elements)
    }

    /// Encode a context-specific tag
    pub fn encode_context_specific(&mut self, tag_number: u32, value: &[u8], constructed: bool) -> DumpResult<()> {
        let tag = BerTag::context_specific(constructed, tag_number);
        self.encode_tlv(&tag, value)
    }

    /// Encode an application tag
    pub fn encode_application(&mut self, tag_number: u32, value: &[u8], constructed: bool) -> DumpResult<()> {
        let tag = BerTag::application(constructed, tag_number);
        self.encode_tlv(&tag, value)
    }

    /// Get the encoded bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }

    /// Get a reference to the encoded bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }
}

impl Default for BerEncoder {
    fn default() -> Self {
        Self::new()
    }
}
