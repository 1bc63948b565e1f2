//! Decoded primitive values (INTEGER, OBJECT IDENTIFIER)

use asn1dump_core::{DumpError, DumpResult};
use std::fmt;

/// Decoded INTEGER or ENUMERATED content
///
/// Values of up to eight bytes are held as `i64`. Longer encodings, such as
/// certificate serial numbers, keep their raw two's complement bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BerInteger {
    /// Value that fits into an `i64`
    Small(i64),
    /// Raw big-endian two's complement bytes
    Big(Vec<u8>),
}

impl BerInteger {
    /// Decode big-endian two's complement content bytes
    ///
    /// # Error Handling
    /// Returns error if the content is empty.
    pub fn from_bytes(bytes: &[u8]) -> DumpResult<Self> {
        if bytes.is_empty() {
            return Err(DumpError::InvalidData("Empty integer encoding".to_string()));
        }

        if bytes.len() > 8 {
            return Ok(BerInteger::Big(bytes.to_vec()));
        }

        // Sign extend into the leading bytes
        let fill = if bytes[0] & 0x80 != 0 { 0xFF } else { 0x00 };
        let mut buf = [fill; 8];
        buf[8 - bytes.len()..].copy_from_slice(bytes);
        Ok(BerInteger::Small(i64::from_be_bytes(buf)))
    }
}

impl fmt::Display for BerInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BerInteger::Small(value) => write!(f, "{}", value),
            BerInteger::Big(bytes) => write!(f, "0x{}", hex::encode_upper(bytes)),
        }
    }
}

/// Decoded OBJECT IDENTIFIER arcs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectIdentifier(Vec<u64>);

impl ObjectIdentifier {
    /// Decode OBJECT IDENTIFIER content bytes
    ///
    /// # OID Decoding Rules
    /// - Content is a list of base-128 sub-identifiers, bit 8 set on every
    ///   byte but the last of each sub-identifier
    /// - The first sub-identifier holds the first two arcs: below 40 the
    ///   first arc is 0, below 80 it is 1, otherwise it is 2 and the second
    ///   arc takes the rest
    ///
    /// # Error Handling
    /// Returns error if the content is empty, the last sub-identifier is
    /// unterminated, or a sub-identifier overflows 64 bits.
    pub fn from_bytes(bytes: &[u8]) -> DumpResult<Self> {
        if bytes.is_empty() {
            return Err(DumpError::InvalidData(
                "Empty object identifier encoding".to_string(),
            ));
        }

        let mut subids = Vec::new();
        let mut current = 0u64;
        let mut pending = false;
        for &byte in bytes {
            current = current
                .checked_mul(128)
                .map(|x| x | (byte & 0x7F) as u64)
                .ok_or_else(|| DumpError::InvalidData("OID component overflow".to_string()))?;
            pending = byte & 0x80 != 0;
            if !pending {
                subids.push(current);
                current = 0;
            }
        }

        if pending {
            return Err(DumpError::InvalidData(
                "Unterminated OID component".to_string(),
            ));
        }

        let first = subids[0];
        let (arc0, arc1) = match first {
            0..=39 => (0, first),
            40..=79 => (1, first - 40),
            _ => (2, first - 80),
        };

        let mut arcs = Vec::with_capacity(subids.len() + 1);
        arcs.push(arc0);
        arcs.push(arc1);
        arcs.extend_from_slice(&subids[1..]);
        Ok(Self(arcs))
    }

    /// Get the arcs of the identifier
    pub fn arcs(&self) -> &[u64] {
        &self.0
    }
}

impl fmt::Display for ObjectIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, arc) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", arc)?;
        }
        Ok(())
    }
}
