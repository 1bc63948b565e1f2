//! BER encoding types (Tag, Length, etc.)

use asn1dump_core::{DumpError, DumpResult};
use std::fmt;

/// Universal class tag numbers (ITU-T X.680)
pub mod universal {
    pub const END_OF_CONTENTS: u32 = 0;
    pub const BOOLEAN: u32 = 1;
    pub const INTEGER: u32 = 2;
    pub const BIT_STRING: u32 = 3;
    pub const OCTET_STRING: u32 = 4;
    pub const NULL: u32 = 5;
    pub const OBJECT_IDENTIFIER: u32 = 6;
    pub const OBJECT_DESCRIPTOR: u32 = 7;
    pub const EXTERNAL: u32 = 8;
    pub const REAL: u32 = 9;
    pub const ENUMERATED: u32 = 10;
    pub const SEQUENCE: u32 = 16;
    pub const SET: u32 = 17;
    pub const NUMERIC_STRING: u32 = 18;
    pub const PRINTABLE_STRING: u32 = 19;
    pub const TELETEX_STRING: u32 = 20;
    pub const VIDEOTEX_STRING: u32 = 21;
    pub const IA5_STRING: u32 = 22;
    pub const UTC_TIME: u32 = 23;
    pub const GENERALIZED_TIME: u32 = 24;
    pub const GRAPHIC_STRING: u32 = 25;
    pub const VISIBLE_STRING: u32 = 26;
    pub const GENERAL_STRING: u32 = 27;
}

/// BER Tag Class
///
/// ASN.1 defines four tag classes:
/// - **Universal**: Standard ASN.1 types (INTEGER, OCTET STRING, etc.)
/// - **Application**: Application-specific types
/// - **Context-specific**: Context-dependent types (used in SEQUENCE/SET)
/// - **Private**: Private/implementation-specific types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BerTagClass {
    /// Universal class (00)
    Universal = 0,
    /// Application class (01)
    Application = 1,
    /// Context-specific class (10)
    ContextSpecific = 2,
    /// Private class (11)
    Private = 3,
}

impl BerTagClass {
    /// Get tag class from bits (bits 8-7 of tag byte)
    pub fn from_bits(bits: u8) -> Self {
        match (bits >> 6) & 0x03 {
            0 => BerTagClass::Universal,
            1 => BerTagClass::Application,
            2 => BerTagClass::ContextSpecific,
            _ => BerTagClass::Private,
        }
    }

    /// Convert tag class to bits (for encoding)
    pub fn to_bits(self) -> u8 {
        (self as u8) << 6
    }
}

/// BER Tag
///
/// A BER tag identifies the type of an ASN.1 value. It consists of:
/// - **Class**: Universal, Application, Context-specific, or Private
/// - **Constructed/Primitive**: Whether the value contains nested TLVs
/// - **Tag Number**: 0-30 in the first byte, larger numbers in
///   base-128 continuation bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BerTag {
    /// Tag class
    class: BerTagClass,
    /// Whether this is a constructed type
    constructed: bool,
    /// Tag number
    number: u32,
}

impl BerTag {
    /// Largest number of continuation bytes accepted for a tag number (28 bits)
    pub const MAX_CONTINUATION_BYTES: usize = 4;

    /// Create a new BER tag
    pub fn new(class: BerTagClass, constructed: bool, number: u32) -> Self {
        Self {
            class,
            constructed,
            number,
        }
    }

    /// Create a Universal class tag
    pub fn universal(constructed: bool, number: u32) -> Self {
        Self::new(BerTagClass::Universal, constructed, number)
    }

    /// Create an Application class tag
    pub fn application(constructed: bool, number: u32) -> Self {
        Self::new(BerTagClass::Application, constructed, number)
    }

    /// Create a Context-specific class tag
    pub fn context_specific(constructed: bool, number: u32) -> Self {
        Self::new(BerTagClass::ContextSpecific, constructed, number)
    }

    /// Create a Private class tag
    pub fn private(constructed: bool, number: u32) -> Self {
        Self::new(BerTagClass::Private, constructed, number)
    }

    /// Get tag class
    pub fn class(&self) -> BerTagClass {
        self.class
    }

    /// Check if tag is constructed
    pub fn is_constructed(&self) -> bool {
        self.constructed
    }

    /// Get tag number
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Check whether this is a Universal tag with the given number
    pub fn is_universal(&self, number: u32) -> bool {
        self.class == BerTagClass::Universal && self.number == number
    }

    /// Encode tag to bytes
    ///
    /// - If tag number <= 30: short form (1 byte)
    /// - If tag number > 30: first byte with all tag bits set, followed by
    ///   base-128 continuation bytes
    pub fn encode(&self) -> Vec<u8> {
        let mut result = Vec::new();

        let class_bits = self.class.to_bits();
        let constructed_bit = if self.constructed { 0x20 } else { 0x00 };

        if self.number <= 30 {
            result.push(class_bits | constructed_bit | (self.number as u8 & 0x1F));
        } else {
            result.push(class_bits | constructed_bit | 0x1F);

            let mut remaining = self.number;
            let mut bytes = Vec::new();
            while remaining > 0 {
                bytes.push((remaining & 0x7F) as u8);
                remaining >>= 7;
            }

            // Continuation bit on all but the last byte
            for (i, &byte) in bytes.iter().rev().enumerate() {
                if i < bytes.len() - 1 {
                    result.push(byte | 0x80);
                } else {
                    result.push(byte);
                }
            }
        }

        result
    }

    /// Decode tag from bytes
    ///
    /// # Returns
    /// Returns `Ok((BerTag, bytes_consumed))` if successful, `Err` otherwise
    ///
    /// # Error Handling
    /// Returns error if:
    /// - Buffer is empty
    /// - The high tag number form is incomplete
    /// - The tag number needs more than 28 bits
    pub fn decode(data: &[u8]) -> DumpResult<(Self, usize)> {
        let Some(&first_byte) = data.first() else {
            return Err(DumpError::InvalidData(
                "Empty buffer for tag decoding".to_string(),
            ));
        };

        let class = BerTagClass::from_bits(first_byte);
        let constructed = (first_byte & 0x20) != 0;
        let tag_bits = first_byte & 0x1F;

        if tag_bits < 31 {
            return Ok((Self::new(class, constructed, tag_bits as u32), 1));
        }

        let mut tag_number = 0u32;
        let mut pos = 1;
        loop {
            let Some(&byte) = data.get(pos) else {
                return Err(DumpError::InvalidData(
                    "Incomplete extended tag encoding".to_string(),
                ));
            };
            if pos > Self::MAX_CONTINUATION_BYTES {
                return Err(DumpError::InvalidData(
                    "Tag number too large or invalid encoding".to_string(),
                ));
            }
            tag_number = (tag_number << 7) | (byte & 0x7F) as u32;
            pos += 1;
            if byte & 0x80 == 0 {
                break;
            }
        }

        Ok((Self::new(class, constructed, tag_number), pos))
    }
}

/// BER Length field
///
/// - **Definite**: a counted number of content bytes (short or long form)
/// - **Indefinite**: content runs until an End-Of-Contents marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BerLength {
    /// Counted content length
    Definite(u64),
    /// Content terminated by End-Of-Contents (`00 00`)
    Indefinite,
}

impl BerLength {
    /// Largest number of long form length bytes accepted
    pub const MAX_LENGTH_BYTES: usize = 8;

    /// Create a definite length
    pub fn new(length: u64) -> Self {
        BerLength::Definite(length)
    }

    /// Get the length value, `None` for the indefinite form
    pub fn definite(&self) -> Option<u64> {
        match self {
            BerLength::Definite(length) => Some(*length),
            BerLength::Indefinite => None,
        }
    }

    /// Check for the indefinite form
    pub fn is_indefinite(&self) -> bool {
        matches!(self, BerLength::Indefinite)
    }

    /// Encode length to bytes
    ///
    /// Short form for lengths below 128, minimal long form otherwise,
    /// `0x80` for the indefinite form.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            BerLength::Indefinite => vec![0x80],
            BerLength::Definite(length) if *length < 128 => vec![*length as u8],
            BerLength::Definite(length) => {
                let bytes = length.to_be_bytes();
                let skip = bytes.iter().take_while(|&&b| b == 0).count();
                let mut result = vec![0x80 | (bytes.len() - skip) as u8];
                result.extend_from_slice(&bytes[skip..]);
                result
            }
        }
    }

    /// Number of length bytes that follow a given first length byte
    pub fn following_bytes(first_byte: u8) -> usize {
        if first_byte & 0x80 == 0 {
            0
        } else {
            (first_byte & 0x7F) as usize
        }
    }

    /// Decode length from bytes
    ///
    /// # Returns
    /// Returns `Ok((BerLength, bytes_consumed))` if successful, `Err` otherwise
    ///
    /// # Error Handling
    /// Returns error if:
    /// - Buffer is too short
    /// - The first byte is the reserved value `0xFF`
    /// - More than eight length bytes are announced
    pub fn decode(data: &[u8]) -> DumpResult<(Self, usize)> {
        let Some(&first_byte) = data.first() else {
            return Err(DumpError::InvalidData(
                "Empty buffer for length decoding".to_string(),
            ));
        };

        if first_byte & 0x80 == 0 {
            return Ok((BerLength::Definite(first_byte as u64), 1));
        }

        if first_byte == 0x80 {
            return Ok((BerLength::Indefinite, 1));
        }

        if first_byte == 0xFF {
            return Err(DumpError::InvalidData(
                "Reserved length byte 0xFF".to_string(),
            ));
        }

        let num_bytes = Self::following_bytes(first_byte);
        if num_bytes > Self::MAX_LENGTH_BYTES {
            return Err(DumpError::InvalidData(format!(
                "Length encoding too large: {} bytes (max {})",
                num_bytes,
                Self::MAX_LENGTH_BYTES
            )));
        }

        if data.len() < 1 + num_bytes {
            return Err(DumpError::InvalidData(format!(
                "Buffer too short for long form length: need {} bytes, got {}",
                1 + num_bytes,
                data.len()
            )));
        }

        let length = data[1..=num_bytes]
            .iter()
            .fold(0u64, |acc, &b| (acc << 8) | b as u64);

        Ok((BerLength::Definite(length), 1 + num_bytes))
    }
}

impl fmt::Display for BerLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BerLength::Definite(length) => write!(f, "{}", length),
            BerLength::Indefinite => f.write_str("indefinite"),
        }
    }
}
