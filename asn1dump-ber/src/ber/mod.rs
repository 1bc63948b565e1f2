//! BER (Basic Encoding Rules) reader and encoder
//!
//! Each ASN.1 value is encoded as a TLV (Tag-Length-Value) triplet:
//!
//! ```text
//! [Tag] [Length] [Value]
//! ```
//!
//! ## Tag Encoding
//!
//! ```text
//! Bits: 8 7 6 5 4 3 2 1
//!       C C P T T T T T
//! ```
//! - CC = Class (00=Universal, 01=Application, 10=Context, 11=Private)
//! - P = Primitive (0) or Constructed (1)
//! - TTTTT = Tag number (0-30), or 11111 followed by base-128 continuation bytes
//!
//! ## Length Encoding
//!
//! - **Short form** (1 byte): lengths 0-127, bit 8 clear
//! - **Long form**: first byte `1NNNNNNN` gives the number of big-endian length bytes
//! - **Indefinite form**: the single byte `0x80`; the content is terminated
//!   by an End-Of-Contents marker (`00 00`)
//!
//! The reader supports all three forms. Lengths of more than eight octets and
//! the reserved first byte `0xFF` are rejected as malformed.

pub mod encoder;
pub mod reader;
pub mod types;
pub mod value;

pub use encoder::BerEncoder;
pub use reader::BerReader;
pub use types::{BerLength, BerTag, BerTagClass};
pub use value::{BerInteger, ObjectIdentifier};
