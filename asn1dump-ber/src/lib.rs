//! BER codec for the asn1dump structure dumper
//!
//! This crate reads BER/DER tag headers, length fields and primitive values
//! from a seekable byte stream while tracking the absolute stream position.
//! It also carries a small encoder used to build TLV fixtures.

pub mod ber;

pub use asn1dump_core::{DumpError, DumpResult};
pub use ber::{BerEncoder, BerInteger, BerLength, BerReader, BerTag, BerTagClass, ObjectIdentifier};
pub use ber::types::universal;
