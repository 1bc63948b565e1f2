//! Core types for the asn1dump BER structure dumper
//!
//! This crate provides the error type shared by the codec crate
//! (`asn1dump-ber`) and the dumper itself (`asn1dump`).

pub mod error;

pub use error::{DumpError, DumpResult};
