//! asn1dump - show the structure of ASN.1 BER/DER encoded data
//!
//! The dumper reads one TLV unit after the other and prints an indented
//! line per unit, followed by the rendered value of primitive types and the
//! lines of nested units.
//!
//! # Architecture
//!
//! This library is organized as a workspace with multiple crates:
//!
//! - `asn1dump-core`: error handling
//! - `asn1dump-ber`: BER tag/length codec and stream reader
//! - `asn1dump`: walker, value rendering, formatting and the command line
//!
//! # Usage
//!
//! ```no_run
//! use asn1dump::{DumpConfig, dump_file};
//!
//! let config = DumpConfig::new().with_print_offsets(true);
//! let summary = dump_file("cert.der", std::io::stdout(), &config)?;
//! println!("{} units", summary.units);
//! # Ok::<(), asn1dump::DumpError>(())
//! ```

pub mod cli;
pub mod config;
pub mod dump;
pub mod format;
pub mod hexdump;
pub mod render;
pub mod walker;

pub use asn1dump_core::{DumpError, DumpResult};
pub use config::{DEFAULT_MAX_DEPTH, DumpConfig};
pub use dump::{DumpSummary, dump, dump_file};
pub use format::Formatter;
pub use hexdump::hexdump;
pub use render::{Rendered, ValueRenderer};
pub use walker::{Outcome, TagTreeWalker};
