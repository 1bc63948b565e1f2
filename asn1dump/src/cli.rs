//! Command line interface

use crate::config::{DEFAULT_MAX_DEPTH, DumpConfig};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Options that older versions of the tool spelled with a single dash
const LEGACY_OPTIONS: [&str; 7] = [
    "-context",
    "-octhex",
    "-dump",
    "-prtoffset",
    "-offset",
    "-eoc-cascade",
    "-maxdepth",
];

/// Show the structure of ASN.1 BER/DER encoded data
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "asn1dump", version, about, long_about = None)]
pub struct Cli {
    /// Decode the content of primitive non-Universal units as nested units
    #[arg(long)]
    pub context: bool,

    /// Print string values as hex bytes
    #[arg(long)]
    pub octhex: bool,

    /// Print a raw hex dump instead of decoding
    #[arg(long)]
    pub dump: bool,

    /// Prefix every line with its byte offset
    #[arg(long)]
    pub prtoffset: bool,

    /// Start at this byte offset
    #[arg(long, value_name = "pos", default_value_t = 0)]
    pub offset: u64,

    /// Let End-Of-Contents close every open indefinite-length unit
    #[arg(long = "eoc-cascade")]
    pub eoc_cascade: bool,

    /// Maximum number of nested constructed units
    #[arg(long, value_name = "n", default_value_t = DEFAULT_MAX_DEPTH)]
    pub maxdepth: usize,

    /// File to dump
    pub file: PathBuf,
}

impl Cli {
    /// Dump settings selected on the command line
    pub fn config(&self) -> DumpConfig {
        DumpConfig::new()
            .with_context_mode(self.context)
            .with_hex_strings(self.octhex)
            .with_print_offsets(self.prtoffset)
            .with_start_offset(self.offset)
            .with_max_depth(self.maxdepth)
            .with_eoc_cascade(self.eoc_cascade)
    }
}

/// Rewrite single-dash legacy options (`-context`) to their long form
/// (`--context`), leaving everything else untouched
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some(s) if LEGACY_OPTIONS.contains(&s) => OsString::from(format!("-{}", s)),
            _ => arg,
        })
        .collect()
}
