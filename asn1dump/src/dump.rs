//! Driver: walk a whole stream unit by unit

use crate::config::DumpConfig;
use crate::walker::{Outcome, TagTreeWalker};
use asn1dump_ber::BerReader;
use asn1dump_core::{DumpError, DumpResult};
use std::io::{Read, Seek, Write};
use std::path::Path;

/// Totals of a finished walk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DumpSummary {
    /// Top-level units walked completely
    pub units: u64,
    /// Bytes covered by those units
    pub bytes: u64,
    /// Position at which the walk stopped
    pub end_offset: u64,
    /// Whether the walk stopped at the end of the stream
    pub complete: bool,
}

/// Walk every top-level unit from `start_offset` until the stream is exhausted
///
/// # Error Handling
/// Returns `Err` for fatal structural errors, output errors and a start
/// offset beyond the end of the stream. A codec failure ends the walk
/// without an error; `DumpSummary::complete` tells whether it happened at
/// the end of the stream.
pub fn dump<R: Read + Seek, W: Write>(
    mut reader: BerReader<R>,
    out: W,
    config: &DumpConfig,
) -> DumpResult<DumpSummary> {
    reader.seek(config.start_offset)?;
    let mut walker = TagTreeWalker::new(reader, out, config.clone());
    let mut summary = DumpSummary::default();

    loop {
        match walker.walk()? {
            Outcome::Consumed(n) => {
                summary.units += 1;
                summary.bytes += n;
            }
            Outcome::EndOfContents => {
                log::debug!("End-Of-Contents at top level, offset {}", walker.reader().position());
            }
            Outcome::Failed(e) => {
                let reader = walker.reader();
                summary.end_offset = reader.position();
                summary.complete = matches!(e, DumpError::EndOfStream) && !reader.has_remaining();
                if !summary.complete {
                    log::warn!("walk stopped at offset {}: {}", summary.end_offset, e);
                }
                break;
            }
        }
    }

    let (_, mut out) = walker.into_inner();
    out.flush()?;
    log::info!("{} top-level units, {} bytes", summary.units, summary.bytes);
    Ok(summary)
}

/// Open `path` and dump it
pub fn dump_file<W: Write>(path: impl AsRef<Path>, out: W, config: &DumpConfig) -> DumpResult<DumpSummary> {
    let reader = BerReader::open(path)?;
    dump(reader, out, config)
}
