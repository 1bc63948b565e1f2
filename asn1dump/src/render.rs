//! Rendering of primitive values
//!
//! The renderer looks at a unit right after its header line was printed.
//! It either prints a `::= <value>` line for the Universal types it knows,
//! skips content it cannot show, or leaves the content to the walker.

use crate::format::Formatter;
use asn1dump_ber::{BerLength, BerReader, BerTag, BerTagClass, universal};
use asn1dump_core::{DumpError, DumpResult};
use std::fmt::Display;
use std::io::{self, Read, Seek, Write};

/// Universal string types that share the run encoding
const STRING_TAGS: [u32; 9] = [
    universal::OCTET_STRING,
    universal::NUMERIC_STRING,
    universal::PRINTABLE_STRING,
    universal::TELETEX_STRING,
    universal::VIDEOTEX_STRING,
    universal::IA5_STRING,
    universal::GRAPHIC_STRING,
    universal::VISIBLE_STRING,
    universal::GENERAL_STRING,
];

/// Result of rendering one unit's value
#[derive(Debug)]
pub enum Rendered {
    /// A value line was printed
    Value { consumed: u64 },
    /// The content was skipped without output
    Skipped { consumed: u64 },
    /// Nothing consumed; the content belongs to nested units or to the
    /// walker's opaque path
    Aggregate,
    /// The codec could not read the value
    Failed(DumpError),
}

macro_rules! read_or_fail {
    ($expr:expr) => {
        match $expr {
            Ok(value) => value,
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => return Ok(Rendered::Failed(e)),
        }
    };
}

/// Byte shown literally by the run encodings
fn is_printable(byte: u8) -> bool {
    byte == b' ' || byte.is_ascii_graphic()
}

/// Write string content as printable runs and hex escapes
///
/// Printable runs are enclosed in double quotes, every other byte is
/// written as two uppercase hex digits followed by a space. In hex mode
/// every byte is written as hex.
///
/// ```text
/// 41 42 01 43  ->  "AB" 01 "C"
/// ```
pub fn write_string_runs<W: Write>(out: &mut W, bytes: &[u8], hex: bool) -> io::Result<()> {
    let mut quote_open = false;
    for &byte in bytes {
        if hex {
            write!(out, "{:02X} ", byte)?;
        } else if is_printable(byte) {
            if !quote_open {
                out.write_all(b"\"")?;
                quote_open = true;
            }
            out.write_all(&[byte])?;
        } else {
            if quote_open {
                out.write_all(b"\" ")?;
                quote_open = false;
            }
            write!(out, "{:02X} ", byte)?;
        }
    }
    if quote_open {
        out.write_all(b"\"")?;
    }
    Ok(())
}

/// Write skipped content: printable bytes literally, others as `{XX}`
pub fn write_skipped_runs<W: Write>(out: &mut W, bytes: &[u8]) -> io::Result<()> {
    for &byte in bytes {
        if is_printable(byte) {
            out.write_all(&[byte])?;
        } else {
            write!(out, "{{{:02X}}}", byte)?;
        }
    }
    Ok(())
}

/// Renders the values of Universal primitive types
#[derive(Debug, Clone, Copy)]
pub struct ValueRenderer {
    hex_strings: bool,
    formatter: Formatter,
}

impl ValueRenderer {
    pub fn new(hex_strings: bool, formatter: Formatter) -> Self {
        Self {
            hex_strings,
            formatter,
        }
    }

    /// Render the value of a unit whose header was just read
    ///
    /// # Arguments
    /// * `reader` - Reader positioned at the first content byte
    /// * `tag` - Tag of the unit
    /// * `length` - Declared content length
    /// * `depth` - Depth of the unit's header line; values go one deeper
    ///
    /// # Returns
    /// Output errors and structural corruption (see `DumpError::is_fatal`)
    /// are returned as `Err`. Other codec errors are reported as
    /// `Rendered::Failed`.
    pub fn render<R: Read + Seek, W: Write>(
        &self,
        reader: &mut BerReader<R>,
        out: &mut W,
        tag: &BerTag,
        length: BerLength,
        depth: usize,
    ) -> DumpResult<Rendered> {
        if tag.class() != BerTagClass::Universal {
            return Ok(Rendered::Aggregate);
        }

        match tag.number() {
            universal::BOOLEAN => {
                let count = read_or_fail!(definite(length));
                let value = read_or_fail!(reader.read_boolean(count));
                let text = if value { "TRUE" } else { "FALSE" };
                self.write_value(out, reader.position(), depth, text)?;
                Ok(Rendered::Value { consumed: count })
            }
            universal::INTEGER => {
                let count = read_or_fail!(definite(length));
                let value = read_or_fail!(reader.read_integer(count));
                self.write_value(out, reader.position(), depth, value)?;
                Ok(Rendered::Value { consumed: count })
            }
            universal::ENUMERATED => {
                let count = read_or_fail!(definite(length));
                let value = read_or_fail!(reader.read_enumerated(count));
                self.write_value(out, reader.position(), depth, value)?;
                Ok(Rendered::Value { consumed: count })
            }
            universal::OBJECT_IDENTIFIER => {
                let count = read_or_fail!(definite(length));
                let value = read_or_fail!(reader.read_oid(count));
                self.write_value(out, reader.position(), depth, value)?;
                Ok(Rendered::Value { consumed: count })
            }
            number if STRING_TAGS.contains(&number) => {
                let start = reader.position();
                let bytes = read_or_fail!(reader.read_octets(length, tag.is_constructed()));
                self.formatter.write_indent(out, depth + 1, reader.position())?;
                out.write_all(b"::= ")?;
                write_string_runs(out, &bytes, self.hex_strings)?;
                out.write_all(b"\n")?;
                Ok(Rendered::Value {
                    consumed: reader.position() - start,
                })
            }
            universal::EXTERNAL | universal::SEQUENCE | universal::SET | universal::NULL => {
                Ok(Rendered::Aggregate)
            }
            _ => match length {
                BerLength::Definite(count) => {
                    read_or_fail!(reader.skip(count));
                    Ok(Rendered::Skipped { consumed: count })
                }
                BerLength::Indefinite => Ok(Rendered::Aggregate),
            },
        }
    }

    fn write_value<W: Write>(&self, out: &mut W, offset: u64, depth: usize, value: impl Display) -> io::Result<()> {
        self.formatter.write_indent(out, depth + 1, offset)?;
        writeln!(out, "::= {}", value)
    }
}

fn definite(length: BerLength) -> DumpResult<u64> {
    length
        .definite()
        .ok_or_else(|| DumpError::InvalidData("Indefinite length on a primitive value".to_string()))
}
