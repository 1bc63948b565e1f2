//! Line layout: indentation, offset prefixes and tag labels

use asn1dump_ber::{BerLength, BerTag, BerTagClass};
use std::borrow::Cow;
use std::io::{self, Write};

/// One indentation step
const INDENT: &str = "   ";

/// Labels of the Universal tag numbers 1..=27 (index 0 is unused)
const UNIVERSAL_LABELS: [&str; 28] = [
    " ",
    // 1-3
    "Boolean",
    "Integer",
    "Bitstring",
    // 4-6
    "Octetstring",
    "Null",
    "Objectidentifier",
    // 7-9
    "Objectdescriptor",
    "External",
    "Real",
    // 10-12
    "Enumerated",
    "<reserved>",
    "<reserved>",
    // 13-15
    "<reserved>",
    "<reserved>",
    "<reserved>",
    // 16-18
    "Sequence",
    "Set",
    "NumString",
    // 19-21
    "Printable String",
    "Teletex",
    "Videotex",
    // 22-24
    "IA5 String",
    "UCTtime",
    "Time",
    // 25-27
    "Graphic String",
    "Visible String",
    "General String",
];

/// Label of a tag: the Universal type name, or `A[n]`, `C[n]`, `P[n]`
///
/// Universal numbers without a name (0 and anything above 27) render as a
/// single blank.
pub fn tag_label(tag: &BerTag) -> Cow<'static, str> {
    let number = tag.number();
    match tag.class() {
        BerTagClass::Universal => match number {
            1..=27 => Cow::Borrowed(UNIVERSAL_LABELS[number as usize]),
            _ => Cow::Borrowed(" "),
        },
        BerTagClass::Application => Cow::Owned(format!("A[{}]", number)),
        BerTagClass::ContextSpecific => Cow::Owned(format!("C[{}]", number)),
        BerTagClass::Private => Cow::Owned(format!("P[{}]", number)),
    }
}

/// Short class name
pub fn class_name(class: BerTagClass) -> &'static str {
    match class {
        BerTagClass::Universal => "UNIV",
        BerTagClass::Application => "APPL",
        BerTagClass::ContextSpecific => "CONT",
        BerTagClass::Private => "PRIV",
    }
}

/// Short form name
pub fn form_name(constructed: bool) -> &'static str {
    if constructed { "CONST" } else { "PRIM" }
}

/// Prints line prefixes and header lines
#[derive(Debug, Clone, Copy, Default)]
pub struct Formatter {
    print_offsets: bool,
}

impl Formatter {
    pub fn new(print_offsets: bool) -> Self {
        Self { print_offsets }
    }

    /// Write the line prefix: optional offset, then one step per depth
    ///
    /// The offset is printed as eight zero-padded decimal digits followed
    /// by ` - `.
    pub fn write_indent<W: Write>(&self, out: &mut W, depth: usize, offset: u64) -> io::Result<()> {
        if self.print_offsets {
            write!(out, "{:08} - ", offset)?;
        }
        for _ in 0..depth {
            out.write_all(INDENT.as_bytes())?;
        }
        Ok(())
    }

    /// Write the header line of a unit
    ///
    /// ```text
    /// Sequence (taglength= 1 length= 6) (UNIV/CONST)
    /// ```
    pub fn write_header<W: Write>(
        &self,
        out: &mut W,
        tag: &BerTag,
        tag_len: usize,
        length: BerLength,
        depth: usize,
        offset: u64,
    ) -> io::Result<()> {
        self.write_indent(out, depth, offset)?;
        writeln!(
            out,
            "{} (taglength= {} length= {}) ({}/{})",
            tag_label(tag),
            tag_len,
            length,
            class_name(tag.class()),
            form_name(tag.is_constructed())
        )
    }
}
