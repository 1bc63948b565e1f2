//! Tag tree walker
//!
//! Walks one complete top-level TLV unit per call, printing a header line
//! for every unit it meets. Nested units are tracked on an explicit frame
//! stack instead of native recursion, so hostile nesting ends in
//! `DumpError::DepthExceeded` rather than a stack overflow.
//!
//! # Descent Rules
//!
//! After the value renderer has looked at a unit that it did not fully
//! consume:
//! - constructed units and Universal EXTERNAL walk their children
//! - primitive non-Universal units walk one nested unit when context mode is
//!   enabled, and are shown as `(skipping N Bytes: ...)` otherwise
//! - anything else is a leaf
//!
//! # End-Of-Contents
//!
//! An End-Of-Contents marker closes the innermost open constructed unit.
//! With `eoc_cascade` the closing unit reports End-Of-Contents to its own
//! parent as well, which closes every enclosing unit up to the top level.

use crate::config::DumpConfig;
use crate::format::Formatter;
use crate::render::{Rendered, ValueRenderer, write_skipped_runs};
use asn1dump_ber::{BerLength, BerReader, BerTag, BerTagClass, universal};
use asn1dump_core::{DumpError, DumpResult};
use std::io::{Read, Seek, Write};

/// Outcome of walking one unit
#[derive(Debug)]
pub enum Outcome {
    /// The unit was walked completely; total bytes of tag, length and content
    Consumed(u64),
    /// An End-Of-Contents marker was read
    EndOfContents,
    /// The codec failed; the walk stopped without further output
    Failed(DumpError),
}

/// Result of visiting a single header
enum Visit {
    Done(Outcome),
    Open(Frame),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FrameKind {
    /// Walk children until the content is used up or End-Of-Contents
    Children,
    /// Walk exactly one nested unit
    Single { visited: bool },
}

/// An open unit whose nested units are being walked
#[derive(Debug)]
struct Frame {
    unit_start: u64,
    content_start: u64,
    length: BerLength,
    depth: usize,
    kind: FrameKind,
    closed: bool,
}

impl Frame {
    /// Definite content bytes not yet consumed, `None` for indefinite length
    fn remaining(&self, position: u64) -> Option<u64> {
        self.length
            .definite()
            .map(|n| (self.content_start + n).saturating_sub(position))
    }

    fn wants_child(&self, position: u64) -> bool {
        if self.closed || self.kind == (FrameKind::Single { visited: true }) {
            return false;
        }
        self.remaining(position).is_none_or(|n| n > 0)
    }
}

enum Descent {
    Children,
    Single,
    Opaque,
    Leaf,
}

fn classify(tag: &BerTag, context_mode: bool) -> Descent {
    if tag.is_constructed() || tag.is_universal(universal::EXTERNAL) {
        Descent::Children
    } else if tag.class() == BerTagClass::Universal {
        Descent::Leaf
    } else if context_mode {
        Descent::Single
    } else {
        Descent::Opaque
    }
}

fn failed(e: DumpError) -> Visit {
    log::debug!("walk stopped: {}", e);
    Visit::Done(Outcome::Failed(e))
}

/// Walks TLV units from a reader and prints them to a writer
pub struct TagTreeWalker<R, W> {
    reader: BerReader<R>,
    out: W,
    config: DumpConfig,
    formatter: Formatter,
    renderer: ValueRenderer,
}

impl<R: Read + Seek, W: Write> TagTreeWalker<R, W> {
    pub fn new(reader: BerReader<R>, out: W, config: DumpConfig) -> Self {
        let formatter = Formatter::new(config.print_offsets);
        let renderer = ValueRenderer::new(config.hex_strings, formatter);
        Self {
            reader,
            out,
            config,
            formatter,
            renderer,
        }
    }

    pub fn reader(&self) -> &BerReader<R> {
        &self.reader
    }

    pub fn into_inner(self) -> (BerReader<R>, W) {
        (self.reader, self.out)
    }

    /// Walk one complete unit starting at the current position
    ///
    /// # Returns
    /// - `Outcome::Consumed(glen)` with the unit's total size
    /// - `Outcome::EndOfContents` for a marker at this level (or, with
    ///   `eoc_cascade`, one that closed the unit)
    /// - `Outcome::Failed` when the codec failed, including end of stream
    ///
    /// # Error Handling
    /// Returns `Err` for structural corruption (`UnexpectedLength`,
    /// `MalformedLength`, `DepthExceeded`) and output errors.
    pub fn walk(&mut self) -> DumpResult<Outcome> {
        let mut stack: Vec<Frame> = Vec::new();
        let mut next = self.visit(0)?;
        loop {
            let outcome = match next {
                Visit::Open(frame) => {
                    if stack.len() >= self.config.max_depth {
                        return Err(DumpError::DepthExceeded(self.config.max_depth));
                    }
                    next = self.advance(frame, &mut stack)?;
                    continue;
                }
                Visit::Done(outcome) => outcome,
            };

            let Some(mut frame) = stack.pop() else {
                return Ok(outcome);
            };

            match outcome {
                Outcome::Failed(e) => return Ok(Outcome::Failed(e)),
                Outcome::Consumed(_) => {}
                Outcome::EndOfContents if frame.kind == FrameKind::Children => {
                    if self.config.eoc_cascade {
                        next = Visit::Done(Outcome::EndOfContents);
                        continue;
                    }
                    frame.closed = true;
                }
                // Inside a single nested unit the marker is plain content
                Outcome::EndOfContents => {}
            }
            next = self.advance(frame, &mut stack)?;
        }
    }

    /// Visit the next child of `frame`, or finish it
    fn advance(&mut self, mut frame: Frame, stack: &mut Vec<Frame>) -> DumpResult<Visit> {
        if !frame.wants_child(self.reader.position()) {
            return self.finish(frame);
        }
        if let FrameKind::Single { visited } = &mut frame.kind {
            *visited = true;
        }
        let depth = frame.depth + 1;
        stack.push(frame);
        self.visit(depth)
    }

    fn finish(&mut self, frame: Frame) -> DumpResult<Visit> {
        if let FrameKind::Single { .. } = frame.kind {
            let leftover = frame.remaining(self.reader.position()).unwrap_or(0);
            if leftover > 0 {
                return self.opaque(frame.unit_start, leftover, frame.depth + 1);
            }
        }
        Ok(self.consumed(frame.unit_start))
    }

    fn consumed(&self, unit_start: u64) -> Visit {
        Visit::Done(Outcome::Consumed(self.reader.position() - unit_start))
    }

    /// Read one header and handle everything that does not need a frame
    fn visit(&mut self, depth: usize) -> DumpResult<Visit> {
        let unit_start = self.reader.position();

        let (tag, tag_len) = match self.reader.read_tag() {
            Ok(header) => header,
            Err(e) => return Ok(failed(e)),
        };

        let length_offset = self.reader.position();
        let length = match self.reader.read_length() {
            Ok((length, _)) => length,
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => return Ok(failed(e)),
        };

        if let BerLength::Definite(n) = length {
            if n > self.reader.remaining() {
                return Err(DumpError::UnexpectedLength {
                    offset: length_offset,
                    length: n,
                });
            }
        }

        if tag.is_universal(universal::END_OF_CONTENTS) && length == BerLength::Definite(0) {
            return Ok(Visit::Done(Outcome::EndOfContents));
        }

        self.formatter
            .write_header(&mut self.out, &tag, tag_len, length, depth, self.reader.position())?;
        log::trace!("{:?} length {} at {}", tag, length, unit_start);

        if !tag.is_constructed() && length.is_indefinite() {
            return Ok(failed(DumpError::InvalidData(
                "Indefinite length on a primitive encoding".to_string(),
            )));
        }

        let content_start = self.reader.position();
        match self
            .renderer
            .render(&mut self.reader, &mut self.out, &tag, length, depth)?
        {
            Rendered::Failed(e) => return Ok(failed(e)),
            Rendered::Value { .. } | Rendered::Skipped { .. } => {
                return self.leaf(unit_start, content_start, length);
            }
            Rendered::Aggregate => {}
        }

        let kind = match classify(&tag, self.config.context_mode) {
            Descent::Children => FrameKind::Children,
            Descent::Single => FrameKind::Single { visited: false },
            Descent::Opaque => {
                let count = self.unread(content_start, length);
                return self.opaque(unit_start, count, depth + 1);
            }
            Descent::Leaf => return self.leaf(unit_start, content_start, length),
        };

        let frame = Frame {
            unit_start,
            content_start,
            length,
            depth,
            kind,
            closed: false,
        };
        if frame.wants_child(self.reader.position()) {
            Ok(Visit::Open(frame))
        } else {
            Ok(self.consumed(unit_start))
        }
    }

    fn unread(&self, content_start: u64, length: BerLength) -> u64 {
        length
            .definite()
            .map(|n| (content_start + n).saturating_sub(self.reader.position()))
            .unwrap_or(0)
    }

    /// Finish a unit without children, skipping content nobody rendered
    fn leaf(&mut self, unit_start: u64, content_start: u64, length: BerLength) -> DumpResult<Visit> {
        let unread = self.unread(content_start, length);
        if unread > 0 {
            log::debug!("skipping {} unrendered bytes at {}", unread, self.reader.position());
            if let Err(e) = self.reader.skip(unread) {
                return Ok(failed(e));
            }
        }
        Ok(self.consumed(unit_start))
    }

    /// Print `count` content bytes as a skipping annotation
    fn opaque(&mut self, unit_start: u64, count: u64, depth: usize) -> DumpResult<Visit> {
        self.formatter
            .write_indent(&mut self.out, depth, self.reader.position())?;
        write!(self.out, "(skipping {} Bytes: ", count)?;
        let bytes = match self.reader.read_bytes(count) {
            Ok(bytes) => bytes,
            Err(e) => return Ok(failed(e)),
        };
        write_skipped_runs(&mut self.out, &bytes)?;
        writeln!(self.out, ")")?;
        Ok(self.consumed(unit_start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use asn1dump_ber::BerEncoder;
    use std::io::Cursor;

    fn walker(bytes: Vec<u8>, config: DumpConfig) -> TagTreeWalker<Cursor<Vec<u8>>, Vec<u8>> {
        let reader = BerReader::new(Cursor::new(bytes)).unwrap();
        TagTreeWalker::new(reader, Vec::new(), config)
    }

    /// Walk every top-level unit and return the printed text and the sizes
    fn walk_all(bytes: Vec<u8>, config: DumpConfig) -> (String, Vec<u64>) {
        let mut walker = walker(bytes, config);
        let mut sizes = Vec::new();
        loop {
            match walker.walk().unwrap() {
                Outcome::Consumed(n) => sizes.push(n),
                Outcome::EndOfContents => {}
                Outcome::Failed(_) => break,
            }
        }
        let (_, out) = walker.into_inner();
        (String::from_utf8(out).unwrap(), sizes)
    }

    fn sequence_of_int_and_bool() -> Vec<u8> {
        let mut inner = BerEncoder::new();
        inner.encode_integer(-1).unwrap();
        inner.encode_boolean(true).unwrap();
        let mut encoder = BerEncoder::new();
        encoder.encode_sequence(inner.as_bytes()).unwrap();
        encoder.into_bytes()
    }

    #[test]
    fn test_walk_sequence() {
        let (text, sizes) = walk_all(sequence_of_int_and_bool(), DumpConfig::default());
        assert_eq!(
            text,
            "Sequence (taglength= 1 length= 6) (UNIV/CONST)\n\
             \x20  Integer (taglength= 1 length= 1) (UNIV/PRIM)\n\
             \x20     ::= -1\n\
             \x20  Boolean (taglength= 1 length= 1) (UNIV/PRIM)\n\
             \x20     ::= TRUE\n"
        );
        assert_eq!(sizes, vec![8]);
    }

    #[test]
    fn test_walk_with_offsets() {
        let config = DumpConfig::new().with_print_offsets(true);
        let (text, _) = walk_all(sequence_of_int_and_bool(), config);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "00000002 - Sequence (taglength= 1 length= 6) (UNIV/CONST)");
        assert_eq!(lines[1], "00000004 -    Integer (taglength= 1 length= 1) (UNIV/PRIM)");
        assert_eq!(lines[2], "00000005 -       ::= -1");
        assert_eq!(lines[4], "00000008 -       ::= TRUE");
    }

    #[test]
    fn test_top_level_sizes_cover_input() {
        let mut encoder = BerEncoder::new();
        encoder.encode_integer(70000).unwrap();
        encoder.encode_octet_string(&[0x55; 200]).unwrap();
        encoder.encode_null().unwrap();
        encoder.encode_sequence(&sequence_of_int_and_bool()).unwrap();
        let bytes = encoder.into_bytes();
        let total = bytes.len() as u64;

        let (_, sizes) = walk_all(bytes, DumpConfig::default());
        assert_eq!(sizes.len(), 4);
        assert_eq!(sizes.iter().sum::<u64>(), total);
    }

    #[test]
    fn test_context_primitive_is_skipped() {
        let mut encoder = BerEncoder::new();
        encoder.encode_context_specific(0, b"A\x01B", false).unwrap();
        encoder.encode_integer(5).unwrap();
        let (text, sizes) = walk_all(encoder.into_bytes(), DumpConfig::default());
        assert_eq!(
            text,
            "C[0] (taglength= 1 length= 3) (CONT/PRIM)\n\
             \x20  (skipping 3 Bytes: A{01}B)\n\
             Integer (taglength= 1 length= 1) (UNIV/PRIM)\n\
             \x20  ::= 5\n"
        );
        assert_eq!(sizes, vec![5, 3]);
    }

    #[test]
    fn test_context_primitive_decoded_in_context_mode() {
        let mut nested = BerEncoder::new();
        nested.encode_integer(7).unwrap();
        let mut encoder = BerEncoder::new();
        encoder.encode_context_specific(1, nested.as_bytes(), false).unwrap();
        let config = DumpConfig::new().with_context_mode(true);
        let (text, sizes) = walk_all(encoder.into_bytes(), config);
        assert_eq!(
            text,
            "C[1] (taglength= 1 length= 3) (CONT/PRIM)\n\
             \x20  Integer (taglength= 1 length= 1) (UNIV/PRIM)\n\
             \x20     ::= 7\n"
        );
        assert_eq!(sizes, vec![5]);
    }

    #[test]
    fn test_context_mode_decodes_exactly_one_nested_unit() {
        let mut nested = BerEncoder::new();
        nested.encode_integer(7).unwrap();
        nested.encode_integer(8).unwrap();
        let mut encoder = BerEncoder::new();
        encoder.encode_context_specific(2, nested.as_bytes(), false).unwrap();
        let config = DumpConfig::new().with_context_mode(true);
        let (text, sizes) = walk_all(encoder.into_bytes(), config);
        assert_eq!(
            text,
            "C[2] (taglength= 1 length= 6) (CONT/PRIM)\n\
             \x20  Integer (taglength= 1 length= 1) (UNIV/PRIM)\n\
             \x20     ::= 7\n\
             \x20  (skipping 3 Bytes: {02}{01}{08})\n"
        );
        assert_eq!(sizes, vec![8]);
    }

    #[test]
    fn test_context_mode_end_of_contents_is_plain_content() {
        let config = DumpConfig::new().with_context_mode(true);
        let mut walker = walker(vec![0x80, 0x04, 0x00, 0x00, 0x05, 0x00], config);
        assert!(matches!(walker.walk().unwrap(), Outcome::Consumed(6)));
        let (_, out) = walker.into_inner();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "C[0] (taglength= 1 length= 4) (CONT/PRIM)\n\
             \x20  (skipping 2 Bytes: {05}{00})\n"
        );

        let config = DumpConfig::new().with_context_mode(true).with_eoc_cascade(true);
        let (_, sizes) = walk_all(vec![0x80, 0x04, 0x00, 0x00, 0x05, 0x00], config);
        assert_eq!(sizes, vec![6]);
    }

    #[test]
    fn test_application_and_private_primitives_are_skipped() {
        let (text, sizes) = walk_all(
            vec![0x41, 0x02, 0x05, 0x00, 0xC1, 0x01, 0x41],
            DumpConfig::default(),
        );
        assert_eq!(
            text,
            "A[1] (taglength= 1 length= 2) (APPL/PRIM)\n\
             \x20  (skipping 2 Bytes: {05}{00})\n\
             P[1] (taglength= 1 length= 1) (PRIV/PRIM)\n\
             \x20  (skipping 1 Bytes: A)\n"
        );
        assert_eq!(sizes, vec![4, 3]);
    }

    #[test]
    fn test_application_constructed_walks_children() {
        let mut nested = BerEncoder::new();
        nested.encode_null().unwrap();
        nested.encode_octet_string(b"ok").unwrap();
        let mut encoder = BerEncoder::new();
        encoder.encode_application(1, nested.as_bytes(), true).unwrap();
        let (text, _) = walk_all(encoder.into_bytes(), DumpConfig::default());
        assert_eq!(
            text,
            "A[1] (taglength= 1 length= 6) (APPL/CONST)\n\
             \x20  Null (taglength= 1 length= 0) (UNIV/PRIM)\n\
             \x20  Octetstring (taglength= 1 length= 2) (UNIV/PRIM)\n\
             \x20     ::= \"ok\"\n"
        );
    }

    #[test]
    fn test_indefinite_sequence_stops_at_end_of_contents() {
        let mut inner = BerEncoder::new();
        inner.encode_integer(1).unwrap();
        let mut encoder = BerEncoder::new();
        encoder
            .encode_indefinite(&BerTag::universal(true, universal::SEQUENCE), inner.as_bytes())
            .unwrap();
        encoder.encode_boolean(false).unwrap();
        let (text, sizes) = walk_all(encoder.into_bytes(), DumpConfig::default());
        assert_eq!(
            text,
            "Sequence (taglength= 1 length= indefinite) (UNIV/CONST)\n\
             \x20  Integer (taglength= 1 length= 1) (UNIV/PRIM)\n\
             \x20     ::= 1\n\
             Boolean (taglength= 1 length= 1) (UNIV/PRIM)\n\
             \x20  ::= FALSE\n"
        );
        assert_eq!(sizes, vec![7, 3]);
    }

    /// `30 80 | 30 80 | 30 80 05 00 00 00 | 00 00 | 02 01 01 | 00 00`
    fn nested_indefinite() -> Vec<u8> {
        let seq = BerTag::universal(true, universal::SEQUENCE);
        let mut innermost = BerEncoder::new();
        innermost.encode_indefinite(&seq, &[0x05, 0x00]).unwrap();
        let mut middle_content = BerEncoder::new();
        middle_content.encode_indefinite(&seq, innermost.as_bytes()).unwrap();
        middle_content.encode_integer(1).unwrap();
        let mut encoder = BerEncoder::new();
        encoder.encode_indefinite(&seq, middle_content.as_bytes()).unwrap();
        encoder.into_bytes()
    }

    #[test]
    fn test_nested_indefinite_closes_innermost_only() {
        let bytes = nested_indefinite();
        let total = bytes.len() as u64;
        let (text, sizes) = walk_all(bytes, DumpConfig::default());
        assert_eq!(
            text,
            "Sequence (taglength= 1 length= indefinite) (UNIV/CONST)\n\
             \x20  Sequence (taglength= 1 length= indefinite) (UNIV/CONST)\n\
             \x20     Sequence (taglength= 1 length= indefinite) (UNIV/CONST)\n\
             \x20        Null (taglength= 1 length= 0) (UNIV/PRIM)\n\
             \x20  Integer (taglength= 1 length= 1) (UNIV/PRIM)\n\
             \x20     ::= 1\n"
        );
        assert_eq!(sizes, vec![total]);
    }

    #[test]
    fn test_nested_indefinite_with_cascade() {
        let config = DumpConfig::new().with_eoc_cascade(true);
        let (text, sizes) = walk_all(nested_indefinite(), config);
        // The first marker closes all three open units; the rest is walked
        // from the top level
        assert_eq!(
            text,
            "Sequence (taglength= 1 length= indefinite) (UNIV/CONST)\n\
             \x20  Sequence (taglength= 1 length= indefinite) (UNIV/CONST)\n\
             \x20     Sequence (taglength= 1 length= indefinite) (UNIV/CONST)\n\
             \x20        Null (taglength= 1 length= 0) (UNIV/PRIM)\n\
             Integer (taglength= 1 length= 1) (UNIV/PRIM)\n\
             \x20  ::= 1\n"
        );
        assert_eq!(sizes, vec![3]);
    }

    #[test]
    fn test_unexpected_length_is_fatal() {
        let mut walker = walker(vec![0x30, 0x10, 0x02, 0x01, 0x01], DumpConfig::default());
        match walker.walk() {
            Err(DumpError::UnexpectedLength { offset, length }) => {
                assert_eq!(offset, 1);
                assert_eq!(length, 16);
            }
            other => panic!("unexpected result: {:?}", other),
        }
        let (_, out) = walker.into_inner();
        assert!(out.is_empty());
    }

    #[test]
    fn test_nested_unexpected_length_keeps_earlier_output() {
        // Sequence of 4 bytes claiming a child of 100 bytes
        let mut walker = walker(vec![0x30, 0x04, 0x04, 0x64, 0x41, 0x42], DumpConfig::default());
        assert!(matches!(
            walker.walk(),
            Err(DumpError::UnexpectedLength { offset: 3, length: 100 })
        ));
        let (_, out) = walker.into_inner();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Sequence (taglength= 1 length= 4) (UNIV/CONST)\n"
        );
    }

    #[test]
    fn test_oversized_string_segment_is_fatal() {
        let mut bytes = vec![0x24, 0x0C, 0x24, 0x88];
        bytes.extend([0xFF; 8]);
        bytes.extend([0x00, 0x00]);
        let mut walker = walker(bytes, DumpConfig::default());
        match walker.walk() {
            Err(DumpError::UnexpectedLength { offset, length }) => {
                assert_eq!(offset, 3);
                assert_eq!(length, u64::MAX);
            }
            other => panic!("unexpected result: {:?}", other),
        }
        let (_, out) = walker.into_inner();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Octetstring (taglength= 1 length= 12) (UNIV/CONST)\n"
        );
    }

    #[test]
    fn test_malformed_length_is_fatal_inside_strings() {
        let mut in_string = walker(vec![0x24, 0x03, 0x04, 0xFF, 0x00], DumpConfig::default());
        assert!(matches!(
            in_string.walk(),
            Err(DumpError::MalformedLength { offset: 3, .. })
        ));

        let mut in_sequence = walker(vec![0x30, 0x03, 0x04, 0xFF, 0x00], DumpConfig::default());
        assert!(matches!(
            in_sequence.walk(),
            Err(DumpError::MalformedLength { offset: 3, .. })
        ));
    }

    #[test]
    fn test_depth_limit() {
        let mut bytes = vec![0x05, 0x00];
        for _ in 0..5 {
            let mut encoder = BerEncoder::new();
            encoder.encode_sequence(&bytes).unwrap();
            bytes = encoder.into_bytes();
        }
        let mut limited = walker(bytes.clone(), DumpConfig::new().with_max_depth(4));
        assert!(matches!(limited.walk(), Err(DumpError::DepthExceeded(4))));

        let mut enough = walker(bytes, DumpConfig::new().with_max_depth(5));
        assert!(matches!(enough.walk().unwrap(), Outcome::Consumed(12)));
    }

    #[test]
    fn test_empty_input_fails_quietly() {
        let mut walker = walker(Vec::new(), DumpConfig::default());
        assert!(matches!(walker.walk().unwrap(), Outcome::Failed(DumpError::EndOfStream)));
    }

    #[test]
    fn test_truncated_child_propagates_failure() {
        // Indefinite sequence that never ends
        let mut walker = walker(vec![0x30, 0x80, 0x05, 0x00], DumpConfig::default());
        assert!(matches!(walker.walk().unwrap(), Outcome::Failed(DumpError::EndOfStream)));
    }

    #[test]
    fn test_top_level_end_of_contents() {
        let mut walker = walker(vec![0x00, 0x00, 0x05, 0x00], DumpConfig::default());
        assert!(matches!(walker.walk().unwrap(), Outcome::EndOfContents));
        assert!(matches!(walker.walk().unwrap(), Outcome::Consumed(2)));
    }

    #[test]
    fn test_primitive_external_walks_children() {
        let mut nested = BerEncoder::new();
        nested.encode_integer(3).unwrap();
        let mut encoder = BerEncoder::new();
        encoder
            .encode_tlv(&BerTag::universal(false, universal::EXTERNAL), nested.as_bytes())
            .unwrap();
        let (text, _) = walk_all(encoder.into_bytes(), DumpConfig::default());
        assert_eq!(
            text,
            "External (taglength= 1 length= 3) (UNIV/PRIM)\n\
             \x20  Integer (taglength= 1 length= 1) (UNIV/PRIM)\n\
             \x20     ::= 3\n"
        );
    }

    #[test]
    fn test_non_universal_tag_eight_is_not_external() {
        let (text, sizes) = walk_all(vec![0x48, 0x02, 0x05, 0x00], DumpConfig::default());
        assert_eq!(
            text,
            "A[8] (taglength= 1 length= 2) (APPL/PRIM)\n\
             \x20  (skipping 2 Bytes: {05}{00})\n"
        );
        assert_eq!(sizes, vec![4]);
    }

    #[test]
    fn test_hex_strings() {
        let mut encoder = BerEncoder::new();
        encoder
            .encode_tlv(&BerTag::universal(false, universal::IA5_STRING), b"Hi")
            .unwrap();
        let config = DumpConfig::new().with_hex_strings(true);
        let (text, _) = walk_all(encoder.into_bytes(), config);
        assert_eq!(
            text,
            "IA5 String (taglength= 1 length= 2) (UNIV/PRIM)\n\
             \x20  ::= 48 69 \n"
        );
    }

    #[test]
    fn test_primitive_sequence_content_is_skipped() {
        let mut encoder = BerEncoder::new();
        encoder
            .encode_tlv(&BerTag::universal(false, universal::SEQUENCE), &[0x01, 0x02])
            .unwrap();
        encoder.encode_null().unwrap();
        let (text, sizes) = walk_all(encoder.into_bytes(), DumpConfig::default());
        assert_eq!(
            text,
            "Sequence (taglength= 1 length= 2) (UNIV/PRIM)\n\
             Null (taglength= 1 length= 0) (UNIV/PRIM)\n"
        );
        assert_eq!(sizes, vec![4, 2]);
    }
}
