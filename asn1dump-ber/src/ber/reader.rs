//! BER stream reader
//!
//! Reads tag headers, length fields and primitive values from a seekable
//! byte stream while tracking the absolute position.
//!
//! # Usage Example
//!
//! ```rust,no_run
//! use asn1dump_ber::BerReader;
//!
//! let mut reader = BerReader::open("cert.der")?;
//! let (tag, tag_len) = reader.read_tag()?;
//! let (length, length_len) = reader.read_length()?;
//! # Ok::<(), asn1dump_ber::DumpError>(())
//! ```

use crate::ber::types::{BerLength, BerTag, universal};
use crate::ber::value::{BerInteger, ObjectIdentifier};
use asn1dump_core::{DumpError, DumpResult};
use std::fs::File;
use std::io::{self, BufReader, Read, Seek, SeekFrom};
use std::path::Path;

/// Maximum nesting of segments inside a constructed string
const MAX_SEGMENT_DEPTH: usize = 16;

/// BER reader over a seekable stream
///
/// # Position Tracking
///
/// The reader counts every byte it consumes, so `position()` is always the
/// absolute offset of the next unread byte and `remaining()` the number of
/// bytes left before the end of the stream.
///
/// # Error Handling
///
/// Reading past the end reports `DumpError::EndOfStream`. Nothing is
/// allocated for a read that the remaining stream cannot satisfy. A length
/// field that cannot be represented reports `DumpError::MalformedLength`.
pub struct BerReader<R> {
    inner: R,
    position: u64,
    len: u64,
}

impl BerReader<BufReader<File>> {
    /// Open a file for reading
    pub fn open(path: impl AsRef<Path>) -> DumpResult<Self> {
        let file = File::open(path)?;
        Self::new(BufReader::new(file))
    }
}

impl<R: Read + Seek> BerReader<R> {
    /// Create a new reader positioned at the start of the stream
    pub fn new(mut inner: R) -> DumpResult<Self> {
        let len = inner.seek(SeekFrom::End(0))?;
        inner.seek(SeekFrom::Start(0))?;
        Ok(Self {
            inner,
            position: 0,
            len,
        })
    }

    /// Get current absolute position
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Get total stream length
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Check for an empty stream
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get remaining bytes
    pub fn remaining(&self) -> u64 {
        self.len.saturating_sub(self.position)
    }

    /// Check if there is more data to read
    pub fn has_remaining(&self) -> bool {
        self.position < self.len
    }

    /// Seek to an absolute offset
    ///
    /// # Error Handling
    /// Returns error if the offset lies beyond the end of the stream.
    pub fn seek(&mut self, offset: u64) -> DumpResult<()> {
        if offset > self.len {
            return Err(DumpError::InvalidData(format!(
                "Offset {} beyond end of stream ({} bytes)",
                offset, self.len
            )));
        }
        self.inner.seek(SeekFrom::Start(offset))?;
        self.position = offset;
        Ok(())
    }

    fn read_byte(&mut self) -> DumpResult<u8> {
        let mut byte = [0u8; 1];
        self.fill(&mut byte)?;
        Ok(byte[0])
    }

    fn fill(&mut self, buf: &mut [u8]) -> DumpResult<()> {
        if buf.len() as u64 > self.remaining() {
            return Err(DumpError::EndOfStream);
        }
        self.inner.read_exact(buf).map_err(|e| match e.kind() {
            io::ErrorKind::UnexpectedEof => DumpError::EndOfStream,
            _ => DumpError::Io(e),
        })?;
        self.position += buf.len() as u64;
        Ok(())
    }

    /// Read `count` raw bytes
    ///
    /// # Error Handling
    /// Returns `EndOfStream` if fewer than `count` bytes remain.
    pub fn read_bytes(&mut self, count: u64) -> DumpResult<Vec<u8>> {
        if count > self.remaining() {
            return Err(DumpError::EndOfStream);
        }
        let mut buf = vec![0u8; count as usize];
        self.fill(&mut buf)?;
        Ok(buf)
    }

    /// Skip `count` bytes without interpretation
    pub fn skip(&mut self, count: u64) -> DumpResult<()> {
        if count > self.remaining() {
            return Err(DumpError::EndOfStream);
        }
        let skipped = io::copy(&mut (&mut self.inner).take(count), &mut io::sink())?;
        self.position += skipped;
        if skipped < count {
            return Err(DumpError::EndOfStream);
        }
        Ok(())
    }

    /// Read a tag header
    ///
    /// # Returns
    /// Returns `Ok((BerTag, bytes_consumed))`.
    ///
    /// # Error Handling
    /// Returns `EndOfStream` if the stream is exhausted and `InvalidData`
    /// for a tag number that does not fit into 28 bits.
    pub fn read_tag(&mut self) -> DumpResult<(BerTag, usize)> {
        let first = self.read_byte()?;
        let mut bytes = vec![first];
        if first & 0x1F == 0x1F {
            loop {
                let byte = self.read_byte()?;
                bytes.push(byte);
                if byte & 0x80 == 0 || bytes.len() > BerTag::MAX_CONTINUATION_BYTES + 1 {
                    break;
                }
            }
        }
        BerTag::decode(&bytes)
    }

    /// Read a length field
    ///
    /// # Returns
    /// Returns `Ok((BerLength, bytes_consumed))`.
    ///
    /// # Error Handling
    /// Returns `EndOfStream` if the field is cut short and `MalformedLength`
    /// (with the offset of the field) if it cannot be represented.
    pub fn read_length(&mut self) -> DumpResult<(BerLength, usize)> {
        let offset = self.position;
        let first = self.read_byte()?;
        let mut bytes = vec![first];
        let following = BerLength::following_bytes(first);
        if first != 0xFF && following <= BerLength::MAX_LENGTH_BYTES {
            bytes.extend(self.read_bytes(following as u64)?);
        }
        BerLength::decode(&bytes).map_err(|e| match e {
            DumpError::InvalidData(reason) => DumpError::MalformedLength { offset, reason },
            other => other,
        })
    }

    /// Read a BOOLEAN value of `length` content bytes
    ///
    /// Any non-zero first byte is TRUE.
    pub fn read_boolean(&mut self, length: u64) -> DumpResult<bool> {
        let bytes = self.read_bytes(length)?;
        match bytes.first() {
            Some(&byte) => Ok(byte != 0),
            None => Err(DumpError::InvalidData("Empty boolean encoding".to_string())),
        }
    }

    /// Read an INTEGER value of `length` content bytes
    pub fn read_integer(&mut self, length: u64) -> DumpResult<BerInteger> {
        let bytes = self.read_bytes(length)?;
        BerInteger::from_bytes(&bytes)
    }

    /// Read an ENUMERATED value of `length` content bytes
    pub fn read_enumerated(&mut self, length: u64) -> DumpResult<BerInteger> {
        self.read_integer(length)
    }

    /// Read an OBJECT IDENTIFIER value of `length` content bytes
    pub fn read_oid(&mut self, length: u64) -> DumpResult<ObjectIdentifier> {
        let bytes = self.read_bytes(length)?;
        ObjectIdentifier::from_bytes(&bytes)
    }

    /// Read the content of an octet-like string
    ///
    /// A primitive string is read as is. A constructed string is the
    /// concatenation of its segments, which may be constructed themselves;
    /// an indefinite length is read up to and including its End-Of-Contents
    /// marker.
    ///
    /// # Error Handling
    /// Returns `UnexpectedLength` for a segment longer than the rest of the
    /// stream and `InvalidData` for an indefinite primitive string, segments
    /// overrunning the declared length, or nesting deeper than sixteen levels.
    pub fn read_octets(&mut self, length: BerLength, constructed: bool) -> DumpResult<Vec<u8>> {
        if !constructed {
            let count = Self::definite(length)?;
            return self.read_bytes(count);
        }
        let mut out = Vec::new();
        self.read_segments(length, &mut out, 0)?;
        Ok(out)
    }

    fn read_segments(&mut self, length: BerLength, out: &mut Vec<u8>, depth: usize) -> DumpResult<()> {
        if depth >= MAX_SEGMENT_DEPTH {
            return Err(DumpError::InvalidData(
                "Constructed string nested too deeply".to_string(),
            ));
        }

        let end = match length.definite() {
            Some(n) if n > self.remaining() => return Err(DumpError::EndOfStream),
            Some(n) => Some(self.position + n),
            None => None,
        };
        loop {
            if let Some(end) = end {
                if self.position == end {
                    return Ok(());
                }
                if self.position > end {
                    return Err(DumpError::InvalidData(
                        "String segments overrun the declared length".to_string(),
                    ));
                }
            }

            let (tag, _) = self.read_tag()?;
            let length_offset = self.position;
            let (segment_length, _) = self.read_length()?;
            if let BerLength::Definite(n) = segment_length {
                if n > self.remaining() {
                    return Err(DumpError::UnexpectedLength {
                        offset: length_offset,
                        length: n,
                    });
                }
            }
            log::trace!(
                "string segment {:?} length {} at {}",
                tag,
                segment_length,
                self.position
            );

            if tag.is_universal(universal::END_OF_CONTENTS) && segment_length == BerLength::Definite(0) {
                if end.is_none() {
                    return Ok(());
                }
                return Err(DumpError::InvalidData(
                    "End-Of-Contents inside a definite length string".to_string(),
                ));
            }

            if tag.is_constructed() {
                self.read_segments(segment_length, out, depth + 1)?;
            } else {
                let count = Self::definite(segment_length)?;
                out.extend(self.read_bytes(count)?);
            }
        }
    }

    fn definite(length: BerLength) -> DumpResult<u64> {
        length.definite().ok_or_else(|| {
            DumpError::InvalidData("Indefinite length on a primitive encoding".to_string())
        })
    }
}
