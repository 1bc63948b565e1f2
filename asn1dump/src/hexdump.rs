//! Raw hex dump, bypassing the TLV walker

use std::io::{self, Read, Write};

const BYTES_PER_LINE: usize = 16;

/// Print `input` as hex, sixteen bytes per line
///
/// ```text
/// 00000000  30 06 02 01 FF 01 01 FF                            0.......
/// ```
///
/// Each line has the offset (counted from `start`), the bytes with an extra
/// space after the eighth, and an ASCII column in which everything but
/// graphic characters is a dot.
///
/// # Returns
/// Number of bytes dumped.
pub fn hexdump<R: Read, W: Write>(mut input: R, out: &mut W, start: u64) -> io::Result<u64> {
    let mut offset = start;
    let mut chunk = Vec::with_capacity(BYTES_PER_LINE);

    loop {
        chunk.clear();
        (&mut input)
            .take(BYTES_PER_LINE as u64)
            .read_to_end(&mut chunk)?;
        if chunk.is_empty() {
            break;
        }

        write!(out, "{:08X}  ", offset)?;
        for i in 0..BYTES_PER_LINE {
            match chunk.get(i) {
                Some(byte) => write!(out, "{:02X} ", byte)?,
                None => out.write_all(b"   ")?,
            }
            if i == 7 {
                out.write_all(b" ")?;
            }
        }

        let ascii: Vec<u8> = chunk
            .iter()
            .map(|&b| if b.is_ascii_graphic() { b } else { b'.' })
            .collect();
        let split = ascii.len().min(8);
        out.write_all(b"  ")?;
        out.write_all(&ascii[..split])?;
        out.write_all(b" ")?;
        out.write_all(&ascii[split..])?;
        out.write_all(b"\n")?;

        offset += chunk.len() as u64;
    }

    out.flush()?;
    Ok(offset - start)
}
