//! Line boundary detection over segmented byte storage.
//!
//! A line ends at `\n`, `\r` or `\r\n`, decided independently for every
//! line so files mixing terminator styles are read correctly. The bytes
//! being scanned may be split across several contiguous regions (mapped
//! segments); [`ByteSource`] hides those splits from the scanner.

use std::borrow::Cow;
use std::io;

use super::types::error::{WordListError, Result};
use super::types::models::LineRecord;

/// Random access to a byte sequence stored as one or more contiguous regions.
pub trait ByteSource {
    /// Total number of bytes.
    fn byte_len(&self) -> u64;

    /// Bytes from `offset` to the end of the region that contains it.
    ///
    /// Returns an empty slice at or beyond `byte_len()`.
    fn window(&self, offset: u64) -> Result<&[u8]>;

    /// The bytes in `start..end` as one contiguous view.
    ///
    /// Borrowed when the range sits inside a single region, copied when it
    /// straddles a region boundary.
    fn slice(&self, start: u64, end: u64) -> Result<Cow<'_, [u8]>> {
        let wanted = (end - start) as usize;
        let first = self.window(start)?;
        if first.len() >= wanted {
            return Ok(Cow::Borrowed(&first[..wanted]));
        }

        let mut joined = Vec::with_capacity(wanted);
        let mut offset = start;
        while offset < end {
            let window = self.window(offset)?;
            if window.is_empty() {
                return Err(WordListError::Io(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    format!("byte range {}..{} exceeds source length {}", start, end, self.byte_len()),
                )));
            }
            let take = window.len().min((end - offset) as usize);
            joined.extend_from_slice(&window[..take]);
            offset += take as u64;
        }
        Ok(Cow::Owned(joined))
    }
}

impl ByteSource for [u8] {
    fn byte_len(&self) -> u64 {
        self.len() as u64
    }

    fn window(&self, offset: u64) -> Result<&[u8]> {
        Ok(usize::try_from(offset)
            .ok()
            .and_then(|offset| self.get(offset..))
            .unwrap_or(&[]))
    }
}

fn is_terminator(byte: u8) -> bool {
    byte == b'\n' || byte == b'\r'
}

/// Find the extent of the line starting at `start`.
///
/// `start` must be a line start. At end of input the returned record is
/// empty with a zero-width terminator.
pub fn scan_line<S: ByteSource + ?Sized>(source: &S, start: u64) -> Result<LineRecord> {
    let mut offset = start;
    loop {
        let window = source.window(offset)?;
        if window.is_empty() {
            return Ok(LineRecord { start, end: offset, terminator: 0 });
        }

        if let Some(pos) = window.iter().position(|&b| is_terminator(b)) {
            let end = offset + pos as u64;
            let terminator = if window[pos] == b'\r' {
                // The LF of a CRLF pair may live in the next region.
                let next = match window.get(pos + 1) {
                    Some(&byte) => Some(byte),
                    None => source.window(end + 1)?.first().copied(),
                };
                if next == Some(b'\n') { 2 } else { 1 }
            } else {
                1
            };
            return Ok(LineRecord { start, end, terminator });
        }

        offset += window.len() as u64;
    }
}

/// Locate the line starting at `start` and return its bytes, terminator stripped.
pub fn read_line<S: ByteSource + ?Sized>(source: &S, start: u64) -> Result<(LineRecord, Cow<'_, [u8]>)> {
    let record = scan_line(source, start)?;
    let bytes = source.slice(record.start, record.end)?;
    Ok((record, bytes))
}

/// Returns an iterator over every line in `source`, front to back.
pub fn lines<S: ByteSource + ?Sized>(source: &S) -> Lines<'_, S> {
    Lines { source, offset: 0, done: false }
}

/// Forward scan yielding one [`LineRecord`] per line.
///
/// A terminator at the very end of the input does not produce a trailing
/// empty line.
pub struct Lines<'a, S: ByteSource + ?Sized> {
    source: &'a S,
    offset: u64,
    done: bool,
}

impl<S: ByteSource + ?Sized> Iterator for Lines<'_, S> {
    type Item = Result<LineRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.offset >= self.source.byte_len() {
            return None;
        }
        match scan_line(self.source, self.offset) {
            Ok(record) => {
                self.offset = record.next_start();
                if record.terminator == 0 {
                    self.done = true;
                }
                Some(Ok(record))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
