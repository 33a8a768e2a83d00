//! Read-only memory mapping of a word list file in fixed-size segments.
//!
//! A single mapping may not exceed a platform-dependent ceiling, so the
//! file is covered by consecutive segments of at most `segment_size`
//! bytes. All segments are mapped when the map is built and stay mapped
//! until it is dropped; lookups therefore never mutate shared state.

use std::fs::File;
use std::io;

use log::{debug, trace};
use memmap2::{Mmap, MmapOptions};

use super::line::ByteSource;
use super::types::error::{WordListError, Result};

/// One contiguous mapped view `[start, end)` of the file.
#[derive(Debug)]
pub struct Segment {
    start: u64,
    map: Mmap,
}

impl Segment {
    /// Absolute file offset of the first mapped byte.
    pub fn start(&self) -> u64 {
        self.start
    }

    /// Absolute file offset one past the last mapped byte.
    pub fn end(&self) -> u64 {
        self.start + self.map.len() as u64
    }

    pub fn bytes(&self) -> &[u8] {
        &self.map
    }
}

/// Ordered, non-overlapping segments covering `[0, file_len)`.
#[derive(Debug)]
pub struct SegmentMap {
    segments: Vec<Segment>,
    file_len: u64,
}

impl SegmentMap {
    /// Map the first `file_len` bytes of `file`.
    ///
    /// An empty file yields a map without segments.
    pub fn map(file: &File, file_len: u64, segment_size: u64) -> Result<Self> {
        if segment_size == 0 {
            return Err(WordListError::InvalidSegmentSize(segment_size));
        }
        // Each segment length must fit a single mapping on this target.
        usize::try_from(segment_size).map_err(|_| WordListError::InvalidSegmentSize(segment_size))?;

        let mut segments = Vec::with_capacity(file_len.div_ceil(segment_size) as usize);
        let mut start = 0u64;
        while start < file_len {
            let len = segment_size.min(file_len - start) as usize;
            debug!("Mapping segment {}: bytes {}..{}", segments.len(), start, start + len as u64);
            // SAFETY: the mapping is read-only. Shrinking of the file by another
            // process is checked by the word list before every read.
            let map = unsafe { MmapOptions::new().offset(start).len(len).map(file)? };
            segments.push(Segment { start, map });
            start += len as u64;
        }

        Ok(Self { segments, file_len })
    }

    /// Resolve an absolute file offset to its segment and the offset within it.
    pub fn resolve(&self, offset: u64) -> Result<(&Segment, usize)> {
        if offset >= self.file_len {
            return Err(WordListError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("offset {} beyond mapped length {}", offset, self.file_len),
            )));
        }
        let index = self.segments.partition_point(|segment| segment.start <= offset) - 1;
        let segment = &self.segments[index];
        trace!("Offset {} resolved to segment {} (+{})", offset, index, offset - segment.start);
        Ok((segment, (offset - segment.start) as usize))
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn file_len(&self) -> u64 {
        self.file_len
    }
}

impl ByteSource for SegmentMap {
    fn byte_len(&self) -> u64 {
        self.file_len
    }

    fn window(&self, offset: u64) -> Result<&[u8]> {
        if offset >= self.file_len {
            return Ok(&[] as &[u8]);
        }
        let (segment, local) = self.resolve(offset)?;
        Ok(&segment.bytes()[local..])
    }
}
