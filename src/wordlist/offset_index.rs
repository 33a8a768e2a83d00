//! Sparse line-number to byte-offset index.
//!
//! Built by one forward scan that also counts the lines. Every
//! `ceil(100 / cache_percent)`-th line start is kept as a [`Breakpoint`];
//! any other line is reached by scanning forward from the nearest
//! breakpoint below it, so lookup cost is bounded by the stride rather than
//! by the file size.

use std::io;

use log::{debug, trace};

use super::line::{self, ByteSource};
use super::types::error::{WordListError, Result};
use super::types::models::Breakpoint;

#[derive(Debug, Clone)]
pub struct OffsetIndex {
    breakpoints: Vec<Breakpoint>,
    stride: Option<usize>,
    line_count: usize,
}

impl OffsetIndex {
    /// Number of lines between two cached breakpoints.
    ///
    /// `None` for a cache percentage of zero, where only line 0 is cached.
    pub fn stride_for(cache_percent: u8) -> Result<Option<usize>> {
        match cache_percent {
            0 => Ok(None),
            1..=100 => Ok(Some(100usize.div_ceil(cache_percent as usize))),
            _ => Err(WordListError::InvalidCachePercent(cache_percent)),
        }
    }

    /// Scan `source` once, counting lines and caching breakpoints.
    pub fn build<S: ByteSource + ?Sized>(source: &S, cache_percent: u8) -> Result<Self> {
        let stride = Self::stride_for(cache_percent)?;
        debug!("Building offset index: cache_percent={}, stride={:?}", cache_percent, stride);

        let mut breakpoints = Vec::new();
        let mut line_count = 0usize;
        for record in line::lines(source) {
            let record = record?;
            let keep = match stride {
                Some(stride) => line_count % stride == 0,
                None => line_count == 0,
            };
            if keep {
                breakpoints.push(Breakpoint { line: line_count, offset: record.start });
            }
            line_count += 1;
        }

        debug!("Offset index built: {} lines, {} breakpoints", line_count, breakpoints.len());
        Ok(Self {
            breakpoints,
            stride,
            line_count,
        })
    }

    /// Total number of lines seen during the build scan.
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    pub fn breakpoints(&self) -> &[Breakpoint] {
        &self.breakpoints
    }

    pub fn stride(&self) -> Option<usize> {
        self.stride
    }

    /// The greatest cached breakpoint at or before `line`.
    pub fn nearest(&self, line: usize) -> Option<Breakpoint> {
        let after = self.breakpoints.partition_point(|bp| bp.line <= line);
        after.checked_sub(1).map(|i| self.breakpoints[i])
    }

    /// Byte offset where `line` starts.
    pub fn locate<S: ByteSource + ?Sized>(&self, source: &S, line: usize) -> Result<u64> {
        if line >= self.line_count {
            return Err(WordListError::IndexOutOfRange {
                index: line,
                len: self.line_count,
            });
        }
        let start = self
            .nearest(line)
            .unwrap_or(Breakpoint { line: 0, offset: 0 });

        let mut offset = start.offset;
        for current in start.line..line {
            let record = line::scan_line(source, offset)?;
            if record.terminator == 0 {
                // The index promised more lines than the bytes now hold.
                return Err(WordListError::Io(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    format!("line {} ended at byte {} before reaching line {}", current, record.end, line),
                )));
            }
            offset = record.next_start();
        }
        trace!("Line {} at byte {} (scanned {} lines from breakpoint {})", line, offset, line - start.line, start.line);
        Ok(offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlist::line::tests::Chunked;

    fn numbered(count: usize, terminator: &str) -> Vec<u8> {
        (0..count)
            .map(|i| format!("word{:04}{}", i, terminator))
            .collect::<String>()
            .into_bytes()
    }

    #[test]
    fn stride_follows_percentage() {
        assert_eq!(OffsetIndex::stride_for(0).unwrap(), None);
        assert_eq!(OffsetIndex::stride_for(5).unwrap(), Some(20));
        assert_eq!(OffsetIndex::stride_for(30).unwrap(), Some(4));
        assert_eq!(OffsetIndex::stride_for(50).unwrap(), Some(2));
        assert_eq!(OffsetIndex::stride_for(100).unwrap(), Some(1));
        assert!(matches!(
            OffsetIndex::stride_for(101),
            Err(WordListError::InvalidCachePercent(101))
        ));
    }

    #[test]
    fn breakpoint_counts() {
        let data = numbered(100, "\n");
        let source = &data[..];
        assert_eq!(OffsetIndex::build(source, 0).unwrap().breakpoints().len(), 1);
        assert_eq!(OffsetIndex::build(source, 10).unwrap().breakpoints().len(), 10);
        assert_eq!(OffsetIndex::build(source, 50).unwrap().breakpoints().len(), 50);
        assert_eq!(OffsetIndex::build(source, 100).unwrap().breakpoints().len(), 100);
    }

    #[test]
    fn breakpoints_are_monotonic() {
        let data = numbered(57, "\r\n");
        let index = OffsetIndex::build(&data[..], 25).unwrap();
        for pair in index.breakpoints().windows(2) {
            assert!(pair[0].line < pair[1].line);
            assert!(pair[0].offset < pair[1].offset);
        }
    }

    #[test]
    fn every_cache_percent_locates_the_same_offsets() {
        let data = numbered(41, "\n");
        let source = &data[..];
        let dense = OffsetIndex::build(source, 100).unwrap();
        for percent in [0u8, 1, 7, 50, 99] {
            let index = OffsetIndex::build(source, percent).unwrap();
            assert_eq!(index.line_count(), 41);
            for line in 0..41 {
                assert_eq!(
                    index.locate(source, line).unwrap(),
                    dense.locate(source, line).unwrap(),
                    "line {} at {}%",
                    line,
                    percent
                );
            }
        }
        assert_eq!(dense.locate(source, 3).unwrap(), 27);
    }

    #[test]
    fn locate_over_chunked_source() {
        let data = numbered(30, "\r\n");
        let flat = OffsetIndex::build(&data[..], 100).unwrap();
        let chunked = Chunked::new(&data, 5);
        let index = OffsetIndex::build(&chunked, 10).unwrap();
        assert_eq!(index.line_count(), 30);
        for line in 0..30 {
            assert_eq!(index.locate(&chunked, line).unwrap(), flat.locate(&data[..], line).unwrap());
        }
    }

    #[test]
    fn nearest_breakpoint() {
        let data = numbered(10, "\n");
        let index = OffsetIndex::build(&data[..], 25).unwrap();
        assert_eq!(index.stride(), Some(4));
        assert_eq!(index.nearest(0).unwrap().line, 0);
        assert_eq!(index.nearest(3).unwrap().line, 0);
        assert_eq!(index.nearest(4).unwrap().line, 4);
        assert_eq!(index.nearest(9).unwrap().line, 8);
    }

    #[test]
    fn out_of_range_and_empty() {
        let data = numbered(3, "\n");
        let index = OffsetIndex::build(&data[..], 100).unwrap();
        assert!(matches!(
            index.locate(&data[..], 3),
            Err(WordListError::IndexOutOfRange { index: 3, len: 3 })
        ));

        let empty = OffsetIndex::build(&b""[..], 100).unwrap();
        assert_eq!(empty.line_count(), 0);
        assert!(empty.breakpoints().is_empty());
        assert!(empty.nearest(0).is_none());
    }
}
