//! Core data structures for word list components.
//!
//! This module defines the plain types shared across the crate:
//! - Line locations produced by the line reader
//! - Offset index breakpoints
//! - Construction settings

use encoding_rs::Encoding;
use super::error::{WordListError, Result};

/// Percentage of line offsets retained when no explicit value is given.
pub const DEFAULT_CACHE_PERCENT: u8 = 5;

/// Largest byte count placed in a single mapped segment.
///
/// Kept well under the 2 GiB ceiling some platforms impose on one mapping.
pub const DEFAULT_SEGMENT_SIZE: u64 = 1 << 30;

/// Location of a single line within the backing file.
///
/// `start..end` covers the word bytes only; the terminator that follows
/// is `terminator` bytes wide (0 at end of file, 1 for `\n` or `\r`,
/// 2 for `\r\n`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRecord {
    pub start: u64,
    pub end: u64,
    pub terminator: u8,
}

impl LineRecord {
    /// Byte offset where the following line begins.
    pub fn next_start(&self) -> u64 {
        self.end + u64::from(self.terminator)
    }
}

/// A cached `(line, offset)` pair in the offset index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoint {
    /// Zero-based line number.
    pub line: usize,
    /// Absolute byte offset where that line starts.
    pub offset: u64,
}

/// Settings applied when a word list is opened.
///
/// Built with chained setters:
/// ```
/// # use wordlist_reader::WordListConfig;
/// let config = WordListConfig::default()
///     .case_sensitive(false)
///     .cache_percent(50);
/// assert_eq!(config.cache_percent, 50);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct WordListConfig {
    /// Whether the file is sorted (and searched) case-sensitively.
    pub case_sensitive: bool,
    /// Share of line offsets kept in memory, `0..=100`.
    pub cache_percent: u8,
    /// Text encoding of the file. Must be ASCII-compatible.
    pub encoding: &'static Encoding,
    /// Maximum bytes per mapped segment.
    pub segment_size: u64,
}

impl Default for WordListConfig {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            cache_percent: DEFAULT_CACHE_PERCENT,
            encoding: encoding_rs::UTF_8,
            segment_size: DEFAULT_SEGMENT_SIZE,
        }
    }
}

impl WordListConfig {
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn cache_percent(mut self, cache_percent: u8) -> Self {
        self.cache_percent = cache_percent;
        self
    }

    pub fn encoding(mut self, encoding: &'static Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn segment_size(mut self, segment_size: u64) -> Self {
        self.segment_size = segment_size;
        self
    }

    /// Checks every setting without touching the file system.
    pub fn validate(&self) -> Result<()> {
        if self.cache_percent > 100 {
            return Err(WordListError::InvalidCachePercent(self.cache_percent));
        }
        if self.segment_size == 0 {
            return Err(WordListError::InvalidSegmentSize(self.segment_size));
        }
        // Terminators are located by scanning for raw 0x0A / 0x0D bytes.
        if !self.encoding.is_ascii_compatible() {
            return Err(WordListError::UnsupportedEncoding(self.encoding.name().to_string()));
        }
        Ok(())
    }
}
