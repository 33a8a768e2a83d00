//! Custom error types for the wordlist-reader crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum WordListError {
    /// An error originating from I/O operations (open, stat, map).
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// The cache percentage lies outside `[0, 100]`.
    #[error("Invalid cache percent: {0}. Must be between 0 and 100.")]
    InvalidCachePercent(u8),

    /// A segment size of zero cannot cover any part of the file.
    #[error("Invalid segment size: {0}. Must be greater than zero.")]
    InvalidSegmentSize(u64),

    /// The encoding cannot be scanned for single-byte line terminators.
    #[error("Unsupported encoding: {0}. Only ASCII-compatible encodings can be line-scanned.")]
    UnsupportedEncoding(String),

    /// The backing file became shorter than it was when the list was built.
    #[error("Word list file truncated: expected {expected} bytes, found {actual} bytes")]
    Truncated { expected: u64, actual: u64 },

    /// A word index outside `[0, len)` was requested.
    #[error("Index {index} out of range for word list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// The bytes of a line are not valid under the configured encoding.
    #[error("Line {index} is not valid {encoding}")]
    Decode { index: usize, encoding: &'static str },

    /// The word list was used after `close()`.
    #[error("Word list has been closed")]
    Closed,

    /// A lock was poisoned, indicating a panic in another thread holding the lock.
    #[error("A lock was poisoned, indicating a panic in another thread holding the lock.")]
    LockPoisoned,
}

/// A convenience `Result` type alias using the crate's `WordListError` type.
pub type Result<T> = std::result::Result<T, WordListError>;
