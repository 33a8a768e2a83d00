//! # wordlist-reader
//!
//! Binary-searchable access to large, pre-sorted word list files
//! (one word per line) without loading them into memory.
//!
//! The file is memory-mapped in fixed-size segments, line starts are
//! cached in a sparse offset index, and membership queries run a binary
//! search through the [`WordList`] trait.
//!
//! ```no_run
//! use wordlist_reader::{MappedWordList, WordList, WordListConfig};
//!
//! let config = WordListConfig::default().case_sensitive(false).cache_percent(10);
//! let words = MappedWordList::open_with("dictionary.txt", config)?;
//! assert!(words.contains("password")?);
//! words.close()?;
//! # Ok::<(), wordlist_reader::WordListError>(())
//! ```
pub mod wordlist;

// Re-export the main types for convenience
pub use wordlist::{
    MappedWordList,
    WordComparator,
    WordList,
    WordListConfig,
    WordListError,
    Result,
    Words,
    utils::parse_encoding,
};
