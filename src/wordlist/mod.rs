//! Core word list module
//!
//! Layers, from the bytes up:
//!
//! - [`line`]: terminator detection (`\n`, `\r`, `\r\n`) over a [`ByteSource`]
//! - [`segment`]: fixed-size read-only mappings of the file
//! - [`offset_index`]: sparse line-number to byte-offset breakpoints
//! - [`reader`]: [`MappedWordList`], tying the three together
//! - [`search`]: binary search over any [`WordList`]

pub mod compare;
pub mod iter;
pub mod line;
pub mod list;
pub mod offset_index;
pub mod reader;
pub mod search;
pub mod segment;
pub mod types;
pub mod utils;

pub use compare::WordComparator;
pub use iter::Words;
pub use line::ByteSource;
pub use list::WordList;
pub use reader::MappedWordList;
pub use types::error::{WordListError, Result};
pub use types::models::{Breakpoint, LineRecord, WordListConfig, DEFAULT_CACHE_PERCENT, DEFAULT_SEGMENT_SIZE};
