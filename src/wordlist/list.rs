//! The read-only contract word list consumers program against.

use super::compare::WordComparator;
use super::iter::Words;
use super::search;
use super::types::error::Result;

/// An ordered, randomly indexable sequence of words.
///
/// Implementations must hold their words sorted according to
/// [`comparator()`](WordList::comparator); searches rely on it and do not
/// verify it.
pub trait WordList {
    /// Number of words.
    fn len(&self) -> usize;

    /// The word at `index`, failing with `IndexOutOfRange` past the end.
    fn get(&self, index: usize) -> Result<String>;

    /// The ordering the words are sorted by.
    fn comparator(&self) -> WordComparator;

    /// Fails when the list can no longer be read, e.g. after it was closed.
    ///
    /// Searches and iteration call this up front so the failure surfaces even
    /// when they would not issue a single `get`.
    fn ensure_open(&self) -> Result<()> {
        Ok(())
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A fresh front-to-back iterator over every word.
    fn iter(&self) -> Words<'_, Self> {
        Words::new(self)
    }

    /// Whether `word` is present under [`comparator()`](WordList::comparator).
    fn contains(&self, word: &str) -> Result<bool> {
        Ok(search::binary_search(self, word)?.is_some())
    }

    /// Index of `word`, or `None` when absent.
    ///
    /// With duplicate entries any matching index may be returned.
    fn index_of(&self, word: &str) -> Result<Option<usize>> {
        search::binary_search(self, word)
    }
}
