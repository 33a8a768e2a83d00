//! Sequential access to every word of a [`WordList`].
//!
//! Iteration goes through [`WordList::get`] for each index, so it shares the
//! offset index, segment resolution and decoding with random access.
//!
//! # Example
//! ```no_run
//! # use wordlist_reader::{MappedWordList, WordList};
//! let words = MappedWordList::open("words.txt").unwrap();
//! for word in words.iter() {
//!     println!("{}", word.unwrap());
//! }
//! ```

use super::list::WordList;
use super::types::error::Result;

/// Forward-only iterator over a word list.
///
/// Created by [`WordList::iter()`]. Calling `iter()` again starts over from
/// the first word. The iterator stops after yielding the first error.
pub struct Words<'a, W: WordList + ?Sized> {
    list: &'a W,
    next: usize,
    end: usize,
    checked: bool,
}

impl<'a, W: WordList + ?Sized> Words<'a, W> {
    pub(super) fn new(list: &'a W) -> Self {
        Self {
            list,
            next: 0,
            end: list.len(),
            checked: false,
        }
    }
}

impl<W: WordList + ?Sized> Iterator for Words<'_, W> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.checked {
            self.checked = true;
            if let Err(e) = self.list.ensure_open() {
                self.next = self.end;
                return Some(Err(e));
            }
        }
        if self.next >= self.end {
            return None;
        }
        let index = self.next;
        match self.list.get(index) {
            Ok(word) => {
                self.next += 1;
                Some(Ok(word))
            }
            Err(e) => {
                self.next = self.end;
                Some(Err(e))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // An unchecked iterator may still yield one error item.
        (0, Some(self.end - self.next + usize::from(!self.checked)))
    }
}
