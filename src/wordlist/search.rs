//! Comparator-driven binary search over a [`WordList`].

use std::cmp::Ordering;

use log::trace;

use super::list::WordList;
use super::types::error::Result;

/// Find `word` in `list` using the list's own comparator.
///
/// Each step costs one `get`. When `word` occurs more than once the index
/// of whichever copy a midpoint lands on first is returned.
pub fn binary_search<W: WordList + ?Sized>(list: &W, word: &str) -> Result<Option<usize>> {
    list.ensure_open()?;
    let comparator = list.comparator();
    let mut low = 0usize;
    let mut high = list.len();
    while low < high {
        let mid = low + (high - low) / 2;
        let candidate = list.get(mid)?;
        let ordering = comparator.compare(&candidate, word);
        trace!("Search [{}..{}) mid={} {:?} -> {:?}", low, high, mid, candidate, ordering);
        match ordering {
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
            Ordering::Equal => return Ok(Some(mid)),
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlist::compare::WordComparator;
    use crate::wordlist::types::error::WordListError;
    use std::cell::Cell;

    /// Vector-backed list that counts how often it is read.
    struct Counted {
        words: Vec<&'static str>,
        comparator: WordComparator,
        reads: Cell<usize>,
        closed: Cell<bool>,
    }

    impl Counted {
        fn new(words: Vec<&'static str>, case_sensitive: bool) -> Self {
            Self {
                words,
                comparator: WordComparator::new(case_sensitive),
                reads: Cell::new(0),
                closed: Cell::new(false),
            }
        }
    }

    impl WordList for Counted {
        fn len(&self) -> usize {
            self.words.len()
        }

        fn get(&self, index: usize) -> Result<String> {
            self.reads.set(self.reads.get() + 1);
            self.words
                .get(index)
                .map(|w| w.to_string())
                .ok_or(WordListError::IndexOutOfRange { index, len: self.words.len() })
        }

        fn comparator(&self) -> WordComparator {
            self.comparator
        }

        fn ensure_open(&self) -> Result<()> {
            if self.closed.get() {
                return Err(WordListError::Closed);
            }
            Ok(())
        }
    }

    #[test]
    fn finds_every_present_word() {
        let list = Counted::new(vec!["ant", "bee", "cat", "dog", "eel", "fox", "gnu"], true);
        for (i, word) in list.words.clone().iter().enumerate() {
            assert_eq!(binary_search(&list, word).unwrap(), Some(i));
        }
    }

    #[test]
    fn rejects_absent_words_at_both_ends() {
        let list = Counted::new(vec!["bee", "cat", "dog"], true);
        assert_eq!(binary_search(&list, "aardvark").unwrap(), None);
        assert_eq!(binary_search(&list, "cow").unwrap(), None);
        assert_eq!(binary_search(&list, "zebra").unwrap(), None);
        assert_eq!(binary_search(&list, "Bee").unwrap(), None);
    }

    #[test]
    fn empty_list_is_never_read() {
        let list = Counted::new(Vec::new(), true);
        assert_eq!(binary_search(&list, "anything").unwrap(), None);
        assert_eq!(list.reads.get(), 0);
    }

    #[test]
    fn closed_list_fails_before_any_read() {
        let list = Counted::new(Vec::new(), true);
        list.closed.set(true);
        assert!(matches!(binary_search(&list, "anything"), Err(WordListError::Closed)));
        assert!(matches!(list.contains("anything"), Err(WordListError::Closed)));
        assert!(matches!(list.iter().next(), Some(Err(WordListError::Closed))));
        assert_eq!(list.reads.get(), 0);
    }

    #[test]
    fn reads_are_logarithmic() {
        let words: Vec<&'static str> = (0..1024)
            .map(|i| &*Box::leak(format!("w{:05}", i).into_boxed_str()))
            .collect();
        let list = Counted::new(words, true);
        assert_eq!(binary_search(&list, "w00777").unwrap(), Some(777));
        assert!(list.reads.get() <= 11, "{} reads", list.reads.get());
    }

    #[test]
    fn case_insensitive_search() {
        let list = Counted::new(vec!["Alpha", "bravo", "CHARLIE", "delta"], false);
        assert_eq!(binary_search(&list, "charlie").unwrap(), Some(2));
        assert_eq!(binary_search(&list, "ALPHA").unwrap(), Some(0));
        assert!(list.contains("Delta").unwrap());
        assert!(!list.contains("echo").unwrap());
    }

    #[test]
    fn duplicates_return_some_matching_index() {
        let list = Counted::new(vec!["a", "b", "b", "b", "c"], true);
        let index = binary_search(&list, "b").unwrap().unwrap();
        assert_eq!(list.get(index).unwrap(), "b");
    }
}
