//! Word ordering used both to sort a word list file and to search it.

use std::cmp::Ordering;

/// Ordering rule shared by a word list and its binary search.
///
/// Case-sensitive ordering is plain code point order. Case-insensitive
/// ordering lowercases every character (full Unicode mapping) before
/// comparing, so `"Apple"`, `"apple"` and `"APPLE"` are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordComparator {
    case_sensitive: bool,
}

impl WordComparator {
    pub const CASE_SENSITIVE: Self = Self { case_sensitive: true };
    pub const CASE_INSENSITIVE: Self = Self { case_sensitive: false };

    pub fn new(case_sensitive: bool) -> Self {
        Self { case_sensitive }
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        if self.case_sensitive {
            a.cmp(b)
        } else if a.is_ascii() && b.is_ascii() {
            a.bytes()
                .map(|c| c.to_ascii_lowercase())
                .cmp(b.bytes().map(|c| c.to_ascii_lowercase()))
        } else {
            a.chars()
                .flat_map(char::to_lowercase)
                .cmp(b.chars().flat_map(char::to_lowercase))
        }
    }

    pub fn equals(&self, a: &str, b: &str) -> bool {
        self.compare(a, b) == Ordering::Equal
    }
}

impl Default for WordComparator {
    fn default() -> Self {
        Self::CASE_SENSITIVE
    }
}
