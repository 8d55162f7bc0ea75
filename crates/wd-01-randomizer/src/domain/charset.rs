//! Character sets for string and filename generation
//!
//! A `CharacterSet` is an ordered, deduplicated collection of characters.
//! Construction keeps the first occurrence of each character; `union`
//! returns a strictly ascending set.
//!
//! # Example
//!
//! ```
//! use wd_01_randomizer::{contains, union, CharacterSet};
//!
//! let hex = union(&CharacterSet::from("0123456789"), &CharacterSet::from("ABCDEF"));
//! assert_eq!(hex.len(), 16);
//! assert!(contains(&hex, 'C'));
//! ```

use std::collections::BTreeSet;
use std::fmt;

/// Lowercase ASCII letters.
pub const CHAR_LOWERS: &str = "abcdefghijklmnopqrstuvwxyz";

/// Uppercase ASCII letters.
pub const CHAR_UPPERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// ASCII digits.
pub const CHAR_DIGITS: &str = "0123456789";

/// Symbols considered safe in generated passwords and tokens.
pub const CHAR_SPECIALS: &str = ".-_!@$^*=~|+?";

/// Letters, ascending (uppers sort before lowers).
pub const CHAR_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Digits and letters, ascending.
pub const CHAR_ALPHANUMERICS: &str =
    "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Ordered, deduplicated set of output characters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CharacterSet {
    chars: Vec<char>,
}

impl CharacterSet {
    /// Build a set from any character sequence, keeping first occurrences.
    pub fn new<I: IntoIterator<Item = char>>(chars: I) -> Self {
        let mut seen = BTreeSet::new();
        let chars = chars.into_iter().filter(|c| seen.insert(*c)).collect();
        Self { chars }
    }

    /// `[a-z]`
    pub fn lowers() -> Self {
        Self::from(CHAR_LOWERS)
    }

    /// `[A-Z]`
    pub fn uppers() -> Self {
        Self::from(CHAR_UPPERS)
    }

    /// `[0-9]`
    pub fn digits() -> Self {
        Self::from(CHAR_DIGITS)
    }

    /// Token-safe symbols.
    pub fn specials() -> Self {
        Self::from(CHAR_SPECIALS)
    }

    /// `[A-Za-z]`
    pub fn letters() -> Self {
        Self::from(CHAR_LETTERS)
    }

    /// `[0-9A-Za-z]`, the default alphabet for GUID seeds and filenames.
    pub fn alphanumerics() -> Self {
        Self::from(CHAR_ALPHANUMERICS)
    }

    /// Number of distinct characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns true if the set has no characters.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Character at `index` in set order.
    pub fn get(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// Characters in set order.
    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    /// Iterate characters in set order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}

impl From<&str> for CharacterSet {
    fn from(s: &str) -> Self {
        Self::new(s.chars())
    }
}

impl From<&[char]> for CharacterSet {
    fn from(chars: &[char]) -> Self {
        Self::new(chars.iter().copied())
    }
}

impl FromIterator<char> for CharacterSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl fmt::Display for CharacterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

/// Union of two character sets, deduplicated and sorted ascending.
///
/// Callers must not rely on the original ordering of either input.
pub fn union(a: &CharacterSet, b: &CharacterSet) -> CharacterSet {
    let merged: BTreeSet<char> = a.iter().chain(b.iter()).collect();
    CharacterSet {
        chars: merged.into_iter().collect(),
    }
}

/// Returns true if `c` is a member of `set`.
pub fn contains(set: &CharacterSet, c: char) -> bool {
    set.chars.contains(&c)
}
