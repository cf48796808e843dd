//! Letter bank representation
//!
//! A `LetterBank` is the multiset of tiles a player holds. Letters are
//! case-sensitive and each one can be spent at most once per word.

use rustc_hash::FxHashMap;
use std::fmt;

/// A multiset of letters available for forming words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterBank {
    text: String,
    counts: FxHashMap<char, usize>,
}

impl LetterBank {
    /// Create a bank from the letters of a string
    ///
    /// Every character counts, including repeats. No normalisation is applied.
    ///
    /// # Examples
    /// ```
    /// use word_player::core::LetterBank;
    ///
    /// let bank = LetterBank::new("tack");
    /// assert_eq!(bank.len(), 4);
    /// assert_eq!(bank.count_of('t'), 1);
    /// assert_eq!(bank.count_of('z'), 0);
    /// ```
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let mut counts: FxHashMap<char, usize> = FxHashMap::default();
        for ch in text.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        Self { text, counts }
    }

    /// Get the bank as the string it was built from
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Total number of letters, counting repeats
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.values().sum()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// How many copies of `letter` the bank holds
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Distinct letters in order of first appearance
    #[must_use]
    pub fn distinct_letters(&self) -> Vec<char> {
        let mut seen = Vec::with_capacity(self.counts.len());
        for ch in self.text.chars() {
            if !seen.contains(&ch) {
                seen.push(ch);
            }
        }
        seen
    }

    /// Check whether `word` can be spelled from this bank
    ///
    /// Letters are consumed greedily from a working copy of the bank, so a
    /// repeated letter in the word needs a matching repeat in the bank.
    /// Stops at the first letter the bank cannot supply.
    ///
    /// # Examples
    /// ```
    /// use word_player::core::LetterBank;
    ///
    /// let bank = LetterBank::new("tack");
    /// assert!(bank.can_spell("cat"));
    /// assert!(!bank.can_spell("cats"));
    /// assert!(!bank.can_spell("tact"));
    /// ```
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        let mut remaining = self.counts.clone();
        for ch in word.chars() {
            match remaining.get_mut(&ch) {
                Some(count) if *count > 0 => *count -= 1,
                _ => return false,
            }
        }
        true
    }

    /// A new bank holding one extra copy of `letter`
    #[must_use]
    pub fn with_letter(&self, letter: char) -> Self {
        let mut text = String::with_capacity(self.text.len() + letter.len_utf8());
        text.push_str(&self.text);
        text.push(letter);

        let mut counts = self.counts.clone();
        *counts.entry(letter).or_insert(0) += 1;

        Self { text, counts }
    }
}

impl fmt::Display for LetterBank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bank_counts_repeats() {
        let bank = LetterBank::new("banana");
        assert_eq!(bank.len(), 6);
        assert_eq!(bank.count_of('a'), 3);
        assert_eq!(bank.count_of('n'), 2);
        assert_eq!(bank.count_of('b'), 1);
    }

    #[test]
    fn bank_is_case_sensitive() {
        let bank = LetterBank::new("Aa");
        assert_eq!(bank.count_of('A'), 1);
        assert_eq!(bank.count_of('a'), 1);
        assert!(bank.can_spell("aA"));
        assert!(!bank.can_spell("aa"));
    }

    #[test]
    fn empty_bank() {
        let bank = LetterBank::new("");
        assert!(bank.is_empty());
        assert_eq!(bank.len(), 0);
        assert!(bank.can_spell(""));
        assert!(!bank.can_spell("a"));
    }

    #[test]
    fn can_spell_respects_multiplicity() {
        let bank = LetterBank::new("tack");
        assert!(bank.can_spell("tack"));
        assert!(bank.can_spell("act"));
        assert!(!bank.can_spell("tacky")); // No 'y'
        assert!(!bank.can_spell("attack")); // Only one 't'
    }

    #[test]
    fn can_spell_uses_repeats_in_bank() {
        let bank = LetterBank::new("aabt");
        assert!(bank.can_spell("abat"));
        assert!(!bank.can_spell("abaa"));
    }

    #[test]
    fn can_spell_does_not_consume_bank() {
        let bank = LetterBank::new("cat");
        assert!(bank.can_spell("cat"));
        assert!(bank.can_spell("cat"));
        assert_eq!(bank.count_of('c'), 1);
    }

    #[test]
    fn distinct_letters_first_appearance_order() {
        let bank = LetterBank::new("banana");
        assert_eq!(bank.distinct_letters(), vec!['b', 'a', 'n']);
    }

    #[test]
    fn with_letter_adds_one_copy() {
        let bank = LetterBank::new("tack");
        let bigger = bank.with_letter('y');

        assert_eq!(bigger.text(), "tacky");
        assert_eq!(bigger.count_of('y'), 1);
        assert!(bigger.can_spell("tacky"));

        // Original untouched
        assert_eq!(bank.count_of('y'), 0);
        assert_eq!(bank.text(), "tack");
    }

    #[test]
    fn with_letter_stacks_on_existing() {
        let bank = LetterBank::new("tack").with_letter('t');
        assert_eq!(bank.count_of('t'), 2);
        assert!(bank.can_spell("tact"));
    }

    #[test]
    fn bank_display() {
        let bank = LetterBank::new("tack");
        assert_eq!(format!("{bank}"), "tack");
    }
}
