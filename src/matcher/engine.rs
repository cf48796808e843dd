//! Main word matcher interface

use crate::core::{LetterBank, LetterFrequencies};
use std::cell::OnceCell;

/// Word matcher over a loaded dictionary
///
/// Holds the word list and the default minimum word length. The letter
/// frequency table is only built the first time an analysis asks for it.
pub struct WordMatcher<'a> {
    words: &'a [String],
    min_length: usize,
    frequencies: OnceCell<LetterFrequencies>,
}

impl<'a> WordMatcher<'a> {
    /// Create a new matcher over a word list
    ///
    /// # Parameters
    /// - `words`: Dictionary in load order (duplicates allowed)
    /// - `min_length`: Shortest word length reported by default
    #[must_use]
    pub const fn new(words: &'a [String], min_length: usize) -> Self {
        Self {
            words,
            min_length,
            frequencies: OnceCell::new(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn min_length(&self) -> usize {
        self.min_length
    }

    /// Check if `word` can be formed from `bank`
    ///
    /// True iff the letters of `word` are a sub-multiset of the bank.
    #[inline]
    #[must_use]
    pub fn is_valid_word(word: &str, bank: &LetterBank) -> bool {
        bank.can_spell(word)
    }

    /// Words playable from `bank` using the matcher's minimum length
    ///
    /// Returns words sorted alphabetically ascending.
    ///
    /// # Examples
    /// ```
    /// use word_player::core::LetterBank;
    /// use word_player::matcher::WordMatcher;
    /// use word_player::wordlists::loader::words_from_slice;
    ///
    /// let words = words_from_slice(&["cat", "cats", "act", "tack", "tacky"]);
    /// let matcher = WordMatcher::new(&words, 3);
    ///
    /// let playable = matcher.playable_words(&LetterBank::new("tack"));
    /// assert_eq!(playable, vec!["act", "cat", "tack"]);
    /// ```
    #[must_use]
    pub fn playable_words(&self, bank: &LetterBank) -> Vec<&'a str> {
        self.playable_words_with_min_length(bank, self.min_length)
    }

    /// Words playable from `bank` that are at least `min_length` long
    ///
    /// Length is measured in characters. Recomputed on every call.
    #[must_use]
    pub fn playable_words_with_min_length(
        &self,
        bank: &LetterBank,
        min_length: usize,
    ) -> Vec<&'a str> {
        let mut playable: Vec<&'a str> = self
            .words
            .iter()
            .map(String::as_str)
            .filter(|word| word.chars().count() >= min_length && Self::is_valid_word(word, bank))
            .collect();
        playable.sort_unstable();
        playable
    }

    /// Count playable words using the matcher's minimum length
    #[must_use]
    pub fn count_playable(&self, bank: &LetterBank) -> usize {
        self.count_playable_with_min_length(bank, self.min_length)
    }

    /// Count playable words at least `min_length` long
    #[must_use]
    pub fn count_playable_with_min_length(&self, bank: &LetterBank, min_length: usize) -> usize {
        self.playable_words_with_min_length(bank, min_length).len()
    }

    /// Letter frequencies across the whole dictionary
    ///
    /// Built on first call and cached for the matcher's lifetime.
    #[must_use]
    pub fn letter_frequencies(&self) -> &LetterFrequencies {
        self.frequencies.get_or_init(|| {
            let frequencies =
                LetterFrequencies::from_words(self.words.iter().map(String::as_str));
            log::debug!(
                "built letter frequency table: {} distinct letters from {} words",
                frequencies.len(),
                self.words.len()
            );
            frequencies
        })
    }
}
