//! Letter frequency table
//!
//! Counts how often each character occurs across a whole word list. Used as
//! a rough estimate of how likely a tile is to be "real".

use rustc_hash::FxHashMap;

/// Occurrence counts of every character across a word list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterFrequencies {
    counts: FxHashMap<char, usize>,
}

impl LetterFrequencies {
    /// Build the table from a sequence of words
    ///
    /// # Examples
    /// ```
    /// use word_player::core::LetterFrequencies;
    ///
    /// let freq = LetterFrequencies::from_words(["cat", "act", "tack"]);
    /// assert_eq!(freq.get('c'), 3);
    /// assert_eq!(freq.get('k'), 1);
    /// assert_eq!(freq.get('z'), 0);
    /// ```
    #[must_use]
    pub fn from_words<'a, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut counts: FxHashMap<char, usize> = FxHashMap::default();
        for word in words {
            for ch in word.chars() {
                *counts.entry(ch).or_insert(0) += 1;
            }
        }
        Self { counts }
    }

    /// Occurrences of `letter`, zero if never seen
    #[inline]
    #[must_use]
    pub fn get(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Sum of the frequencies of the given letters
    #[must_use]
    pub fn total_for<I>(&self, letters: I) -> usize
    where
        I: IntoIterator<Item = char>,
    {
        letters.into_iter().map(|ch| self.get(ch)).sum()
    }

    /// Number of distinct characters seen
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
