//! Missing-letter impact analysis
//!
//! For each letter a-z, counts how many words become playable if that
//! letter were added to the bank.

use crate::core::LetterBank;
use crate::matcher::WordMatcher;
use std::cmp::Reverse;

/// Letters tried as additions to the bank
pub const ALPHABET: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Playable word count with one extra letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingLetterCount {
    pub letter: char,
    pub count: usize,
    /// Words gained over the bank without the extra letter
    pub gain: usize,
}

/// Result of the missing-letter analysis
pub struct MissingLetterReport {
    pub base_count: usize,
    pub entries: Vec<MissingLetterCount>,
}

impl MissingLetterReport {
    /// The most useful letter to add, if any letter adds words
    #[must_use]
    pub fn best(&self) -> Option<&MissingLetterCount> {
        self.entries.first().filter(|entry| entry.gain > 0)
    }
}

/// Count playable words for `bank` plus each letter a-z
///
/// Entries are sorted by count descending, ties broken by letter
/// descending. There is always one entry per letter.
#[must_use]
pub fn missing_letter_counts(matcher: &WordMatcher<'_>, bank: &LetterBank) -> MissingLetterReport {
    let base_count = matcher.count_playable(bank);

    let mut entries: Vec<MissingLetterCount> = ALPHABET
        .iter()
        .map(|&letter| {
            let count = matcher.count_playable(&bank.with_letter(letter));
            MissingLetterCount {
                letter,
                count,
                gain: count.saturating_sub(base_count),
            }
        })
        .collect();

    entries.sort_by_key(|entry| (Reverse(entry.count), Reverse(entry.letter)));

    log::info!(
        "missing-letter analysis for '{}': base {} words, best {:?}",
        bank,
        base_count,
        entries.first().map(|entry| entry.letter)
    );

    MissingLetterReport {
        base_count,
        entries,
    }
}
