//! Play command
//!
//! Finds every playable word for a bank and orders it for display.

use crate::core::LetterBank;
use crate::matcher::{SortOrder, WordMatcher};

/// Result of playing a letter bank
pub struct PlayResult {
    pub bank: String,
    pub min_length: usize,
    pub order: SortOrder,
    pub words: Vec<String>,
}

impl PlayResult {
    #[must_use]
    pub fn count(&self) -> usize {
        self.words.len()
    }
}

/// Find all playable words for `bank`, ordered by `order`
///
/// Words are matched alphabetically first, so the length ordering keeps
/// alphabetical order within each length.
#[must_use]
pub fn play(matcher: &WordMatcher<'_>, bank: &LetterBank, order: SortOrder) -> PlayResult {
    let mut words: Vec<String> = matcher
        .playable_words(bank)
        .into_iter()
        .map(str::to_string)
        .collect();
    order.apply(&mut words);

    log::info!(
        "bank '{}' plays {} words (min length {})",
        bank,
        words.len(),
        matcher.min_length()
    );

    PlayResult {
        bank: bank.text().to_string(),
        min_length: matcher.min_length(),
        order,
        words,
    }
}
