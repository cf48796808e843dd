//! Letter probability analysis
//!
//! Estimates how likely each tile in the bank is to be a "real" letter,
//! weighting by how often the letter occurs across the dictionary.

use crate::core::LetterBank;
use crate::matcher::WordMatcher;

/// Probability estimate for one distinct bank letter
#[derive(Debug, Clone, PartialEq)]
pub struct LetterProbability {
    pub letter: char,
    pub frequency: usize,
    pub percent: f64,
}

/// Probability estimates for every distinct letter in a bank
pub struct ProbabilityReport {
    pub letters: Vec<LetterProbability>,
    pub total_frequency: usize,
}

impl ProbabilityReport {
    /// Sum of all percentages
    #[must_use]
    pub fn total_percent(&self) -> f64 {
        self.letters.iter().map(|p| p.percent).sum()
    }
}

/// Compute letter probabilities for the distinct letters of `bank`
///
/// Each letter's share is its dictionary frequency divided by the summed
/// frequency of all distinct bank letters. Letters keep their order of first
/// appearance in the bank. An empty bank yields an empty report.
///
/// # Errors
///
/// Returns an error if the bank is not empty but none of its letters occur
/// anywhere in the dictionary.
pub fn letter_probabilities(
    matcher: &WordMatcher<'_>,
    bank: &LetterBank,
) -> Result<ProbabilityReport, String> {
    let frequencies = matcher.letter_frequencies();
    let distinct = bank.distinct_letters();
    let total_frequency = frequencies.total_for(distinct.iter().copied());

    if total_frequency == 0 && !distinct.is_empty() {
        return Err(format!(
            "No letter of bank '{bank}' occurs in the dictionary"
        ));
    }

    let letters = distinct
        .into_iter()
        .map(|letter| {
            let frequency = frequencies.get(letter);
            LetterProbability {
                letter,
                frequency,
                percent: frequency as f64 / total_frequency as f64 * 100.0,
            }
        })
        .collect();

    log::debug!("letter probabilities over total frequency {total_frequency}");

    Ok(ProbabilityReport {
        letters,
        total_frequency,
    })
}
