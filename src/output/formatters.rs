//! Formatting utilities for terminal output

use crate::commands::{LetterProbability, MissingLetterCount};

/// Number of columns in word and missing-letter grids
pub const ITEMS_PER_ROW: usize = 5;

/// Narrowest column used for word grids
pub const MIN_COLUMN_WIDTH: usize = 6;

/// Column width that fits the longest item plus two spaces of gutter
#[must_use]
pub fn column_width<S: AsRef<str>>(items: &[S]) -> usize {
    let longest = items
        .iter()
        .map(|item| item.as_ref().chars().count())
        .max()
        .unwrap_or(0);
    (longest + 2).max(MIN_COLUMN_WIDTH)
}

/// Lay items out left-aligned in fixed-width columns
///
/// Returns one string per row. Trailing padding is trimmed from each row.
///
/// # Examples
/// ```
/// use word_player::output::formatters::format_columns;
///
/// let rows = format_columns(&["act", "cat", "tack"], 2, 6);
/// assert_eq!(rows, vec!["act   cat", "tack"]);
/// ```
#[must_use]
pub fn format_columns<S: AsRef<str>>(items: &[S], per_row: usize, width: usize) -> Vec<String> {
    items
        .chunks(per_row.max(1))
        .map(|row| {
            let line: String = row
                .iter()
                .map(|item| format!("{:<width$}", item.as_ref()))
                .collect();
            line.trim_end().to_string()
        })
        .collect()
}

/// Format a percentage to one decimal place
#[must_use]
pub fn format_percentage(percent: f64) -> String {
    format!("{percent:.1}%")
}

/// Format a probability line, e.g. `a: 50.0%`
#[must_use]
pub fn format_probability(probability: &LetterProbability) -> String {
    format!(
        "{}: {}",
        probability.letter,
        format_percentage(probability.percent)
    )
}

/// Format a missing-letter cell, e.g. `s: 6`
#[must_use]
pub fn format_missing_entry(entry: &MissingLetterCount) -> String {
    format!("{}: {}", entry.letter, entry.count)
}
