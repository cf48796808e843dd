//! Display functions for command results

use super::formatters::{
    ITEMS_PER_ROW, column_width, format_columns, format_missing_entry, format_probability,
};
use crate::commands::{MissingLetterReport, PlayResult, ProbabilityReport};
use crate::matcher::SortOrder;
use colored::Colorize;

/// Print the playable words for a bank
pub fn print_play_result(result: &PlayResult) {
    let order = match result.order {
        SortOrder::Alphabetical => "alphabetical",
        SortOrder::LengthThenAlphabetical => "by length",
    };
    println!(
        "{} {}",
        "VALID WORDS".bright_cyan().bold(),
        format!("({order}, {}+ letters)", result.min_length).bright_black()
    );

    let width = column_width(&result.words);
    for row in format_columns(&result.words, ITEMS_PER_ROW, width) {
        println!("{row}");
    }

    println!(
        "{}",
        format!("{} words from '{}'", result.count(), result.bank).bright_yellow()
    );
    println!();
}

/// Print the probability of each bank letter being real
pub fn print_probability_report(report: &ProbabilityReport) {
    println!("{}", "Probability of real letter".bright_cyan().bold());
    for probability in &report.letters {
        println!("{}", format_probability(probability));
    }
    println!();
}

/// Print playable counts for each possible extra letter
pub fn print_missing_report(report: &MissingLetterReport) {
    println!(
        "{}",
        "Number of words added with each missing letter"
            .bright_cyan()
            .bold()
    );

    let cells: Vec<String> = report.entries.iter().map(format_missing_entry).collect();
    let width = column_width(&cells);
    for row in format_columns(&cells, ITEMS_PER_ROW, width) {
        println!("{row}");
    }

    if let Some(best) = report.best() {
        println!(
            "{}",
            format!(
                "Best letter: {} (+{} over {})",
                best.letter, best.gain, report.base_count
            )
            .green()
        );
    }
    println!();
}
