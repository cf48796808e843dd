//! Word Player - CLI
//!
//! Lists every dictionary word playable from a bank of letters, with optional
//! letter-probability and missing-letter analyses.

use anyhow::{Context, Result};
use clap::Parser;
use word_player::{
    commands::{letter_probabilities, missing_letter_counts, play},
    core::LetterBank,
    matcher::{SortOrder, WordMatcher},
    output::{print_missing_report, print_play_result, print_probability_report},
    wordlists::{DEFAULT_DICTIONARY, loader::load_from_file},
};

#[derive(Parser, Debug)]
#[command(
    name = "word_player",
    about = "Find every dictionary word playable from a bank of letters",
    version,
    author
)]
struct Cli {
    /// Letters available to play (case-sensitive, repeats allowed)
    bank: String,

    /// Minimum word length to report
    #[arg(short, long, default_value_t = 4)]
    length: usize,

    /// Show how many words each extra letter a-z would add
    #[arg(short, long)]
    missing: bool,

    /// Estimate how likely each bank letter is to be real
    #[arg(short, long)]
    fake: bool,

    /// Sort words by length, then alphabetically
    #[arg(short, long)]
    sort: bool,

    /// Newline-delimited word list to search
    #[arg(short, long, default_value = DEFAULT_DICTIONARY)]
    dictionary: String,
}

/// Load the word list, naming the path in any error
fn load_dictionary(path: &str) -> Result<Vec<String>> {
    let words =
        load_from_file(path).with_context(|| format!("failed to load dictionary from '{path}'"))?;
    log::info!("dictionary '{path}' has {} words", words.len());
    Ok(words)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Malformed flags exit with status 2 and print usage
    let cli = Cli::parse();

    let words = load_dictionary(&cli.dictionary)?;

    let matcher = WordMatcher::new(&words, cli.length);
    let bank = LetterBank::new(cli.bank);

    let result = play(&matcher, &bank, SortOrder::from_flag(cli.sort));
    print_play_result(&result);

    if cli.fake {
        let report = letter_probabilities(&matcher, &bank).map_err(|e| anyhow::anyhow!(e))?;
        print_probability_report(&report);
    }

    if cli.missing {
        print_missing_report(&missing_letter_counts(&matcher, &bank));
    }

    Ok(())
}
