//! Word list loading utilities
//!
//! Reads newline-delimited word lists from files or strings.

use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// One word per line, trimmed of surrounding whitespace. Every line is kept,
/// so a blank line becomes an empty word; duplicates and file order are kept.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_player::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = words_from_str(&content);

    log::debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse a newline-delimited word list held in memory
///
/// # Examples
/// ```
/// use word_player::wordlists::loader::words_from_str;
///
/// let words = words_from_str("cat\n  act \n\ntack\n");
/// assert_eq!(words, vec!["cat", "act", "", "tack"]);
/// ```
#[must_use]
pub fn words_from_str(data: &str) -> Vec<String> {
    data.lines().map(|line| line.trim().to_string()).collect()
}

/// Convert a string slice to an owned word list
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}
