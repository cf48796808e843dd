// Integration tests for word_player
// These exercise the loader -> matcher -> commands -> formatting pipeline

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use word_player::commands::{letter_probabilities, missing_letter_counts, play};
use word_player::core::LetterBank;
use word_player::matcher::{SortOrder, WordMatcher};
use word_player::output::formatters::{
    ITEMS_PER_ROW, column_width, format_columns, format_percentage,
};
use word_player::wordlists::loader::words_from_str;

const WORDS: &str = "cat\ncats\nact\ntack\ntacky\n";

fn char_counts(text: &str) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for ch in text.chars() {
        *counts.entry(ch).or_insert(0) += 1;
    }
    counts
}

fn is_sub_multiset(word: &str, bank: &str) -> bool {
    let bank_counts = char_counts(bank);
    char_counts(word)
        .iter()
        .all(|(ch, n)| bank_counts.get(ch).copied().unwrap_or(0) >= *n)
}

fn random_string(rng: &mut StdRng, alphabet: &[char], max_len: usize) -> String {
    let len = rng.random_range(0..=max_len);
    (0..len)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())])
        .collect()
}

#[test]
fn test_example_dictionary() {
    let words = words_from_str(WORDS);
    let matcher = WordMatcher::new(&words, 3);

    let playable = matcher.playable_words(&LetterBank::new("tack"));
    assert_eq!(playable, vec!["act", "cat", "tack"]);
}

#[test]
fn test_is_valid_word_matches_multiset_subset() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let alphabet = ['a', 'b', 'c', 'd', 'A'];

    for _ in 0..2000 {
        let word = random_string(&mut rng, &alphabet, 6);
        let bank = random_string(&mut rng, &alphabet, 8);

        assert_eq!(
            WordMatcher::is_valid_word(&word, &LetterBank::new(bank.as_str())),
            is_sub_multiset(&word, &bank),
            "word '{word}' bank '{bank}'"
        );
    }
}

#[test]
fn test_playable_words_properties_on_random_dictionary() {
    let mut rng = StdRng::seed_from_u64(7);
    let alphabet = ['e', 'r', 's', 't', 'a'];
    let words: Vec<String> = (0..300)
        .map(|_| random_string(&mut rng, &alphabet, 7))
        .filter(|w| !w.is_empty())
        .collect();

    for min_length in 0..6 {
        let matcher = WordMatcher::new(&words, min_length);
        let bank_text = random_string(&mut rng, &alphabet, 8);
        let bank = LetterBank::new(bank_text.as_str());
        let playable = matcher.playable_words(&bank);

        assert!(playable.iter().all(|w| w.chars().count() >= min_length));
        assert!(playable.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!(playable.iter().all(|w| is_sub_multiset(w, &bank_text)));
        assert_eq!(matcher.count_playable(&bank), playable.len());

        let expected = words
            .iter()
            .filter(|w| w.chars().count() >= min_length && is_sub_multiset(w, &bank_text))
            .count();
        assert_eq!(playable.len(), expected);
    }
}

#[test]
fn test_sorted_play_is_length_then_alpha() {
    let words = words_from_str("tacky\ntack\ncat\nact\nat\ntac\n");
    let matcher = WordMatcher::new(&words, 2);
    let result = play(
        &matcher,
        &LetterBank::new("tacky"),
        SortOrder::LengthThenAlphabetical,
    );

    for pair in result.words.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!((a.len(), a) <= (b.len(), b), "{a} before {b}");
    }
}

#[test]
fn test_probability_pipeline_rounds_to_hundred() {
    let words = words_from_str("banana\nbandana\ncabana\nnab\n");
    let matcher = WordMatcher::new(&words, 3);
    let report = letter_probabilities(&matcher, &LetterBank::new("bandc")).unwrap();

    let rounded_sum: f64 = report
        .letters
        .iter()
        .map(|p| format_percentage(p.percent).trim_end_matches('%').parse::<f64>().unwrap())
        .sum();
    assert!((rounded_sum - 100.0).abs() <= 0.5);
}

#[test]
fn test_probability_fails_when_no_bank_letter_is_known() {
    let words = words_from_str("cat\nact\n");
    let matcher = WordMatcher::new(&words, 3);

    let result = letter_probabilities(&matcher, &LetterBank::new("xyz"));
    assert!(result.is_err());

    // A single known letter is enough to report
    let report = letter_probabilities(&matcher, &LetterBank::new("xyt")).unwrap();
    assert!((report.total_percent() - 100.0).abs() < 1e-9);
}

#[test]
fn test_missing_letter_report_shape() {
    let words = words_from_str(WORDS);
    let matcher = WordMatcher::new(&words, 3);
    let report = missing_letter_counts(&matcher, &LetterBank::new("tack"));

    assert_eq!(report.entries.len(), 26);
    assert!(report.entries.windows(2).all(|pair| {
        (pair[0].count, pair[0].letter) > (pair[1].count, pair[1].letter)
    }));

    let s = report.entries.iter().find(|e| e.letter == 's').unwrap();
    assert_eq!(s.count, 4); // cats
    let y = report.entries.iter().find(|e| e.letter == 'y').unwrap();
    assert_eq!(y.count, 4); // tacky
    assert_eq!(report.entries[0].letter, 'y'); // tie broken by letter descending
}

#[test]
fn test_word_grid_has_five_columns() {
    let words = words_from_str("aa\nab\nba\nbb\naab\naba\nbaa\nabb\n");
    let matcher = WordMatcher::new(&words, 2);
    let result = play(&matcher, &LetterBank::new("aabb"), SortOrder::Alphabetical);

    let width = column_width(&result.words);
    let rows = format_columns(&result.words, ITEMS_PER_ROW, width);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].split_whitespace().count(), ITEMS_PER_ROW);
    assert_eq!(rows[1].split_whitespace().count(), 3);
    assert!(rows[0].starts_with("aa "));
}

#[test]
fn test_matcher_reused_across_queries() {
    let words = words_from_str(WORDS);
    let matcher = WordMatcher::new(&words, 3);

    let first = matcher.playable_words(&LetterBank::new("tack"));
    let second = matcher.playable_words(&LetterBank::new("tacks"));
    let again = matcher.playable_words(&LetterBank::new("tack"));

    assert_eq!(first, again);
    assert_eq!(second, vec!["act", "cat", "cats", "tack"]);
}
