//! Word Player
//!
//! Finds every dictionary word that can be spelled from a bank of letters,
//! where each letter can be used only as many times as it appears.
//!
//! # Quick Start
//!
//! ```rust
//! use word_player::core::LetterBank;
//! use word_player::matcher::WordMatcher;
//! use word_player::wordlists::loader::words_from_slice;
//!
//! let words = words_from_slice(&["cat", "cats", "act", "tack", "tacky"]);
//! let matcher = WordMatcher::new(&words, 3);
//!
//! let bank = LetterBank::new("tack");
//! assert_eq!(matcher.playable_words(&bank), vec!["act", "cat", "tack"]);
//! assert_eq!(matcher.count_playable(&bank), 3);
//! ```

// Core domain types
pub mod core;

// Word matching
pub mod matcher;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
