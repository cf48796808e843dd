//! Core domain types for letter-bank matching
//!
//! Pure multiset types with no I/O. Everything here is cheap to construct
//! and safe to share between queries.

mod bank;
mod frequency;

pub use bank::LetterBank;
pub use frequency::LetterFrequencies;
