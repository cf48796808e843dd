//! Command implementations

pub mod missing;
pub mod play;
pub mod probability;

pub use missing::{MissingLetterCount, MissingLetterReport, missing_letter_counts};
pub use play::{PlayResult, play};
pub use probability::{LetterProbability, ProbabilityReport, letter_probabilities};
