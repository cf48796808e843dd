//! Output ordering for playable words

use std::cmp::Ordering;

/// How playable words are ordered for display
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Plain alphabetical order (default)
    #[default]
    Alphabetical,
    /// Shortest words first, alphabetical within a length
    LengthThenAlphabetical,
}

impl SortOrder {
    /// Pick the order from the `--sort` flag
    #[must_use]
    pub const fn from_flag(sort_by_length: bool) -> Self {
        if sort_by_length {
            Self::LengthThenAlphabetical
        } else {
            Self::Alphabetical
        }
    }

    /// Compare two words under this order
    #[must_use]
    pub fn compare(self, a: &str, b: &str) -> Ordering {
        match self {
            Self::Alphabetical => a.cmp(b),
            Self::LengthThenAlphabetical => a
                .chars()
                .count()
                .cmp(&b.chars().count())
                .then_with(|| a.cmp(b)),
        }
    }

    /// Sort words in place
    pub fn apply<S: AsRef<str>>(self, words: &mut [S]) {
        words.sort_by(|a, b| self.compare(a.as_ref(), b.as_ref()));
    }
}
