//! Word lists
//!
//! Dictionary loading. A dictionary is a plain `Vec<String>` in file order.

pub mod loader;

/// Dictionary path used when none is given on the command line
pub const DEFAULT_DICTIONARY: &str = "words.txt";
