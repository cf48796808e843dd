//! Word matching
//!
//! The `WordMatcher` is the context object every command runs against.

mod engine;
pub mod order;

pub use engine::WordMatcher;
pub use order::SortOrder;
