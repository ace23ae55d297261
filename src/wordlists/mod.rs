//! Word lists
//!
//! Loads the dictionary the inference functions search over.

pub mod loader;

pub use loader::{LoadError, load_word_set, parse_word_set};
