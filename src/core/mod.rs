//! Core domain types for Wordle inference
//!
//! This module contains the value types every operation works on. They are
//! immutable once built and validate their own invariants on construction.

mod error;
mod pattern;
mod word;
mod word_set;

pub use error::{PreconditionError, PreconditionResult};
pub(crate) use error::{ensure_len, ensure_parallel};
pub use pattern::{Pattern, Status, is_valid_status};
pub use word::Word;
pub use word_set::WordSet;
