//! Wordle Inference
//!
//! Computes Wordle feedback, infers which words are still possible answers (or
//! which guesses could have produced recorded feedback), and scores candidates
//! by how much information they reveal.
//!
//! Every operation checks its preconditions first and reports a violation as
//! a [`core::PreconditionError`].
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_inference::core::{Pattern, Word, WordSet};
//! use wordle_inference::feedback::compute_status;
//! use wordle_inference::inference::find_potential_answers;
//!
//! let answer = Word::new("teach").unwrap();
//! let guess = Word::new("adieu").unwrap();
//! assert_eq!(compute_status(&answer, &guess).unwrap().to_string(), "?NN?N");
//!
//! let word_set = WordSet::from_strs(["later", "liter", "tower", "tiger"]).unwrap();
//! let guesses = [Word::new("tower").unwrap()];
//! let statuses = [Pattern::parse("?NNYY").unwrap()];
//! let answers = find_potential_answers(&word_set, &guesses, &statuses).unwrap();
//! assert_eq!(answers.len(), 2);
//! ```

// Core domain types
pub mod core;

// Status computation
pub mod feedback;

// Answer and guess inference
pub mod inference;

// N-ary Cartesian product
pub mod product;

// Information score and entropy
pub mod scoring;

// Word lists
pub mod wordlists;
