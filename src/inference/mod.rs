//! Inference from recorded feedback
//!
//! Forwards: which dictionary words could still be the answer.
//! Backwards: which guesses could have produced the feedback for a known answer.

mod answers;
mod consistency;
mod guesses;

pub use answers::find_potential_answers;
pub use consistency::{is_potential_multiple, is_potential_single};
pub use guesses::{find_guesses_multiple, find_potential_guesses_single};
