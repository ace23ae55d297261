//! Ranking guesses and potential answers
//!
//! Two measures are offered: the weighted information score, and the Shannon
//! entropy of the feedback partition a guess induces.

mod entropy;
mod information;

pub use entropy::{
    GuessMetrics, calculate_entropy, calculate_metrics, select_best_guess, shannon_entropy,
};
pub use information::{
    ScoreWeights, find_answers_and_scores, find_answers_and_scores_with, information_score,
    information_score_multiple, information_score_multiple_with, information_score_with,
};
