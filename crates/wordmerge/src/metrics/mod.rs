//! Evaluation metrics for generated text.
//!
//! Character n-gram extraction, a distinct-set precision, and a
//! geometric-mean BLEU-style score.

pub mod bleu;
pub mod ngrams;

pub use bleu::{DEFAULT_MAX_ORDER, calculate_bleu, calculate_precision, geo_mean};
pub use ngrams::collect_ngrams;
