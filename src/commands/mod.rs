//! Command implementations

pub mod score;
pub mod simple;

pub use score::{ScoreReport, score_guess};
pub use simple::{SimpleConfig, run_simple};
