//! Scoring algorithms
//!
//! Pure functions turning completed guess rows into per-cell verdicts
//! and the whole board into per-letter aggregates.

mod letters;
mod row;

pub use letters::{ALPHABET_LEN, LetterStatuses, compute_letter_statuses};
pub use row::score_row;
