//! Word lists for target selection
//!
//! Provides the embedded word list compiled into the binary and the
//! random pick backing RESTART's default-word selection.

mod embedded;
pub mod loader;

use crate::core::TargetWord;
use rand::prelude::IndexedRandom;

pub use embedded::{ANSWERS, ANSWERS_COUNT};

/// Fixed fallback target used when no list entry is available
pub const DEFAULT_WORD: &str = "POINT";

/// The fixed default target
///
/// # Panics
/// Will not panic - `DEFAULT_WORD` is a valid five-letter word.
#[must_use]
pub fn default_target() -> TargetWord {
    TargetWord::new(DEFAULT_WORD).expect("default word is valid")
}

/// Pick a uniformly random target from the embedded list
///
/// Falls back to [`default_target`] if the list yields nothing valid.
#[must_use]
pub fn random_target() -> TargetWord {
    ANSWERS
        .choose(&mut rand::rng())
        .and_then(|&word| TargetWord::new(word).ok())
        .unwrap_or_else(default_target)
}

/// Pick a uniformly random target from a caller-supplied pool
///
/// Falls back to [`default_target`] when the pool is empty.
#[must_use]
pub fn random_target_from(pool: &[TargetWord]) -> TargetWord {
    pool.choose(&mut rand::rng())
        .cloned()
        .unwrap_or_else(default_target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::COLUMNS;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn answers_are_valid_words() {
        // All entries should be COLUMNS letters, uppercase
        for &word in ANSWERS {
            assert_eq!(word.len(), COLUMNS, "Word '{word}' is not {COLUMNS} letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn default_word_is_in_answers() {
        assert!(ANSWERS.contains(&DEFAULT_WORD));
    }

    #[test]
    fn random_target_is_from_answers() {
        let target = random_target();
        assert!(ANSWERS.contains(&target.text()));
    }

    #[test]
    fn random_target_from_empty_pool_falls_back() {
        assert_eq!(random_target_from(&[]), default_target());
    }

    #[test]
    fn random_target_from_singleton_pool() {
        let pool = vec![TargetWord::new("HONOR").unwrap()];
        assert_eq!(random_target_from(&pool).text(), "HONOR");
    }
}
