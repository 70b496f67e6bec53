//! Per-letter aggregate status
//!
//! Derives the virtual-keyboard coloring from every resolved cell on the
//! board. A letter's status only ever moves up the verdict ranking.

use crate::core::{Board, Verdict};
use rustc_hash::FxHashMap;

/// Number of tracked letters
pub const ALPHABET_LEN: usize = 26;

/// Aggregate per-letter status for the whole game
///
/// Always holds exactly one entry per alphabet letter; letters never
/// guessed stay `Unchecked`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterStatuses {
    statuses: FxHashMap<u8, Verdict>,
}

impl LetterStatuses {
    /// Create a map with every letter `Unchecked`
    #[must_use]
    pub fn new() -> Self {
        let mut statuses = FxHashMap::default();
        for letter in b'A'..=b'Z' {
            statuses.insert(letter, Verdict::Unchecked);
        }
        Self { statuses }
    }

    /// Status of `letter`; anything outside A-Z reads as `Unchecked`
    #[must_use]
    pub fn get(&self, letter: u8) -> Verdict {
        self.statuses
            .get(&letter.to_ascii_uppercase())
            .copied()
            .unwrap_or(Verdict::Unchecked)
    }

    /// Record an observation, keeping the better of old and new status
    ///
    /// Observations for letters outside A-Z are ignored.
    pub fn upgrade(&mut self, letter: u8, observed: Verdict) {
        if let Some(status) = self.statuses.get_mut(&letter) {
            *status = status.upgrade(observed);
        }
    }

    /// Number of tracked letters, always [`ALPHABET_LEN`]
    #[must_use]
    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    /// Whether the map holds no letters; never true in practice
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    /// Iterate over `(letter, status)` pairs in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (u8, Verdict)> + '_ {
        (b'A'..=b'Z').map(|letter| (letter, self.get(letter)))
    }
}

impl Default for LetterStatuses {
    fn default() -> Self {
        Self::new()
    }
}

/// Recompute the aggregate from every resolved cell, in row-major order
///
/// Resolved cells already carry the duplicate-consuming scorer verdicts,
/// so the aggregate is a pure max-merge per letter: a `Correct`
/// observation is never overwritten by a later `Misplaced` or `Wrong`
/// one.
#[must_use]
pub fn compute_letter_statuses(board: &Board) -> LetterStatuses {
    let mut statuses = LetterStatuses::new();

    for row in board.rows() {
        for cell in row {
            if let Some(letter) = cell.letter()
                && cell.verdict() != Verdict::Unchecked
            {
                statuses.upgrade(letter, cell.verdict());
            }
        }
    }

    statuses
}
