//! Target word representation
//!
//! A `TargetWord` stores the hidden answer along with letter position
//! indices for membership queries during scoring and aggregation.

use super::board::COLUMNS;
use rustc_hash::FxHashMap;
use std::fmt;

/// The hidden answer: exactly `COLUMNS` ASCII letters, uppercase-normalized
///
/// Stores the word as bytes and maintains a map of letter positions for
/// duplicate handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetWord {
    text: String,
    letters: [u8; COLUMNS],
    positions: FxHashMap<u8, Vec<usize>>,
}

/// Error type for invalid target words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetWordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for TargetWordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Target word must be exactly {COLUMNS} letters, got {len}")
            }
            Self::NonAscii => write!(f, "Target word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Target word contains invalid characters"),
        }
    }
}

impl std::error::Error for TargetWordError {}

impl TargetWord {
    /// Create a new target word from a string
    ///
    /// Input is normalized to uppercase.
    ///
    /// # Errors
    /// Returns `TargetWordError` if:
    /// - Length is not exactly `COLUMNS`
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::TargetWord;
    ///
    /// let word = TargetWord::new("point").unwrap();
    /// assert_eq!(word.text(), "POINT");
    ///
    /// assert!(TargetWord::new("too long").is_err());
    /// assert!(TargetWord::new("sh0rt").is_err());
    /// ```
    ///
    /// # Panics
    /// Will not panic - the `expect()` call is guaranteed safe by length validation.
    pub fn new(text: impl Into<String>) -> Result<Self, TargetWordError> {
        let text: String = text.into().to_uppercase();

        // Validate length
        if text.len() != COLUMNS {
            return Err(TargetWordError::InvalidLength(text.len()));
        }

        // Validate ASCII and alphabetic
        if !text.is_ascii() {
            return Err(TargetWordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(TargetWordError::InvalidCharacters);
        }

        // Convert to bytes - safe to unwrap as we validated length == COLUMNS
        let letters: [u8; COLUMNS] = text
            .as_bytes()
            .try_into()
            .expect("length already validated");

        // Build position map for fast lookup
        let mut positions: FxHashMap<u8, Vec<usize>> = FxHashMap::default();
        for (i, &letter) in letters.iter().enumerate() {
            positions.entry(letter).or_default().push(i);
        }

        Ok(Self {
            text,
            letters,
            positions,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; COLUMNS] {
        &self.letters
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= COLUMNS`
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.positions.contains_key(&letter)
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: u8) -> &[usize] {
        self.positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }
}

impl fmt::Display for TargetWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = TargetWord::new("POINT").unwrap();
        assert_eq!(word.text(), "POINT");
        assert_eq!(word.letters(), b"POINT");
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = TargetWord::new("point").unwrap();
        assert_eq!(word.text(), "POINT");

        let word2 = TargetWord::new("PoInT").unwrap();
        assert_eq!(word2.text(), "POINT");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            TargetWord::new("too long"),
            Err(TargetWordError::InvalidLength(8))
        ));
        assert!(matches!(
            TargetWord::new("shrt"),
            Err(TargetWordError::InvalidLength(4))
        ));
        assert!(matches!(
            TargetWord::new(""),
            Err(TargetWordError::InvalidLength(0))
        ));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(TargetWord::new("poin3").is_err()); // Number
        assert!(TargetWord::new("poin ").is_err()); // Space
        assert!(TargetWord::new("poin!").is_err()); // Punctuation
    }

    #[test]
    fn word_letter_at() {
        let word = TargetWord::new("HONOR").unwrap();
        assert_eq!(word.letter_at(0), b'H');
        assert_eq!(word.letter_at(1), b'O');
        assert_eq!(word.letter_at(2), b'N');
        assert_eq!(word.letter_at(3), b'O');
        assert_eq!(word.letter_at(4), b'R');
    }

    #[test]
    fn word_contains() {
        let word = TargetWord::new("POINT").unwrap();
        assert!(word.contains(b'P'));
        assert!(word.contains(b'T'));
        assert!(!word.contains(b'Z'));
        assert!(!word.contains(b'p')); // Lookup is byte-exact, storage is uppercase
    }

    #[test]
    fn word_positions_of_duplicates() {
        let word = TargetWord::new("HONOR").unwrap();
        assert_eq!(word.positions_of(b'O'), &[1, 3]); // Both O positions
        assert_eq!(word.positions_of(b'H'), &[0]);
        assert_eq!(word.positions_of(b'Z'), &[]);
    }

    #[test]
    fn word_display() {
        let word = TargetWord::new("point").unwrap();
        assert_eq!(format!("{word}"), "POINT");
    }

    #[test]
    fn word_equality_ignores_input_case() {
        let word1 = TargetWord::new("POINT").unwrap();
        let word2 = TargetWord::new("point").unwrap();
        let word3 = TargetWord::new("HONOR").unwrap();

        assert_eq!(word1, word2);
        assert_ne!(word1, word3);
    }
}
