//! Word list loading utilities
//!
//! Provides functions to load target-word lists from files or convert
//! the embedded constants.

use crate::core::TargetWord;
use std::fs;
use std::io;
use std::path::Path;

/// Load target words from a file
///
/// Returns a vector of valid `TargetWord` instances, skipping any
/// invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<TargetWord>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                TargetWord::new(trimmed).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Convert an embedded string slice to a `TargetWord` vector
///
/// # Examples
/// ```
/// use wordle_game::wordlists::ANSWERS;
/// use wordle_game::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<TargetWord> {
    slice.iter().filter_map(|&s| TargetWord::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["point", "honor", "crane"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "POINT");
        assert_eq!(words[1].text(), "HONOR");
        assert_eq!(words[2].text(), "CRANE");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["point", "toolong", "abc", "honor"];
        let words = words_from_slice(input);

        // Only "point" and "honor" are valid five-letter words
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "POINT");
        assert_eq!(words[1].text(), "HONOR");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        let words = words_from_slice(input);
        assert_eq!(words.len(), 0);
    }

    #[test]
    fn load_from_embedded_answers() {
        use crate::wordlists::ANSWERS;

        let words = words_from_slice(ANSWERS);
        assert_eq!(words.len(), ANSWERS.len());
    }
}
