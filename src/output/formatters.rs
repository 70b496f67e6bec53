//! Formatting utilities for terminal output

use crate::core::{COLUMNS, Cell, Verdict};
use colored::{ColoredString, Colorize};

/// Virtual keyboard rows, top to bottom
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Emoji for a single verdict
#[must_use]
pub const fn verdict_emoji(verdict: Verdict) -> char {
    match verdict {
        Verdict::Correct => '🟩',
        Verdict::Misplaced => '🟨',
        Verdict::Wrong => '⬜',
        Verdict::Unchecked => '⬛',
    }
}

/// Short human-readable description of a verdict
#[must_use]
pub const fn verdict_label(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Correct => "correct position",
        Verdict::Misplaced => "wrong position",
        Verdict::Wrong => "not in the word",
        Verdict::Unchecked => "unscored",
    }
}

/// Format a scored row as an emoji string
#[must_use]
pub fn row_to_emoji(cells: &[Cell; COLUMNS]) -> String {
    cells.iter().map(|cell| verdict_emoji(cell.verdict())).collect()
}

/// Paint a board cell as a three-character colored tile
#[must_use]
pub fn paint_tile(cell: Cell) -> ColoredString {
    match cell.letter() {
        None => " _ ".dimmed(),
        Some(letter) => {
            let tile = format!(" {} ", char::from(letter));
            match cell.verdict() {
                Verdict::Correct => tile.on_green().white().bold(),
                Verdict::Misplaced => tile.on_yellow().white().bold(),
                Verdict::Wrong => tile.on_bright_black().white(),
                Verdict::Unchecked => tile.bold(),
            }
        }
    }
}

/// Paint a keyboard key according to its aggregate status
#[must_use]
pub fn paint_key(letter: char, status: Verdict) -> ColoredString {
    let key = letter.to_string();
    match status {
        Verdict::Correct => key.on_green().white().bold(),
        Verdict::Misplaced => key.on_yellow().white().bold(),
        Verdict::Wrong => key.on_bright_black().white(),
        Verdict::Unchecked => key.normal(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_emoji_mapping() {
        assert_eq!(verdict_emoji(Verdict::Correct), '🟩');
        assert_eq!(verdict_emoji(Verdict::Misplaced), '🟨');
        assert_eq!(verdict_emoji(Verdict::Wrong), '⬜');
        assert_eq!(verdict_emoji(Verdict::Unchecked), '⬛');
    }

    #[test]
    fn row_to_emoji_mixed_row() {
        let cells = [
            Cell::scored(b'O', Verdict::Misplaced),
            Cell::scored(b'W', Verdict::Wrong),
            Cell::scored(b'N', Verdict::Correct),
            Cell::scored(b'O', Verdict::Correct),
            Cell::scored(b'H', Verdict::Misplaced),
        ];
        assert_eq!(row_to_emoji(&cells), "🟨⬜🟩🟩🟨");
    }

    #[test]
    fn keyboard_rows_cover_alphabet() {
        let total: usize = KEYBOARD_ROWS.iter().map(|row| row.len()).sum();
        assert_eq!(total, 26);
    }
}
