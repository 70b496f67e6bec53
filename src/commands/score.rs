//! One-shot row scoring command
//!
//! Scores a single guess against a target and returns the per-cell
//! verdicts for printing.

use crate::core::{COLUMNS, Cell, TargetWord};
use crate::scoring::score_row;

/// Result of scoring a single guess
pub struct ScoreReport {
    pub guess: String,
    pub target: String,
    pub cells: [Cell; COLUMNS],
}

/// Score `guess` against `target`
///
/// Both words go through the same validation as a game target, so the
/// command rejects malformed input up front.
///
/// # Errors
///
/// Returns an error if either word is not exactly `COLUMNS` ASCII
/// letters.
pub fn score_guess(guess: &str, target: &str) -> Result<ScoreReport, String> {
    let target = TargetWord::new(target).map_err(|e| format!("Invalid target word: {e}"))?;
    let guess = TargetWord::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;

    let cells = score_row(guess.letters(), &target);

    Ok(ScoreReport {
        guess: guess.text().to_string(),
        target: target.text().to_string(),
        cells,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Verdict;

    #[test]
    fn score_guess_reports_verdicts() {
        let report = score_guess("ownoh", "honor").unwrap();

        assert_eq!(report.guess, "OWNOH");
        assert_eq!(report.target, "HONOR");
        let verdicts: Vec<Verdict> = report.cells.iter().map(|c| c.verdict()).collect();
        assert_eq!(
            verdicts,
            [
                Verdict::Misplaced,
                Verdict::Wrong,
                Verdict::Correct,
                Verdict::Correct,
                Verdict::Misplaced,
            ]
        );
    }

    #[test]
    fn score_guess_rejects_bad_target() {
        assert!(score_guess("POINT", "toolong").is_err());
    }

    #[test]
    fn score_guess_rejects_bad_guess() {
        assert!(score_guess("ab", "POINT").is_err());
    }
}
