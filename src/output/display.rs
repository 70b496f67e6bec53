//! Display functions for game state and command results

use super::formatters::{KEYBOARD_ROWS, paint_key, paint_tile, row_to_emoji, verdict_label};
use crate::commands::ScoreReport;
use crate::engine::{GameState, GameStatus};
use crate::scoring::LetterStatuses;
use colored::Colorize;

/// Print the full board as colored tiles
pub fn print_board(state: &GameState) {
    println!();
    for row in state.board().rows() {
        print!("  ");
        for &cell in row {
            print!("{} ", paint_tile(cell));
        }
        println!();
    }
    println!();
}

/// Print the virtual keyboard colored by aggregate letter status
pub fn print_keyboard(letters: &LetterStatuses) {
    for (i, row) in KEYBOARD_ROWS.iter().enumerate() {
        print!("  {}", " ".repeat(i));
        for letter in row.chars() {
            print!("{} ", paint_key(letter, letters.get(letter as u8)));
        }
        println!();
    }
    println!();
}

/// Print the end-of-game banner
pub fn print_outcome(state: &GameState) {
    match state.status() {
        GameStatus::Won => {
            let guesses = state.current_row() + 1;
            println!(
                "{}",
                format!("✅ Solved in {guesses} guesses!").green().bold()
            );
        }
        GameStatus::Lost => {
            println!(
                "{}",
                format!("❌ Out of rows! The word was {}", state.target())
                    .red()
                    .bold()
            );
        }
        GameStatus::InProgress => {}
    }
}

/// Print the result of scoring a single guess
pub fn print_score_report(report: &ScoreReport) {
    println!("\n{}", "─".repeat(40).cyan());
    println!("Guess:  {}", report.guess.bright_yellow().bold());
    println!("Target: {}", report.target.bright_yellow().bold());
    println!("{}", "─".repeat(40).cyan());

    print!("\n  ");
    for &cell in &report.cells {
        print!("{} ", paint_tile(cell));
    }
    println!("  {}", row_to_emoji(&report.cells));

    println!();
    for &cell in &report.cells {
        if let Some(letter) = cell.letter() {
            println!("  {} - {}", char::from(letter), verdict_label(cell.verdict()));
        }
    }
}
