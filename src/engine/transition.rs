//! The state transition function
//!
//! A reducer: an exhaustive match over intents, each arm returning a
//! fresh state value. Invalid or out-of-turn intents are absorbed as
//! no-ops returning a state value-equal to the input.

use super::intent::Intent;
use super::state::{GameState, GameStatus};
use crate::core::{Cell, ROWS};
use crate::scoring::{compute_letter_statuses, score_row};

/// Apply `intent` to `state`, producing the next state
///
/// Pure and total: never panics, never fails. Callers detect rejected
/// intents by comparing the result against the input.
///
/// # Examples
/// ```
/// use wordle_game::core::TargetWord;
/// use wordle_game::engine::{GameState, Intent, transition};
///
/// let state = GameState::new(TargetWord::new("POINT").unwrap());
/// let next = transition(&state, &Intent::AddLetter('H'));
/// assert_eq!(next.board().cell(0, 0).letter(), Some(b'H'));
/// ```
#[must_use]
pub fn transition(state: &GameState, intent: &Intent) -> GameState {
    match intent {
        Intent::AddLetter(letter) => add_letter(state, *letter),
        Intent::RemoveLetter => remove_letter(state),
        Intent::EnterRow => enter_row(state),
        Intent::Restart(word) => word.clone().map_or_else(GameState::random, GameState::new),
    }
}

/// Write `letter` into the first empty cell of the current row
///
/// No-ops: game over, non-alphabetic payload, row already full.
fn add_letter(state: &GameState, letter: char) -> GameState {
    if state.status != GameStatus::InProgress || !letter.is_ascii_alphabetic() {
        return state.clone();
    }

    let letter = letter.to_ascii_uppercase() as u8;
    let mut next = state.clone();
    if let Some(column) = next.board.first_empty_column(next.current_row) {
        next.board
            .set_cell(next.current_row, column, Cell::unchecked(letter));
    }
    next
}

/// Clear the rightmost filled cell of the current row
///
/// No-ops: game over, row already empty.
fn remove_letter(state: &GameState) -> GameState {
    if state.status != GameStatus::InProgress {
        return state.clone();
    }

    let mut next = state.clone();
    if let Some(column) = next.board.last_filled_column(next.current_row) {
        next.board.set_cell(next.current_row, column, Cell::EMPTY);
    }
    next
}

/// Score the current row, refresh letter statuses, and advance the game
///
/// No-ops: game over, row not fully filled.
fn enter_row(state: &GameState) -> GameState {
    if state.status != GameStatus::InProgress {
        return state.clone();
    }

    let Some(guess) = state.board.row_letters(state.current_row) else {
        return state.clone();
    };

    let mut next = state.clone();
    next.board
        .set_row(next.current_row, score_row(&guess, &next.target));
    next.letters = compute_letter_statuses(&next.board);

    // The win check precedes the last-row check: the right word on the
    // final row wins
    if guess == *next.target.letters() {
        next.status = GameStatus::Won;
    } else if next.current_row + 1 < ROWS {
        next.current_row += 1;
    } else {
        next.status = GameStatus::Lost;
    }

    next
}
