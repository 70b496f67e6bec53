//! Simple interactive CLI mode
//!
//! Text-based interactive game without TUI. Every user action is
//! dispatched into the engine as intents; rejected rows are detected by
//! noticing the state did not change.

use crate::core::{COLUMNS, TargetWord};
use crate::engine::{GameState, Intent, transition};
use crate::output::{print_board, print_keyboard, print_outcome};
use crate::wordlists;
use std::io::{self, Write};

/// Target selection for new games in the simple CLI
pub struct SimpleConfig {
    /// Fixed target reused for every game, when set
    pub target: Option<TargetWord>,
    /// Custom pool for random picks; `None` uses the embedded list
    pub pool: Option<Vec<TargetWord>>,
}

impl SimpleConfig {
    fn new_game(&self, state: Option<&GameState>) -> GameState {
        let word = self.next_target();
        match state {
            Some(state) => transition(state, &Intent::Restart(word)),
            None => word.map_or_else(GameState::random, GameState::new),
        }
    }

    /// The next game's target: fixed word, custom-pool pick, or `None`
    /// to let the engine draw from the embedded list
    fn next_target(&self) -> Option<TargetWord> {
        if let Some(word) = &self.target {
            return Some(word.clone());
        }
        self.pool
            .as_ref()
            .map(|pool| wordlists::random_target_from(pool))
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(config: &SimpleConfig) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Wordle - Interactive Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Type a {COLUMNS}-letter word and press enter to guess.");
    println!("Commands: 'quit' to exit, 'new' for a new game\n");

    let mut state = config.new_game(None);

    loop {
        print_board(&state);
        print_keyboard(state.letters());

        if state.is_over() {
            print_outcome(&state);

            match get_user_input("Play again? (new/quit)")?.to_lowercase().as_str() {
                "quit" | "q" | "exit" | "no" | "n" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                _ => {
                    state = config.new_game(Some(&state));
                    continue;
                }
            }
        }

        let turn = state.current_row() + 1;
        let input = get_user_input(&format!("Guess {turn}"))?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                state = config.new_game(Some(&state));
                println!("\n🔄 New game started!\n");
            }
            _ => {
                let next = enter_guess(&state, &input);
                if next == state {
                    println!("❌ Guess must be exactly {COLUMNS} letters!\n");
                }
                state = next;
            }
        }
    }
}

/// Dispatch one ADD_LETTER per character, then ENTER_ROW
///
/// Clears whatever was already typed into the row first so the whole
/// line is the guess. A rejected guess comes back as a state equal to
/// the input, which the caller observes as state equality.
fn enter_guess(state: &GameState, input: &str) -> GameState {
    // A full row would swallow the first COLUMNS letters of an overlong
    // line; reject wrong lengths before dispatching
    if input.len() != COLUMNS || !input.chars().all(|c| c.is_ascii_alphabetic()) {
        return state.clone();
    }

    let mut next = state.clone();
    for _ in 0..COLUMNS {
        next = transition(&next, &Intent::RemoveLetter);
    }
    for letter in input.chars() {
        next = transition(&next, &Intent::AddLetter(letter));
    }
    let entered = transition(&next, &Intent::EnterRow);
    if entered == next {
        // Row was rejected; roll the typed letters back too
        return state.clone();
    }
    entered
}

fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::GameStatus;

    fn config_with_target(word: &str) -> SimpleConfig {
        SimpleConfig {
            target: Some(TargetWord::new(word).unwrap()),
            pool: None,
        }
    }

    #[test]
    fn new_game_uses_fixed_target() {
        let config = config_with_target("HONOR");
        let state = config.new_game(None);
        assert_eq!(state.target().text(), "HONOR");
    }

    #[test]
    fn new_game_draws_from_custom_pool() {
        let config = SimpleConfig {
            target: None,
            pool: Some(vec![TargetWord::new("HONOR").unwrap()]),
        };
        let state = config.new_game(None);
        assert_eq!(state.target().text(), "HONOR");
    }

    #[test]
    fn enter_guess_plays_a_full_row() {
        let state = config_with_target("POINT").new_game(None);
        let next = enter_guess(&state, "crane");

        assert_eq!(next.current_row(), 1);
        assert_eq!(next.status(), GameStatus::InProgress);
    }

    #[test]
    fn enter_guess_rejects_wrong_length() {
        let state = config_with_target("POINT").new_game(None);

        assert_eq!(enter_guess(&state, "cat"), state);
        assert_eq!(enter_guess(&state, "toolong"), state);
    }

    #[test]
    fn enter_guess_wins_on_target() {
        let state = config_with_target("POINT").new_game(None);
        let next = enter_guess(&state, "point");
        assert_eq!(next.status(), GameStatus::Won);
    }
}
