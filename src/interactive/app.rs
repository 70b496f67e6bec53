//! TUI application state and logic

use crate::core::{ROWS, TargetWord};
use crate::engine::{GameState, GameStatus, Intent, transition};
use crate::wordlists;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub state: GameState,
    pub target_override: Option<TargetWord>,
    pub pool: Option<Vec<TargetWord>>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; ROWS + 1],
}

impl App {
    #[must_use]
    pub fn new(
        state: GameState,
        target_override: Option<TargetWord>,
        pool: Option<Vec<TargetWord>>,
    ) -> Self {
        let mut app = Self {
            state,
            target_override,
            pool,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
        };
        app.add_message("Type letters to guess; Enter submits a row.", MessageStyle::Info);
        app
    }

    /// Feed an intent through the engine, reporting rejected submits
    ///
    /// A submit that leaves the state unchanged means the row was not
    /// fully filled.
    pub fn dispatch(&mut self, intent: &Intent) {
        let next = transition(&self.state, intent);

        if *intent == Intent::EnterRow {
            if next == self.state {
                self.add_message("Row is not complete!", MessageStyle::Error);
            } else {
                self.on_row_entered(&next);
            }
        }

        self.state = next;
    }

    fn on_row_entered(&mut self, next: &GameState) {
        match next.status() {
            GameStatus::Won => {
                let guesses = next.current_row() + 1;
                self.stats.total_games += 1;
                self.stats.games_won += 1;
                if guesses < self.stats.guess_distribution.len() {
                    self.stats.guess_distribution[guesses] += 1;
                }

                let celebration = match guesses {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it on the last row! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
            }
            GameStatus::Lost => {
                self.stats.total_games += 1;
                self.add_message(
                    &format!("💀 Out of rows! The word was {}", next.target()),
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
            }
            GameStatus::InProgress => {}
        }
    }

    /// Start a fresh game, honoring the fixed target or custom pool
    pub fn new_game(&mut self) {
        let word = match (&self.target_override, &self.pool) {
            (Some(word), _) => Some(word.clone()),
            (None, Some(pool)) => Some(wordlists::random_target_from(pool)),
            (None, None) => None,
        };
        self.state = transition(&self.state, &Intent::Restart(word));
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 4 messages
        if self.messages.len() > 4 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            handle_key(&mut app, key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    // Ctrl-C always quits
    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    if app.state.is_over() {
        match code {
            KeyCode::Char('n' | 'N') => app.new_game(),
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => app.should_quit = true,
            _ => {}
        }
        return;
    }

    // Everything else reaches the engine as a key token
    let token = match code {
        KeyCode::Esc => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('n') if modifiers.contains(KeyModifiers::CONTROL) => {
            app.new_game();
            return;
        }
        KeyCode::Char(c) => c.to_ascii_uppercase().to_string(),
        KeyCode::Backspace => "BACKSPACE".to_string(),
        KeyCode::Enter => "ENTER".to_string(),
        _ => return,
    };

    if let Some(intent) = Intent::from_key_token(&token) {
        app.dispatch(&intent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with_target(word: &str) -> App {
        let target = TargetWord::new(word).unwrap();
        App::new(GameState::new(target), None, None)
    }

    fn type_word(app: &mut App, word: &str) {
        for letter in word.chars() {
            app.dispatch(&Intent::AddLetter(letter));
        }
    }

    #[test]
    fn rejected_submit_reports_incomplete_row() {
        let mut app = app_with_target("POINT");
        type_word(&mut app, "CAT");
        app.dispatch(&Intent::EnterRow);

        assert_eq!(app.state.current_row(), 0);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text.contains("not complete"))
        );
    }

    #[test]
    fn winning_updates_statistics() {
        let mut app = app_with_target("POINT");
        type_word(&mut app, "POINT");
        app.dispatch(&Intent::EnterRow);

        assert_eq!(app.state.status(), GameStatus::Won);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[1], 1);
    }

    #[test]
    fn losing_updates_statistics() {
        let mut app = app_with_target("POINT");
        for _ in 0..ROWS {
            type_word(&mut app, "CRANE");
            app.dispatch(&Intent::EnterRow);
        }

        assert_eq!(app.state.status(), GameStatus::Lost);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
    }

    #[test]
    fn new_game_honors_fixed_target() {
        let mut app = app_with_target("POINT");
        app.target_override = Some(TargetWord::new("HONOR").unwrap());
        app.new_game();

        assert_eq!(app.state.target().text(), "HONOR");
        assert_eq!(app.state.status(), GameStatus::InProgress);
    }

    #[test]
    fn game_over_keys_restart_and_quit() {
        let mut app = app_with_target("POINT");
        type_word(&mut app, "POINT");
        app.dispatch(&Intent::EnterRow);

        handle_key(&mut app, KeyCode::Char('n'), KeyModifiers::NONE);
        assert_eq!(app.state.status(), GameStatus::InProgress);

        handle_key(&mut app, KeyCode::Esc, KeyModifiers::NONE);
        assert!(app.should_quit);
    }

    #[test]
    fn letters_are_dispatched_while_in_progress() {
        let mut app = app_with_target("POINT");
        handle_key(&mut app, KeyCode::Char('h'), KeyModifiers::NONE);

        assert_eq!(app.state.board().cell(0, 0).letter(), Some(b'H'));
    }
}
