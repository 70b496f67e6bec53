//! Wordle Game
//!
//! Turn-based guessing-game logic for a word puzzle: a pure reducer-style
//! engine with a two-pass row scorer and a monotonic per-letter
//! aggregator, plus terminal front-ends that drive it through intents.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::TargetWord;
//! use wordle_game::engine::{GameState, Intent, transition};
//!
//! let state = GameState::new(TargetWord::new("point").unwrap());
//! let state = transition(&state, &Intent::AddLetter('P'));
//! assert_eq!(state.board().cell(0, 0).letter(), Some(b'P'));
//! ```

// Core domain types
pub mod core;

// State store and transition function
pub mod engine;

// Row scoring and letter aggregation
pub mod scoring;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
