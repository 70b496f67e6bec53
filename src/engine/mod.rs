//! Game state store
//!
//! The reducer-style engine: immutable state snapshots, a closed intent
//! type, and the single transition entry point.

mod intent;
mod state;
mod transition;

pub use intent::Intent;
pub use state::{GameState, GameStatus};
pub use transition::transition;
