//! Wordle Game - CLI
//!
//! Playable Wordle in the terminal: TUI mode, plain interactive mode,
//! and a one-shot scoring command.

use anyhow::Result;
use clap::{Parser, Subcommand};
use wordle_game::{
    commands::{SimpleConfig, run_simple, score_guess},
    core::TargetWord,
    engine::GameState,
    interactive::{App, run_tui},
    output::print_score_report,
    wordlists::{self, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Play Wordle in the terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Fix the target word instead of picking randomly
    #[arg(long, global = true)]
    word: Option<String>,

    /// Path to a custom word list for random target picks
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive game without TUI)
    Simple,

    /// Score a single guess against a target word
    Score {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let target = cli.word.as_deref().map(parse_target).transpose()?;
    let pool = cli.wordlist.as_deref().map(load_pool).transpose()?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(target, pool),
        Commands::Simple => {
            let config = SimpleConfig { target, pool };
            run_simple(&config).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Score { guess, target } => {
            let report = score_guess(&guess, &target).map_err(|e| anyhow::anyhow!(e))?;
            print_score_report(&report);
            Ok(())
        }
    }
}

fn parse_target(word: &str) -> Result<TargetWord> {
    TargetWord::new(word).map_err(|e| anyhow::anyhow!("Invalid --word: {e}"))
}

/// Load a custom word list, rejecting files with no usable entries
fn load_pool(path: &str) -> Result<Vec<TargetWord>> {
    let words = load_from_file(path)?;
    if words.is_empty() {
        anyhow::bail!("Word list '{path}' contains no valid words");
    }
    Ok(words)
}

fn run_play_command(target: Option<TargetWord>, pool: Option<Vec<TargetWord>>) -> Result<()> {
    let initial = match (&target, &pool) {
        (Some(word), _) => GameState::new(word.clone()),
        (None, Some(pool)) => GameState::new(wordlists::random_target_from(pool)),
        (None, None) => GameState::random(),
    };

    let app = App::new(initial, target, pool);
    run_tui(app)
}
