// Library crate for the War card game
// This file exposes the public API for the binary and integration tests

pub mod cli;
pub mod game;
pub mod shared;
pub mod stats;

use std::sync::Arc;

// Re-export commonly used types for easier access in tests
pub use cli::{App, AppExit, PromptError, Prompter, TerminalPrompter};
pub use game::{Card, Game, GameError, Player, Rank, RoundWinner, Suit};
pub use shared::{AppConfig, AppError};
pub use stats::{HighScoreEntry, JsonFileLeaderboard, LeaderboardRepository, StatsService};

/// Plays on the process's stdin/stdout until the player quits.
pub fn run_terminal(config: AppConfig) -> Result<AppExit, AppError> {
    let repository = Arc::new(JsonFileLeaderboard::new(config.leaderboard_path.clone()));
    let stats = StatsService::builder(repository).build();

    let mut app = App::new(TerminalPrompter::stdio(), stats, config.seed, config.pace);
    Ok(app.run()?)
}
