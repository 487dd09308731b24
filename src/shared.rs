use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::cli::PromptError;

pub const DEFAULT_LEADERBOARD_PATH: &str = "leaderboard.json";
pub const DEFAULT_PACE_MS: u64 = 600;

/// Runtime settings resolved from the command line and environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub leaderboard_path: PathBuf,
    /// Fixed shuffle seed; `None` draws from the thread RNG.
    pub seed: Option<u64>,
    /// Delay between revealed lines; zero disables it.
    pub pace: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            leaderboard_path: PathBuf::from(DEFAULT_LEADERBOARD_PATH),
            seed: None,
            pace: Duration::from_millis(DEFAULT_PACE_MS),
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Input error: {0}")]
    Prompt(#[from] PromptError),

    #[error("Internal error: {0}")]
    Internal(String),
}
