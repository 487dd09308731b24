pub mod calculators;
pub mod service;

mod errors;
pub mod models;
pub mod repository;

pub use errors::StatsError;
pub use models::*;
pub use repository::{InMemoryLeaderboard, JsonFileLeaderboard, LeaderboardRepository};
pub use service::{StatsService, StatsServiceBuilder};

use std::collections::HashMap;

use crate::game::{GameSummary, Seat};

/// Priority constants for score calculators.
/// Lower values run first. Calculators with higher priority
/// can access and modify scores from lower-priority calculators.
pub mod calculator_priority {
    /// Base score calculation (final chips)
    pub const BASE_SCORE: u32 = 100;
    /// Additive bonuses (e.g., cards won)
    pub const BONUS: u32 = 150;
    /// Score multipliers (e.g., game winner doubles score)
    pub const MULTIPLIER: u32 = 200;
}

pub trait ScoreCalculator: Send + Sync {
    fn calculate(&self, seat: Seat, context: &CalculationContext) -> i32;

    fn priority(&self) -> u32;
}

pub struct CalculationContext<'a> {
    pub summary: &'a GameSummary,
    pub current_scores: &'a HashMap<Seat, i32>,
}

impl<'a> CalculationContext<'a> {
    pub fn new(summary: &'a GameSummary, current_scores: &'a HashMap<Seat, i32>) -> Self {
        Self {
            summary,
            current_scores,
        }
    }

    pub fn current_score(&self, seat: Seat) -> i32 {
        self.current_scores.get(&seat).copied().unwrap_or_default()
    }
}
