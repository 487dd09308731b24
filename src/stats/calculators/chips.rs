use super::super::{CalculationContext, ScoreCalculator};
use crate::game::Seat;

/// Base score: the chips a side finished with.
pub struct ChipsScoreCalculator;

impl Default for ChipsScoreCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl ChipsScoreCalculator {
    pub fn new() -> Self {
        Self
    }
}

impl ScoreCalculator for ChipsScoreCalculator {
    fn calculate(&self, seat: Seat, context: &CalculationContext) -> i32 {
        context.summary.seat(seat).chips
    }

    fn priority(&self) -> u32 {
        crate::stats::calculator_priority::BASE_SCORE
    }
}
