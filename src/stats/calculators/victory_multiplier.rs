use super::super::{CalculationContext, ScoreCalculator};
use crate::game::Seat;

/// Doubles the winner's score when it is positive.
pub struct VictoryMultiplierCalculator;

impl Default for VictoryMultiplierCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl VictoryMultiplierCalculator {
    pub fn new() -> Self {
        Self
    }
}

impl ScoreCalculator for VictoryMultiplierCalculator {
    fn calculate(&self, seat: Seat, context: &CalculationContext) -> i32 {
        let base_score = context.current_score(seat);

        if context.summary.is_winner(seat) && base_score > 0 {
            base_score.saturating_mul(2)
        } else {
            base_score
        }
    }

    fn priority(&self) -> u32 {
        crate::stats::calculator_priority::MULTIPLIER
    }
}
