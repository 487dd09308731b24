use super::super::{CalculationContext, ScoreCalculator};
use crate::game::Seat;

/// Adds the side's `cards_won` counter to the running score.
pub struct CardsWonScoreCalculator;

impl Default for CardsWonScoreCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl CardsWonScoreCalculator {
    pub fn new() -> Self {
        Self
    }
}

impl ScoreCalculator for CardsWonScoreCalculator {
    fn calculate(&self, seat: Seat, context: &CalculationContext) -> i32 {
        context
            .current_score(seat)
            .saturating_add(context.summary.seat(seat).cards_won)
    }

    fn priority(&self) -> u32 {
        crate::stats::calculator_priority::BONUS
    }
}
