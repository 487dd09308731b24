mod cards_won;
mod chips;
mod victory_multiplier;

pub use cards_won::CardsWonScoreCalculator;
pub use chips::ChipsScoreCalculator;
pub use victory_multiplier::VictoryMultiplierCalculator;
