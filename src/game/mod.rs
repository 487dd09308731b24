// Public API
pub use cards::{create_deck, deal, draw, shuffle, Card, CardParseError, Rank, Suit};
pub use logic::{
    validate_name, validate_rounds, Bankruptcy, Game, GameError, GameSummary, RoundReport,
};
pub use player::{Player, Seat};
pub use power::{apply_effect, PowerEffect};
pub use round::{calculate_max_bet, compare, settle_round, war_bet, RoundWinner};
pub use war::{resolve_war, WarBattle, WarEnding, WarReport};

pub mod constants;

// Internal modules
mod cards;
mod logic;
mod player;
mod power;
mod round;
mod war;
