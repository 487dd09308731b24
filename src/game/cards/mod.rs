pub mod basic;
pub mod deck;

pub use basic::{Card, Rank, Suit};
pub use deck::{create_deck, deal, draw, shuffle};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CardParseError {
    #[error("Invalid rank: {0}")]
    InvalidRank(String),
    #[error("Invalid suit: {0}")]
    InvalidSuit(String),
    #[error("Malformed card: {0:?}")]
    Malformed(String),
}
