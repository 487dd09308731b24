use serde::{Deserialize, Serialize};

use super::cards::Card;
use super::constants::INITIAL_CHIPS;

/// Which side of the table a player sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    Player,
    Computer,
}

/// One side of the table. The deck front is the next card to be played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub deck: Vec<Card>,
    /// May dip below zero until the round's bankruptcy check runs.
    pub chips: i32,
    /// Can go negative after repeated Jack steals against this side.
    pub cards_won: i32,
    pub score: i32,
    /// Set by an Ace. Nothing consumes it yet.
    pub protected: bool,
    pub bankruptcies: u32,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            deck: Vec::new(),
            chips: INITIAL_CHIPS,
            cards_won: 0,
            score: 0,
            protected: false,
            bankruptcies: 0,
        }
    }

    pub fn with_deck(name: impl Into<String>, deck: Vec<Card>) -> Self {
        Self {
            deck,
            ..Self::new(name)
        }
    }

    pub fn card_count(&self) -> usize {
        self.deck.len()
    }

    pub fn is_out_of_cards(&self) -> bool {
        self.deck.is_empty()
    }

    pub fn is_bankrupt(&self) -> bool {
        self.chips <= 0
    }

    /// Moves the chips of a lost wager to `winner`.
    pub fn pay(&mut self, winner: &mut Player, amount: i32) {
        self.chips = self.chips.saturating_sub(amount);
        winner.chips = winner.chips.saturating_add(amount);
    }
}
