#![allow(dead_code)]

use std::collections::HashMap;

use war_cards::game::constants::COMPUTER_NAME;
use war_cards::{Card, Game, Player};

// ============================================================================
// Card Creation Macro
// ============================================================================

/// `cards![Ten Hearts, Ace Spades]` builds a `Vec<Card>` in the given order.
#[macro_export]
macro_rules! cards {
    ($($rank:ident $suit:ident),* $(,)?) => {
        vec![$(war_cards::Card::new(war_cards::Rank::$rank, war_cards::Suit::$suit)),*]
    };
}

/// `count` distinct cards from the unshuffled deck, starting at `skip`.
pub fn filler_cards(count: usize, skip: usize) -> Vec<Card> {
    war_cards::game::create_deck()
        .into_iter()
        .skip(skip)
        .take(count)
        .collect()
}

/// Counts each (rank, suit) pair so card conservation can be compared.
pub fn card_multiset<'a>(groups: impl IntoIterator<Item = &'a [Card]>) -> HashMap<Card, usize> {
    let mut counts = HashMap::new();
    for group in groups {
        for card in group {
            *counts.entry(*card).or_insert(0) += 1;
        }
    }
    counts
}

// ============================================================================
// Game Setup Utilities
// ============================================================================

pub struct GameBuilder {
    name: String,
    player_deck: Vec<Card>,
    computer_deck: Vec<Card>,
    player_chips: Option<i32>,
    computer_chips: Option<i32>,
    rounds: u32,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self {
            name: "Ada".to_string(),
            player_deck: vec![],
            computer_deck: vec![],
            player_chips: None,
            computer_chips: None,
            rounds: 4,
        }
    }

    pub fn named(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn player_deck(mut self, deck: Vec<Card>) -> Self {
        self.player_deck = deck;
        self
    }

    pub fn computer_deck(mut self, deck: Vec<Card>) -> Self {
        self.computer_deck = deck;
        self
    }

    pub fn player_chips(mut self, chips: i32) -> Self {
        self.player_chips = Some(chips);
        self
    }

    pub fn computer_chips(mut self, chips: i32) -> Self {
        self.computer_chips = Some(chips);
        self
    }

    pub fn rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    pub fn build_players(&self) -> (Player, Player) {
        let mut player = Player::with_deck(self.name.clone(), self.player_deck.clone());
        let mut computer = Player::with_deck(COMPUTER_NAME, self.computer_deck.clone());
        if let Some(chips) = self.player_chips {
            player.chips = chips;
        }
        if let Some(chips) = self.computer_chips {
            computer.chips = chips;
        }
        (player, computer)
    }

    pub fn build(self) -> Game {
        let (player, computer) = self.build_players();
        Game::new(player, computer, self.rounds)
    }
}
