use serde::{Deserialize, Serialize};

use super::cards::{draw, Card, Rank};
use super::constants::{JACK_STEAL, KING_MULTIPLIER, QUEEN_BONUS};
use super::player::Player;

/// Side effect triggered by a face card shown by the human player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerEffect {
    /// Jack: cards taken from the front of the opponent's deck.
    Steal { cards: Vec<Card> },
    /// Queen: chips added to the player's stack.
    ChipBonus { amount: i32 },
    /// King: the round's stake is multiplied.
    DoubleStakes,
    /// Ace: marks the player as protected.
    Shield,
    None,
}

impl PowerEffect {
    pub fn multiplier(&self) -> i32 {
        match self {
            PowerEffect::DoubleStakes => KING_MULTIPLIER,
            _ => 1,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, PowerEffect::None)
    }
}

/// Applies the effect of `card` for `player` against `opponent`.
///
/// A Jack always moves two points of `cards_won` even when the opponent had
/// fewer than two cards to give, so the opponent's counter can go negative.
pub fn apply_effect(card: Card, player: &mut Player, opponent: &mut Player) -> PowerEffect {
    match card.rank {
        Rank::Jack => {
            let stolen = draw(&mut opponent.deck, JACK_STEAL);
            player.deck.extend(stolen.iter().copied());
            player.cards_won += JACK_STEAL as i32;
            opponent.cards_won -= JACK_STEAL as i32;
            PowerEffect::Steal { cards: stolen }
        }
        Rank::Queen => {
            player.chips = player.chips.saturating_add(QUEEN_BONUS);
            PowerEffect::ChipBonus {
                amount: QUEEN_BONUS,
            }
        }
        Rank::King => PowerEffect::DoubleStakes,
        Rank::Ace => {
            player.protected = true;
            PowerEffect::Shield
        }
        _ => PowerEffect::None,
    }
}
