use serde::{Deserialize, Serialize};

use super::cards::Card;
use super::constants::MINIMUM_BET;
use super::player::Player;

/// Outcome of a comparison, a war, or a whole game, seen from the human's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundWinner {
    Player,
    Computer,
    Tie,
}

/// Compares two cards by rank alone; suits never matter.
pub fn compare(player_card: Card, computer_card: Card) -> RoundWinner {
    match player_card.rank.cmp(&computer_card.rank) {
        std::cmp::Ordering::Greater => RoundWinner::Player,
        std::cmp::Ordering::Less => RoundWinner::Computer,
        std::cmp::Ordering::Equal => RoundWinner::Tie,
    }
}

/// Settles a decided round: the winner appends their own card and then the
/// loser's, gains two toward `cards_won`, and takes `stake` chips from the loser.
/// A tie is left untouched for the war resolver.
pub fn settle_round(
    winner: RoundWinner,
    player: &mut Player,
    computer: &mut Player,
    player_card: Card,
    computer_card: Card,
    stake: i32,
) {
    let (victor, loser, cards) = match winner {
        RoundWinner::Player => (player, computer, [player_card, computer_card]),
        RoundWinner::Computer => (computer, player, [computer_card, player_card]),
        RoundWinner::Tie => return,
    };

    victor.deck.extend(cards);
    victor.cards_won += 2;
    loser.pay(victor, stake);
}

/// Largest wager allowed this round: an even share of the remaining chips per
/// remaining round, never more than the stack and never below the minimum bet.
pub fn calculate_max_bet(chips: i32, remaining_rounds: u32) -> i32 {
    let remaining = i32::try_from(remaining_rounds.max(1)).unwrap_or(i32::MAX);
    MINIMUM_BET.max((chips / remaining).min(chips))
}

/// Stake carried into a war. Capped by both stacks so neither side can wager
/// more than it holds; a side already in debt contributes nothing.
pub fn war_bet(stake: i32, player: &Player, computer: &Player) -> i32 {
    stake.min(player.chips).min(computer.chips).max(0)
}
