use serde::{Deserialize, Serialize};
use tracing::debug;

use super::cards::{draw, Card};
use super::constants::{WAR_CARDS_PER_SIDE, WAR_FACE_DOWN};
use super::player::Player;
use super::round::{compare, RoundWinner};

/// The face-up pair revealed in one battle of a war.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarBattle {
    pub player_card: Card,
    pub computer_card: Card,
    pub result: RoundWinner,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarEnding {
    /// A face-up comparison broke the tie.
    Decided,
    /// One side could not field four cards and forfeited its whole deck.
    Starvation,
    /// Both sides were equally short; the pile was split.
    Split,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarReport {
    pub winner: RoundWinner,
    pub battles: Vec<WarBattle>,
    /// Cards in the pile when the war ended.
    pub pile_size: usize,
    /// Bet settled at the end, after any doubling.
    pub final_bet: i32,
    pub ending: WarEnding,
}

/// Resolves a war seeded with `war_pile` (normally the two tied cards).
///
/// While both sides hold at least four cards, each buries three and shows one;
/// the higher face-up card takes the whole pile and `bet` chips. Another tie keeps
/// the pile growing and doubles the bet. When either side is short the war ends
/// at once: the smaller deck forfeits the pile and every card it still holds, and
/// equal short decks split the pile with no chips changing hands.
///
/// Every card that enters the pile ends up in exactly one of the two decks.
pub fn resolve_war(
    player: &mut Player,
    computer: &mut Player,
    mut war_pile: Vec<Card>,
    mut bet: i32,
) -> WarReport {
    let cards_in_play = player.deck.len() + computer.deck.len() + war_pile.len();
    let mut battles = Vec::new();

    loop {
        debug_assert_eq!(
            player.deck.len() + computer.deck.len() + war_pile.len(),
            cards_in_play,
            "war pile and decks must partition the cards in play"
        );

        if player.deck.len() < WAR_CARDS_PER_SIDE || computer.deck.len() < WAR_CARDS_PER_SIDE {
            return resolve_short_war(player, computer, war_pile, bet, battles);
        }

        war_pile.extend(draw(&mut player.deck, WAR_FACE_DOWN));
        war_pile.extend(draw(&mut computer.deck, WAR_FACE_DOWN));
        let player_card = player.deck.remove(0);
        let computer_card = computer.deck.remove(0);
        war_pile.extend([player_card, computer_card]);

        let result = compare(player_card, computer_card);
        battles.push(WarBattle {
            player_card,
            computer_card,
            result,
        });
        debug!(
            battle = battles.len(),
            %player_card,
            %computer_card,
            pile = war_pile.len(),
            bet,
            "War battle"
        );

        match result {
            RoundWinner::Player => {
                return award_pile(player, computer, war_pile, bet, battles, RoundWinner::Player)
            }
            RoundWinner::Computer => {
                return award_pile(computer, player, war_pile, bet, battles, RoundWinner::Computer)
            }
            RoundWinner::Tie => bet = bet.saturating_mul(2),
        }
    }
}

fn award_pile(
    victor: &mut Player,
    loser: &mut Player,
    war_pile: Vec<Card>,
    bet: i32,
    battles: Vec<WarBattle>,
    winner: RoundWinner,
) -> WarReport {
    let pile_size = war_pile.len();
    victor.deck.extend(war_pile);
    victor.cards_won = victor.cards_won.saturating_add(pile_size as i32);
    loser.pay(victor, bet);

    WarReport {
        winner,
        battles,
        pile_size,
        final_bet: bet,
        ending: WarEnding::Decided,
    }
}

fn resolve_short_war(
    player: &mut Player,
    computer: &mut Player,
    war_pile: Vec<Card>,
    bet: i32,
    battles: Vec<WarBattle>,
) -> WarReport {
    let pile_size = war_pile.len();
    debug!(
        player_cards = player.deck.len(),
        computer_cards = computer.deck.len(),
        pile = pile_size,
        "War cannot continue"
    );

    let (victor, loser, winner) = match player.deck.len().cmp(&computer.deck.len()) {
        std::cmp::Ordering::Less => (computer, player, RoundWinner::Computer),
        std::cmp::Ordering::Greater => (player, computer, RoundWinner::Player),
        std::cmp::Ordering::Equal => {
            let mut war_pile = war_pile;
            let computer_share = war_pile.split_off(pile_size / 2);
            let half = (pile_size / 2) as i32;
            player.deck.extend(war_pile);
            computer.deck.extend(computer_share);
            player.cards_won = player.cards_won.saturating_add(half);
            computer.cards_won = computer.cards_won.saturating_add(half);

            return WarReport {
                winner: RoundWinner::Tie,
                battles,
                pile_size,
                final_bet: bet,
                ending: WarEnding::Split,
            };
        }
    };

    victor.deck.extend(war_pile);
    victor.deck.append(&mut loser.deck);
    victor.cards_won = victor.cards_won.saturating_add(pile_size as i32);
    loser.pay(victor, bet);

    WarReport {
        winner,
        battles,
        pile_size,
        final_bet: bet,
        ending: WarEnding::Starvation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::cards::{create_deck, Rank, Suit};

    fn c(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    fn filler(count: usize, skip: usize) -> Vec<Card> {
        create_deck().into_iter().skip(skip).take(count).collect()
    }

    #[test]
    fn test_decided_war_awards_whole_pile() {
        let tied = vec![c(Rank::Seven, Suit::Spades), c(Rank::Seven, Suit::Hearts)];
        let mut player_deck = filler(3, 20);
        player_deck.push(c(Rank::King, Suit::Clubs));
        player_deck.push(c(Rank::Two, Suit::Clubs));
        let mut computer_deck = filler(3, 30);
        computer_deck.push(c(Rank::Five, Suit::Diamonds));

        let mut player = Player::with_deck("p", player_deck);
        let mut computer = Player::with_deck("c", computer_deck);

        let report = resolve_war(&mut player, &mut computer, tied, 10);

        assert_eq!(report.winner, RoundWinner::Player);
        assert_eq!(report.ending, WarEnding::Decided);
        assert_eq!(report.pile_size, 10);
        assert_eq!(report.battles.len(), 1);
        // The untouched card stays at the front, the pile follows it.
        assert_eq!(player.deck.len(), 11);
        assert_eq!(player.deck[0], c(Rank::Two, Suit::Clubs));
        assert_eq!(player.cards_won, 10);
        assert_eq!(player.chips, 110);
        assert_eq!(computer.chips, 90);
        assert!(computer.deck.is_empty());
    }

    #[test]
    fn test_repeated_tie_doubles_bet_and_keeps_pile() {
        let tied = vec![c(Rank::Four, Suit::Spades), c(Rank::Four, Suit::Hearts)];
        let mut player_deck = filler(3, 10);
        player_deck.push(c(Rank::Nine, Suit::Clubs));
        player_deck.extend(filler(3, 20));
        player_deck.push(c(Rank::Two, Suit::Clubs));
        let mut computer_deck = filler(3, 30);
        computer_deck.push(c(Rank::Nine, Suit::Diamonds));
        computer_deck.extend(filler(3, 40));
        computer_deck.push(c(Rank::Ace, Suit::Diamonds));

        let mut player = Player::with_deck("p", player_deck);
        let mut computer = Player::with_deck("c", computer_deck);

        let report = resolve_war(&mut player, &mut computer, tied, 4);

        assert_eq!(report.winner, RoundWinner::Computer);
        assert_eq!(report.battles.len(), 2);
        assert_eq!(report.battles[0].result, RoundWinner::Tie);
        assert_eq!(report.final_bet, 8);
        assert_eq!(report.pile_size, 18);
        assert_eq!(computer.deck.len(), 18);
        assert_eq!(computer.cards_won, 18);
        assert_eq!(computer.chips, 108);
        assert_eq!(player.chips, 92);
    }

    #[test]
    fn test_tie_then_starvation_uses_doubled_bet() {
        let tied = vec![c(Rank::Four, Suit::Spades), c(Rank::Four, Suit::Hearts)];
        let mut player_deck = filler(3, 10);
        player_deck.push(c(Rank::Nine, Suit::Clubs));
        player_deck.extend(filler(2, 20));
        let mut computer_deck = filler(3, 30);
        computer_deck.push(c(Rank::Nine, Suit::Diamonds));
        computer_deck.extend(filler(4, 40));

        let mut player = Player::with_deck("p", player_deck);
        let mut computer = Player::with_deck("c", computer_deck);

        let report = resolve_war(&mut player, &mut computer, tied, 5);

        assert_eq!(report.ending, WarEnding::Starvation);
        assert_eq!(report.winner, RoundWinner::Computer);
        assert_eq!(report.final_bet, 10);
        assert!(player.deck.is_empty());
        assert_eq!(computer.deck.len(), 10 + 2 + 4);
        assert_eq!(computer.cards_won, 10);
        assert_eq!(player.chips, 90);
    }

    #[test]
    fn test_short_player_forfeits_deck() {
        let pile = vec![c(Rank::Jack, Suit::Spades), c(Rank::Jack, Suit::Hearts)];
        let player_deck = filler(3, 0);
        let computer_deck = filler(5, 10);
        let mut player = Player::with_deck("p", player_deck.clone());
        let mut computer = Player::with_deck("c", computer_deck.clone());

        let report = resolve_war(&mut player, &mut computer, pile.clone(), 6);

        assert_eq!(report.winner, RoundWinner::Computer);
        assert_eq!(report.ending, WarEnding::Starvation);
        assert!(report.battles.is_empty());
        assert!(player.deck.is_empty());

        let mut expected = computer_deck;
        expected.extend(pile);
        expected.extend(player_deck);
        assert_eq!(computer.deck, expected);
        assert_eq!(computer.cards_won, 2);
        assert_eq!(computer.chips, 106);
        assert_eq!(player.chips, 94);
    }

    #[test]
    fn test_short_computer_forfeits_deck() {
        let pile = vec![c(Rank::Six, Suit::Spades), c(Rank::Six, Suit::Clubs)];
        let mut player = Player::with_deck("p", filler(4, 0));
        let mut computer = Player::with_deck("c", filler(1, 10));

        let report = resolve_war(&mut player, &mut computer, pile, 3);

        assert_eq!(report.winner, RoundWinner::Player);
        assert_eq!(player.deck.len(), 7);
        assert!(computer.deck.is_empty());
        assert_eq!(player.chips, 103);
    }

    #[test]
    fn test_equal_short_decks_split_pile() {
        let pile = filler(4, 0);
        let mut player = Player::new("p");
        let mut computer = Player::new("c");

        let report = resolve_war(&mut player, &mut computer, pile.clone(), 9);

        assert_eq!(report.winner, RoundWinner::Tie);
        assert_eq!(report.ending, WarEnding::Split);
        assert_eq!(player.deck, pile[..2]);
        assert_eq!(computer.deck, pile[2..]);
        assert_eq!(player.cards_won, 2);
        assert_eq!(computer.cards_won, 2);
        assert_eq!(player.chips, 100);
        assert_eq!(computer.chips, 100);
    }

    #[test]
    fn test_odd_pile_split_gives_extra_card_to_computer() {
        let pile = filler(5, 0);
        let mut player = Player::with_deck("p", filler(2, 10));
        let mut computer = Player::with_deck("c", filler(2, 20));

        resolve_war(&mut player, &mut computer, pile, 1);

        assert_eq!(player.deck.len(), 4);
        assert_eq!(computer.deck.len(), 5);
        assert_eq!(player.cards_won, 2);
        assert_eq!(computer.cards_won, 2);
    }

    #[test]
    fn test_bet_doubling_saturates() {
        let tied = vec![c(Rank::Four, Suit::Spades), c(Rank::Four, Suit::Hearts)];
        let mut player_deck = filler(3, 10);
        player_deck.push(c(Rank::Nine, Suit::Clubs));
        let mut computer_deck = filler(3, 30);
        computer_deck.push(c(Rank::Nine, Suit::Diamonds));
        let mut player = Player::with_deck("p", player_deck);
        let mut computer = Player::with_deck("c", computer_deck);

        let report = resolve_war(&mut player, &mut computer, tied, i32::MAX);

        assert_eq!(report.final_bet, i32::MAX);
        assert_eq!(report.ending, WarEnding::Split);
    }
}
