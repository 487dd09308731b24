// A game is one human against the computer for a fixed number of rounds.
// The engine never prints; every round returns a report for the presentation layer.
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::cards::{create_deck, deal, draw, shuffle, Card};
use super::constants::{
    BANKRUPTCY_TRANSFER, COMPUTER_NAME, MAX_NAME_LEN, MAX_ROUNDS, MINIMUM_BET, MIN_ROUNDS,
};
use super::player::{Player, Seat};
use super::power::{apply_effect, PowerEffect};
use super::round::{calculate_max_bet, compare, settle_round, war_bet, RoundWinner};
use super::war::{resolve_war, WarReport};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("Name must be between 1 and 20 characters")]
    InvalidName,
    #[error("Rounds must be between 4 and 26, got {0}")]
    InvalidRounds(u32),
    #[error("Bet must be between {min} and {max}, got {bet}")]
    InvalidBet { bet: i32, min: i32, max: i32 },
    #[error("The game is already over")]
    GameOver,
}

/// A side that went bankrupt and the chips it received from the other side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bankruptcy {
    pub side: Seat,
    pub transferred: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    pub round: u32,
    pub player_card: Card,
    pub computer_card: Card,
    pub effect: PowerEffect,
    pub bet: i32,
    /// Bet after the power-card multiplier.
    pub stake: i32,
    pub winner: RoundWinner,
    pub war: Option<WarReport>,
    pub bankruptcies: Vec<Bankruptcy>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSummary {
    pub player: Player,
    pub computer: Player,
    pub rounds_played: u32,
    pub total_rounds: u32,
    pub winner: RoundWinner,
    pub completed_at: DateTime<Utc>,
}

impl GameSummary {
    pub fn seat(&self, seat: Seat) -> &Player {
        match seat {
            Seat::Player => &self.player,
            Seat::Computer => &self.computer,
        }
    }

    pub fn seat_mut(&mut self, seat: Seat) -> &mut Player {
        match seat {
            Seat::Player => &mut self.player,
            Seat::Computer => &mut self.computer,
        }
    }

    pub fn is_winner(&self, seat: Seat) -> bool {
        matches!(
            (seat, self.winner),
            (Seat::Player, RoundWinner::Player) | (Seat::Computer, RoundWinner::Computer)
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    player: Player,
    computer: Player,
    total_rounds: u32,
    rounds_played: u32,
}

impl Game {
    pub fn new(player: Player, computer: Player, total_rounds: u32) -> Self {
        Self {
            player,
            computer,
            total_rounds,
            rounds_played: 0,
        }
    }

    /// Validates the setup, shuffles a fresh deck and deals half to each side.
    pub fn new_game<R: Rng + ?Sized>(
        player_name: &str,
        total_rounds: u32,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let name = validate_name(player_name)?;
        validate_rounds(total_rounds)?;

        let mut deck = create_deck();
        shuffle(&mut deck, rng);
        let (player_deck, computer_deck) = deal(deck);

        info!(player = %name, rounds = total_rounds, "Starting new game");

        Ok(Self::new(
            Player::with_deck(name, player_deck),
            Player::with_deck(COMPUTER_NAME, computer_deck),
            total_rounds,
        ))
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn computer(&self) -> &Player {
        &self.computer
    }

    pub fn total_rounds(&self) -> u32 {
        self.total_rounds
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Rounds left including the one about to be played.
    pub fn remaining_rounds(&self) -> u32 {
        self.total_rounds.saturating_sub(self.rounds_played)
    }

    pub fn max_bet(&self) -> i32 {
        calculate_max_bet(self.player.chips, self.remaining_rounds())
    }

    pub fn is_over(&self) -> bool {
        self.remaining_rounds() == 0
            || self.player.is_out_of_cards()
            || self.computer.is_out_of_cards()
    }

    /// More cards wins; equal decks fall back to chips.
    pub fn winner(&self) -> RoundWinner {
        let by_cards = self.player.card_count().cmp(&self.computer.card_count());
        match by_cards.then(self.player.chips.cmp(&self.computer.chips)) {
            std::cmp::Ordering::Greater => RoundWinner::Player,
            std::cmp::Ordering::Less => RoundWinner::Computer,
            std::cmp::Ordering::Equal => RoundWinner::Tie,
        }
    }

    pub fn play_round(&mut self, bet: i32) -> Result<RoundReport, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        let max = self.max_bet();
        if !(MINIMUM_BET..=max).contains(&bet) {
            return Err(GameError::InvalidBet {
                bet,
                min: MINIMUM_BET,
                max,
            });
        }

        let round = self.rounds_played + 1;
        let (player_card, computer_card) = match (
            draw(&mut self.player.deck, 1).pop(),
            draw(&mut self.computer.deck, 1).pop(),
        ) {
            (Some(p), Some(c)) => (p, c),
            _ => return Err(GameError::GameOver),
        };

        let effect = apply_effect(player_card, &mut self.player, &mut self.computer);
        let stake = bet.saturating_mul(effect.multiplier());

        let winner = compare(player_card, computer_card);
        debug!(
            round,
            %player_card,
            %computer_card,
            ?effect,
            stake,
            ?winner,
            "Round drawn"
        );

        let mut war = None;
        match winner {
            RoundWinner::Tie => {
                let bet = war_bet(stake, &self.player, &self.computer);
                let report = resolve_war(
                    &mut self.player,
                    &mut self.computer,
                    vec![player_card, computer_card],
                    bet,
                );
                info!(
                    round,
                    winner = ?report.winner,
                    pile = report.pile_size,
                    bet = report.final_bet,
                    "War resolved"
                );
                war = Some(report);
            }
            decided => settle_round(
                decided,
                &mut self.player,
                &mut self.computer,
                player_card,
                computer_card,
                stake,
            ),
        }

        let bankruptcies = self.apply_bankruptcy();
        self.rounds_played = round;

        Ok(RoundReport {
            round,
            player_card,
            computer_card,
            effect,
            bet,
            stake,
            winner: war.as_ref().map(|w| w.winner).unwrap_or(winner),
            war,
            bankruptcies,
        })
    }

    /// Bails out each bankrupt side once, player first, from the other side's stack.
    fn apply_bankruptcy(&mut self) -> Vec<Bankruptcy> {
        let mut bankruptcies = Vec::new();

        if self.player.is_bankrupt() {
            self.computer.pay(&mut self.player, BANKRUPTCY_TRANSFER);
            self.player.bankruptcies += 1;
            bankruptcies.push(Bankruptcy {
                side: Seat::Player,
                transferred: BANKRUPTCY_TRANSFER,
            });
        }
        if self.computer.is_bankrupt() {
            self.player.pay(&mut self.computer, BANKRUPTCY_TRANSFER);
            self.computer.bankruptcies += 1;
            bankruptcies.push(Bankruptcy {
                side: Seat::Computer,
                transferred: BANKRUPTCY_TRANSFER,
            });
        }

        for b in &bankruptcies {
            info!(side = ?b.side, transferred = b.transferred, "Bankruptcy transfer");
        }
        bankruptcies
    }

    /// Ends the game and hands back both players for scoring.
    pub fn finish(self) -> GameSummary {
        let winner = self.winner();
        info!(
            rounds = self.rounds_played,
            ?winner,
            player_cards = self.player.card_count(),
            computer_cards = self.computer.card_count(),
            "Game finished"
        );

        GameSummary {
            player: self.player,
            computer: self.computer,
            rounds_played: self.rounds_played,
            total_rounds: self.total_rounds,
            winner,
            completed_at: Utc::now(),
        }
    }
}

pub fn validate_name(name: &str) -> Result<String, GameError> {
    let name = name.trim();
    let len = name.chars().count();
    if len == 0 || len > MAX_NAME_LEN {
        return Err(GameError::InvalidName);
    }
    Ok(name.to_string())
}

pub fn validate_rounds(rounds: u32) -> Result<u32, GameError> {
    if (MIN_ROUNDS..=MAX_ROUNDS).contains(&rounds) {
        Ok(rounds)
    } else {
        Err(GameError::InvalidRounds(rounds))
    }
}
