// Text rendering for the terminal front end. Everything returns a String so the
// engine's reports can be checked without a terminal.
use crate::game::{
    Card, Game, GameSummary, PowerEffect, RoundReport, RoundWinner, Seat, WarEnding, WarReport,
};
use crate::stats::{GameResult, HighScoreEntry};

pub fn card_art(card: &Card) -> String {
    let rank = card.rank.symbol();
    let pad = if rank.len() == 1 { " " } else { "" };
    format!(
        "+-------+\n\
         |{rank}{pad}     |\n\
         |       |\n\
         |   {suit}   |\n\
         |       |\n\
         |     {pad}{rank}|\n\
         +-------+",
        suit = card.suit,
    )
}

/// Two cards printed next to each other with a caption above each.
pub fn card_pair(left_caption: &str, left: &Card, right_caption: &str, right: &Card) -> String {
    let left_art = card_art(left);
    let right_art = card_art(right);
    let mut lines = vec![format!("{left_caption:<14}{right_caption}")];
    for (l, r) in left_art.lines().zip(right_art.lines()) {
        lines.push(format!("{l}     {r}"));
    }
    lines.join("\n")
}

pub fn effect_line(effect: &PowerEffect) -> Option<String> {
    let line = match effect {
        PowerEffect::Steal { cards } => {
            let stolen: Vec<String> = cards.iter().map(|c| c.to_string()).collect();
            if stolen.is_empty() {
                "Jack! The computer had no cards left to steal.".to_string()
            } else {
                format!("Jack! You steal {} from the computer.", stolen.join(", "))
            }
        }
        PowerEffect::ChipBonus { amount } => format!("Queen! You gain {amount} bonus chips."),
        PowerEffect::DoubleStakes => "King! The stakes are doubled this round.".to_string(),
        PowerEffect::Shield => "Ace! You are protected.".to_string(),
        PowerEffect::None => return None,
    };
    Some(line)
}

pub fn war_lines(war: &WarReport) -> Vec<String> {
    let mut lines = Vec::new();
    for (index, battle) in war.battles.iter().enumerate() {
        if index > 0 {
            lines.push("The war continues! The stakes double...".to_string());
        }
        lines.push(
            "War! Each player puts down 3 face-down cards and 1 face-up card...".to_string(),
        );
        lines.push(card_pair(
            "Your card:",
            &battle.player_card,
            "Computer:",
            &battle.computer_card,
        ));
    }

    let outcome = match (war.ending, war.winner) {
        (WarEnding::Split, _) => format!(
            "Neither side can continue the war. The {} cards are split evenly.",
            war.pile_size
        ),
        (WarEnding::Starvation, RoundWinner::Player) => format!(
            "The computer runs out of cards! You take the war pile of {} and its remaining deck.",
            war.pile_size
        ),
        (WarEnding::Starvation, _) => format!(
            "You run out of cards! The computer takes the war pile of {} and your remaining deck.",
            war.pile_size
        ),
        (WarEnding::Decided, RoundWinner::Player) => format!(
            "You win the war! {} cards and {} chips are yours.",
            war.pile_size, war.final_bet
        ),
        (WarEnding::Decided, _) => format!(
            "Computer wins the war! It takes {} cards and {} chips.",
            war.pile_size, war.final_bet
        ),
    };
    lines.push(outcome);
    lines
}

/// Everything the player should see about one round, in order.
pub fn round_lines(report: &RoundReport) -> Vec<String> {
    let mut lines = vec![card_pair(
        "Your card:",
        &report.player_card,
        "Computer:",
        &report.computer_card,
    )];

    if let Some(effect) = effect_line(&report.effect) {
        lines.push(effect);
    }

    match &report.war {
        Some(war) => lines.extend(war_lines(war)),
        None => lines.push(match report.winner {
            RoundWinner::Player => format!("You win this round and {} chips!", report.stake),
            _ => format!("Computer wins this round. You lose {} chips.", report.stake),
        }),
    }

    for bankruptcy in &report.bankruptcies {
        lines.push(match bankruptcy.side {
            Seat::Player => format!(
                "You are bankrupt! The computer hands you {} chips.",
                bankruptcy.transferred
            ),
            Seat::Computer => format!(
                "The computer is bankrupt! You hand it {} chips.",
                bankruptcy.transferred
            ),
        });
    }

    lines
}

pub fn status_line(game: &Game) -> String {
    format!(
        "Round {}/{} | You: {} cards, {} chips | Computer: {} cards, {} chips",
        game.rounds_played() + 1,
        game.total_rounds(),
        game.player().card_count(),
        game.player().chips,
        game.computer().card_count(),
        game.computer().chips,
    )
}

pub fn summary_lines(summary: &GameSummary, result: &GameResult) -> Vec<String> {
    let headline = match summary.winner {
        RoundWinner::Player => "Congratulations, you win the game!",
        RoundWinner::Computer => "The computer wins the game.",
        RoundWinner::Tie => "The game ends in a tie.",
    };

    let mut lines = vec![
        "=== Game Over ===".to_string(),
        headline.to_string(),
        format!(
            "Rounds played: {}/{}",
            summary.rounds_played, summary.total_rounds
        ),
    ];
    for player in &result.players {
        lines.push(format!(
            "{}: {} cards held, {} cards won, {} chips, score {}",
            player.name, player.cards_held, player.cards_won, player.chips, player.final_score
        ));
    }
    lines
}

pub fn leaderboard_table(entries: &[HighScoreEntry]) -> String {
    if entries.is_empty() {
        return "No high scores yet.".to_string();
    }

    let mut lines = vec![
        "=== High Scores ===".to_string(),
        format!(
            "{:<4}{:<22}{:>8}{:>8}{:>8}",
            "#", "Name", "Score", "Cards", "Chips"
        ),
    ];
    for (index, entry) in entries.iter().enumerate() {
        lines.push(format!(
            "{:<4}{:<22}{:>8}{:>8}{:>8}",
            index + 1,
            entry.name,
            entry.highest_score,
            entry.most_cards,
            entry.most_chips
        ));
    }
    lines.join("\n")
}

pub fn rules_text() -> &'static str {
    "\
=== How to play ===
The deck is shuffled and split evenly between you and the computer.
Each round you bet chips, then both sides turn over their top card.
The higher rank (2 lowest, Ace highest) wins both cards and the bet.

Tied cards start a war: each side lays down 3 face-down cards and 1 face-up
card. The higher face-up card takes the whole pile. Another tie doubles the
bet and the war goes on. A side without enough cards for a war loses it.

Power cards (when you play them):
  J  steal the top 2 cards of the computer's deck
  Q  gain 5 bonus chips
  K  double the stakes for this round
  A  become protected

Go bankrupt and the other side hands you 100 chips.
Type 'quit' or 'exit' at any prompt to leave."
}

pub fn main_menu() -> &'static str {
    "\
=== War ===
1. Play
2. How to play
3. High scores
4. Quit"
}
