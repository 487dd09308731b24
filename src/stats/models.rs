use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::game::{RoundWinner, Seat};

/// Maximum number of entries kept on the leaderboard.
pub const LEADERBOARD_CAPACITY: usize = 10;

#[derive(Debug, Clone)]
pub struct GameResult {
    pub winner: RoundWinner,
    pub rounds_played: u32,
    pub players: Vec<PlayerGameResult>,
    pub completed_at: DateTime<Utc>,
}

impl GameResult {
    pub fn for_seat(&self, seat: Seat) -> Option<&PlayerGameResult> {
        self.players.iter().find(|p| p.seat == seat)
    }
}

#[derive(Debug, Clone)]
pub struct PlayerGameResult {
    pub seat: Seat,
    pub name: String,
    pub chips: i32,
    pub cards_held: usize,
    pub cards_won: i32,
    /// Score after the base calculator only.
    pub raw_score: i32,
    pub final_score: i32,
}

/// One leaderboard row, keyed by player name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub name: String,
    pub highest_score: i32,
    pub most_cards: i32,
    pub most_chips: i32,
}

impl HighScoreEntry {
    pub fn from_result(result: &PlayerGameResult) -> Self {
        Self {
            name: result.name.clone(),
            highest_score: result.final_score,
            most_cards: i32::try_from(result.cards_held).unwrap_or(i32::MAX),
            most_chips: result.chips,
        }
    }

    /// Keeps the best of each field independently.
    pub fn merge(&mut self, other: &HighScoreEntry) {
        self.highest_score = self.highest_score.max(other.highest_score);
        self.most_cards = self.most_cards.max(other.most_cards);
        self.most_chips = self.most_chips.max(other.most_chips);
    }
}

/// Inserts or merges `entry` by name, then re-sorts by highest score and keeps
/// the top [`LEADERBOARD_CAPACITY`].
pub fn upsert_entry(entries: &mut Vec<HighScoreEntry>, entry: HighScoreEntry) {
    match entries.iter_mut().find(|e| e.name == entry.name) {
        Some(existing) => existing.merge(&entry),
        None => entries.push(entry),
    }

    entries.sort_by(|a, b| b.highest_score.cmp(&a.highest_score));
    entries.truncate(LEADERBOARD_CAPACITY);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, score: i32, cards: i32, chips: i32) -> HighScoreEntry {
        HighScoreEntry {
            name: name.to_string(),
            highest_score: score,
            most_cards: cards,
            most_chips: chips,
        }
    }

    #[test]
    fn upsert_merges_by_name_with_pointwise_max() {
        let mut entries = Vec::new();
        upsert_entry(&mut entries, entry("ada", 50, 30, 120));
        upsert_entry(&mut entries, entry("ada", 80, 20, 90));

        assert_eq!(entries, vec![entry("ada", 80, 30, 120)]);
    }

    #[test]
    fn upsert_keeps_best_score_when_new_score_is_lower() {
        let mut entries = vec![entry("ada", 80, 10, 10)];
        upsert_entry(&mut entries, entry("ada", 50, 40, 5));
        assert_eq!(entries, vec![entry("ada", 80, 40, 10)]);
    }

    #[test]
    fn upsert_sorts_descending_and_truncates() {
        let mut entries = Vec::new();
        for i in 0..12 {
            upsert_entry(&mut entries, entry(&format!("p{i}"), i * 10, 0, 0));
        }

        assert_eq!(entries.len(), LEADERBOARD_CAPACITY);
        assert_eq!(entries[0].name, "p11");
        assert_eq!(entries[9].name, "p2");
        assert!(entries
            .windows(2)
            .all(|w| w[0].highest_score >= w[1].highest_score));
    }

    #[test]
    fn low_score_does_not_enter_full_board() {
        let mut entries: Vec<HighScoreEntry> = (0..10)
            .map(|i| entry(&format!("p{i}"), 100 + i, 0, 0))
            .collect();
        upsert_entry(&mut entries, entry("late", 5, 0, 0));
        assert!(entries.iter().all(|e| e.name != "late"));
    }
}
