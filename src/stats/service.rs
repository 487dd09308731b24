use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;

use crate::game::{GameSummary, Seat};

use super::{
    calculators::{CardsWonScoreCalculator, ChipsScoreCalculator, VictoryMultiplierCalculator},
    repository::LeaderboardRepository,
    CalculationContext, GameResult, HighScoreEntry, PlayerGameResult, ScoreCalculator,
    StatsError,
};

const SEATS: [Seat; 2] = [Seat::Player, Seat::Computer];

pub struct StatsService {
    calculators: Vec<Arc<dyn ScoreCalculator>>,
    repository: Arc<dyn LeaderboardRepository>,
}

impl StatsService {
    pub fn builder(repository: Arc<dyn LeaderboardRepository>) -> StatsServiceBuilder {
        StatsServiceBuilder::new(repository)
    }

    /// Scores a finished game, writes the scores back onto both players and
    /// submits the human's entry to the leaderboard.
    pub fn record_game(
        &self,
        summary: &mut GameSummary,
    ) -> Result<(GameResult, Vec<HighScoreEntry>), StatsError> {
        let game_result = self.score_game(summary);

        let entry = game_result
            .for_seat(Seat::Player)
            .map(HighScoreEntry::from_result)
            .ok_or_else(|| StatsError::Repository("missing player result".to_string()))?;

        info!(
            player = %entry.name,
            score = entry.highest_score,
            "Recording high score"
        );
        let leaderboard = self.repository.record(entry)?;

        Ok((game_result, leaderboard))
    }

    /// Runs the calculator chain without touching the leaderboard.
    pub fn score_game(&self, summary: &mut GameSummary) -> GameResult {
        let (raw_scores, final_scores) = self.calculate_scores(summary);

        for seat in SEATS {
            summary.seat_mut(seat).score = final_scores.get(&seat).copied().unwrap_or_default();
        }

        let players = SEATS
            .iter()
            .map(|&seat| {
                let player = summary.seat(seat);
                PlayerGameResult {
                    seat,
                    name: player.name.clone(),
                    chips: player.chips,
                    cards_held: player.card_count(),
                    cards_won: player.cards_won,
                    raw_score: raw_scores.get(&seat).copied().unwrap_or_default(),
                    final_score: player.score,
                }
            })
            .collect();

        GameResult {
            winner: summary.winner,
            rounds_played: summary.rounds_played,
            players,
            completed_at: summary.completed_at,
        }
    }

    pub fn leaderboard(&self) -> Result<Vec<HighScoreEntry>, StatsError> {
        self.repository.load()
    }

    fn calculate_scores(&self, summary: &GameSummary) -> (HashMap<Seat, i32>, HashMap<Seat, i32>) {
        let mut current_scores: HashMap<Seat, i32> = HashMap::new();
        let mut raw_scores: HashMap<Seat, i32> = HashMap::new();

        for (index, calculator) in self.calculators.iter().enumerate() {
            let context = CalculationContext::new(summary, &current_scores);

            let mut next_scores = current_scores.clone();
            for seat in SEATS {
                next_scores.insert(seat, calculator.calculate(seat, &context));
            }

            if index == 0 {
                raw_scores = next_scores.clone();
            }

            current_scores = next_scores;
        }

        (raw_scores, current_scores)
    }
}

pub struct StatsServiceBuilder {
    calculators: Vec<Arc<dyn ScoreCalculator>>,
    repository: Arc<dyn LeaderboardRepository>,
}

impl StatsServiceBuilder {
    fn new(repository: Arc<dyn LeaderboardRepository>) -> Self {
        Self {
            calculators: vec![
                Arc::new(ChipsScoreCalculator::new()),
                Arc::new(CardsWonScoreCalculator::new()),
                Arc::new(VictoryMultiplierCalculator::new()),
            ],
            repository,
        }
    }

    pub fn with_calculator(mut self, calculator: Arc<dyn ScoreCalculator>) -> Self {
        self.calculators.push(calculator);
        self
    }

    pub fn without_calculators(mut self) -> Self {
        self.calculators.clear();
        self
    }

    pub fn build(mut self) -> StatsService {
        self.calculators.sort_by_key(|c| c.priority());
        StatsService {
            calculators: self.calculators,
            repository: self.repository,
        }
    }
}
