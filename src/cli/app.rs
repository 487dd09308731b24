use std::thread;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

use crate::game::{Game, GameError, GameSummary};
use crate::stats::{GameResult, StatsService};

use super::prompt::{
    ask_bet, ask_name, ask_number, ask_rounds, ask_yes_no, wait_for_continue, PromptError,
    Prompter,
};
use super::render;

/// How a play-through of the menu ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppExit {
    /// Chosen from the main menu.
    Menu,
    /// `quit`/`exit` typed at a prompt, or input closed.
    Prompt,
}

/// Terminal front end: drives menus and games through a [`Prompter`].
pub struct App<P: Prompter> {
    prompter: P,
    stats: StatsService,
    rng: StdRng,
    pace: Duration,
}

impl<P: Prompter> App<P> {
    pub fn new(prompter: P, stats: StatsService, seed: Option<u64>, pace: Duration) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Self {
            prompter,
            stats,
            rng,
            pace,
        }
    }

    pub fn into_prompter(self) -> P {
        self.prompter
    }

    /// Runs the main menu until the player quits.
    pub fn run(&mut self) -> Result<AppExit, PromptError> {
        match self.menu_loop() {
            Ok(()) => {
                self.prompter.notify("Thanks for playing War! Goodbye.")?;
                Ok(AppExit::Menu)
            }
            Err(PromptError::Quit) => {
                info!("Player quit from a prompt");
                self.prompter.notify("\nThanks for playing War! Goodbye.")?;
                Ok(AppExit::Prompt)
            }
            Err(e) => Err(e),
        }
    }

    fn menu_loop(&mut self) -> Result<(), PromptError> {
        self.prompter.notify("Welcome to the game of war cards!")?;
        loop {
            self.prompter.notify(render::main_menu())?;
            match ask_number(&mut self.prompter, "Choose an option (1-4): ", 1, 4)? {
                1 => self.play_game()?,
                2 => {
                    self.prompter.notify(render::rules_text())?;
                    wait_for_continue(&mut self.prompter)?;
                }
                3 => self.show_leaderboard()?,
                _ => return Ok(()),
            }
        }
    }

    fn show_leaderboard(&mut self) -> Result<(), PromptError> {
        match self.stats.leaderboard() {
            Ok(entries) => self.prompter.notify(&render::leaderboard_table(&entries))?,
            Err(e) => {
                warn!(error = %e, "Could not read leaderboard");
                self.prompter.notify(&format!("Could not read the high scores: {e}"))?
            }
        }
        wait_for_continue(&mut self.prompter)
    }

    /// Sets up and plays one game, then scores it and offers the leaderboard.
    pub fn play_game(&mut self) -> Result<(), PromptError> {
        let name = ask_name(&mut self.prompter)?;
        let rounds = ask_rounds(&mut self.prompter)?;

        let mut game = match Game::new_game(&name, rounds, &mut self.rng) {
            Ok(game) => game,
            Err(e) => {
                self.prompter.notify(&e.to_string())?;
                return Ok(());
            }
        };

        self.prompter.notify(&format!(
            "Good luck, {}! You each start with {} cards and {} chips.",
            game.player().name,
            game.player().card_count(),
            game.player().chips
        ))?;

        while !game.is_over() {
            self.prompter.notify(&render::status_line(&game))?;
            let bet = ask_bet(&mut self.prompter, game.player().chips, game.max_bet())?;

            let report = match game.play_round(bet) {
                Ok(report) => report,
                Err(GameError::GameOver) => break,
                Err(e) => {
                    self.prompter.notify(&e.to_string())?;
                    continue;
                }
            };

            for line in render::round_lines(&report) {
                self.prompter.notify(&line)?;
                self.pause();
            }

            if !game.is_over() {
                wait_for_continue(&mut self.prompter)?;
            }
        }

        let mut summary = game.finish();
        self.finish_game(&mut summary)
    }

    fn finish_game(&mut self, summary: &mut GameSummary) -> Result<(), PromptError> {
        let result = match self.stats.record_game(summary) {
            Ok((result, _)) => result,
            Err(e) => {
                warn!(error = %e, "Could not save high score");
                self.prompter.notify(&format!("Your score could not be saved: {e}"))?;
                self.stats.score_game(summary)
            }
        };

        self.show_summary(summary, &result)?;

        if ask_yes_no(&mut self.prompter, "Would you like to see the high scores?")? {
            self.show_leaderboard()?;
        }
        Ok(())
    }

    fn show_summary(
        &mut self,
        summary: &GameSummary,
        result: &GameResult,
    ) -> Result<(), PromptError> {
        for line in render::summary_lines(summary, result) {
            self.prompter.notify(&line)?;
        }
        Ok(())
    }

    fn pause(&self) {
        if !self.pace.is_zero() {
            thread::sleep(self.pace);
        }
    }
}
