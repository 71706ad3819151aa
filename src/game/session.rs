//! Player-facing session
//!
//! Maps the three player actions (submit, skip, restart) onto `GameState` and
//! reports what the front-end should show next.

use super::catalog::WordCatalog;
use super::config::{ConfigError, GameConfig};
use super::state::GameState;
use rand::Rng;

/// Result of a player action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Guess was right; the next word is being served
    Correct,
    /// Guess was wrong; the same word stays up
    TryAgain,
    /// Word was skipped; the next word is being served
    Skipped,
    /// No rounds remain
    GameOver { final_score: u32 },
}

/// What a front-end needs to render the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundView<'s> {
    pub scrambled: &'s str,
    pub round: usize,
    pub max_rounds: usize,
    pub score: u32,
    pub finished: bool,
}

/// One player's game, driven by discrete actions
pub struct Session<'a, R> {
    state: GameState<'a, R>,
    words_solved: usize,
}

impl<'a, R: Rng> Session<'a, R> {
    /// Start a session; the first word is served immediately
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the catalog is too small for `config`.
    pub fn new(catalog: &'a WordCatalog, config: GameConfig, rng: R) -> Result<Self, ConfigError> {
        Ok(Self {
            state: GameState::new(catalog, config, rng)?,
            words_solved: 0,
        })
    }

    /// Submit a guess for the current word
    pub fn submit(&mut self, guess: &str) -> TurnOutcome {
        if !self.state.submit_guess(guess) {
            log::debug!("round {}: wrong guess", self.state.round_count());
            return TurnOutcome::TryAgain;
        }
        self.words_solved += 1;
        self.next_or_over(TurnOutcome::Correct)
    }

    /// Give up on the current word
    pub fn skip(&mut self) -> TurnOutcome {
        log::debug!("round {}: skipped", self.state.round_count());
        self.next_or_over(TurnOutcome::Skipped)
    }

    /// Start over with a fresh game
    pub fn restart(&mut self) {
        self.words_solved = 0;
        self.state.reinitialize();
        log::info!("game restarted");
    }

    fn next_or_over(&mut self, outcome: TurnOutcome) -> TurnOutcome {
        if self.state.advance() {
            outcome
        } else {
            let final_score = self.state.score();
            log::info!(
                "game over: {final_score} points, {}/{} words solved",
                self.words_solved,
                self.state.round_count()
            );
            TurnOutcome::GameOver { final_score }
        }
    }
}

impl<'a, R> Session<'a, R> {
    #[must_use]
    pub fn view(&self) -> RoundView<'_> {
        RoundView {
            scrambled: self.state.current_scrambled(),
            round: self.state.round_count(),
            max_rounds: self.state.config().max_rounds,
            score: self.state.score(),
            finished: self.state.is_finished(),
        }
    }

    /// Words guessed correctly this game
    #[must_use]
    pub const fn words_solved(&self) -> usize {
        self.words_solved
    }

    /// Read-only access to the underlying state
    #[must_use]
    pub const fn state(&self) -> &GameState<'a, R> {
        &self.state
    }
}
