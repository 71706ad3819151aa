//! Game state
//!
//! Owns the per-session bookkeeping: which words were served, the current word
//! and its scramble, the score and the round counter.

use super::catalog::WordCatalog;
use super::config::{ConfigError, GameConfig};
use crate::core::{Word, scramble};
use rand::Rng;
use rustc_hash::FxHashSet;

/// State of one game session
///
/// Borrows the catalog so that restarting never rebuilds it. Randomness is
/// injected so that games can be replayed from a seed.
///
/// Invariants:
/// - `current_scrambled` is a permutation of `current_word` and never equal to it
/// - `used_words` holds at most `max_rounds` distinct words
/// - `round_count == used_words.len()`
pub struct GameState<'a, R> {
    catalog: &'a WordCatalog,
    config: GameConfig,
    rng: R,
    // Catalog indices not yet served this session
    deck: Vec<usize>,
    used_words: FxHashSet<&'a str>,
    current_word: &'a Word,
    current_scrambled: String,
    score: u32,
    round_count: usize,
    finished: bool,
}

impl<'a, R: Rng> GameState<'a, R> {
    /// Create a session and serve its first round
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the catalog cannot supply `max_rounds` distinct
    /// words.
    pub fn new(catalog: &'a WordCatalog, config: GameConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate(catalog)?;

        let mut state = Self {
            catalog,
            config,
            rng,
            deck: Vec::with_capacity(catalog.len()),
            used_words: FxHashSet::default(),
            // Placeholder until reinitialize serves the first round
            current_word: &catalog.words()[0],
            current_scrambled: String::new(),
            score: 0,
            round_count: 0,
            finished: false,
        };
        state.reinitialize();
        Ok(state)
    }

    /// Serve a new, unused word
    ///
    /// The word is drawn uniformly from the catalog words not yet served this
    /// session. Does nothing once `max_rounds` words have been served.
    pub fn start_next_round(&mut self) {
        if self.round_count >= self.config.max_rounds || self.deck.is_empty() {
            log::debug!("no round served: {} already played", self.round_count);
            return;
        }

        let pick = self.rng.random_range(0..self.deck.len());
        let index = self.deck.swap_remove(pick);
        let catalog = self.catalog;
        let word: &'a Word = &catalog.words()[index];

        self.current_scrambled = scramble(word, &mut self.rng);
        self.current_word = word;
        self.used_words.insert(word.text());
        self.round_count += 1;

        log::debug!(
            "round {}/{}: serving '{}'",
            self.round_count,
            self.config.max_rounds,
            self.current_scrambled
        );
        log::trace!("answer for round {} is '{}'", self.round_count, word);
    }

    /// Move to the next round if any remain
    ///
    /// Returns false, leaving the state untouched, when the game is over.
    pub fn advance(&mut self) -> bool {
        if self.round_count < self.config.max_rounds {
            self.start_next_round();
            true
        } else {
            self.finished = true;
            false
        }
    }

    /// Check a guess against the current word
    ///
    /// Comparison is exact and case-sensitive. A correct guess adds
    /// `score_increase` to the score. Always false once the game is finished.
    pub fn submit_guess(&mut self, candidate: &str) -> bool {
        if self.finished || !self.current_word.matches(candidate) {
            return false;
        }
        self.score = self.score.saturating_add(self.config.score_increase);
        true
    }

    /// Reset score, round counter and used words, then serve a fresh round
    pub fn reinitialize(&mut self) {
        self.score = 0;
        self.round_count = 0;
        self.finished = false;
        self.used_words.clear();
        self.deck.clear();
        self.deck.extend(0..self.catalog.len());
        self.start_next_round();
    }
}

impl<'a, R> GameState<'a, R> {
    #[inline]
    #[must_use]
    pub fn current_scrambled(&self) -> &str {
        &self.current_scrambled
    }

    /// The word being guessed
    #[inline]
    #[must_use]
    pub fn current_word(&self) -> &'a Word {
        self.current_word
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Number of words served this session (1-based index of the current round)
    #[inline]
    #[must_use]
    pub const fn round_count(&self) -> usize {
        self.round_count
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Whether `advance` has reported game over
    #[inline]
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Words served so far this session
    #[must_use]
    pub fn used_words(&self) -> &FxHashSet<&'a str> {
        &self.used_words
    }
}
