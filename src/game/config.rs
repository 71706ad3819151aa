//! Game configuration

use super::catalog::WordCatalog;
use thiserror::Error;

/// Words served per game
pub const DEFAULT_MAX_ROUNDS: usize = 10;

/// Points awarded per correct guess
pub const DEFAULT_SCORE_INCREASE: u32 = 20;

/// Configuration rejected against a catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("a game needs at least one round")]
    ZeroRounds,
    #[error("catalog has {available} distinct words but {required} rounds were requested")]
    TooFewWords { available: usize, required: usize },
}

/// Per-game settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_rounds: usize,
    pub score_increase: u32,
}

impl GameConfig {
    #[must_use]
    pub const fn new(max_rounds: usize, score_increase: u32) -> Self {
        Self {
            max_rounds,
            score_increase,
        }
    }

    /// Highest score reachable in one game
    #[must_use]
    pub fn max_score(&self) -> u32 {
        u32::try_from(self.max_rounds)
            .unwrap_or(u32::MAX)
            .saturating_mul(self.score_increase)
    }

    /// Check that a game with this config can always serve distinct words
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `max_rounds` is zero or exceeds the number of
    /// distinct words in `catalog`.
    pub fn validate(&self, catalog: &WordCatalog) -> Result<(), ConfigError> {
        if self.max_rounds == 0 {
            return Err(ConfigError::ZeroRounds);
        }
        if catalog.len() < self.max_rounds {
            return Err(ConfigError::TooFewWords {
                available: catalog.len(),
                required: self.max_rounds,
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ROUNDS, DEFAULT_SCORE_INCREASE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> WordCatalog {
        WordCatalog::from_words(["intelligent", "android", "kotlin"]).unwrap()
    }

    #[test]
    fn default_values() {
        let config = GameConfig::default();
        assert_eq!(config.max_rounds, 10);
        assert_eq!(config.score_increase, 20);
        assert_eq!(config.max_score(), 200);
    }

    #[test]
    fn validate_accepts_exact_fit() {
        assert!(GameConfig::new(3, 20).validate(&catalog()).is_ok());
    }

    #[test]
    fn validate_rejects_zero_rounds() {
        assert_eq!(
            GameConfig::new(0, 20).validate(&catalog()),
            Err(ConfigError::ZeroRounds)
        );
    }

    #[test]
    fn validate_rejects_small_catalog() {
        assert_eq!(
            GameConfig::new(4, 20).validate(&catalog()),
            Err(ConfigError::TooFewWords {
                available: 3,
                required: 4
            })
        );
    }
}
