//! Simulate command
//!
//! Plays many automated sessions and collects score statistics, checking the
//! game invariants on every served round.

use crate::core::is_permutation;
use crate::game::{ConfigError, GameConfig, Session, TurnOutcome, WordCatalog};
use indicatif::ProgressBar;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Settings for a simulation run
#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    pub sessions: usize,
    /// Probability that the bot answers a round correctly instead of skipping
    pub accuracy: f64,
    pub seed: u64,
    pub game: GameConfig,
}

impl SimulationConfig {
    /// # Errors
    ///
    /// Returns `SimulationError::InvalidAccuracy` unless `accuracy` is a
    /// probability in `[0, 1]`.
    pub fn new(
        sessions: usize,
        accuracy: f64,
        seed: u64,
        game: GameConfig,
    ) -> Result<Self, SimulationError> {
        if !(0.0..=1.0).contains(&accuracy) {
            return Err(SimulationError::InvalidAccuracy(accuracy));
        }
        Ok(Self {
            sessions,
            accuracy,
            seed,
            game,
        })
    }
}

/// Errors that abort a simulation
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("accuracy must be a probability between 0 and 1, got {0}")]
    InvalidAccuracy(f64),
    #[error("session {session}: {detail}")]
    InvariantViolated { session: usize, detail: String },
}

/// Result of a simulation run
#[derive(Debug)]
pub struct SimulationResult {
    pub total_sessions: usize,
    pub rounds_played: usize,
    pub average_score: f64,
    pub min_score: u32,
    pub max_score: u32,
    pub distribution: BTreeMap<u32, usize>,
    pub duration: Duration,
    pub sessions_per_second: f64,
}

/// Summary of one automated session
struct SessionReport {
    score: u32,
    rounds: usize,
}

/// Run independent sessions in parallel
///
/// Session `i` is seeded from `config.seed + i`, so a run is reproducible
/// regardless of thread scheduling.
///
/// # Errors
///
/// Returns `SimulationError::InvalidAccuracy` if `accuracy` is not in `[0, 1]`,
/// `SimulationError::Config` if the catalog is too small and
/// `SimulationError::InvariantViolated` if any served round breaks a game
/// invariant.
pub fn run_simulation(
    catalog: &WordCatalog,
    config: &SimulationConfig,
    progress: &ProgressBar,
) -> Result<SimulationResult, SimulationError> {
    if !(0.0..=1.0).contains(&config.accuracy) {
        return Err(SimulationError::InvalidAccuracy(config.accuracy));
    }
    config.game.validate(catalog)?;

    let start = Instant::now();

    let reports = (0..config.sessions)
        .into_par_iter()
        .map(|i| {
            let report = simulate_session(catalog, config, i);
            progress.inc(1);
            report
        })
        .collect::<Result<Vec<_>, _>>()?;

    progress.finish_with_message("Complete!");

    let duration = start.elapsed();
    let mut distribution = BTreeMap::new();
    for report in &reports {
        *distribution.entry(report.score).or_insert(0) += 1;
    }

    let total_sessions = reports.len();
    let total_score: u64 = reports.iter().map(|r| u64::from(r.score)).sum();

    Ok(SimulationResult {
        total_sessions,
        rounds_played: reports.iter().map(|r| r.rounds).sum(),
        average_score: if total_sessions == 0 {
            0.0
        } else {
            total_score as f64 / total_sessions as f64
        },
        min_score: reports.iter().map(|r| r.score).min().unwrap_or(0),
        max_score: reports.iter().map(|r| r.score).max().unwrap_or(0),
        distribution,
        duration,
        sessions_per_second: total_sessions as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

fn simulate_session(
    catalog: &WordCatalog,
    config: &SimulationConfig,
    index: usize,
) -> Result<SessionReport, SimulationError> {
    let seed = config.seed.wrapping_add(index as u64);
    let mut session = Session::new(catalog, config.game, StdRng::seed_from_u64(seed))?;
    let mut bot = StdRng::seed_from_u64(!seed);
    let mut served = FxHashSet::default();

    loop {
        let word = session.state().current_word().text();
        let scrambled = session.view().scrambled;

        let violation = if scrambled == word {
            Some(format!("'{word}' served unscrambled"))
        } else if !is_permutation(scrambled, word) {
            Some(format!("'{scrambled}' is not a scramble of '{word}'"))
        } else if !served.insert(word) {
            Some(format!("'{word}' served twice"))
        } else if session.state().round_count() != served.len() {
            Some(format!(
                "round count {} does not match {} served words",
                session.state().round_count(),
                served.len()
            ))
        } else {
            None
        };

        if let Some(detail) = violation {
            return Err(SimulationError::InvariantViolated {
                session: index,
                detail,
            });
        }

        let outcome = if bot.random_bool(config.accuracy) {
            session.submit(word)
        } else {
            session.skip()
        };

        if let TurnOutcome::GameOver { final_score } = outcome {
            return Ok(SessionReport {
                score: final_score,
                rounds: served.len(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> WordCatalog {
        WordCatalog::from_words(["intelligent", "android", "kotlin", "rust", "cargo"]).unwrap()
    }

    #[test]
    fn perfect_bot_scores_max() {
        let config = SimulationConfig::new(20, 1.0, 7, GameConfig::new(5, 20)).unwrap();
        let result = run_simulation(&catalog(), &config, &ProgressBar::hidden()).unwrap();

        assert_eq!(result.total_sessions, 20);
        assert_eq!(result.rounds_played, 100);
        assert_eq!(result.min_score, 100);
        assert_eq!(result.max_score, 100);
        assert_eq!(result.distribution.get(&100), Some(&20));
    }

    #[test]
    fn skipping_bot_scores_zero() {
        let config = SimulationConfig::new(10, 0.0, 7, GameConfig::new(3, 20)).unwrap();
        let result = run_simulation(&catalog(), &config, &ProgressBar::hidden()).unwrap();

        assert_eq!(result.max_score, 0);
        assert!((result.average_score - 0.0).abs() < f64::EPSILON);
        assert_eq!(result.rounds_played, 30);
    }

    #[test]
    fn scores_are_multiples_of_increase() {
        let config = SimulationConfig::new(50, 0.5, 11, GameConfig::new(4, 15)).unwrap();
        let result = run_simulation(&catalog(), &config, &ProgressBar::hidden()).unwrap();

        assert!(result.distribution.keys().all(|score| score % 15 == 0));
        assert!(result.max_score <= 60);
        assert_eq!(result.distribution.values().sum::<usize>(), 50);
    }

    #[test]
    fn same_seed_same_distribution() {
        let config = SimulationConfig::new(30, 0.5, 99, GameConfig::new(5, 20)).unwrap();
        let a = run_simulation(&catalog(), &config, &ProgressBar::hidden()).unwrap();
        let b = run_simulation(&catalog(), &config, &ProgressBar::hidden()).unwrap();
        assert_eq!(a.distribution, b.distribution);
    }

    #[test]
    fn rejects_oversized_game() {
        let config = SimulationConfig::new(1, 1.0, 0, GameConfig::new(6, 20)).unwrap();
        let err = run_simulation(&catalog(), &config, &ProgressBar::hidden()).unwrap_err();
        assert!(matches!(
            err,
            SimulationError::Config(ConfigError::TooFewWords { .. })
        ));
    }

    #[test]
    fn rejects_accuracy_outside_unit_range() {
        for accuracy in [f64::NAN, f64::INFINITY, -0.1, 1.5] {
            let err = SimulationConfig::new(1, accuracy, 0, GameConfig::new(2, 20)).unwrap_err();
            assert!(matches!(err, SimulationError::InvalidAccuracy(_)));
        }
    }

    #[test]
    fn run_rejects_nan_accuracy_set_directly() {
        let mut config = SimulationConfig::new(1, 0.5, 0, GameConfig::new(2, 20)).unwrap();
        config.accuracy = f64::NAN;
        let err = run_simulation(&catalog(), &config, &ProgressBar::hidden()).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidAccuracy(_)));
    }

    #[test]
    fn accepts_accuracy_bounds() {
        assert!(SimulationConfig::new(1, 0.0, 0, GameConfig::default()).is_ok());
        assert!(SimulationConfig::new(1, 1.0, 0, GameConfig::default()).is_ok());
    }
}
