//! Game logic
//!
//! Catalog, configuration, per-session state and the action-driven session
//! wrapper used by the front-ends.

mod catalog;
mod config;
mod session;
mod state;

pub use catalog::{CatalogError, WordCatalog};
pub use config::{ConfigError, DEFAULT_MAX_ROUNDS, DEFAULT_SCORE_INCREASE, GameConfig};
pub use session::{RoundView, Session, TurnOutcome};
pub use state::GameState;
