//! Unscramble
//!
//! A word unscrambling game: each round serves a random catalog word with its
//! letters shuffled, and the player scores by guessing the original word.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use unscramble::game::{GameConfig, GameState, WordCatalog};
//!
//! let catalog = WordCatalog::from_words(["intelligent", "android", "kotlin"]).unwrap();
//! let mut game = GameState::new(&catalog, GameConfig::new(2, 20), StdRng::seed_from_u64(1)).unwrap();
//!
//! println!("Unscramble: {}", game.current_scrambled());
//! let answer = game.current_word().text();
//! assert!(game.submit_guess(answer));
//! assert_eq!(game.score(), 20);
//!
//! assert!(game.advance());
//! assert!(!game.advance());
//! ```

// Core domain types
pub mod core;

// Game state and sessions
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
