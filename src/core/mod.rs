//! Core domain types for the unscramble game
//!
//! Validated words and the scrambling routine. Everything here is pure and
//! takes its randomness as a parameter.

mod scramble;
mod word;

pub use scramble::{is_permutation, scramble};
pub use word::{Word, WordError};
