//! Word lists for the unscramble game
//!
//! Provides the embedded default catalog and loading of custom lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::{DEFAULT_MAX_ROUNDS, WordCatalog};

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_scramblable() {
        for &word in WORDS {
            assert!(Word::new(word).is_ok(), "Word '{word}' cannot be scrambled");
        }
    }

    #[test]
    fn words_are_distinct() {
        let unique: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }

    #[test]
    fn embedded_catalog_supports_default_game() {
        let catalog = WordCatalog::from_words(WORDS).unwrap();
        assert!(catalog.len() >= DEFAULT_MAX_ROUNDS);
    }
}
