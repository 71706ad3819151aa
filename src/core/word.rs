//! Catalog word representation
//!
//! A Word stores a candidate answer along with its characters, validated so
//! that at least one scramble distinct from the original exists.

use std::fmt;
use thiserror::Error;

/// A word that can be served in a round
///
/// Holds the text and its characters. Construction guarantees the word has at
/// least two distinct characters, so a differing permutation always exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: Vec<char>,
}

/// Error type for words that cannot be scrambled
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must not be empty")]
    Empty,
    #[error("word '{0}' has no arrangement distinct from itself")]
    NoDistinctArrangement(String),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Case is preserved: guesses are compared exactly.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The word is empty
    /// - The word has fewer than two distinct characters ("a", "aaa")
    ///
    /// # Examples
    /// ```
    /// use unscramble::core::Word;
    ///
    /// let word = Word::new("kotlin").unwrap();
    /// assert_eq!(word.text(), "kotlin");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("zzz").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();
        let chars: Vec<char> = text.chars().collect();

        let Some(&first) = chars.first() else {
            return Err(WordError::Empty);
        };

        if chars.iter().all(|&c| c == first) {
            return Err(WordError::NoDistinctArrangement(text));
        }

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's characters in order
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of characters (not bytes)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false; empty words are rejected at construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Exact, case-sensitive comparison against a guess
    #[inline]
    #[must_use]
    pub fn matches(&self, guess: &str) -> bool {
        self.text == guess
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
