//! Word catalog
//!
//! The fixed, read-only pool of candidate words for a game.

use crate::core::{Word, WordError};
use rustc_hash::FxHashSet;
use thiserror::Error;

/// Errors raised while building a catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog entry {position} is invalid: {source}")]
    InvalidWord {
        position: usize,
        #[source]
        source: WordError,
    },
    #[error("catalog contains no words")]
    Empty,
}

/// Ordered, deduplicated sequence of validated words
#[derive(Debug, Clone)]
pub struct WordCatalog {
    words: Vec<Word>,
}

impl WordCatalog {
    /// Build a catalog from raw strings
    ///
    /// Entries are trimmed and blank entries skipped. Duplicates are dropped,
    /// keeping the first occurrence. Any entry that cannot be scrambled rejects
    /// the whole catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidWord` for the first unscramblable entry
    /// (1-based position among non-blank entries) and `CatalogError::Empty`
    /// when nothing is left.
    pub fn from_words<I, S>(words: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = FxHashSet::default();
        let mut catalog = Vec::new();

        let entries = words
            .into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .filter(|s| !s.is_empty());

        for (i, text) in entries.enumerate() {
            if seen.contains(&text) {
                continue;
            }
            let word = Word::new(text.clone()).map_err(|source| CatalogError::InvalidWord {
                position: i + 1,
                source,
            })?;
            seen.insert(text);
            catalog.push(word);
        }

        if catalog.is_empty() {
            return Err(CatalogError::Empty);
        }

        log::debug!("built catalog of {} distinct words", catalog.len());
        Ok(Self { words: catalog })
    }

    /// All words in catalog order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; empty catalogs are rejected at construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check whether a word is in the catalog
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.words.iter().any(|w| w.text() == text)
    }
}
