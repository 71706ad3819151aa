//! Word list loading utilities
//!
//! Builds catalogs from files or from the embedded list.

use super::WORDS;
use crate::game::{CatalogError, WordCatalog};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Error loading a word list file
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read word list")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Load a catalog from a file with one word per line
///
/// Blank lines are skipped and duplicates dropped.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read and
/// `LoadError::Catalog` if a word cannot be scrambled or the file is empty.
///
/// # Examples
/// ```no_run
/// use unscramble::wordlists::loader::load_from_file;
///
/// let catalog = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", catalog.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordCatalog, LoadError> {
    let content = fs::read_to_string(path)?;
    Ok(WordCatalog::from_words(content.lines())?)
}

/// Catalog of the embedded default words
///
/// # Errors
///
/// Only fails if the embedded list itself is invalid.
///
/// # Examples
/// ```
/// use unscramble::wordlists::{WORDS, loader::default_catalog};
///
/// let catalog = default_catalog().unwrap();
/// assert_eq!(catalog.len(), WORDS.len());
/// ```
pub fn default_catalog() -> Result<WordCatalog, CatalogError> {
    WordCatalog::from_words(WORDS)
}
