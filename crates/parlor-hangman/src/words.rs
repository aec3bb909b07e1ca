//! Loading and choosing candidate secret words.

use std::fs;
use std::path::Path;

use rand::Rng;
use rand::rngs::StdRng;

use crate::error::{HangmanError, HangmanResult};

/// A non-empty list of candidate secret words.
///
/// Loaded from a plain text file of whitespace-separated tokens,
/// conventionally one per line. Every token is lowercased on load so
/// the session always compares lowercase against lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Load a word list from a file.
    ///
    /// Fails if the file cannot be read or yields no tokens.
    pub fn load(path: &Path) -> HangmanResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| HangmanError::WordListUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_text(&text).ok_or_else(|| HangmanError::EmptyWordList {
            path: path.to_path_buf(),
        })
    }

    /// Build a word list from raw text, lowercasing each token.
    ///
    /// Returns `None` when the text holds no tokens; an empty list is
    /// unrepresentable.
    pub fn from_text(text: &str) -> Option<Self> {
        let words: Vec<String> = text.split_whitespace().map(str::to_lowercase).collect();
        if words.is_empty() {
            None
        } else {
            Some(Self { words })
        }
    }

    /// All candidate words, in file order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Choose a secret word uniformly at random.
    pub fn choose(&self, rng: &mut StdRng) -> &str {
        &self.words[rng.random_range(0..self.words.len())]
    }
}
