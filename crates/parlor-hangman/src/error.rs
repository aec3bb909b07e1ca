//! Error types for the hangman crate.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for hangman operations.
pub type HangmanResult<T> = Result<T, HangmanError>;

/// Errors that can occur while setting up a hangman game.
///
/// Both variants are fatal at startup: without a word there is nothing
/// to guess.
#[derive(Debug, Error)]
pub enum HangmanError {
    /// The word list file could not be read.
    #[error("word list '{}' could not be read: {source}", path.display())]
    WordListUnreadable {
        /// The path that was tried.
        path: PathBuf,
        /// The underlying I/O failure.
        source: io::Error,
    },

    /// The word list file held no words at all.
    #[error("word list '{}' contains no words", path.display())]
    EmptyWordList {
        /// The path that was read.
        path: PathBuf,
    },
}
