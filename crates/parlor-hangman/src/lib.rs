//! Hangman for Parlor.
//!
//! A [`HangmanSession`] owns one secret word, a fixed budget of seven
//! mistakes, and the letters guessed so far. Candidate words come from
//! plain text files through [`WordList`]; the random choice goes through
//! a caller-supplied RNG so a game can be replayed from a seed.
//! Prompting and terminal output live in the CLI crate.

pub mod error;
pub mod session;
pub mod words;

pub use error::{HangmanError, HangmanResult};
pub use session::{
    GuessOutcome, HangmanSession, InvalidGuess, MISTAKE_BUDGET, PLACEHOLDER, SessionState,
    parse_guess,
};
pub use words::WordList;
