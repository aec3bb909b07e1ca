//! The hangman session state machine.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How many wrong guesses a session tolerates before it is lost.
pub const MISTAKE_BUDGET: u32 = 7;

/// Placeholder shown for a letter that has not been revealed yet.
pub const PLACEHOLDER: char = '_';

/// Rejection for input that is not a valid guess.
///
/// One message covers both failure modes (wrong length, non-letter);
/// rejected input never reaches the session, so it costs no mistake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid input! Please enter a single alphabetic character.")]
pub struct InvalidGuess;

/// Validate one line of input as a guess.
///
/// Accepts exactly one ASCII letter, folded to lowercase. Anything
/// else, including non-ASCII letters, is rejected.
pub fn parse_guess(input: &str) -> Result<char, InvalidGuess> {
    let mut chars = input.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return Err(InvalidGuess);
    };
    if !c.is_ascii_alphabetic() {
        return Err(InvalidGuess);
    }
    Ok(c.to_ascii_lowercase())
}

/// The lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Guessing continues.
    InProgress,
    /// Every letter was revealed before the budget ran out.
    Won,
    /// The mistake budget ran out first.
    Lost,
}

/// What one guess did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessOutcome {
    /// The letter occurs in the secret; every matching position is now
    /// revealed.
    Correct,
    /// The letter does not occur in the secret. One mistake spent.
    Wrong,
    /// The letter was already guessed. Nothing changes, no penalty.
    AlreadyGuessed,
    /// The session had already ended; the guess was ignored.
    GameOver,
}

/// A single hangman game.
///
/// Holds the secret word, the per-position reveal progress, the set of
/// letters tried so far, and the remaining mistake budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HangmanSession {
    secret: String,
    revealed: Vec<char>,
    used: BTreeSet<char>,
    mistakes_remaining: u32,
    state: SessionState,
}

impl HangmanSession {
    /// Start a session for the given secret word.
    ///
    /// The secret is lowercased so it compares directly against guesses,
    /// which [`parse_guess`] also lowercases.
    pub fn new(secret: &str) -> Self {
        let secret = secret.to_lowercase();
        let revealed = vec![PLACEHOLDER; secret.chars().count()];
        Self {
            secret,
            revealed,
            used: BTreeSet::new(),
            mistakes_remaining: MISTAKE_BUDGET,
            state: SessionState::InProgress,
        }
    }

    /// Apply one validated letter to the session.
    ///
    /// A repeated letter is reported without penalty. A fresh letter is
    /// recorded as used before its correctness is known; if it occurs in
    /// the secret, every hidden matching position is revealed in one
    /// step, otherwise one mistake is spent. The session moves to `Won`
    /// the moment nothing is left hidden and to `Lost` when the budget
    /// reaches zero.
    pub fn guess(&mut self, letter: char) -> GuessOutcome {
        if self.state != SessionState::InProgress {
            return GuessOutcome::GameOver;
        }
        if !self.used.insert(letter) {
            return GuessOutcome::AlreadyGuessed;
        }

        let mut revealed_any = false;
        for (i, c) in self.secret.chars().enumerate() {
            if c == letter && self.revealed[i] == PLACEHOLDER {
                self.revealed[i] = letter;
                revealed_any = true;
            }
        }

        if revealed_any {
            if !self.revealed.contains(&PLACEHOLDER) {
                self.state = SessionState::Won;
            }
            GuessOutcome::Correct
        } else {
            self.mistakes_remaining -= 1;
            if self.mistakes_remaining == 0 {
                self.state = SessionState::Lost;
            }
            GuessOutcome::Wrong
        }
    }

    /// The secret word, always lowercase.
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// The reveal progress, placeholders standing in for hidden letters.
    pub fn revealed(&self) -> String {
        self.revealed.iter().collect()
    }

    /// Letters guessed so far, in alphabetical order.
    pub fn used_letters(&self) -> Vec<char> {
        self.used.iter().copied().collect()
    }

    /// Wrong guesses still allowed before the session is lost.
    pub fn mistakes_remaining(&self) -> u32 {
        self.mistakes_remaining
    }

    /// Where the session stands.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The status block shown between turns.
    pub fn status(&self) -> String {
        format!(
            "Word: {}\nMistakes left: {}",
            self.revealed(),
            self.mistakes_remaining
        )
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use super::*;

    #[test]
    fn fresh_session_hides_everything() {
        let session = HangmanSession::new("cat");
        assert_eq!(session.revealed(), "___");
        assert_eq!(session.mistakes_remaining(), MISTAKE_BUDGET);
        assert_eq!(session.state(), SessionState::InProgress);
        assert!(session.used_letters().is_empty());
    }

    #[test]
    fn secret_is_lowercased() {
        let session = HangmanSession::new("CAT");
        assert_eq!(session.secret(), "cat");
    }

    #[test]
    fn correct_guesses_reveal_and_win() {
        let mut session = HangmanSession::new("cat");
        assert_eq!(session.guess('c'), GuessOutcome::Correct);
        assert_eq!(session.revealed(), "c__");
        assert_eq!(session.guess('a'), GuessOutcome::Correct);
        assert_eq!(session.revealed(), "ca_");
        assert_eq!(session.guess('t'), GuessOutcome::Correct);
        assert_eq!(session.revealed(), "cat");
        assert_eq!(session.state(), SessionState::Won);
        assert_eq!(session.mistakes_remaining(), MISTAKE_BUDGET);
    }

    #[test]
    fn wrong_guess_spends_one_mistake() {
        let mut session = HangmanSession::new("cat");
        assert_eq!(session.guess('z'), GuessOutcome::Wrong);
        assert_eq!(session.mistakes_remaining(), MISTAKE_BUDGET - 1);
        assert_eq!(session.revealed(), "___");
        assert_eq!(session.state(), SessionState::InProgress);
    }

    #[test]
    fn budget_exhaustion_loses() {
        let mut session = HangmanSession::new("cat");
        for letter in ['b', 'd', 'e', 'f', 'g', 'h'] {
            assert_eq!(session.guess(letter), GuessOutcome::Wrong);
            assert_eq!(session.state(), SessionState::InProgress);
        }
        assert_eq!(session.guess('i'), GuessOutcome::Wrong);
        assert_eq!(session.mistakes_remaining(), 0);
        assert_eq!(session.state(), SessionState::Lost);
    }

    #[test]
    fn repeated_letter_costs_nothing() {
        let mut session = HangmanSession::new("cat");
        session.guess('z');
        assert_eq!(session.guess('z'), GuessOutcome::AlreadyGuessed);
        assert_eq!(session.mistakes_remaining(), MISTAKE_BUDGET - 1);
        // A repeated correct letter is also just reported.
        session.guess('c');
        assert_eq!(session.guess('c'), GuessOutcome::AlreadyGuessed);
        assert_eq!(session.revealed(), "c__");
    }

    #[test]
    fn used_letters_record_wrong_and_correct_guesses() {
        let mut session = HangmanSession::new("cat");
        session.guess('t');
        session.guess('z');
        session.guess('a');
        assert_eq!(session.used_letters(), ['a', 't', 'z']);
    }

    #[test]
    fn multiple_occurrences_revealed_at_once() {
        let mut session = HangmanSession::new("banana");
        assert_eq!(session.guess('a'), GuessOutcome::Correct);
        assert_eq!(session.revealed(), "_a_a_a");
        assert_eq!(session.guess('n'), GuessOutcome::Correct);
        assert_eq!(session.revealed(), "_anana");
    }

    #[test]
    fn finished_session_ignores_guesses() {
        let mut session = HangmanSession::new("a");
        assert_eq!(session.guess('a'), GuessOutcome::Correct);
        assert_eq!(session.state(), SessionState::Won);
        assert_eq!(session.guess('b'), GuessOutcome::GameOver);
        assert_eq!(session.mistakes_remaining(), MISTAKE_BUDGET);
    }

    #[test]
    fn parse_guess_accepts_single_letters() {
        assert_eq!(parse_guess("c"), Ok('c'));
        assert_eq!(parse_guess("Q"), Ok('q'));
    }

    #[test]
    fn parse_guess_rejects_bad_input() {
        assert_eq!(parse_guess(""), Err(InvalidGuess));
        assert_eq!(parse_guess("ab"), Err(InvalidGuess));
        assert_eq!(parse_guess("1"), Err(InvalidGuess));
        assert_eq!(parse_guess("?"), Err(InvalidGuess));
        assert_eq!(parse_guess(" a"), Err(InvalidGuess));
        assert_eq!(parse_guess("é"), Err(InvalidGuess));
    }

    #[test]
    fn invalid_guess_message() {
        assert_eq!(
            InvalidGuess.to_string(),
            "Invalid input! Please enter a single alphabetic character."
        );
    }

    #[test]
    fn status_block_for_fresh_session() {
        let session = HangmanSession::new("cat");
        assert_snapshot!(session.status(), @r"
        Word: ___
        Mistakes left: 7
        ");
    }

    #[test]
    fn status_block_mid_game() {
        let mut session = HangmanSession::new("cat");
        session.guess('c');
        session.guess('z');
        assert_snapshot!(session.status(), @r"
        Word: c__
        Mistakes left: 6
        ");
    }

    #[test]
    fn session_serde_roundtrip() {
        let mut session = HangmanSession::new("banana");
        session.guess('a');
        session.guess('z');
        let json = serde_json::to_string(&session).unwrap();
        let back: HangmanSession = serde_json::from_str(&json).unwrap();
        assert_eq!(back.revealed(), session.revealed());
        assert_eq!(back.mistakes_remaining(), session.mistakes_remaining());
        assert_eq!(back.state(), session.state());
        assert_eq!(back.used_letters(), session.used_letters());
    }

    #[test]
    fn mistakes_never_exceed_budget_and_never_underflow() {
        let mut session = HangmanSession::new("rust");
        for letter in 'a'..='z' {
            session.guess(letter);
            assert!(session.mistakes_remaining() <= MISTAKE_BUDGET);
            if session.state() == SessionState::Lost {
                assert_eq!(session.mistakes_remaining(), 0);
            }
        }
        assert_eq!(session.state(), SessionState::Lost);
    }
}
