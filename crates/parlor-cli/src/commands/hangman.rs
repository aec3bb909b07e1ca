use std::io;
use std::path::Path;

use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;

use parlor_hangman::{GuessOutcome, HangmanSession, SessionState, WordList, parse_guess};

pub fn run(words_path: &Path, seed: Option<u64>) -> Result<(), String> {
    let words = WordList::load(words_path).map_err(|e| e.to_string())?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut session = HangmanSession::new(words.choose(&mut rng));

    println!("Welcome to Hangman!");
    println!("\n{}", session.status());

    let stdin = io::stdin();
    let mut reader = stdin.lock();

    while session.state() == SessionState::InProgress {
        let Some(input) = super::prompt_line(&mut reader, "\nEnter a letter: ")? else {
            // Input ran out mid-game; show the secret on the way out.
            println!("\nThe word was: {}", session.secret());
            return Ok(());
        };

        let letter = match parse_guess(&input) {
            Ok(letter) => letter,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        match session.guess(letter) {
            GuessOutcome::Correct => println!("{}", "Good guess!".green()),
            GuessOutcome::Wrong => println!("{}", "Wrong guess!".red()),
            GuessOutcome::AlreadyGuessed => {
                println!("You already guessed '{letter}'. Try another.");
                continue;
            }
            GuessOutcome::GameOver => break,
        }

        println!("\n{}", session.status());
    }

    match session.state() {
        SessionState::Won => println!(
            "\nCongratulations! You guessed the word: {}",
            session.secret()
        ),
        SessionState::Lost => println!("\nYou lost! The word was: {}", session.secret()),
        SessionState::InProgress => {}
    }

    Ok(())
}
