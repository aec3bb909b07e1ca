//! CLI frontend for the Parlor terminal games.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "parlor",
    about = "Parlor: three little games for one terminal",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check lines of input for palindromes until 'exit' or 'quit'
    Palindrome,

    /// Guess a secret word one letter at a time
    Hangman {
        /// File of candidate words, one per line
        #[arg(short, long, default_value = "words.txt")]
        words: PathBuf,

        /// RNG seed for a reproducible word choice (random if omitted)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Play two-player tic-tac-toe on a shared keyboard
    Tictactoe,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Palindrome => commands::palindrome::run(),
        Commands::Hangman { words, seed } => commands::hangman::run(&words, seed),
        Commands::Tictactoe => commands::tictactoe::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
