pub mod hangman;
pub mod palindrome;
pub mod tictactoe;

use std::io::{self, BufRead, Write};

/// Print a prompt (no trailing newline) and read one line of input.
///
/// Returns `Ok(None)` once input is exhausted. Only the line break is
/// stripped; the games decide what to make of any other whitespace.
fn prompt_line(reader: &mut impl BufRead, prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) => Ok(None), // EOF
        Err(e) => Err(e.to_string()),
        _ => {
            while line.ends_with(['\n', '\r']) {
                line.pop();
            }
            Ok(Some(line))
        }
    }
}
