use std::io::{self, BufRead};

use parlor_tictactoe::{Coord, Game, GameStatus, Mark};

pub fn run() -> Result<(), String> {
    let mut game = Game::new();

    println!("Tic-Tac-Toe Game (Player X vs Player O)");
    println!("\n{}\n", game.board().render());

    let stdin = io::stdin();
    let mut reader = stdin.lock();

    while game.status() == GameStatus::InProgress {
        let player = game.current();

        let Some(row) = prompt_coord(&mut reader, player, "row")? else {
            return Ok(()); // EOF
        };
        let Some(col) = prompt_coord(&mut reader, player, "column")? else {
            return Ok(()); // EOF
        };

        match game.play(row, col) {
            Ok(status) => {
                println!("\n{}\n", game.board().render());
                match status {
                    GameStatus::Won(mark) => println!("Player {mark} wins!"),
                    GameStatus::Drawn => println!("Game drawn!"),
                    GameStatus::InProgress => {}
                }
            }
            // Both coordinates were valid, so the only rejection left is
            // an occupied cell; the same player retries from the row.
            Err(e) => println!("{e}"),
        }
    }

    Ok(())
}

/// Prompt until the player enters a valid coordinate.
///
/// Returns `Ok(None)` if input runs out.
fn prompt_coord(
    reader: &mut impl BufRead,
    player: Mark,
    axis: &str,
) -> Result<Option<Coord>, String> {
    loop {
        let prompt = format!("Player {player}, enter {axis} (0-2): ");
        let Some(input) = super::prompt_line(reader, &prompt)? else {
            return Ok(None);
        };
        match Coord::parse(&input) {
            Ok(coord) => return Ok(Some(coord)),
            Err(e) => println!("{e}"),
        }
    }
}
