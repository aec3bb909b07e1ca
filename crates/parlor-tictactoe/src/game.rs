//! The turn-by-turn game state machine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{Board, CellOccupied, Coord, Mark};
use crate::rules::{has_won, is_draw};

/// Where a game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// The game continues.
    InProgress,
    /// The contained mark completed a line.
    Won(Mark),
    /// The board filled up with no winner.
    Drawn,
}

/// Rejection reasons for an attempted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The target cell already holds a mark.
    #[error(transparent)]
    Occupied(#[from] CellOccupied),
    /// The game has already finished.
    #[error("the game is already over")]
    Finished,
}

/// A two-player tic-tac-toe game.
///
/// X moves first. Every successful move checks for a win before a
/// draw and, if the game continues, hands the turn to the other mark.
/// A rejected move changes nothing, including whose turn it is.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    current: Mark,
    status: GameStatus,
    moves: u32,
}

impl Game {
    /// Start a fresh game with an empty board and X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current: Mark::X,
            status: GameStatus::InProgress,
            moves: 0,
        }
    }

    /// The board as it currently stands.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The mark whose turn it is.
    ///
    /// Unchanged after the game finishes; no further moves are accepted
    /// then anyway.
    pub fn current(&self) -> Mark {
        self.current
    }

    /// Where the game stands.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Number of successful moves so far.
    pub fn move_count(&self) -> u32 {
        self.moves
    }

    /// Attempt a move for the mark whose turn it is.
    ///
    /// On success, returns the status the move produced. An occupied
    /// target cell or a finished game rejects the move and leaves every
    /// part of the state untouched.
    pub fn play(&mut self, row: Coord, col: Coord) -> Result<GameStatus, MoveError> {
        if self.status != GameStatus::InProgress {
            return Err(MoveError::Finished);
        }
        self.board.place(row, col, self.current)?;
        self.moves += 1;

        if has_won(&self.board, self.current) {
            self.status = GameStatus::Won(self.current);
        } else if is_draw(&self.board) {
            self.status = GameStatus::Drawn;
        } else {
            self.current = self.current.opponent();
        }
        Ok(self.status)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
