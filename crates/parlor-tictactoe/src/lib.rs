//! Two-player tic-tac-toe for Parlor.
//!
//! The board is only ever indexed through the bounds-checked [`Coord`]
//! type and never overwrites a placed mark. [`Game`] runs the turn
//! machine: X moves first, a completed line is checked before a full
//! board, and finished games refuse further moves. Prompting and
//! terminal output live in the CLI crate.

pub mod board;
pub mod game;
pub mod rules;

pub use board::{Board, Cell, CellOccupied, Coord, Mark, ParseCoordError, SIZE};
pub use game::{Game, GameStatus, MoveError};
pub use rules::{has_won, is_draw};
