//! The 3x3 board, its marks, and the bounds-checked coordinate type.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Side length of the board.
pub const SIZE: usize = 3;

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// The X player. Moves first.
    X,
    /// The O player.
    O,
}

impl Mark {
    /// The opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::X => write!(f, "X"),
            Self::O => write!(f, "O"),
        }
    }
}

/// Rejection reasons for coordinate input.
///
/// Malformed input and a valid digit outside the grid get distinct
/// messages so the player knows what to fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCoordError {
    /// The input was not exactly one digit character.
    #[error("Invalid input! Enter a number between 0 and 2.")]
    NotADigit,
    /// The digit was outside `0..=2`.
    #[error("Out of range! Enter 0, 1, or 2.")]
    OutOfRange,
}

/// A validated row or column index, always 0, 1, or 2.
///
/// The board is only indexed through this type, so out-of-bounds access
/// is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord(u8);

impl Coord {
    /// The three valid coordinates, in order.
    pub const ALL: [Self; SIZE] = [Self(0), Self(1), Self(2)];

    /// Create a coordinate, rejecting indices outside the grid.
    pub fn new(index: u8) -> Option<Self> {
        (index < SIZE as u8).then_some(Self(index))
    }

    /// Parse one line of user input as a coordinate.
    ///
    /// Accepts exactly one digit character; anything else (empty input,
    /// several characters, a non-digit) is malformed, and a digit past 2
    /// is out of range. Surrounding whitespace is not forgiven.
    pub fn parse(input: &str) -> Result<Self, ParseCoordError> {
        let mut chars = input.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return Err(ParseCoordError::NotADigit);
        };
        let digit = c.to_digit(10).ok_or(ParseCoordError::NotADigit)?;
        Self::new(digit as u8).ok_or(ParseCoordError::OutOfRange)
    }

    /// The raw index, guaranteed `< SIZE`.
    pub fn index(self) -> usize {
        usize::from(self.0)
    }
}

/// Contents of one cell.
pub type Cell = Option<Mark>;

/// Rejection for a move on a cell that already holds a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Cell already occupied! Try again.")]
pub struct CellOccupied;

/// A 3x3 tic-tac-toe board.
///
/// Cells start empty and are only written through [`Board::place`],
/// which never overwrites an existing mark.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// The cell at the given coordinates.
    pub fn get(&self, row: Coord, col: Coord) -> Cell {
        self.cells[row.index()][col.index()]
    }

    /// Place `mark` on an empty cell.
    ///
    /// Fails without touching the board if the cell is already marked.
    pub fn place(&mut self, row: Coord, col: Coord, mark: Mark) -> Result<(), CellOccupied> {
        let cell = &mut self.cells[row.index()][col.index()];
        if cell.is_some() {
            return Err(CellOccupied);
        }
        *cell = Some(mark);
        Ok(())
    }

    /// Number of cells holding a mark.
    pub fn marked_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// Render the board as a text grid.
    ///
    /// Three-character cells separated by `|`, rows separated by a
    /// horizontal rule, no trailing newline:
    ///
    /// ```text
    ///  X |   | O
    /// ---★---★---
    ///    | X |
    /// ---★---★---
    ///    |   | O
    /// ```
    pub fn render(&self) -> String {
        let rows: Vec<String> = self
            .cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Some(mark) => format!(" {mark} "),
                        None => "   ".to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect();
        rows.join("\n---★---★---\n")
    }
}
