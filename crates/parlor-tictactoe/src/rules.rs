//! Win and draw detection.

use crate::board::{Board, Coord, Mark};

/// The eight straight lines on the board, as (row, column) index pairs.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)], // top row
    [(1, 0), (1, 1), (1, 2)], // middle row
    [(2, 0), (2, 1), (2, 2)], // bottom row
    [(0, 0), (1, 0), (2, 0)], // left column
    [(0, 1), (1, 1), (2, 1)], // center column
    [(0, 2), (1, 2), (2, 2)], // right column
    [(0, 0), (1, 1), (2, 2)], // main diagonal
    [(0, 2), (1, 1), (2, 0)], // anti-diagonal
];

/// True if any row, column, or diagonal is uniformly `mark`.
pub fn has_won(board: &Board, mark: Mark) -> bool {
    LINES.iter().any(|line| {
        line.iter()
            .all(|&(r, c)| board.get(Coord::ALL[r], Coord::ALL[c]) == Some(mark))
    })
}

/// True if no empty cell remains.
///
/// Callers must check for a win first: a full board containing a
/// completed line is a win, not a draw.
pub fn is_draw(board: &Board) -> bool {
    Coord::ALL
        .iter()
        .all(|&row| Coord::ALL.iter().all(|&col| board.get(row, col).is_some()))
}
