use crate::logic::board::{Board, Piece, COLS, ROWS};
use serde::{Deserialize, Serialize};

/// Why a piece could not be dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum PlaceError {
    #[error("column {column} is out of range (0-{})", COLS - 1)]
    ColumnOutOfRange { column: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("the round is already over")]
    RoundOver,
}

/// Row/column steps for the four line directions: horizontal, vertical and
/// both diagonals.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Length of a winning line.
pub const CONNECT: usize = 4;

/// Checks whether `piece` has four in a row anywhere on the board.
pub fn has_four(board: &Board, piece: Piece) -> bool {
    if piece == Piece::Empty {
        return false;
    }
    (0..ROWS).any(|row| {
        (0..COLS).any(|col| {
            board.get_piece(row, col) == Some(piece)
                && DIRECTIONS
                    .iter()
                    .any(|&(dr, dc)| line_from(board, piece, row, col, dr, dc))
        })
    })
}

/// True when the `CONNECT - 1` cells after `(row, col)` along `(dr, dc)` are
/// all on the board and hold `piece`.
fn line_from(board: &Board, piece: Piece, row: usize, col: usize, dr: isize, dc: isize) -> bool {
    (1..CONNECT).all(|step| {
        let step = step as isize;
        let cell = row
            .checked_add_signed(dr * step)
            .zip(col.checked_add_signed(dc * step))
            .and_then(|(r, c)| board.get_piece(r, c));
        cell == Some(piece)
    })
}
