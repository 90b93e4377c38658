use crate::logic::rules::PlaceError;
use serde::{Deserialize, Serialize};

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Column the center-biased ordering radiates from.
pub const CENTER_COL: usize = COLS / 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Piece {
    #[default]
    Empty,
    Player,
    Opponent,
}

impl Piece {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Player => Self::Opponent,
            Self::Opponent => Self::Player,
            Self::Empty => Self::Empty,
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Player => 'X',
            Self::Opponent => 'O',
        }
    }

    #[must_use]
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            '.' => Some(Self::Empty),
            'X' | 'x' => Some(Self::Player),
            'O' | 'o' => Some(Self::Opponent),
            _ => None,
        }
    }
}

/// A 6x7 Connect-Four grid. Row 0 is the bottom row.
///
/// Within every column the occupied cells form a contiguous run starting at
/// row 0. All mutation goes through [`Board::place`], [`Board::undo`] and
/// [`Board::clear`], which keep that invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    grid: [[Piece; COLS]; ROWS],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            grid: [[Piece::Empty; COLS]; ROWS],
        }
    }

    /// Parses the notation produced by [`Board::to_notation`]: one string per
    /// row, top row first, separated by `/`, using `.`, `X` and `O`.
    ///
    /// Returns `None` on a malformed string or on a position that breaks
    /// gravity (an occupied cell above an empty one).
    #[must_use]
    pub fn from_notation(notation: &str) -> Option<Self> {
        let rows: Vec<&str> = notation.split('/').collect();
        if rows.len() != ROWS {
            return None;
        }

        let mut board = Self::new();
        for (i, line) in rows.iter().enumerate() {
            let row = ROWS - 1 - i;
            let cells: Vec<Piece> = line
                .chars()
                .map(Piece::from_symbol)
                .collect::<Option<_>>()?;
            if cells.len() != COLS {
                return None;
            }
            for (col, piece) in cells.into_iter().enumerate() {
                board.grid[row][col] = piece;
            }
        }

        for col in 0..COLS {
            let height = board.column_height(col);
            if (height..ROWS).any(|row| board.grid[row][col] != Piece::Empty) {
                return None;
            }
        }

        Some(board)
    }

    #[must_use]
    pub fn to_notation(&self) -> String {
        let mut out = String::with_capacity(ROWS * (COLS + 1));
        for (i, row) in self.grid.iter().rev().enumerate() {
            if i > 0 {
                out.push('/');
            }
            out.extend(row.iter().map(|p| p.symbol()));
        }
        out
    }

    #[must_use]
    pub fn get_piece(&self, row: usize, col: usize) -> Option<Piece> {
        self.grid.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Rows from the bottom (row 0) upwards.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[Piece; COLS]> + ExactSizeIterator {
        self.grid.iter()
    }

    /// Lowest empty row in `col`, or `None` when the column is full or `col`
    /// is off the board.
    #[must_use]
    pub fn available_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).find(|&row| self.grid[row][col] == Piece::Empty)
    }

    /// Drops `piece` into `col` and returns the row it landed on.
    pub fn place(&mut self, col: usize, piece: Piece) -> Result<usize, PlaceError> {
        debug_assert_ne!(piece, Piece::Empty, "placing an empty cell");
        if col >= COLS {
            return Err(PlaceError::ColumnOutOfRange { column: col });
        }
        let row = self
            .available_row(col)
            .ok_or(PlaceError::ColumnFull { column: col })?;
        self.grid[row][col] = piece;
        Ok(row)
    }

    /// Clears the highest occupied cell in `col`.
    ///
    /// Must be paired with exactly one successful [`Board::place`] on the same
    /// column. Undoing an empty or off-board column does nothing.
    pub fn undo(&mut self, col: usize) {
        if col >= COLS {
            return;
        }
        if let Some(row) = (0..ROWS).rev().find(|&r| self.grid[r][col] != Piece::Empty) {
            self.grid[row][col] = Piece::Empty;
        }
    }

    /// Gravity fills columns bottom-up, so only the top row needs checking.
    #[must_use]
    pub fn is_column_full(&self, col: usize) -> bool {
        self.grid[ROWS - 1]
            .get(col)
            .is_none_or(|&p| p != Piece::Empty)
    }

    #[must_use]
    pub fn is_board_full(&self) -> bool {
        self.grid[ROWS - 1].iter().all(|&p| p != Piece::Empty)
    }

    pub fn available_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..COLS).filter(move |&col| !self.is_column_full(col))
    }

    /// Number of pieces stacked in an on-board column.
    #[must_use]
    pub fn column_height(&self, col: usize) -> usize {
        self.available_row(col).unwrap_or(ROWS)
    }

    #[must_use]
    pub fn count(&self, piece: Piece) -> usize {
        self.grid.iter().flatten().filter(|&&p| p == piece).count()
    }

    pub fn clear(&mut self) {
        self.grid = [[Piece::Empty; COLS]; ROWS];
    }
}
