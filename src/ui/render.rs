use catnect_core::logic::board::{Board, Piece, COLS};

const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Draws the board top row first, framed, with column numbers underneath.
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub const fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn render(&self, board: &Board) -> String {
        let separator = format!("+{}\n", "---+".repeat(COLS));
        let mut out = separator.clone();

        for row in board.rows().rev() {
            out.push('|');
            for &piece in row {
                out.push_str(&self.cell(piece));
                out.push('|');
            }
            out.push('\n');
            out.push_str(&separator);
        }

        out.push(' ');
        for col in 0..COLS {
            out.push_str(&format!(" {col} "));
        }
        out.push('\n');
        out
    }

    fn cell(&self, piece: Piece) -> String {
        let text = format!(" {} ", piece.symbol());
        let color = match piece {
            Piece::Player => RED,
            Piece::Opponent => YELLOW,
            Piece::Empty => return text,
        };
        if self.color {
            format!("{color}{text}{RESET}")
        } else {
            text
        }
    }
}
