use crate::logic::board::{Board, Piece};
use crate::logic::rules::{has_four, PlaceError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundStatus {
    Playing,
    Won(Piece),
    Draw,
}

/// Results across rounds of one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub player_wins: u32,
    pub opponent_wins: u32,
    pub draws: u32,
}

impl Tally {
    fn record(&mut self, status: RoundStatus) {
        match status {
            RoundStatus::Won(Piece::Player) => self.player_wins += 1,
            RoundStatus::Won(Piece::Opponent) => self.opponent_wins += 1,
            RoundStatus::Draw => self.draws += 1,
            RoundStatus::Playing | RoundStatus::Won(Piece::Empty) => {}
        }
    }
}

/// One board plus turn order and results. The automated side opens every
/// round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    turn: Piece,
    status: RoundStatus,
    tally: Tally,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub const FIRST_MOVER: Piece = Piece::Opponent;

    #[must_use]
    pub const fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Self::FIRST_MOVER,
            status: RoundStatus::Playing,
            tally: Tally {
                player_wins: 0,
                opponent_wins: 0,
                draws: 0,
            },
        }
    }

    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// The search engine borrows the board mutably for speculative moves.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub const fn turn(&self) -> Piece {
        self.turn
    }

    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    pub const fn tally(&self) -> Tally {
        self.tally
    }

    /// Drops the current side's piece into `col`.
    ///
    /// On failure nothing changes and the same side is still to move.
    pub fn play(&mut self, col: usize) -> Result<RoundStatus, PlaceError> {
        if self.status != RoundStatus::Playing {
            return Err(PlaceError::RoundOver);
        }

        let mover = self.turn;
        let row = self.board.place(col, mover)?;
        log::trace!("{mover:?} dropped into column {col}, row {row}");

        self.update_status(mover);
        Ok(self.status)
    }

    fn update_status(&mut self, mover: Piece) {
        self.status = if has_four(&self.board, mover) {
            RoundStatus::Won(mover)
        } else if self.board.is_board_full() {
            RoundStatus::Draw
        } else {
            self.turn = mover.opposite();
            return;
        };

        self.tally.record(self.status);
        log::debug!("round finished: {:?}, tally {:?}", self.status, self.tally);
    }

    /// Empties the board for another round. Tallies carry over.
    pub fn new_round(&mut self) {
        self.board.clear();
        self.turn = Self::FIRST_MOVER;
        self.status = RoundStatus::Playing;
    }
}
