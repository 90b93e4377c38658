use crate::logic::board::{Board, Piece};
use serde::{Deserialize, Serialize};

pub mod config;
pub mod eval;
pub mod search;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    pub depth: u8,
    pub nodes: u32,
    pub time_ms: u64,
    pub score: i32,
}

pub trait Evaluator {
    /// Heuristic score of `board` from `piece`'s point of view.
    fn evaluate(&self, board: &Board, piece: Piece) -> i32;
}

pub trait Searcher {
    /// Picks a column for the automated side. The board is restored before
    /// returning.
    fn search(&mut self, board: &mut Board) -> Option<(usize, SearchStats)>;
}
