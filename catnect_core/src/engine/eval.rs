use crate::engine::config::EngineConfig;
use crate::engine::Evaluator;
use crate::logic::board::{Board, Piece};
use crate::logic::rules::has_four;
use std::sync::Arc;

/// Scores only decided positions: a win for `piece`, a loss, or neutral.
///
/// Partial lines earn nothing, so every bit of lookahead comes from the
/// search itself.
pub struct WinLossEvaluator {
    config: Arc<EngineConfig>,
}

impl WinLossEvaluator {
    pub const fn new(config: Arc<EngineConfig>) -> Self {
        Self { config }
    }
}

impl Evaluator for WinLossEvaluator {
    fn evaluate(&self, board: &Board, piece: Piece) -> i32 {
        if piece == Piece::Empty {
            return 0;
        }
        if has_four(board, piece) {
            self.config.win_score
        } else if has_four(board, piece.opposite()) {
            -self.config.win_score
        } else {
            0
        }
    }
}
