use crate::engine::config::EngineConfig;
use crate::engine::eval::WinLossEvaluator;
use crate::engine::{Evaluator, SearchStats, Searcher};
use crate::logic::board::{Board, Piece, CENTER_COL, COLS};
use crate::logic::rules::has_four;
use std::sync::Arc;
use std::time::Instant;

/// Depth-limited minimax with alpha-beta pruning.
///
/// The automated side plays [`Piece::Opponent`] and is the maximizer. The
/// search runs on the caller's board with place/undo pairs; every call leaves
/// the board exactly as it found it.
pub struct MinimaxEngine<E = WinLossEvaluator> {
    config: Arc<EngineConfig>,
    evaluator: E,
    nodes_searched: u32,
}

impl MinimaxEngine {
    pub fn new(config: Arc<EngineConfig>) -> Self {
        Self {
            evaluator: WinLossEvaluator::new(config.clone()),
            config,
            nodes_searched: 0,
        }
    }
}

impl<E: Evaluator> MinimaxEngine<E> {
    pub const fn with_evaluator(config: Arc<EngineConfig>, evaluator: E) -> Self {
        Self {
            config,
            evaluator,
            nodes_searched: 0,
        }
    }

    /// Nodes visited since the last top-level search started.
    pub const fn nodes_searched(&self) -> u32 {
        self.nodes_searched
    }

    /// Columns sorted by distance from the center, ties in natural order:
    /// `[3, 2, 4, 1, 5, 0, 6]`.
    pub fn center_order() -> [usize; COLS] {
        let mut cols: [usize; COLS] = std::array::from_fn(|col| col);
        cols.sort_by_key(|&col| col.abs_diff(CENTER_COL));
        cols
    }

    /// Best score reachable from `board`, from the automated side's point of
    /// view. `maximizing` is true when the automated side moves next.
    ///
    /// A finished game is scored before the depth limit is consulted, so a
    /// position that is already won returns `win_score` at any depth.
    ///
    /// At the depth limit the evaluator scores the side to move and the
    /// minimizer's score is negated, so leaves stay in the automated side's
    /// frame rather than returning the side-to-move score as is. With
    /// [`WinLossEvaluator`] such leaves score 0 either way.
    pub fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes_searched = self.nodes_searched.saturating_add(1);

        if has_four(board, Piece::Opponent) {
            return self.config.win_score;
        }
        if has_four(board, Piece::Player) {
            return -self.config.win_score;
        }

        let side = if maximizing {
            Piece::Opponent
        } else {
            Piece::Player
        };

        if depth == 0 {
            let score = self.evaluator.evaluate(board, side);
            return if maximizing { score } else { -score };
        }

        // Drawn.
        if board.is_board_full() {
            return 0;
        }

        let mut best_score = if maximizing { -i32::MAX } else { i32::MAX };

        for col in 0..COLS {
            if board.place(col, side).is_err() {
                continue;
            }
            let score = self.minimax(board, depth - 1, !maximizing, alpha, beta);
            board.undo(col);

            if maximizing {
                best_score = best_score.max(score);
                alpha = alpha.max(best_score);
            } else {
                best_score = best_score.min(score);
                beta = beta.min(best_score);
            }

            if beta <= alpha {
                break;
            }
        }

        best_score
    }

    /// Column the automated side should play, or `None` when the board is
    /// full.
    pub fn best_move(&mut self, board: &mut Board) -> Option<usize> {
        self.select(board).map(|(col, _)| col)
    }

    fn select(&mut self, board: &mut Board) -> Option<(usize, i32)> {
        self.nodes_searched = 0;
        let order = Self::center_order();

        if self.config.take_immediate_wins {
            if let Some(col) = order
                .iter()
                .copied()
                .find(|&col| Self::wins_immediately(board, col))
            {
                log::debug!("column {col} wins immediately");
                return Some((col, self.config.win_score));
            }
        }

        let mut best: Option<(usize, i32)> = None;
        for col in order {
            if board.place(col, Piece::Opponent).is_err() {
                continue;
            }
            let score = self.minimax(board, self.config.max_depth, false, -i32::MAX, i32::MAX);
            board.undo(col);

            log::trace!("column {col} scores {score}");
            // Strict comparison keeps the more central column on ties.
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((col, score));
            }
        }

        best
    }

    fn wins_immediately(board: &mut Board, col: usize) -> bool {
        if board.place(col, Piece::Opponent).is_err() {
            return false;
        }
        let wins = has_four(board, Piece::Opponent);
        board.undo(col);
        wins
    }
}

impl<E: Evaluator> Searcher for MinimaxEngine<E> {
    fn search(&mut self, board: &mut Board) -> Option<(usize, SearchStats)> {
        let start = Instant::now();
        let (col, score) = self.select(board)?;
        let stats = SearchStats {
            depth: self.config.max_depth,
            nodes: self.nodes_searched,
            time_ms: u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
            score,
        };
        log::debug!(
            "chose column {col} (score {score}, {} nodes, {} ms)",
            stats.nodes,
            stats.time_ms
        );
        Some((col, stats))
    }
}
