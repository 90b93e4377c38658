use catnect_core::engine::config::EngineConfig;
use catnect_core::engine::search::MinimaxEngine;
use catnect_core::engine::Searcher;
use catnect_core::logic::board::{Board, Piece, COLS};
use catnect_core::logic::rules::{has_four, PlaceError};
use std::sync::Arc;

fn engine() -> MinimaxEngine {
    MinimaxEngine::new(Arc::new(EngineConfig::default()))
}

fn board(notation: &str) -> Board {
    Board::from_notation(notation).expect("valid test position")
}

/// Alternating, never-winning fill of the whole grid, automated side first.
const DRAW_SEQUENCE: [usize; 42] = [
    0, 1, 2, 3, 4, 5, 6, 0, 1, 2, 3, 4, 5, 6, 0, 1, 2, 3, 4, 5, 6, 1, 0, 3, 2, 5, 4, 0, 6, 1,
    2, 3, 4, 5, 6, 0, 1, 2, 3, 4, 5, 6,
];

#[test]
fn test_completes_horizontal_four() {
    // O holds row 0 columns 1-3; both ends are open.
    let mut b = board("......./......./......./......./.XX..../.OOO..X");
    let before = b.clone();

    let col = engine().best_move(&mut b).expect("a move");
    assert!(col == 0 || col == 4, "expected 0 or 4, got {col}");
    assert_eq!(b, before);

    b.place(col, Piece::Opponent).unwrap();
    assert!(has_four(&b, Piece::Opponent));
}

#[test]
fn test_without_shortcut_a_later_win_can_tie() {
    // With the shortcut disabled a forced win one move later scores the same
    // as the immediate one, so the more central column 3 is kept.
    let config = EngineConfig {
        take_immediate_wins: false,
        ..EngineConfig::default()
    };
    let mut engine = MinimaxEngine::new(Arc::new(config));
    let mut b = board("......./......./......./......./.XX..../.OOO..X");

    let (col, stats) = engine.search(&mut b).unwrap();
    assert_eq!(col, 3);
    assert_eq!(stats.score, 1000);
}

#[test]
fn test_blocks_vertical_threat() {
    // X has three stacked in column 0 and would win next move.
    let mut b = board("......./......./......./X....../X..O.../X..OO..");
    assert_eq!(engine().best_move(&mut b), Some(0));
}

#[test]
fn test_prefers_own_win_over_block() {
    // Both sides threaten; winning now beats blocking column 0.
    let mut b = board("......./......./......./X....../X....../XOOO...");
    assert_eq!(engine().best_move(&mut b), Some(4));
}

#[test]
fn test_empty_board_picks_center() {
    let mut b = Board::new();
    assert_eq!(engine().best_move(&mut b), Some(3));
}

#[test]
fn test_minimax_reports_existing_win_at_any_depth() {
    let mut b = board("......./......./......./...O.../...OX../..XOXX.");
    b.place(3, Piece::Opponent).unwrap();
    assert!(has_four(&b, Piece::Opponent));

    let mut engine = engine();
    for depth in 0..=5 {
        assert_eq!(engine.minimax(&mut b, depth, false, -i32::MAX, i32::MAX), 1000);
    }
}

#[test]
fn test_full_board_rejects_every_column() {
    let mut b = Board::new();
    let mut piece = Piece::Opponent;
    for col in DRAW_SEQUENCE {
        b.place(col, piece).unwrap();
        assert!(!has_four(&b, piece), "{piece:?} won at column {col}");
        piece = piece.opposite();
    }

    assert!(b.is_board_full());
    for col in 0..COLS {
        assert_eq!(b.available_row(col), None);
        for piece in [Piece::Player, Piece::Opponent] {
            assert_eq!(b.place(col, piece), Err(PlaceError::ColumnFull { column: col }));
        }
    }
    assert_eq!(engine().best_move(&mut b), None);
}

#[test]
fn test_place_undo_along_a_whole_game() {
    let mut b = Board::new();
    let mut piece = Piece::Opponent;
    for col in DRAW_SEQUENCE {
        for probe in 0..COLS {
            let before = b.clone();
            if b.place(probe, piece).is_ok() {
                b.undo(probe);
            }
            assert_eq!(b, before);
        }
        b.place(col, piece).unwrap();
        piece = piece.opposite();
    }
}

#[test]
fn test_beats_leftmost_column_player() {
    // The automated side against a player that always takes the leftmost open column.
    let mut b = Board::new();
    let mut engine = engine();
    loop {
        let col = engine.best_move(&mut b).expect("board not full");
        b.place(col, Piece::Opponent).unwrap();
        if has_four(&b, Piece::Opponent) {
            break;
        }
        let reply = b.available_columns().next().expect("board not full");
        b.place(reply, Piece::Player).unwrap();
        assert!(!has_four(&b, Piece::Player), "naive player should not win");
    }
}
