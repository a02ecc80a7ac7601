//! Integration tests for the click-driven game session
//!
//! This test suite drives `Board` the way a front end would:
//! - Selection and move execution through `select_or_move`
//! - Compound moves (castling, en passant) and their undo
//! - Promotion hand-off and input validation

use minimax_chess::agent::player::GameResult;
use minimax_chess::board::Board;
use minimax_chess::error::ChessError;
use minimax_chess::game_repr::{Color, Coord, Type};

fn coord(name: &str) -> Coord {
    Coord::from_algebraic(name).unwrap()
}

/// Select `from` and click `to`; returns needs_promotion
fn play(board: &mut Board, from: &str, to: &str) -> bool {
    let (from, to) = (coord(from), coord(to));
    assert!(!board.select_or_move(from.rank as usize, from.file as usize).unwrap());
    assert!(
        board.is_legal_destination(to.rank as usize, to.file as usize).unwrap(),
        "{to} is not a destination of {from}"
    );
    board.select_or_move(to.rank as usize, to.file as usize).unwrap()
}

fn piece_type(board: &Board, name: &str) -> Option<Type> {
    let at = coord(name);
    board
        .piece_at(at.rank as usize, at.file as usize)
        .unwrap()
        .map(|p| p.piece_type)
}

#[test]
fn scholars_mate_by_clicks() {
    let mut board = Board::new();
    for (from, to) in [
        ("e2", "e4"),
        ("e7", "e5"),
        ("f1", "c4"),
        ("b8", "c6"),
        ("d1", "h5"),
        ("g8", "f6"),
        ("h5", "f7"),
    ] {
        assert!(!play(&mut board, from, to));
    }

    assert!(board.is_checkmate());
    assert_eq!(board.side_to_move(), Color::Black);
    assert_eq!(board.game_result(), Some(GameResult::WhiteWins));

    // Nothing can be selected into a move any more
    assert!(!board.select_or_move(7, 4).unwrap());
    assert!(!board.is_legal_destination(7, 5).unwrap());
}

#[test]
fn en_passant_and_undo() {
    let mut board = Board::new();
    play(&mut board, "e2", "e4");
    play(&mut board, "a7", "a6");
    play(&mut board, "e4", "e5");
    play(&mut board, "d7", "d5");
    let before = board.position().to_fen();

    play(&mut board, "e5", "d6");
    assert_eq!(piece_type(&board, "d5"), None, "captured pawn is gone");
    assert_eq!(piece_type(&board, "d6"), Some(Type::Pawn));

    assert!(board.undo());
    assert_eq!(board.position().to_fen(), before);
    let d5 = coord("d5");
    assert_eq!(
        board.piece_at(d5.rank as usize, d5.file as usize).unwrap().map(|p| p.moves),
        Some(1)
    );
    assert_eq!(board.side_to_move(), Color::White);
}

#[test]
fn castling_and_undo() {
    let mut board = Board::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1").unwrap();
    play(&mut board, "e1", "c1");
    assert_eq!(piece_type(&board, "d1"), Some(Type::Rook));
    play(&mut board, "e8", "g8");
    assert_eq!(piece_type(&board, "f8"), Some(Type::Rook));
    assert_eq!(board.position().history().len(), 2);

    assert!(board.undo());
    assert!(board.undo());
    assert!(!board.undo());
    assert_eq!(
        board.position().to_fen(),
        "r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1"
    );
}

#[test]
fn promotion_hand_off() {
    let mut board = Board::from_fen("1n2k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    assert!(play(&mut board, "a7", "b8"));
    assert_eq!(board.pending_promotion(), Some(coord("b8")));
    assert_eq!(board.select_or_move(0, 4), Err(ChessError::PromotionPending));

    // Undo while pending takes the capture back and keeps White on move
    assert!(board.undo());
    assert_eq!(board.pending_promotion(), None);
    assert_eq!(board.side_to_move(), Color::White);
    assert_eq!(piece_type(&board, "b8"), Some(Type::Knight));

    assert!(play(&mut board, "a7", "a8"));
    board.promote(3).unwrap();
    assert_eq!(piece_type(&board, "a8"), Some(Type::Knight));
    assert_eq!(board.side_to_move(), Color::Black);
}

#[test]
fn bad_input_is_rejected_without_side_effects() {
    let mut board = Board::new();
    assert_eq!(
        board.select_or_move(0, 8),
        Err(ChessError::OutOfBounds { rank: 0, file: 8 })
    );
    assert_eq!(board.promote(0), Err(ChessError::NoPendingPromotion));
    assert_eq!(board.promote(9), Err(ChessError::InvalidPromotionChoice(9)));
    assert!(matches!(
        Board::from_fen("not a fen"),
        Err(ChessError::InvalidFen { .. })
    ));
    assert!(board.position().history().is_empty());
    assert_eq!(board.position().all_legal_moves().len(), 20);
}

#[test]
fn stalemate_is_reported() {
    let board = Board::from_fen("7k/5K2/6Q1/8/8/8/8/8 b - - 0 1").unwrap();
    assert!(board.is_stalemate());
    assert!(!board.is_checkmate());
    assert_eq!(board.game_result(), Some(GameResult::Stalemate));
}

#[test]
fn display_shows_glyphs() {
    let board = Board::new();
    let text = board.to_string();
    assert!(text.contains('♔'));
    assert!(text.contains('♚'));
    assert!(text.ends_with("a b c d e f g h"));
}
