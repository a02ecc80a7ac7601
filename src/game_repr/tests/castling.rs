use super::*;

// ==================== CASTLING TESTS ====================

const BOTH_SIDES: &str = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";

#[test]
fn test_white_castling_destinations() {
    let pos = fen(BOTH_SIDES);
    assert!(has_move(&pos, "e1", "g1"), "King should castle to g1");
    assert!(has_move(&pos, "e1", "c1"), "King should castle to c1");
}

#[test]
fn test_black_kingside_castling() {
    let mut pos = fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1");
    play(&mut pos, "e8", "g8");

    assert_eq!(pos.piece_at(sq("g8")).map(|p| p.piece_type), Some(Type::King));
    assert_eq!(pos.piece_at(sq("f8")).map(|p| p.piece_type), Some(Type::Rook));
    assert!(pos.piece_at(sq("h8")).is_none());
}

#[test]
fn test_queenside_castling_moves_rook() {
    let mut pos = fen(BOTH_SIDES);
    play(&mut pos, "e1", "c1");

    assert_eq!(pos.piece_at(sq("c1")).map(|p| p.piece_type), Some(Type::King));
    assert_eq!(pos.piece_at(sq("d1")).map(|p| p.piece_type), Some(Type::Rook));
    assert!(pos.piece_at(sq("a1")).is_none());
}

#[test]
fn test_castling_round_trip() {
    let mut pos = fen(BOTH_SIDES);
    play(&mut pos, "e1", "g1");

    let king = pos.piece_at(sq("g1")).unwrap();
    let rook = pos.piece_at(sq("f1")).unwrap();
    assert_eq!((king.piece_type, king.moves), (Type::King, 1));
    assert_eq!((rook.piece_type, rook.moves), (Type::Rook, 1));
    assert_eq!(pos.history().len(), 1, "Castling is a single ply");
    assert!(pos.history()[0].is_compound());

    assert!(pos.undo());

    let king = pos.piece_at(sq("e1")).unwrap();
    let rook = pos.piece_at(sq("h1")).unwrap();
    assert_eq!((king.piece_type, king.moves), (Type::King, 0));
    assert_eq!((rook.piece_type, rook.moves), (Type::Rook, 0));
    assert!(pos.piece_at(sq("f1")).is_none());
    assert!(pos.piece_at(sq("g1")).is_none());
    assert!(pos.history().is_empty(), "One undo consumes both records");
    assert_eq!(pos.side_to_move(), Color::White);
    assert_eq!(pos.to_fen(), BOTH_SIDES);
}

#[test]
fn test_castling_blocked_by_pieces() {
    let pos = fen("r3k2r/8/8/8/8/8/8/R3KB1R w KQkq - 0 1");
    assert!(!has_move(&pos, "e1", "g1"), "Cannot castle through a bishop");
    assert!(has_move(&pos, "e1", "c1"));

    let pos = fen("r3k2r/8/8/8/8/8/8/RN2K2R w KQkq - 0 1");
    assert!(!has_move(&pos, "e1", "c1"), "Queenside needs b1 empty too");
}

#[test]
fn test_castling_prevented_when_king_moved() {
    let mut pos = fen(BOTH_SIDES);
    play(&mut pos, "e1", "f1");
    play(&mut pos, "a8", "b8");
    play(&mut pos, "f1", "e1");
    play(&mut pos, "b8", "a8");

    assert_eq!(pos.piece_at(sq("e1")).unwrap().moves, 2);
    assert!(!has_move(&pos, "e1", "g1"));
    assert!(!has_move(&pos, "e1", "c1"));
}

#[test]
fn test_castling_prevented_when_rook_moved() {
    let mut pos = fen(BOTH_SIDES);
    play(&mut pos, "h1", "h2");
    play(&mut pos, "h8", "h7");
    play(&mut pos, "h2", "h1");
    play(&mut pos, "h7", "h8");

    assert!(!has_move(&pos, "e1", "g1"));
    assert!(has_move(&pos, "e1", "c1"), "Queenside rook is still unmoved");
}

#[test]
fn test_castling_onto_attacked_square_is_illegal() {
    let pos = fen("k5r1/8/8/8/8/8/8/4K2R w K - 0 1");
    assert!(!has_move(&pos, "e1", "g1"));
}

#[test]
fn test_castling_through_attacked_square_is_allowed() {
    // Only the landing square is checked; f1 being attacked does not matter
    let pos = fen("k4r2/8/8/8/8/8/8/4K2R w K - 0 1");
    assert!(!has_move(&pos, "e1", "f1"));
    assert!(has_move(&pos, "e1", "g1"));
}

#[test]
fn test_castling_out_of_check_is_allowed() {
    let mut pos = fen("k3r3/8/8/8/8/8/8/4K2R w K - 0 1");
    assert!(pos.is_in_check());
    assert!(has_move(&pos, "e1", "g1"));

    play(&mut pos, "e1", "g1");
    assert_eq!(pos.piece_at(sq("f1")).map(|p| p.piece_type), Some(Type::Rook));
}
