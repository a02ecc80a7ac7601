use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Square from its algebraic name
pub fn sq(name: &str) -> Coord {
    Coord::from_algebraic(name).unwrap()
}

/// Helper function to create an empty board
pub fn empty_board() -> Position {
    Position::empty()
}

/// Helper function to place a piece that has never moved
pub fn place_piece(pos: &mut Position, name: &str, color: Color, piece_type: Type) {
    pos.place(sq(name), Piece::new(color, piece_type));
}

/// Play a legal move given as two square names; returns needs_promotion
pub fn play(pos: &mut Position, from: &str, to: &str) -> bool {
    pos.make_move(Move::new(sq(from), sq(to))).unwrap()
}

/// Helper function to check if a legal move exists
pub fn has_move(pos: &Position, from: &str, to: &str) -> bool {
    pos.legal_moves_from(sq(from)).contains(&sq(to))
}

pub fn fen(text: &str) -> Position {
    Position::from_fen(text).unwrap()
}

// ==================== TEST MODULES ====================

mod castling;
