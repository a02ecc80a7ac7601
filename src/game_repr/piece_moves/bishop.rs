use super::super::{Color, Coord, MoveList, Position};
use super::DIAGONAL;

impl Position {
    /// Diagonal rays; returns true if one of them ends on the enemy king
    pub fn bishop_moves_into(&self, from: Coord, color: Color, moves: &mut MoveList) -> bool {
        self.slide_moves_into(from, color, &DIAGONAL, moves)
    }
}
