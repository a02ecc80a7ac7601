use super::super::{Color, Coord, MoveList, Position};
use super::ORTHOGONAL;

impl Position {
    /// Orthogonal rays; returns true if one of them ends on the enemy king
    pub fn rook_moves_into(&self, from: Coord, color: Color, moves: &mut MoveList) -> bool {
        self.slide_moves_into(from, color, &ORTHOGONAL, moves)
    }
}
