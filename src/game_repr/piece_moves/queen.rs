use super::super::{Color, Coord, MoveList, Position};

impl Position {
    pub fn queen_moves_into(&self, from: Coord, color: Color, moves: &mut MoveList) -> bool {
        let diagonal = self.bishop_moves_into(from, color, moves);
        let orthogonal = self.rook_moves_into(from, color, moves);
        diagonal || orthogonal
    }
}
