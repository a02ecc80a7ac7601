use super::super::{Color, Coord, MoveList, Position};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (-1, 2),
    (1, -2),
    (-1, -2),
];

impl Position {
    pub fn knight_moves_into(&self, from: Coord, color: Color, moves: &mut MoveList) -> bool {
        self.step_moves_into(from, color, &KNIGHT_OFFSETS, moves)
    }
}
