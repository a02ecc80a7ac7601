use super::super::{Coord, MoveList, Piece, Position, Type};

const KING_OFFSETS: [(i8, i8); 8] = [
    (1, -1),
    (1, 0),
    (1, 1),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

impl Position {
    /// Adjacent squares plus castling destinations.
    ///
    /// Castling only needs an unmoved king, an unmoved own rook in the corner
    /// and empty squares between them. Whether the king starts in, passes
    /// through or lands on an attacked square is NOT examined here; only the
    /// landing square is rejected later by the self-check filter.
    pub fn king_moves_into(&self, from: Coord, king: Piece, moves: &mut MoveList) -> bool {
        let attacks_king = self.step_moves_into(from, king.color, &KING_OFFSETS, moves);

        if king.has_moved() || from.file != 4 {
            return attacks_king;
        }

        let rank = from.rank;
        let empty = |file: u8| self.squares[(rank * 8 + file) as usize].piece.is_none();

        // kingside: f and g empty, rook on h
        if empty(5) && empty(6) && self.has_unmoved_rook(rank, 7, king) {
            moves.push(Coord { rank, file: 6 });
        }

        // queenside: b, c and d empty, rook on a
        if empty(1) && empty(2) && empty(3) && self.has_unmoved_rook(rank, 0, king) {
            moves.push(Coord { rank, file: 2 });
        }

        attacks_king
    }

    fn has_unmoved_rook(&self, rank: u8, file: u8, king: Piece) -> bool {
        matches!(
            self.squares[(rank * 8 + file) as usize].piece,
            Some(Piece { piece_type: Type::Rook, color, moves: 0 }) if color == king.color
        )
    }
}
