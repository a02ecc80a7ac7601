use super::super::{Coord, MoveList, Piece, Position, Type};

impl Position {
    /// Pawn pushes, diagonal captures and en passant.
    ///
    /// En passant is available against an enemy pawn standing beside this one
    /// when that pawn was the last piece moved and has moved exactly once.
    /// The capture lands on the empty square diagonally forward.
    pub fn pawn_moves_into(&self, from: Coord, pawn: Piece, moves: &mut MoveList) -> bool {
        let forward = pawn.color.forward();
        let mut attacks_king = false;

        let Some(ahead) = from.offset(forward, 0) else {
            return false;
        };

        // diagonal captures onto occupied enemy squares only
        for d_file in [1, -1] {
            if let Some(target) = from.offset(forward, d_file) {
                if self.squares[target.index()].is_occupied() {
                    attacks_king |= self.try_add_target(pawn.color, target, moves).1;
                }
            }
        }

        let ahead_empty = !self.squares[ahead.index()].is_occupied();
        if ahead_empty {
            moves.push(ahead);
        }

        if !pawn.has_moved() && ahead_empty {
            if let Some(two_ahead) = from.offset(2 * forward, 0) {
                if !self.squares[two_ahead.index()].is_occupied() {
                    moves.push(two_ahead);
                }
            }
        }

        let last_moved = self.last_moved_square();
        for d_file in [1, -1] {
            let (Some(beside), Some(target)) = (from.offset(0, d_file), from.offset(forward, d_file))
            else {
                continue;
            };
            if Some(beside) != last_moved || self.squares[target.index()].is_occupied() {
                continue;
            }
            if let Some(Piece { piece_type: Type::Pawn, color, moves: 1 }) =
                self.squares[beside.index()].piece
            {
                if color != pawn.color {
                    moves.push(target);
                }
            }
        }

        attacks_king
    }
}
