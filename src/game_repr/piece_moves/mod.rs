pub mod pawn;
pub mod knight;
pub mod bishop;
pub mod rook;
pub mod queen;
pub mod king;

use super::{Color, Coord, MoveList, Position, Type};

pub(crate) const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

impl Position {
    /// Pushes `target` when it is empty or holds an enemy piece.
    ///
    /// Returns (square was empty, target holds the enemy king). Sliders keep
    /// scanning a ray only while the first value is true.
    pub(crate) fn try_add_target(
        &self,
        color: Color,
        target: Coord,
        moves: &mut MoveList,
    ) -> (bool, bool) {
        match self.squares[target.index()].piece {
            None => {
                moves.push(target);
                (true, false)
            }
            Some(other) if other.color != color => {
                moves.push(target);
                (false, other.piece_type == Type::King)
            }
            Some(_) => (false, false),
        }
    }

    /// Scans each ray outward until the first occupied square (captures included)
    pub(crate) fn slide_moves_into(
        &self,
        from: Coord,
        color: Color,
        directions: &[(i8, i8)],
        moves: &mut MoveList,
    ) -> bool {
        let mut attacks_king = false;
        for &(d_rank, d_file) in directions {
            let mut current = from;
            while let Some(target) = current.offset(d_rank, d_file) {
                let (empty, king) = self.try_add_target(color, target, moves);
                attacks_king |= king;
                if !empty {
                    break;
                }
                current = target;
            }
        }
        attacks_king
    }

    /// Single steps to each offset that stays on the board
    pub(crate) fn step_moves_into(
        &self,
        from: Coord,
        color: Color,
        offsets: &[(i8, i8)],
        moves: &mut MoveList,
    ) -> bool {
        let mut attacks_king = false;
        for &(d_rank, d_file) in offsets {
            if let Some(target) = from.offset(d_rank, d_file) {
                attacks_king |= self.try_add_target(color, target, moves).1;
            }
        }
        attacks_king
    }
}
