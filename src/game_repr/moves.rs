use std::fmt;

use super::piece::{Piece, Type};
use super::square::Coord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
}

impl Move {
    pub fn new(from: Coord, to: Coord) -> Move {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Undo log entry for one relocation (or removal) of a piece.
///
/// Holds both cells exactly as they were before the change, including the
/// move counters carried inside the pieces. `origin == None` marks a removal,
/// whose "origin" is off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub origin: Option<Coord>,
    pub destination: Coord,
    pub origin_piece: Option<Piece>,
    pub destination_piece: Option<Piece>,
}

impl MoveRecord {
    /// True for a castle (king travels two files) or an en passant capture
    /// (pawn changes file into an empty square). Such a record always owns
    /// exactly one secondary record.
    pub fn is_double_move(&self) -> bool {
        let (Some(origin), Some(piece)) = (self.origin, self.origin_piece) else {
            return false;
        };
        let file_delta = (origin.file as i8 - self.destination.file as i8).abs();
        match piece.piece_type {
            Type::King => file_delta > 1,
            Type::Pawn => file_delta != 0 && self.destination_piece.is_none(),
            _ => false,
        }
    }

    /// Piece that was moved by this record
    pub fn piece_moved(&self) -> Option<Piece> {
        self.origin_piece
    }
}

/// One ply in the history stack. Castling and en passant are logged as a
/// single compound entry so undo always reverts them together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryEntry {
    Simple(MoveRecord),
    Compound {
        primary: MoveRecord,
        secondary: MoveRecord,
    },
}

impl HistoryEntry {
    pub fn primary(&self) -> &MoveRecord {
        match self {
            HistoryEntry::Simple(record) => record,
            HistoryEntry::Compound { primary, .. } => primary,
        }
    }

    pub fn is_compound(&self) -> bool {
        matches!(self, HistoryEntry::Compound { .. })
    }
}
