use std::fmt;

use crate::error::{ChessError, Result};

use super::piece::Piece;

/// Board coordinates. Rank 0 is White's back rank, file 0 is the a-file,
/// so `index()` follows the usual 0 = a1 .. 63 = h8 layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub rank: u8,
    pub file: u8,
}

impl Coord {
    pub fn new(rank: usize, file: usize) -> Result<Self> {
        if rank < 8 && file < 8 {
            Ok(Self {
                rank: rank as u8,
                file: file as u8,
            })
        } else {
            Err(ChessError::OutOfBounds { rank, file })
        }
    }

    pub fn from_index(idx: usize) -> Self {
        debug_assert!(idx < 64);
        Self {
            rank: (idx / 8) as u8,
            file: (idx % 8) as u8,
        }
    }

    pub fn index(&self) -> usize {
        self.rank as usize * 8 + self.file as usize
    }

    /// Parse a square name such as `e4`
    pub fn from_algebraic(name: &str) -> Result<Self> {
        let bytes = name.as_bytes();
        if bytes.len() != 2 {
            return Err(ChessError::InvalidAlgebraic(name.to_string()));
        }
        match (bytes[0], bytes[1]) {
            (f @ b'a'..=b'h', r @ b'1'..=b'8') => Ok(Self {
                rank: r - b'1',
                file: f - b'a',
            }),
            _ => Err(ChessError::InvalidAlgebraic(name.to_string())),
        }
    }

    /// Neighbouring coordinate, or None when the step leaves the board
    pub fn offset(&self, d_rank: i8, d_file: i8) -> Option<Self> {
        let rank = self.rank as i8 + d_rank;
        let file = self.file as i8 + d_file;
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Some(Self {
                rank: rank as u8,
                file: file as u8,
            })
        } else {
            None
        }
    }

    pub fn all() -> impl Iterator<Item = Coord> {
        (0..64).map(Coord::from_index)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file) as char, (b'1' + self.rank) as char)
    }
}

/// One board cell: the occupant plus the "legal destination of the selected
/// piece" highlight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Square {
    pub piece: Option<Piece>,
    pub legal_destination: bool,
}

impl Square {
    pub fn is_occupied(&self) -> bool {
        self.piece.is_some()
    }
}
