#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl Type {
    /// Material value used by the search evaluator
    pub const fn value(self) -> i32 {
        match self {
            Type::King => 1000,
            Type::Queen => 90,
            Type::Rook => 50,
            Type::Bishop => 30,
            Type::Knight => 30,
            Type::Pawn => 10,
        }
    }

    /// Offset of this piece inside the Unicode chess block (king first)
    const fn glyph_offset(self) -> u32 {
        match self {
            Type::King => 0,
            Type::Queen => 1,
            Type::Rook => 2,
            Type::Bishop => 3,
            Type::Knight => 4,
            Type::Pawn => 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Rank direction pawns of this color advance in
    pub(crate) fn forward(&self) -> i8 {
        match self {
            Self::White => 1,
            Self::Black => -1,
        }
    }

    /// Rank holding this color's king and rooks at the start
    pub(crate) fn back_rank(&self) -> u8 {
        match self {
            Self::White => 0,
            Self::Black => 7,
        }
    }

    /// Rank this color's pawns promote on
    pub(crate) fn promotion_rank(&self) -> u8 {
        self.opposite().back_rank()
    }
}

/// A piece on the board. The move counter travels with the value, so copying
/// a piece into a history record also captures how often it had moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub piece_type: Type,
    pub moves: u32,
}

impl Piece {
    /// Fresh piece that has never moved
    pub fn new(color: Color, piece_type: Type) -> Self {
        Self {
            color,
            piece_type,
            moves: 0,
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let piece_type = match c.to_ascii_lowercase() {
            'k' => Type::King,
            'q' => Type::Queen,
            'r' => Type::Rook,
            'b' => Type::Bishop,
            'n' => Type::Knight,
            'p' => Type::Pawn,
            _ => return None,
        };
        Some(Self::new(color, piece_type))
    }

    pub fn to_char(&self) -> char {
        let c = match self.piece_type {
            Type::King => 'k',
            Type::Queen => 'q',
            Type::Rook => 'r',
            Type::Bishop => 'b',
            Type::Knight => 'n',
            Type::Pawn => 'p',
        };
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// Unicode chess symbol (white pieces U+2654.., black pieces U+265A..)
    pub fn glyph(&self) -> char {
        let base = match self.color {
            Color::White => 0x2654,
            Color::Black => 0x265A,
        };
        char::from_u32(base + self.piece_type.glyph_offset()).unwrap_or('?')
    }

    pub fn value(&self) -> i32 {
        self.piece_type.value()
    }

    pub fn has_moved(&self) -> bool {
        self.moves > 0
    }
}
