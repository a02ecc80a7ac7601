use super::*;
use crate::error::{ChessError, Result};

pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

fn invalid(message: impl Into<String>) -> ChessError {
    ChessError::InvalidFen {
        message: message.into(),
    }
}

impl Position {
    /// Build a position from FEN.
    ///
    /// Only placement, side to move and castling rights are used. Move
    /// counters are synthesised from them: a pawn off its home rank counts as
    /// moved once, and kings and rooks count as unmoved only when the castling
    /// field grants the matching right. When the castling field is missing all
    /// rights are assumed.
    ///
    /// Each side needs exactly one king, and the side that just moved may not
    /// be left in check.
    pub fn from_fen(fen_str: &str) -> Result<Position> {
        let parts: Vec<&str> = fen_str.split_whitespace().collect();
        let placement = parts.first().ok_or_else(|| invalid("empty string"))?;

        let mut pos = Position::empty();
        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != 8 {
            return Err(invalid(format!("expected 8 ranks, found {}", rows.len())));
        }

        for (row, text) in rows.iter().enumerate() {
            let rank = 7 - row as u8;
            let mut file = 0u8;
            for c in text.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file = file.saturating_add(skip as u8);
                    if file > 8 {
                        return Err(invalid(format!("rank {} is too long", rank + 1)));
                    }
                    continue;
                }
                let piece = Piece::from_char(c)
                    .ok_or_else(|| invalid(format!("unknown piece character {c:?}")))?;
                if file >= 8 {
                    return Err(invalid(format!("rank {} is too long", rank + 1)));
                }
                pos.place(Coord { rank, file }, piece);
                file += 1;
            }
            if file != 8 {
                return Err(invalid(format!("rank {} does not cover 8 files", rank + 1)));
            }
        }

        for color in [Color::White, Color::Black] {
            let kings = Coord::all()
                .filter(|&at| {
                    matches!(
                        pos.piece_at(at),
                        Some(Piece { piece_type: Type::King, color: c, .. }) if c == color
                    )
                })
                .count();
            if kings != 1 {
                return Err(invalid(format!("expected one {color:?} king, found {kings}")));
            }
        }

        match parts.get(1).copied() {
            None | Some("w") => pos.set_side_to_move(Color::White),
            Some("b") => pos.set_side_to_move(Color::Black),
            Some(other) => return Err(invalid(format!("bad side to move {other:?}"))),
        }

        let castling = parts.get(2).copied().unwrap_or("KQkq");
        if let Some(c) = castling.chars().find(|c| !"KQkq-".contains(*c)) {
            return Err(invalid(format!("bad castling character {c:?}")));
        }

        for at in Coord::all() {
            if let Some(mut piece) = pos.piece_at(at) {
                piece.moves = synthesised_move_count(piece, at, castling);
                pos.place(at, piece);
            }
        }

        pos.refresh();
        if pos.is_delivering_check() {
            return Err(invalid("the side not to move is in check"));
        }
        Ok(pos)
    }

    /// FEN of the current position. Castling rights are derived from move
    /// counters; the en passant square is set after a pawn double push.
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();

        for rank in (0..8u8).rev() {
            let mut empty_count = 0;
            for file in 0..8u8 {
                match self.piece_at(Coord { rank, file }) {
                    None => empty_count += 1,
                    Some(piece) => {
                        if empty_count > 0 {
                            fen.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        fen.push(piece.to_char());
                    }
                }
            }
            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }
            if rank > 0 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(match self.side_to_move() {
            Color::White => 'w',
            Color::Black => 'b',
        });

        let mut castling = String::new();
        for (color, king_side, queen_side) in [(Color::White, 'K', 'Q'), (Color::Black, 'k', 'q')] {
            let rank = color.back_rank();
            if !self.is_unmoved(Coord { rank, file: 4 }, color, Type::King) {
                continue;
            }
            if self.is_unmoved(Coord { rank, file: 7 }, color, Type::Rook) {
                castling.push(king_side);
            }
            if self.is_unmoved(Coord { rank, file: 0 }, color, Type::Rook) {
                castling.push(queen_side);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }
        fen.push(' ');
        fen.push_str(&castling);

        let en_passant = self
            .history
            .last()
            .map(|entry| *entry.primary())
            .and_then(|record| match (record.origin, record.origin_piece) {
                (Some(from), Some(Piece { piece_type: Type::Pawn, .. }))
                    if from.rank.abs_diff(record.destination.rank) == 2 =>
                {
                    Some(Coord {
                        rank: (from.rank + record.destination.rank) / 2,
                        file: from.file,
                    })
                }
                _ => None,
            });
        fen.push(' ');
        match en_passant {
            Some(square) => fen.push_str(&square.to_string()),
            None => fen.push('-'),
        }

        fen.push_str(&format!(" 0 {}", self.history.len() / 2 + 1));
        fen
    }

    fn is_unmoved(&self, at: Coord, color: Color, piece_type: Type) -> bool {
        matches!(
            self.piece_at(at),
            Some(p) if p.color == color && p.piece_type == piece_type && !p.has_moved()
        )
    }
}

fn synthesised_move_count(piece: Piece, at: Coord, castling: &str) -> u32 {
    let home = piece.color.back_rank();
    let (king_side, queen_side) = match piece.color {
        Color::White => ('K', 'Q'),
        Color::Black => ('k', 'q'),
    };
    let unmoved = match piece.piece_type {
        Type::Pawn => {
            let pawn_rank = (home as i8 + piece.color.forward()) as u8;
            at.rank == pawn_rank
        }
        Type::King => {
            at.rank == home
                && at.file == 4
                && (castling.contains(king_side) || castling.contains(queen_side))
        }
        Type::Rook => {
            at.rank == home
                && ((at.file == 7 && castling.contains(king_side))
                    || (at.file == 0 && castling.contains(queen_side)))
        }
        _ => true,
    };
    if unmoved {
        0
    } else {
        1
    }
}
