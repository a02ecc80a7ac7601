use std::fmt;

use smallvec::SmallVec;

use super::*;
use crate::error::{ChessError, Result};

/*
 * MODULE IS RESPONSIBLE FOR
 * GAME REPRESENTATION AND LOGIC
 */

/// Destination list of one piece. A queen has at most 27 targets.
pub type MoveList = SmallVec<[Coord; 28]>;

/// Piece a pawn turns into on the far rank, in the index order 0..=3
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromotionChoice {
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl PromotionChoice {
    pub const ALL: [PromotionChoice; 4] = [
        PromotionChoice::Queen,
        PromotionChoice::Rook,
        PromotionChoice::Bishop,
        PromotionChoice::Knight,
    ];

    pub fn from_index(index: usize) -> Result<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(ChessError::InvalidPromotionChoice(index))
    }

    pub fn piece_type(&self) -> Type {
        match self {
            PromotionChoice::Queen => Type::Queen,
            PromotionChoice::Rook => Type::Rook,
            PromotionChoice::Bishop => Type::Bishop,
            PromotionChoice::Knight => Type::Knight,
        }
    }
}

/// The mutable board: grid, undo history and per-ply status.
///
/// Every ply the pseudo-legal targets of *all* pieces are regenerated (the
/// opponent's attacks are what reveal check), then the side to move gets its
/// legal targets by trial-applying each candidate on this very board and
/// reverting it through the history.
#[derive(Clone)]
pub struct Position {
    pub(crate) squares: [Square; 64],
    /// Pseudo-legal targets, indexed by the square of the piece
    pub(crate) pseudo_moves: [MoveList; 64],
    /// Legal targets, only filled for pieces of the side to move
    pub(crate) legal_moves: [MoveList; 64],
    side_to_move: Color,
    pub(crate) history: Vec<HistoryEntry>,
    /// Square of a pawn that reached the far rank and awaits its new type
    pending_promotion: Option<Coord>,
    /// The side to move attacks the enemy king
    delivering_check: bool,
    /// The side to move is attacked
    in_check: bool,
    has_legal_move: bool,
}

impl Default for Position {
    fn default() -> Self {
        Self::starting()
    }
}

impl Position {
    /// Board without pieces, White to move. Status is not computed until
    /// [`Position::refresh`] is called.
    pub fn empty() -> Position {
        Self {
            squares: [Square::default(); 64],
            pseudo_moves: std::array::from_fn(|_| MoveList::new()),
            legal_moves: std::array::from_fn(|_| MoveList::new()),
            side_to_move: Color::White,
            history: Vec::new(),
            pending_promotion: None,
            delivering_check: false,
            in_check: false,
            has_legal_move: false,
        }
    }

    /// Standard initial placement with all move counters at zero
    pub fn starting() -> Position {
        let mut pos = Self::empty();
        let back_rank = [
            Type::Rook,
            Type::Knight,
            Type::Bishop,
            Type::Queen,
            Type::King,
            Type::Bishop,
            Type::Knight,
            Type::Rook,
        ];
        for (file, &piece_type) in back_rank.iter().enumerate() {
            let file = file as u8;
            pos.place(Coord { rank: 0, file }, Piece::new(Color::White, piece_type));
            pos.place(Coord { rank: 1, file }, Piece::new(Color::White, Type::Pawn));
            pos.place(Coord { rank: 6, file }, Piece::new(Color::Black, Type::Pawn));
            pos.place(Coord { rank: 7, file }, Piece::new(Color::Black, piece_type));
        }
        pos.refresh();
        pos
    }

    /// Put a piece on a square without logging anything. Used while setting
    /// up a position; call [`Position::refresh`] afterwards.
    pub fn place(&mut self, at: Coord, piece: Piece) {
        self.squares[at.index()].piece = Some(piece);
    }

    pub(crate) fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    /*-------QUERIES--------*/

    pub fn piece_at(&self, at: Coord) -> Option<Piece> {
        self.squares[at.index()].piece
    }

    pub fn square(&self, at: Coord) -> &Square {
        &self.squares[at.index()]
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn pending_promotion(&self) -> Option<Coord> {
        self.pending_promotion
    }

    /// The side to move is in check
    pub fn is_in_check(&self) -> bool {
        self.in_check
    }

    /// The side to move attacks the opposing king
    pub fn is_delivering_check(&self) -> bool {
        self.delivering_check
    }

    pub fn has_legal_move(&self) -> bool {
        self.has_legal_move
    }

    pub fn is_checkmate(&self) -> bool {
        self.in_check && !self.has_legal_move
    }

    pub fn is_stalemate(&self) -> bool {
        !self.in_check && !self.has_legal_move
    }

    pub fn is_game_over(&self) -> bool {
        !self.has_legal_move
    }

    pub fn pseudo_legal_moves_from(&self, at: Coord) -> &[Coord] {
        &self.pseudo_moves[at.index()]
    }

    /// Legal targets of the piece on `at`; empty unless it belongs to the side to move
    pub fn legal_moves_from(&self, at: Coord) -> &[Coord] {
        &self.legal_moves[at.index()]
    }

    /// Every legal move of the side to move, in square order
    pub fn all_legal_moves(&self) -> Vec<Move> {
        Coord::all()
            .flat_map(|from| {
                self.legal_moves[from.index()]
                    .iter()
                    .map(move |&to| Move::new(from, to))
            })
            .collect()
    }

    /// Square the most recently moved piece went to
    pub(crate) fn last_moved_square(&self) -> Option<Coord> {
        self.history.last().map(|entry| entry.primary().destination)
    }

    /// Piece most recently moved, as it was before that move
    pub fn last_piece_moved(&self) -> Option<Piece> {
        self.history.last().and_then(|entry| entry.primary().piece_moved())
    }

    /// True if moving `mv` puts a pawn on its far rank
    pub fn is_promotion_move(&self, mv: Move) -> bool {
        matches!(
            self.piece_at(mv.from),
            Some(Piece { piece_type: Type::Pawn, color, .. }) if mv.to.rank == color.promotion_rank()
        )
    }

    /*-------MOVE GENERATION--------*/

    /// Regenerate the pseudo-legal targets of the piece on `at`. Hitting the
    /// enemy king along the way raises the matching check flag.
    pub fn generate_pseudo_legal_moves(&mut self, at: Coord) {
        let idx = at.index();
        let mut moves = std::mem::take(&mut self.pseudo_moves[idx]);
        moves.clear();

        let attacks_king = match self.squares[idx].piece {
            Some(piece) => match piece.piece_type {
                Type::Pawn => self.pawn_moves_into(at, piece, &mut moves),
                Type::Knight => self.knight_moves_into(at, piece.color, &mut moves),
                Type::Bishop => self.bishop_moves_into(at, piece.color, &mut moves),
                Type::Rook => self.rook_moves_into(at, piece.color, &mut moves),
                Type::Queen => self.queen_moves_into(at, piece.color, &mut moves),
                Type::King => self.king_moves_into(at, piece, &mut moves),
            }
            .then_some(piece.color),
            None => None,
        };

        self.pseudo_moves[idx] = moves;
        if let Some(attacker) = attacks_king {
            self.handle_check(attacker);
        }
    }

    fn handle_check(&mut self, attacker: Color) {
        if attacker == self.side_to_move {
            self.delivering_check = true;
        } else {
            self.in_check = true;
        }
    }

    /// Pseudo-legal targets for every piece on the board; recomputes both check flags
    pub fn find_potential_moves(&mut self) {
        self.delivering_check = false;
        self.in_check = false;
        for at in Coord::all() {
            if self.squares[at.index()].is_occupied() {
                self.generate_pseudo_legal_moves(at);
            } else {
                self.pseudo_moves[at.index()].clear();
            }
        }
    }

    /// Filter the pseudo-legal targets of the piece on `at` down to the ones
    /// that do not leave its own king attacked.
    pub fn compute_legal_moves(&mut self, at: Coord) {
        let candidates = self.pseudo_moves[at.index()].clone();
        let mut legal = MoveList::new();

        for to in candidates {
            self.apply_move(at, to);
            self.step_forward();
            let exposes_king = self.delivering_check;
            self.step_backward();
            if !exposes_king {
                legal.push(to);
            }
        }

        if !legal.is_empty() {
            self.has_legal_move = true;
        }
        self.legal_moves[at.index()] = legal;
    }

    /// Full recomputation for the side to move: pseudo-legal targets for all
    /// pieces, legal targets for the mover's pieces.
    pub fn update_moves_for_side(&mut self) {
        self.has_legal_move = false;
        self.find_potential_moves();
        for at in Coord::all() {
            match self.squares[at.index()].piece {
                Some(piece) if piece.color == self.side_to_move => self.compute_legal_moves(at),
                _ => self.legal_moves[at.index()].clear(),
            }
        }
    }

    /// Recompute status for the current side without flipping it
    pub fn refresh(&mut self) {
        self.clear_highlights();
        self.update_moves_for_side();
    }

    /*-------HIGHLIGHTS--------*/

    pub fn clear_highlights(&mut self) {
        for square in self.squares.iter_mut() {
            square.legal_destination = false;
        }
    }

    /// Mark the legal targets of the piece on `at` as destinations
    pub fn mark_legal_destinations(&mut self, at: Coord) {
        self.clear_highlights();
        for to in self.legal_moves[at.index()].clone() {
            self.squares[to.index()].legal_destination = true;
        }
    }

    /*-------APPLY / UNDO--------*/

    /// Relocate the piece on `from` to `to` and log the ply. Castling moves
    /// the rook as well and en passant removes the passed pawn; both end up
    /// in one compound history entry.
    pub fn apply_move(&mut self, from: Coord, to: Coord) {
        let Some(mut piece) = self.squares[from.index()].piece else {
            return;
        };

        let primary = MoveRecord {
            origin: Some(from),
            destination: to,
            origin_piece: Some(piece),
            destination_piece: self.squares[to.index()].piece,
        };

        let secondary = match piece.piece_type {
            Type::King if !piece.has_moved() && to.file > from.file + 1 => {
                self.relocate(Coord { rank: to.rank, file: 7 }, Coord { rank: to.rank, file: 5 })
            }
            Type::King if !piece.has_moved() && to.file + 1 < from.file => {
                self.relocate(Coord { rank: to.rank, file: 0 }, Coord { rank: to.rank, file: 3 })
            }
            Type::Pawn if from.file != to.file && primary.destination_piece.is_none() => {
                Some(self.remove_piece(Coord { rank: from.rank, file: to.file }))
            }
            _ => None,
        };

        piece.moves += 1;
        self.squares[from.index()].piece = None;
        self.squares[to.index()].piece = Some(piece);

        self.history.push(match secondary {
            Some(secondary) => HistoryEntry::Compound { primary, secondary },
            None => HistoryEntry::Simple(primary),
        });
    }

    /// Move a piece without pushing a history entry; returns its record
    fn relocate(&mut self, from: Coord, to: Coord) -> Option<MoveRecord> {
        let mut piece = self.squares[from.index()].piece?;
        let record = MoveRecord {
            origin: Some(from),
            destination: to,
            origin_piece: Some(piece),
            destination_piece: self.squares[to.index()].piece,
        };
        piece.moves += 1;
        self.squares[from.index()].piece = None;
        self.squares[to.index()].piece = Some(piece);
        Some(record)
    }

    /// Clear a square, returning a record whose origin is off the board
    pub(crate) fn remove_piece(&mut self, at: Coord) -> MoveRecord {
        MoveRecord {
            origin: None,
            destination: at,
            origin_piece: None,
            destination_piece: self.squares[at.index()].piece.take(),
        }
    }

    fn restore(&mut self, record: &MoveRecord) {
        if let Some(origin) = record.origin {
            self.squares[origin.index()].piece = record.origin_piece;
        }
        self.squares[record.destination.index()].piece = record.destination_piece;
    }

    /// Pop the last history entry and put both cells of every record back.
    /// Does not touch side to move or status.
    pub(crate) fn retract(&mut self) -> Option<HistoryEntry> {
        let entry = self.history.pop()?;
        match &entry {
            HistoryEntry::Simple(record) => self.restore(record),
            HistoryEntry::Compound { primary, secondary } => {
                self.restore(secondary);
                self.restore(primary);
            }
        }
        Some(entry)
    }

    /// Hand the move to the other side and recompute everything for it
    pub fn advance_ply(&mut self) {
        self.side_to_move = self.side_to_move.opposite();
        self.clear_highlights();
        self.update_moves_for_side();
    }

    /// Cheap ply switch for check probing: pseudo-legal targets and check
    /// flags only. Must be paired with [`Position::step_backward`].
    pub fn step_forward(&mut self) {
        self.side_to_move = self.side_to_move.opposite();
        self.clear_highlights();
        self.find_potential_moves();
    }

    /// Reverts the trial move and the side switch of [`Position::step_forward`]
    pub fn step_backward(&mut self) {
        self.retract();
        self.side_to_move = self.side_to_move.opposite();
        self.find_potential_moves();
    }

    /// Take back the last ply. A move still waiting for its promotion piece is
    /// cancelled without handing the turn over. Returns false on empty history.
    pub fn undo(&mut self) -> bool {
        if self.retract().is_none() {
            return false;
        }
        if self.pending_promotion.take().is_some() {
            self.refresh();
        } else {
            self.advance_ply();
        }
        true
    }

    /// Apply a legal move of the side to move. Returns true when a pawn
    /// reached the far rank; the ply then stays open until [`Position::promote`].
    pub fn make_move(&mut self, mv: Move) -> Result<bool> {
        if self.pending_promotion.is_some() {
            return Err(ChessError::PromotionPending);
        }
        if self.is_game_over() {
            return Err(ChessError::GameOver);
        }
        if !self.legal_moves[mv.from.index()].contains(&mv.to) {
            return Err(ChessError::IllegalMove {
                message: format!("{mv} is not legal for {:?}", self.side_to_move),
            });
        }
        Ok(self.play_unchecked(mv))
    }

    /// Same as [`Position::make_move`] for moves already known to be legal
    pub(crate) fn play_unchecked(&mut self, mv: Move) -> bool {
        let promotes = self.is_promotion_move(mv);
        self.apply_move(mv.from, mv.to);
        if promotes {
            self.pending_promotion = Some(mv.to);
        } else {
            self.advance_ply();
        }
        promotes
    }

    /// Replace the pawn waiting on the far rank with a new piece and finish the ply
    pub fn promote(&mut self, choice: PromotionChoice) -> Result<()> {
        let Some(at) = self.pending_promotion.take() else {
            return Err(ChessError::NoPendingPromotion);
        };
        if let Some(pawn) = self.piece_at(at) {
            self.place(at, Piece::new(pawn.color, choice.piece_type()));
        }
        self.advance_ply();
        Ok(())
    }

    /*-------SEARCH PROBES--------*/

    /// Material of `perspective` minus material of the opponent; 0 in stalemate
    pub fn material_difference(&self, perspective: Color) -> i32 {
        if self.is_stalemate() {
            return 0;
        }
        self.squares
            .iter()
            .filter_map(|square| square.piece)
            .map(|piece| {
                if piece.color == perspective {
                    piece.value()
                } else {
                    -piece.value()
                }
            })
            .sum()
    }

    /// Number of legal moves `color` has in this position. For the side not
    /// on move the turn is flipped temporarily to find out.
    pub fn mobility(&mut self, color: Color) -> usize {
        if color == self.side_to_move {
            return self.count_legal_moves(color);
        }
        self.side_to_move = color;
        self.update_moves_for_side();
        let count = self.count_legal_moves(color);
        self.side_to_move = color.opposite();
        self.update_moves_for_side();
        count
    }

    fn count_legal_moves(&self, color: Color) -> usize {
        Coord::all()
            .filter(|at| matches!(self.piece_at(*at), Some(p) if p.color == color))
            .map(|at| self.legal_moves[at.index()].len())
            .sum()
    }

    /// Perft (Performance Test) - counts leaf nodes at a given depth.
    /// A promotion counts once per promotion piece.
    pub fn perft(&self, depth: u32) -> u64 {
        let mut pos = self.clone();
        pos.perft_inner(depth)
    }

    fn perft_inner(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let mut nodes = 0;
        for mv in self.all_legal_moves() {
            let promotes = self.is_promotion_move(mv);
            if depth == 1 {
                nodes += if promotes { 4 } else { 1 };
                continue;
            }
            if promotes {
                for choice in PromotionChoice::ALL {
                    self.play_unchecked(mv);
                    if self.promote(choice).is_ok() {
                        nodes += self.perft_inner(depth - 1);
                    }
                    self.undo();
                }
            } else {
                self.play_unchecked(mv);
                nodes += self.perft_inner(depth - 1);
                self.undo();
            }
        }
        nodes
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8u8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8u8 {
                let square = &self.squares[(rank * 8 + file) as usize];
                let c = match square.piece {
                    Some(piece) => piece.glyph(),
                    None if square.legal_destination => '*',
                    None => '·',
                };
                write!(f, "{c} ")?;
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Position")
            .field("fen", &self.to_fen())
            .field("plies", &self.history.len())
            .field("in_check", &self.in_check)
            .field("has_legal_move", &self.has_legal_move)
            .finish()
    }
}
