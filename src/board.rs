use std::fmt;

use rand::Rng;

use crate::agent::ai::{self, SearchConfig, SearchResult};
use crate::agent::player::GameResult;
use crate::error::{ChessError, Result};
use crate::game_repr::{Color, Coord, Move, Piece, Position, PromotionChoice};

/// Board component: the game session a front end talks to.
///
/// The Board wraps the core game logic (Position) with the interaction state
/// a click-driven interface needs: which piece is selected and whether a pawn
/// is waiting for its promotion piece.
///
/// # Usage
///
/// ```
/// use minimax_chess::board::Board;
///
/// let mut board = Board::new();
///
/// // Select the e2 pawn, then click e4
/// assert!(!board.select_or_move(1, 4).unwrap());
/// assert!(board.is_legal_destination(3, 4).unwrap());
/// assert!(!board.select_or_move(3, 4).unwrap());
///
/// // Let the AI answer for Black
/// let result = board.play_best_move(minimax_chess::game_repr::Color::Black, 1).unwrap();
/// assert!(result.best_move.is_some());
/// ```
pub struct Board {
    /// The current chess position (game state)
    position: Position,

    /// Currently selected square, if any
    selected: Option<Coord>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create a new board with the starting chess position.
    pub fn new() -> Self {
        Self {
            position: Position::starting(),
            selected: None,
        }
    }

    /// Create a board from a FEN (Forsyth-Edwards Notation) string.
    ///
    /// See [`Position::from_fen`] for how move counters are derived.
    pub fn from_fen(fen: &str) -> Result<Self> {
        Ok(Self {
            position: Position::from_fen(fen)?,
            selected: None,
        })
    }

    /// Start a new game from the initial position.
    ///
    /// # Side Effects
    ///
    /// - Clears the selection
    /// - Drops the whole history and any pending promotion
    pub fn reset(&mut self) {
        self.position = Position::starting();
        self.selected = None;
        log::debug!("board reset");
    }

    // ===========================
    // Game State Access (Read-Only)
    // ===========================

    /// Get a reference to the current position.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Get the piece at a square.
    ///
    /// # Errors
    ///
    /// [`ChessError::OutOfBounds`] unless both coordinates are in `0..8`.
    pub fn piece_at(&self, rank: usize, file: usize) -> Result<Option<Piece>> {
        Ok(self.position.piece_at(Coord::new(rank, file)?))
    }

    /// Whether the square is a legal destination of the selected piece
    pub fn is_legal_destination(&self, rank: usize, file: usize) -> Result<bool> {
        Ok(self.position.square(Coord::new(rank, file)?).legal_destination)
    }

    /// Get the currently selected square.
    pub fn selected(&self) -> Option<Coord> {
        self.selected
    }

    pub fn pending_promotion(&self) -> Option<Coord> {
        self.position.pending_promotion()
    }

    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move()
    }

    pub fn is_in_check(&self) -> bool {
        self.position.is_in_check()
    }

    pub fn is_delivering_check(&self) -> bool {
        self.position.is_delivering_check()
    }

    pub fn is_checkmate(&self) -> bool {
        self.position.is_checkmate()
    }

    pub fn is_stalemate(&self) -> bool {
        self.position.is_stalemate()
    }

    /// Final result once the game has ended, None while it continues.
    pub fn game_result(&self) -> Option<GameResult> {
        GameResult::of(&self.position)
    }

    // ===========================
    // UI Interaction
    // ===========================

    /// Handle a click on a square.
    ///
    /// A piece of the side to move becomes the selection and its legal
    /// destinations get marked. With a piece already selected, a marked
    /// destination executes the move. Anything else changes nothing.
    ///
    /// # Returns
    ///
    /// `true` when the move brought a pawn to the far rank; the caller must
    /// then call [`Board::promote`] before play continues.
    ///
    /// # Errors
    ///
    /// - [`ChessError::OutOfBounds`] for coordinates outside `0..8`
    /// - [`ChessError::PromotionPending`] while a promotion choice is owed
    pub fn select_or_move(&mut self, rank: usize, file: usize) -> Result<bool> {
        let at = Coord::new(rank, file).inspect_err(|e| log::warn!("rejected click: {e}"))?;
        if self.position.pending_promotion().is_some() {
            log::warn!("rejected click on {at}: promotion pending");
            return Err(ChessError::PromotionPending);
        }

        let side = self.position.side_to_move();
        if matches!(self.position.piece_at(at), Some(piece) if piece.color == side) {
            self.selected = Some(at);
            self.position.mark_legal_destinations(at);
            return Ok(false);
        }

        let Some(from) = self.selected else {
            return Ok(false);
        };
        if !self.position.square(at).legal_destination {
            return Ok(false);
        }

        self.make_move(Move::new(from, at))
    }

    /// Play a legal move directly.
    ///
    /// # Returns
    ///
    /// `true` when a promotion choice is now owed.
    pub fn make_move(&mut self, mv: Move) -> Result<bool> {
        let needs_promotion = self.position.make_move(mv)?;
        self.selected = None;
        self.position.clear_highlights();
        log::debug!("played {mv}");
        Ok(needs_promotion)
    }

    /// Finish a pending promotion.
    ///
    /// # Arguments
    ///
    /// * `choice` - 0 Queen, 1 Rook, 2 Bishop, 3 Knight
    pub fn promote(&mut self, choice: usize) -> Result<()> {
        let choice = PromotionChoice::from_index(choice)
            .inspect_err(|e| log::warn!("rejected promotion: {e}"))?;
        self.position
            .promote(choice)
            .inspect_err(|e| log::warn!("rejected promotion: {e}"))?;
        log::debug!("promoted to {choice:?}");
        Ok(())
    }

    /// Take back the last ply (castling and en passant as a whole).
    ///
    /// Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.selected = None;
        let undone = self.position.undo();
        if undone {
            log::debug!("undo, {} plies left", self.position.history().len());
        }
        undone
    }

    // ===========================
    // AI Entry Points
    // ===========================

    /// Let the minimax search pick and play a move for `color`.
    ///
    /// # Arguments
    ///
    /// * `color` - Side the AI plays; must be the side to move
    /// * `depth` - Plies searched below each root move
    pub fn play_best_move(&mut self, color: Color, depth: u8) -> Result<SearchResult> {
        self.selected = None;
        self.position.clear_highlights();
        ai::play_best_move(&mut self.position, color, &SearchConfig::with_depth(depth))
    }

    /// Play a uniformly random legal move for `color`, promoting to a queen.
    ///
    /// Returns the move, or None when the game is over.
    pub fn play_random_move<R: Rng + ?Sized>(&mut self, color: Color, rng: &mut R) -> Result<Option<Move>> {
        if self.position.pending_promotion().is_some() {
            return Err(ChessError::PromotionPending);
        }
        if self.position.side_to_move() != color {
            return Err(ChessError::IllegalMove {
                message: format!("{color:?} is not to move"),
            });
        }

        let Some(mv) = ai::random_legal_move(&self.position, rng) else {
            return Ok(None);
        };
        if self.make_move(mv)? {
            self.position.promote(PromotionChoice::Queen)?;
        }
        Ok(Some(mv))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.position, f)
    }
}
