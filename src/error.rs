//! Error types for the rules core and the game session.
//!
//! Steady-state play never produces an error: clicking an empty square or an
//! unreachable destination is simply ignored. Errors are reserved for caller
//! contract violations (bad coordinates, promoting when nothing is pending)
//! and for malformed FEN input.

/// Errors that can occur while driving a game
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    /// Coordinates outside the 8x8 grid
    #[error("Coordinates out of bounds: rank {rank}, file {file}")]
    OutOfBounds { rank: usize, file: usize },

    /// Square name that is not of the form `a1`..`h8`
    #[error("Invalid algebraic square: {0:?}")]
    InvalidAlgebraic(String),

    /// FEN string that could not be parsed
    #[error("Invalid FEN: {message}")]
    InvalidFen { message: String },

    /// `promote` called although the last move did not reach the far rank
    #[error("No promotion is pending")]
    NoPendingPromotion,

    /// Promotion index outside 0..=3
    #[error("Invalid promotion choice: {0} (expected 0..=3)")]
    InvalidPromotionChoice(usize),

    /// A pawn is waiting for its promotion piece; nothing else may happen first
    #[error("A promotion is pending; call promote first")]
    PromotionPending,

    /// Move that is not in the legal move list of the side to move
    #[error("Illegal move: {message}")]
    IllegalMove { message: String },

    /// The position is already checkmate or stalemate
    #[error("The game is over")]
    GameOver,
}

/// Result type alias for game operations
pub type Result<T> = std::result::Result<T, ChessError>;
