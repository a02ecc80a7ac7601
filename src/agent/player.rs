//! Player trait and associated types for chess game agents.
//!
//! This module provides the core abstraction for entities that can provide chess moves.
//! The terminal driver asks one `Player` per side for a move each ply; the
//! minimax search and the uniform random mover both implement it.
//!
//! # Design Philosophy
//!
//! The `Player` trait focuses on **behavior** rather than construction. Different player
//! implementations require different initialization parameters:
//! - `MinimaxPlayer` needs a difficulty (search depth)
//! - `RandomPlayer` needs a seed for reproducible games
//!
//! Therefore, the trait does not define a constructor method. Each implementation provides
//! its own constructor tailored to its specific needs.
//!
//! # Examples
//!
//! ```rust
//! use minimax_chess::agent::player::Player;
//! use minimax_chess::agent::ai::RandomPlayer;
//! use minimax_chess::game_repr::{Color, Position};
//!
//! let position = Position::starting();
//! let mut player = RandomPlayer::new(7);
//! let mv = player.get_move(&position, Color::White);
//! assert!(mv.is_some());
//! ```

use crate::game_repr::{Color, Move, Position};

/// Result of a completed chess game.
///
/// This enum represents all possible game outcomes. It is passed to players
/// via `game_ended()` to notify them of the final result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// White player won the game (Black was checkmated or resigned)
    WhiteWins,
    /// Black player won the game (White was checkmated or resigned)
    BlackWins,
    /// Game stopped without a winner (ply limit reached in self-play)
    Draw,
    /// Game ended in stalemate (player to move has no legal moves but is not in check)
    Stalemate,
}

impl GameResult {
    /// Create a GameResult from the winning color
    pub fn from_winner(winner: Color) -> Self {
        match winner {
            Color::White => GameResult::WhiteWins,
            Color::Black => GameResult::BlackWins,
        }
    }

    /// Terminal result of a position, or None while play continues
    pub fn of(position: &Position) -> Option<Self> {
        if position.is_checkmate() {
            Some(Self::from_winner(position.side_to_move().opposite()))
        } else if position.is_stalemate() {
            Some(GameResult::Stalemate)
        } else {
            None
        }
    }
}

/// Trait for entities that can provide chess moves.
///
/// # Method Behavior
///
/// ## `get_move()`
/// - **Blocking**: the search runs to completion before returning
/// - **Returns `None`**: if the side has no legal move
/// - **Returns `Some(Move)`**: a legal move for the current position; if it
///   promotes a pawn the caller finishes the ply with a Queen
///
/// ## `opponent_moved()` / `game_ended()`
/// - Default: Does nothing
///
/// ## `name()`
/// - Default: Returns "Player"
pub trait Player {
    /// Request the next move for `color` in `position`.
    ///
    /// The position is only read; players that search work on their own copy.
    fn get_move(&mut self, position: &Position, color: Color) -> Option<Move>;

    /// Notify this player that the opponent made a move.
    fn opponent_moved(&mut self, _mv: Move) {
        // Default: do nothing
    }

    /// Notify this player that the game has ended.
    fn game_ended(&mut self, _result: GameResult) {
        // Default: do nothing
    }

    /// Get the display name of this player.
    fn name(&self) -> &str {
        "Player"
    }
}
