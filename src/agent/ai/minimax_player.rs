//! MinimaxPlayer - fixed-depth minimax with alpha-beta pruning
//!
//! # Difficulty Levels
//!
//! Difficulty maps to the number of plies searched below each root move:
//!
//! - **Easy**: depth 1
//! - **Medium**: depth 2
//! - **Hard**: depth 3
//!
//! # Examples
//!
//! ```
//! use minimax_chess::agent::ai::{Difficulty, MinimaxPlayer};
//! use minimax_chess::agent::player::Player;
//! use minimax_chess::game_repr::{Color, Position};
//!
//! let mut ai = MinimaxPlayer::with_difficulty(Difficulty::Easy);
//! let mv = ai.get_move(&Position::starting(), Color::White);
//! assert!(mv.is_some());
//! ```

use crate::agent::player::{GameResult, Player};
use crate::game_repr::{Color, Move, Position};

use super::search::{find_best_move, SearchConfig};

/// AI difficulty levels that map to search depth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    /// Looks at the opponent's reply only
    Easy,
    /// Opponent's reply and the AI's answer to it
    Medium,
    /// One more opponent ply on top of Medium
    Hard,
}

impl Difficulty {
    /// Plies searched below each root move
    pub fn depth(&self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    /// Get a display name for this difficulty level
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// AI player that searches a private copy of the position
pub struct MinimaxPlayer {
    difficulty: Difficulty,
    parallel: bool,
    name: String,
}

impl MinimaxPlayer {
    pub fn new(difficulty: Difficulty, name: String) -> Self {
        Self {
            difficulty,
            parallel: false,
            name,
        }
    }

    /// Player named "AI ({difficulty})"
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        let name = format!("AI ({})", difficulty.name());
        Self::new(difficulty, name)
    }

    /// Score root moves in parallel
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        if self.name.starts_with("AI (") {
            self.name = format!("AI ({})", difficulty.name());
        }
    }

    fn config(&self) -> SearchConfig {
        SearchConfig {
            depth: self.difficulty.depth(),
            parallel: self.parallel,
        }
    }
}

impl Player for MinimaxPlayer {
    fn get_move(&mut self, position: &Position, color: Color) -> Option<Move> {
        let mut search_pos = position.clone();
        let result = find_best_move(&mut search_pos, color, &self.config());
        log::debug!(
            "[{}] evaluated {} positions, best move score: {}",
            self.name,
            result.nodes_searched,
            result.score
        );
        result.best_move
    }

    fn game_ended(&mut self, result: GameResult) {
        log::debug!("[{}] game ended: {result:?}", self.name);
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_depths() {
        assert_eq!(Difficulty::Easy.depth(), 1);
        assert_eq!(Difficulty::Medium.depth(), 2);
        assert_eq!(Difficulty::Hard.depth(), 3);
    }

    #[test]
    fn test_set_difficulty_updates_name() {
        let mut ai = MinimaxPlayer::with_difficulty(Difficulty::Easy);
        assert_eq!(ai.name(), "AI (Easy)");
        ai.set_difficulty(Difficulty::Hard);
        assert_eq!(ai.name(), "AI (Hard)");
        assert_eq!(ai.difficulty(), Difficulty::Hard);

        let mut named = MinimaxPlayer::new(Difficulty::Easy, "Deep Thought".to_string());
        named.set_difficulty(Difficulty::Medium);
        assert_eq!(named.name(), "Deep Thought");
    }

    #[test]
    fn test_get_move_leaves_position_alone() {
        let position = Position::starting();
        let mut ai = MinimaxPlayer::with_difficulty(Difficulty::Easy);
        let mv = ai.get_move(&position, Color::White).unwrap();
        assert!(position.legal_moves_from(mv.from).contains(&mv.to));
        assert!(position.history().is_empty());
    }

    #[test]
    fn test_no_move_when_mated() {
        let mated = Position::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 0 3").unwrap();
        let mut ai = MinimaxPlayer::with_difficulty(Difficulty::Medium);
        assert_eq!(ai.get_move(&mated, Color::White), None);
    }
}
