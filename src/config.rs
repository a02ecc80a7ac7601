//! Game configuration for the self-play driver.
//!
//! A [`GameConfig`] names who plays each side and how long the game may run.
//! The binary parses it from the command line with clap; `--help` lists the
//! flags and their defaults.

use clap::{Parser, ValueEnum};

use crate::agent::ai::{Difficulty, MinimaxPlayer, RandomPlayer};
use crate::agent::player::Player;

/// Who plays one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlayerConfig {
    /// Uniform random legal moves
    Random,
    /// Minimax at depth 1
    Easy,
    /// Minimax at depth 2
    Medium,
    /// Minimax at depth 3
    Hard,
}

impl PlayerConfig {
    /// Search difficulty, `None` for the random player
    pub fn difficulty(&self) -> Option<Difficulty> {
        match self {
            PlayerConfig::Random => None,
            PlayerConfig::Easy => Some(Difficulty::Easy),
            PlayerConfig::Medium => Some(Difficulty::Medium),
            PlayerConfig::Hard => Some(Difficulty::Hard),
        }
    }

    /// Instantiate the player. `seed` only matters for random players.
    pub fn build(&self, seed: u64) -> Box<dyn Player> {
        match self.difficulty() {
            None => Box::new(RandomPlayer::new(seed)),
            Some(difficulty) => Box::new(MinimaxPlayer::with_difficulty(difficulty)),
        }
    }
}

/// Complete game configuration.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "minimax_chess",
    about = "Self-play between minimax and random chess players"
)]
pub struct GameConfig {
    /// Player for White
    #[arg(long, value_enum, ignore_case = true, default_value_t = PlayerConfig::Medium)]
    pub white: PlayerConfig,

    /// Player for Black
    #[arg(long, value_enum, ignore_case = true, default_value_t = PlayerConfig::Random)]
    pub black: PlayerConfig,

    /// The game is called a draw after this many plies
    #[arg(long = "plies", default_value_t = 200)]
    pub max_plies: usize,

    /// Seed for random players
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            white: PlayerConfig::Medium,
            black: PlayerConfig::Random,
            max_plies: 200,
            seed: 0,
        }
    }
}
