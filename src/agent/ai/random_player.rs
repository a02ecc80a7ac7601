//! RandomPlayer - uniform random legal moves, for smoke tests and as a
//! sparring partner in self-play.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::agent::player::Player;
use crate::game_repr::{Color, Move, Position};

use super::search::random_legal_move;

pub struct RandomPlayer {
    rng: StdRng,
    name: String,
}

impl RandomPlayer {
    /// Seeded player; the same seed replays the same choices
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            name: "Random".to_string(),
        }
    }
}

impl Player for RandomPlayer {
    fn get_move(&mut self, position: &Position, color: Color) -> Option<Move> {
        if position.side_to_move() != color {
            return None;
        }
        random_legal_move(position, &mut self.rng)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
