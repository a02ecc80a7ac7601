use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::game_repr::{Position, PromotionChoice};

/// Position reached by `plies` random legal moves from the start
pub fn random_position(seed: u64, plies: usize) -> Position {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pos = Position::starting();
    for _ in 0..plies {
        let moves = pos.all_legal_moves();
        let Some(&mv) = moves.choose(&mut rng) else {
            break;
        };
        if pos.make_move(mv).unwrap() {
            pos.promote(PromotionChoice::Queen).unwrap();
        }
    }
    pos
}

mod minimax_tests;
