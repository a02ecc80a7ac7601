// AI Agent - Minimax with Alpha-Beta Pruning
//
// Classical fixed-depth search over the live position:
// - Material-difference evaluation at the leaves
// - Alpha-beta pruning that never changes the minimax value
// - Deterministic root ordering and tie-breaks
// - Optional parallel root scoring on cloned positions (rayon)

mod evaluation;
mod minimax;
mod minimax_player;
mod random_player;
mod search;

#[cfg(test)]
mod tests;

pub use evaluation::evaluate;
pub use minimax::{minimax, minimax_exhaustive, SearchStats};
pub use minimax_player::{Difficulty, MinimaxPlayer};
pub use random_player::RandomPlayer;
pub use search::{
    find_best_move, play_best_move, random_legal_move, root_candidates, SearchConfig,
    SearchResult,
};
