// Minimax Search with Alpha-Beta Pruning
//
// The search plays moves on the live position and takes them back through
// the undo history, so a call leaves the position exactly as it found it.
// Scores are always from the AI's point of view: the AI's plies maximise,
// the opponent's plies minimise.

use crate::game_repr::{Color, Move, Position, PromotionChoice};

use super::evaluation::evaluate;

/// Counters collected while searching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
}

/// Play a move inside the search. The AI always promotes to a queen.
pub(crate) fn play_searched_move(pos: &mut Position, mv: Move) {
    if pos.play_unchecked(mv) {
        if let Err(e) = pos.promote(PromotionChoice::Queen) {
            log::error!("promotion after {mv} failed: {e}");
        }
    }
}

/// Minimax with alpha-beta pruning
///
/// # Arguments
///
/// * `pos` - Current position (played on and restored)
/// * `depth` - Remaining plies; at 0 the evaluator is returned
/// * `alpha` - Best score the maximizer can already guarantee
/// * `beta` - Best score the minimizer can already guarantee
/// * `ai_turn` - True when the side to move is the AI (maximizing ply)
/// * `ai_color` - Perspective of every score
/// * `stats` - Node counter
///
/// # Returns
///
/// Stalemate scores 0 at any depth. A node without legal moves returns the
/// untouched extremal start value (`i32::MIN` for the maximizer, `i32::MAX`
/// for the minimizer).
pub fn minimax(
    pos: &mut Position,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    ai_turn: bool,
    ai_color: Color,
    stats: &mut SearchStats,
) -> i32 {
    stats.nodes += 1;

    if pos.is_stalemate() {
        return 0;
    }
    if depth == 0 {
        return evaluate(pos, ai_color);
    }

    if ai_turn {
        let mut best = i32::MIN;
        for mv in pos.all_legal_moves() {
            play_searched_move(pos, mv);
            let score = minimax(pos, depth - 1, alpha, beta, false, ai_color, stats);
            pos.undo();

            best = best.max(score);
            alpha = alpha.max(best);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = i32::MAX;
        for mv in pos.all_legal_moves() {
            play_searched_move(pos, mv);
            let score = minimax(pos, depth - 1, alpha, beta, true, ai_color, stats);
            pos.undo();

            best = best.min(score);
            beta = beta.min(best);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

/// Plain minimax over the full tree, without pruning. Same scoring rules as
/// [`minimax`]; used to check that pruning never changes a result.
pub fn minimax_exhaustive(
    pos: &mut Position,
    depth: u8,
    ai_turn: bool,
    ai_color: Color,
    stats: &mut SearchStats,
) -> i32 {
    stats.nodes += 1;

    if pos.is_stalemate() {
        return 0;
    }
    if depth == 0 {
        return evaluate(pos, ai_color);
    }

    let mut best = if ai_turn { i32::MIN } else { i32::MAX };
    for mv in pos.all_legal_moves() {
        play_searched_move(pos, mv);
        let score = minimax_exhaustive(pos, depth - 1, !ai_turn, ai_color, stats);
        pos.undo();

        best = if ai_turn { best.max(score) } else { best.min(score) };
    }
    best
}
