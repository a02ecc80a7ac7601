// Root Search Orchestrator
//
// Enumerates the candidate moves of the side to play in a fixed board order,
// scores each with minimax at a fixed remaining depth and breaks score ties
// with two cheap heuristics: prefer moving the least valuable piece, then the
// move that leaves the opponent the most replies.

use std::time::Instant;

use rand::seq::SliceRandom;
use rand::Rng;
use rayon::prelude::*;

use crate::error::{ChessError, Result};
use crate::game_repr::{Color, Coord, Move, Position, Type};

use super::minimax::{minimax, play_searched_move, SearchStats};

/// File visiting order for root candidates: centre files first
const CENTRE_OUT_FILES: [u8; 8] = [3, 4, 2, 5, 1, 6, 0, 7];

/// Search parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies searched below each root move
    pub depth: u8,
    /// Score root moves on cloned positions across the rayon pool
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 2,
            parallel: false,
        }
    }
}

impl SearchConfig {
    pub fn with_depth(depth: u8) -> Self {
        Self {
            depth,
            ..Self::default()
        }
    }
}

/// Result of a search operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score: i32,
    pub nodes_searched: u64,
    pub time_ms: u64,
}

/// A root move with everything the tie-break needs
#[derive(Debug, Clone, Copy)]
struct ScoredMove {
    mv: Move,
    score: i32,
    piece_value: i32,
    /// Opponent replies after the move, plus one for a pawn double push
    replies: usize,
    nodes: u64,
}

impl ScoredMove {
    fn beats(&self, other: &ScoredMove) -> bool {
        if self.score != other.score {
            return self.score > other.score;
        }
        if self.piece_value != other.piece_value {
            return self.piece_value < other.piece_value;
        }
        self.replies > other.replies
    }
}

/// Legal moves of `color` in root order: ranks from the side's own back rank
/// forward, files centre-out within a rank.
pub fn root_candidates(pos: &Position, color: Color) -> Vec<Move> {
    let ranks: Vec<u8> = match color {
        Color::White => (0..8).collect(),
        Color::Black => (0..8).rev().collect(),
    };

    let mut moves = Vec::new();
    for rank in ranks {
        for file in CENTRE_OUT_FILES {
            let from = Coord { rank, file };
            if !matches!(pos.piece_at(from), Some(p) if p.color == color) {
                continue;
            }
            moves.extend(pos.legal_moves_from(from).iter().map(|&to| Move::new(from, to)));
        }
    }
    moves
}

fn score_root_move(pos: &mut Position, mv: Move, color: Color, depth: u8) -> Option<ScoredMove> {
    let piece = pos.piece_at(mv.from)?;
    let double_push =
        piece.piece_type == Type::Pawn && piece.color == color && mv.from.rank.abs_diff(mv.to.rank) == 2;

    play_searched_move(pos, mv);
    let mut stats = SearchStats::default();
    let score = minimax(pos, depth, i32::MIN, i32::MAX, false, color, &mut stats);
    let replies = pos.all_legal_moves().len() + usize::from(double_push);
    pos.undo();

    log::trace!("{mv}: score {score}, {replies} replies, {} nodes", stats.nodes);

    Some(ScoredMove {
        mv,
        score,
        piece_value: piece.value(),
        replies,
        nodes: stats.nodes,
    })
}

/// Find the best move for `color` without playing it.
///
/// The position is searched in place and restored before returning. With
/// `config.parallel` every root move is scored on its own clone instead; the
/// results are reduced in root order, so both modes choose the same move.
/// Returns an empty result when `color` has nothing to play.
pub fn find_best_move(pos: &mut Position, color: Color, config: &SearchConfig) -> SearchResult {
    let start_time = Instant::now();

    if pos.is_game_over() || pos.pending_promotion().is_some() || pos.side_to_move() != color {
        log::debug!("no search for {color:?}: nothing to play");
        return SearchResult::default();
    }

    let candidates = root_candidates(pos, color);
    let scored: Vec<ScoredMove> = if config.parallel {
        let snapshot: &Position = pos;
        candidates
            .par_iter()
            .filter_map(|&mv| {
                let mut local = snapshot.clone();
                score_root_move(&mut local, mv, color, config.depth)
            })
            .collect()
    } else {
        candidates
            .iter()
            .filter_map(|&mv| score_root_move(pos, mv, color, config.depth))
            .collect()
    };

    let mut best: Option<ScoredMove> = None;
    let mut nodes_searched = 0;
    for candidate in scored {
        nodes_searched += candidate.nodes;
        if best.map_or(true, |b| candidate.beats(&b)) {
            best = Some(candidate);
        }
    }

    let result = SearchResult {
        best_move: best.map(|b| b.mv),
        score: best.map_or(0, |b| b.score),
        nodes_searched,
        time_ms: start_time.elapsed().as_millis() as u64,
    };
    log::info!(
        "{color:?} depth {} best {:?} score {} nodes {} time {}ms",
        config.depth,
        result.best_move.map(|m| m.to_string()),
        result.score,
        result.nodes_searched,
        result.time_ms
    );
    result
}

/// Search and commit the best move for `color`. Promotions become queens.
///
/// Does nothing on a finished game (the result then has no move).
pub fn play_best_move(pos: &mut Position, color: Color, config: &SearchConfig) -> Result<SearchResult> {
    if pos.pending_promotion().is_some() {
        return Err(ChessError::PromotionPending);
    }
    if pos.side_to_move() != color && !pos.is_game_over() {
        return Err(ChessError::IllegalMove {
            message: format!("{color:?} is not to move"),
        });
    }

    let result = find_best_move(pos, color, config);
    if let Some(mv) = result.best_move {
        play_searched_move(pos, mv);
        log::debug!("{color:?} played {mv}");
    }
    Ok(result)
}

/// Uniform pick among all legal moves of the side to move
pub fn random_legal_move<R: Rng + ?Sized>(pos: &Position, rng: &mut R) -> Option<Move> {
    pos.all_legal_moves().choose(rng).copied()
}
