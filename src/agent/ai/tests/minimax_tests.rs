// Property tests for the minimax search

use super::random_position;
use crate::agent::ai::{evaluate, minimax, minimax_exhaustive, SearchStats};
use crate::game_repr::{Color, Position};

const FENS: [&str; 5] = [
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "4k3/8/8/8/3q4/8/3R4/4K3 w - - 0 1",
    "6k1/5ppp/8/8/8/8/5PPP/R5K1 w - - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "7k/5K2/6Q1/8/8/8/8/8 b - - 0 1",
];

#[test]
fn test_depth_zero_is_evaluation() {
    for fen in FENS {
        let mut pos = Position::from_fen(fen).unwrap();
        for color in [Color::White, Color::Black] {
            let expected = evaluate(&pos, color);
            let mut stats = SearchStats::default();
            for ai_turn in [true, false] {
                let score = minimax(&mut pos, 0, i32::MIN, i32::MAX, ai_turn, color, &mut stats);
                assert_eq!(score, expected, "{fen} as {color:?}");
            }
        }
    }
}

#[test]
fn test_pruning_matches_exhaustive_search() {
    for fen in FENS {
        let mut pos = Position::from_fen(fen).unwrap();
        let color = pos.side_to_move();
        for ai_turn in [true, false] {
            let mut pruned_stats = SearchStats::default();
            let mut full_stats = SearchStats::default();
            let pruned = minimax(&mut pos, 2, i32::MIN, i32::MAX, ai_turn, color, &mut pruned_stats);
            let full = minimax_exhaustive(&mut pos, 2, ai_turn, color, &mut full_stats);
            assert_eq!(pruned, full, "{fen}, ai_turn {ai_turn}");
            assert!(pruned_stats.nodes <= full_stats.nodes);
        }
    }
}

#[test]
fn test_pruning_matches_on_random_positions() {
    for seed in 0..12 {
        let mut pos = random_position(seed, 10 + seed as usize * 3);
        let color = pos.side_to_move();
        let mut stats = SearchStats::default();
        let pruned = minimax(&mut pos, 2, i32::MIN, i32::MAX, true, color, &mut stats);
        let full = minimax_exhaustive(&mut pos, 2, true, color, &mut stats);
        assert_eq!(pruned, full, "seed {seed}: {}", pos.to_fen());
    }
}

#[test]
fn test_pruning_matches_at_depth_three() {
    let mut pos = random_position(42, 16);
    let color = pos.side_to_move();
    let mut stats = SearchStats::default();
    let pruned = minimax(&mut pos, 3, i32::MIN, i32::MAX, true, color, &mut stats);
    let full = minimax_exhaustive(&mut pos, 3, true, color, &mut stats);
    assert_eq!(pruned, full);
}

#[test]
fn test_search_leaves_position_untouched() {
    let mut pos = random_position(7, 20);
    let fen = pos.to_fen();
    let plies = pos.history().len();
    let color = pos.side_to_move();

    let mut stats = SearchStats::default();
    minimax(&mut pos, 3, i32::MIN, i32::MAX, true, color, &mut stats);

    assert_eq!(pos.to_fen(), fen);
    assert_eq!(pos.history().len(), plies);
    assert_eq!(pos.side_to_move(), color);
}

#[test]
fn test_stalemate_scores_zero_at_any_depth() {
    let mut pos = Position::from_fen("7k/5K2/6Q1/8/8/8/8/8 b - - 0 1").unwrap();
    let mut stats = SearchStats::default();
    for depth in 0..3 {
        assert_eq!(minimax(&mut pos, depth, i32::MIN, i32::MAX, true, Color::White, &mut stats), 0);
    }
}

#[test]
fn test_mated_side_gets_extremal_value() {
    let mut pos = Position::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 0 3").unwrap();
    let mut stats = SearchStats::default();
    // White to move has no reply: maximizer keeps i32::MIN, minimizer i32::MAX
    assert_eq!(minimax(&mut pos, 1, i32::MIN, i32::MAX, true, Color::White, &mut stats), i32::MIN);
    assert_eq!(minimax(&mut pos, 1, i32::MIN, i32::MAX, false, Color::Black, &mut stats), i32::MAX);
    // At depth 0 only material counts
    assert_eq!(minimax(&mut pos, 0, i32::MIN, i32::MAX, true, Color::White, &mut stats), 0);
}
