// Position evaluation function
// Returns material balance from the requested side's point of view

use crate::game_repr::{Color, Position};

/// Material-difference evaluator: own material minus enemy material using
/// the fixed piece values (K 1000, Q 90, R 50, B 30, N 30, P 10).
///
/// A stalemated position is worth 0 regardless of material.
pub fn evaluate(pos: &Position, perspective: Color) -> i32 {
    pos.material_difference(perspective)
}
