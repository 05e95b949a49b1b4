//! Shared stepping and ray-tracing helpers for reach generation.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Shade, Square};
use crate::game_state::square_set::SquareSet;

/// Fixed-offset moves (knight, king). A target is reachable when on the board
/// and not holding a friendly piece.
pub fn step_reach(board: &Board, shade: Shade, from: Square, offsets: &[(i8, i8)]) -> SquareSet {
    offsets
        .iter()
        .filter_map(|&(d_row, d_col)| from.offset(d_row, d_col))
        .filter(|&target| !board.holds(target, shade))
        .collect()
}

/// Sliding moves. Each ray runs until the edge or the first occupied square;
/// an enemy blocker is included, a friendly one is not.
pub fn ray_reach(board: &Board, shade: Shade, from: Square, directions: &[(i8, i8)]) -> SquareSet {
    let mut reach = SquareSet::EMPTY;
    for &(d_row, d_col) in directions {
        let mut cursor = from.offset(d_row, d_col);
        while let Some(target) = cursor {
            match board.tile(target) {
                None => reach.insert(target),
                Some(piece) => {
                    if piece.shade != shade {
                        reach.insert(target);
                    }
                    break;
                }
            }
            cursor = target.offset(d_row, d_col);
        }
    }
    reach
}
