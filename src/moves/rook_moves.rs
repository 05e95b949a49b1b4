use crate::game_state::board::Board;
use crate::game_state::chess_types::{Shade, Square};
use crate::game_state::square_set::SquareSet;
use crate::moves::move_patterns::ray_reach;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

#[inline]
pub fn rook_reach(board: &Board, shade: Shade, from: Square) -> SquareSet {
    ray_reach(board, shade, from, &ROOK_DIRECTIONS)
}
