use crate::game_state::board::Board;
use crate::game_state::chess_types::{Shade, Square};
use crate::game_state::square_set::SquareSet;
use crate::moves::move_patterns::step_reach;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
    (1, -2),
    (2, -1),
    (2, 1),
    (1, 2),
];

#[inline]
pub fn knight_reach(board: &Board, shade: Shade, from: Square) -> SquareSet {
    step_reach(board, shade, from, &KNIGHT_OFFSETS)
}
