//! Simulate-and-check legality filter.
//!
//! Every candidate is played on a private copy of the board and rejected when
//! the mover's king is attacked afterwards. No pin or check-evasion shortcuts
//! are taken.

use crate::game_state::board::Board;
use crate::game_state::castle_rights::CastleRights;
use crate::game_state::chess_types::{Shade, Square};
use crate::game_state::move_record::MoveRecord;
use crate::move_generation::legal_move_apply::play_on_board;
use crate::move_generation::legal_move_checks::attack_set;

/// True when moving `origin` to `destination` would leave `shade`'s king
/// attacked. A move that cannot be played, such as one from an empty
/// origin, counts as exposing the king so it is never offered.
pub fn leaves_king_attacked(
    board: &Board,
    shade: Shade,
    origin: Square,
    destination: Square,
    last_move: Option<&MoveRecord>,
    castle_rights: CastleRights,
) -> bool {
    let Ok((scratch, _)) = play_on_board(board, origin, destination, last_move) else {
        return true;
    };
    let Some(king_sq) = scratch.king_square(shade) else {
        return false;
    };
    attack_set(&scratch, shade.opposite(), last_move, castle_rights).contains(king_sq)
}
