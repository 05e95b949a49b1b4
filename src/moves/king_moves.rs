//! King reach, including castling when the context asks for it.
//!
//! Castling is offered per wing as a two-column king move when the right is
//! still held, king and rook stand on their home squares, the squares between
//! them are empty, and the opponent attacks neither the king's square nor the
//! squares it crosses and lands on.

use crate::game_state::castle_rights::CastleWing;
use crate::game_state::chess_rules::{king_home, rook_home};
use crate::game_state::chess_types::{Piece, PieceKind, Square};
use crate::game_state::square_set::SquareSet;
use crate::move_generation::legal_move_checks::attack_set;
use crate::moves::move_patterns::step_reach;
use crate::moves::reach::{CastlingConsideration, ReachContext};

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, 0),
    (0, 1),
    (1, 0),
    (0, -1),
    (-1, -1),
    (-1, 1),
    (1, 1),
    (1, -1),
];

pub fn king_reach(ctx: &ReachContext<'_>, from: Square) -> SquareSet {
    let mut reach = step_reach(ctx.board, ctx.shade, from, &KING_OFFSETS);
    if ctx.castling == CastlingConsideration::Consider {
        reach |= castling_reach(ctx, from);
    }
    reach
}

fn castling_reach(ctx: &ReachContext<'_>, from: Square) -> SquareSet {
    let shade = ctx.shade;
    let mut reach = SquareSet::EMPTY;

    if from != king_home(shade) || !ctx.castle_rights.any(shade) {
        return reach;
    }

    let threatened = attack_set(
        ctx.board,
        shade.opposite(),
        ctx.last_move,
        ctx.castle_rights,
    );

    // Cannot castle out of check.
    if threatened.contains(from) {
        return reach;
    }

    let row = shade.back_rank();
    for wing in CastleWing::BOTH {
        if !ctx.castle_rights.has(shade, wing) {
            continue;
        }
        if ctx.board.tile(rook_home(shade, wing)) != Some(Piece::new(PieceKind::Rook, shade)) {
            continue;
        }

        let path_clear = wing
            .between_cols()
            .iter()
            .all(|&col| ctx.board.is_empty(Square::new_unchecked(row, col)));
        if !path_clear {
            continue;
        }

        let transit = Square::new_unchecked(row, wing.rook_target_col());
        let landing = Square::new_unchecked(row, wing.king_target_col());
        if threatened.contains(transit) || threatened.contains(landing) {
            continue;
        }

        reach.insert(landing);
    }

    reach
}
