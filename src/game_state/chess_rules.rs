//! Canonical chess-rule constants.
//!
//! Home squares for kings and rooks, the standard starting layout and the
//! promotion choices offered to a pawn reaching the far rank.

use crate::game_state::castle_rights::CastleWing;
use crate::game_state::chess_types::{PieceKind, Shade, Square};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Back-rank layout from column 0 to column 7, identical for both sides.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Promotion choices, strongest first.
pub const PROMOTION_CHOICES: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

pub const KING_HOME_COL: u8 = 4;

#[inline]
pub const fn king_home(shade: Shade) -> Square {
    Square::new_unchecked(shade.back_rank(), KING_HOME_COL)
}

#[inline]
pub const fn rook_home(shade: Shade, wing: CastleWing) -> Square {
    Square::new_unchecked(shade.back_rank(), wing.rook_home_col())
}
