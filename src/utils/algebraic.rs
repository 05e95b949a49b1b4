//! Square conversions for algebraic coordinates.
//!
//! File `a` is column 0 and rank `8` is row 0, so `e1` is the light king's
//! home square at (7, 4).

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraic(format!(
            "square must be two characters: {square}"
        )));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessErrors::InvalidAlgebraic(format!(
            "invalid file: {}",
            file as char
        )));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraic(format!(
            "invalid rank: {}",
            rank as char
        )));
    }

    Square::new(b'8' - rank, file - b'a')
        .ok_or_else(|| ChessErrors::InvalidAlgebraic(square.to_owned()))
}

#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    square.to_string()
}
