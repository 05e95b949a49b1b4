//! Long algebraic move strings such as `e2e4` and `e7e8q`.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::{PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::game_state::move_record::MoveRecord;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

pub fn move_record_to_long_algebraic(record: &MoveRecord) -> String {
    let mut out = String::with_capacity(5);
    out.push_str(&square_to_algebraic(record.origin));
    out.push_str(&square_to_algebraic(record.destination));
    if let Some(promoted) = record.promotion {
        out.push(promoted.kind.letter());
    }
    out
}

/// Splits a move string into origin, destination and optional promotion kind.
pub fn parse_long_algebraic(long_algebraic: &str) -> ChessResult<(Square, Square, Option<PieceKind>)> {
    if !long_algebraic.is_ascii() || !(4..=5).contains(&long_algebraic.len()) {
        return Err(ChessErrors::InvalidAlgebraic(format!(
            "invalid long algebraic move: {long_algebraic}"
        )));
    }

    let from = algebraic_to_square(&long_algebraic[0..2])?;
    let to = algebraic_to_square(&long_algebraic[2..4])?;

    let promotion = match long_algebraic[4..].chars().next() {
        None => None,
        Some(ch) => {
            let kind = PieceKind::from_letter(ch)
                .filter(|kind| kind.is_promotion_choice())
                .ok_or_else(|| {
                    ChessErrors::InvalidAlgebraic(format!("invalid promotion piece: {ch}"))
                })?;
            Some(kind)
        }
    };

    Ok((from, to, promotion))
}

/// Plays a move string on `state`, resolving the promotion in the same step
/// when the move needs one.
pub fn apply_long_algebraic(state: &GameState, long_algebraic: &str) -> ChessResult<GameState> {
    let (from, to, promotion) = parse_long_algebraic(long_algebraic)?;
    let next = state.apply_move(from, to)?;

    match (next.pending_promotion(), promotion) {
        (Some(square), Some(kind)) => next.promote(kind, square),
        (Some(_), None) => Err(ChessErrors::InvalidAlgebraic(format!(
            "{long_algebraic} reaches the last rank without a promotion piece"
        ))),
        (None, Some(_)) => Err(ChessErrors::InvalidAlgebraic(format!(
            "{long_algebraic} names a promotion piece but does not promote"
        ))),
        (None, None) => Ok(next),
    }
}
