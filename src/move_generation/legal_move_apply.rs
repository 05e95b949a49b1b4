//! Move execution and promotion resolution.
//!
//! Execution works on copies: the board passed in is never touched, and a new
//! board plus the `MoveRecord` describing what happened come back out.
//! `play_on_board` carries the raw piece movement (captures, en passant and
//! the castling rook hop) and is shared with the legality filter so simulated
//! and real moves cannot drift apart.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::castle_rights::{CastleRights, CastleWing};
use crate::game_state::chess_types::{Piece, PieceKind, Shade, Square};
use crate::game_state::game_state::{EnginePhase, GameState};
use crate::game_state::move_record::{Capture, MoveRecord};
use crate::move_generation::game_status::phase_for;
use crate::move_generation::legal_move_generator::legal_moves_from;
use crate::moves::pawn_moves::is_en_passant_target;

/// Result of executing one legal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub board: Board,
    pub record: MoveRecord,
    pub castle_rights: CastleRights,
    /// Set when a pawn reached its last row and needs a promotion choice.
    pub awaiting_promotion: Option<Square>,
}

/// Moves the piece on `origin` to `destination` without any legality check.
pub fn play_on_board(
    board: &Board,
    origin: Square,
    destination: Square,
    last_move: Option<&MoveRecord>,
) -> ChessResult<(Board, MoveRecord)> {
    let mut next = *board;
    let piece = next
        .clear(origin)
        .ok_or(ChessErrors::InvalidSelection(origin))?;
    let mut record = MoveRecord::new(piece, origin, destination);

    let en_passant = piece.kind == PieceKind::Pawn
        && origin.col() != destination.col()
        && is_en_passant_target(board, piece.shade, destination, last_move);

    match (en_passant, last_move) {
        (true, Some(last)) => {
            record.capture = next.clear(last.destination).map(|captured| Capture {
                piece: captured,
                square: last.destination,
            });
        }
        _ => {
            record.capture = next.clear(destination).map(|captured| Capture {
                piece: captured,
                square: destination,
            });
        }
    }

    next.place(destination, piece);

    if record.is_castle() {
        let wing = CastleWing::from_king_target(destination.col());
        let row = origin.row();
        let rook_from = Square::new_unchecked(row, wing.rook_home_col());
        if let Some(rook) = next.clear(rook_from) {
            next.place(Square::new_unchecked(row, wing.rook_target_col()), rook);
        }
    }

    Ok((next, record))
}

/// Plays a move already known to be legal and updates castling rights.
pub(crate) fn commit_move(
    board: &Board,
    origin: Square,
    destination: Square,
    last_move: Option<&MoveRecord>,
    castle_rights: CastleRights,
) -> ChessResult<AppliedMove> {
    let (next, record) = play_on_board(board, origin, destination, last_move)?;

    let mut rights = castle_rights;
    if record.piece.kind == PieceKind::King {
        rights.revoke_shade(record.piece.shade);
    }
    rights.revoke_touching(origin);
    rights.revoke_touching(destination);

    let awaiting_promotion = (record.piece.kind == PieceKind::Pawn
        && destination.row() == record.piece.shade.promotion_row())
    .then_some(destination);

    Ok(AppliedMove {
        board: next,
        record,
        castle_rights: rights,
        awaiting_promotion,
    })
}

/// Validates `origin -> destination` against the legal move set for `turn`
/// and executes it.
///
/// Game status is not consulted: a move in a dead position is still played.
/// Refusing input once the game is over is `GameState::apply_move`'s job.
pub fn execute_move(
    board: &Board,
    turn: Shade,
    last_move: Option<&MoveRecord>,
    castle_rights: CastleRights,
    origin: Square,
    destination: Square,
) -> ChessResult<AppliedMove> {
    if !board.holds(origin, turn) {
        return Err(ChessErrors::InvalidSelection(origin));
    }
    if !legal_moves_from(board, turn, last_move, castle_rights, origin).contains(destination) {
        return Err(ChessErrors::IllegalDestination {
            origin,
            destination,
        });
    }
    commit_move(board, origin, destination, last_move, castle_rights)
}

/// Replaces the pawn waiting on `square` with a piece of `kind` and amends
/// `record` to match.
pub fn resolve_promotion(
    kind: PieceKind,
    square: Square,
    board: &Board,
    record: &MoveRecord,
) -> ChessResult<(Board, MoveRecord)> {
    if !kind.is_promotion_choice() {
        return Err(ChessErrors::InvalidPromotionKind(kind));
    }
    if square != record.destination {
        return Err(ChessErrors::PromotionSquareMismatch {
            expected: record.destination,
            found: square,
        });
    }

    let shade = record.piece.shade;
    let waiting = record.piece.kind == PieceKind::Pawn
        && record.promotion.is_none()
        && square.row() == shade.promotion_row()
        && board.tile(square) == Some(Piece::new(PieceKind::Pawn, shade));
    if !waiting {
        return Err(ChessErrors::NoPromotionPending);
    }

    let promoted = Piece::new(kind, shade);
    let mut next = *board;
    next.place(square, promoted);
    Ok((next, record.with_promotion(promoted)))
}

/// Executes a move on a whole game state. The returned state either waits
/// for a promotion choice from the same side or hands the turn over.
pub fn apply_move(state: &GameState, origin: Square, destination: Square) -> ChessResult<GameState> {
    match state.phase {
        EnginePhase::AwaitingPromotion { square } => {
            return Err(ChessErrors::PromotionPending(square))
        }
        EnginePhase::Finished(status) => return Err(ChessErrors::GameAlreadyOver(status)),
        EnginePhase::AwaitingMove(_) => {}
    }

    let applied = execute_move(
        &state.board,
        state.turn,
        state.last_move.as_ref(),
        state.castle_rights,
        origin,
        destination,
    )?;

    let mut next = state.clone();
    next.board = applied.board;
    next.castle_rights = applied.castle_rights;
    next.last_move = Some(applied.record);
    next.history.push(applied.record);

    match applied.awaiting_promotion {
        Some(square) => next.phase = EnginePhase::AwaitingPromotion { square },
        None => hand_over_turn(&mut next),
    }
    Ok(next)
}

/// Resolves the pending promotion on a game state and hands the turn over.
pub fn apply_promotion(state: &GameState, kind: PieceKind, square: Square) -> ChessResult<GameState> {
    let pending = match state.phase {
        EnginePhase::AwaitingPromotion { square } => square,
        EnginePhase::Finished(status) => return Err(ChessErrors::GameAlreadyOver(status)),
        EnginePhase::AwaitingMove(_) => return Err(ChessErrors::NoPromotionPending),
    };
    if square != pending {
        return Err(ChessErrors::PromotionSquareMismatch {
            expected: pending,
            found: square,
        });
    }
    let last = state.last_move.ok_or(ChessErrors::NoPromotionPending)?;

    let (board, record) = resolve_promotion(kind, square, &state.board, &last)?;

    let mut next = state.clone();
    next.board = board;
    next.last_move = Some(record);
    if let Some(entry) = next.history.last_mut() {
        *entry = record;
    }
    hand_over_turn(&mut next);
    Ok(next)
}

fn hand_over_turn(state: &mut GameState) {
    state.turn = state.turn.opposite();
    state.phase = phase_for(
        &state.board,
        state.turn,
        state.last_move.as_ref(),
        state.castle_rights,
    );
}
