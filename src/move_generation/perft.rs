//! Perft node counting.
//!
//! Walks the legal move tree to a fixed depth using the same generation and
//! execution path as real play. Each promotion choice counts as its own move.
//! Terminal statuses are not consulted, so a dead position keeps expanding
//! like any other.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::castle_rights::CastleRights;
use crate::game_state::chess_rules::PROMOTION_CHOICES;
use crate::game_state::chess_types::Shade;
use crate::game_state::game_state::GameState;
use crate::game_state::move_record::MoveRecord;
use crate::move_generation::legal_move_apply::{commit_move, resolve_promotion};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::legal_moves;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
}

pub fn perft(game_state: &GameState, depth: u8) -> ChessResult<PerftCounts> {
    if let Some(square) = game_state.pending_promotion() {
        return Err(ChessErrors::PromotionPending(square));
    }

    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return Ok(counts);
    }

    perft_node(
        &game_state.board,
        game_state.turn,
        game_state.last_move.as_ref(),
        game_state.castle_rights,
        depth,
        &mut counts,
    )?;
    Ok(counts)
}

fn perft_node(
    board: &Board,
    turn: Shade,
    last_move: Option<&MoveRecord>,
    castle_rights: CastleRights,
    depth: u8,
    counts: &mut PerftCounts,
) -> ChessResult<()> {
    for (origin, destinations) in legal_moves(board, turn, last_move, castle_rights) {
        for destination in destinations {
            let applied = commit_move(board, origin, destination, last_move, castle_rights)?;

            match applied.awaiting_promotion {
                Some(square) => {
                    for kind in PROMOTION_CHOICES {
                        let (promoted, record) =
                            resolve_promotion(kind, square, &applied.board, &applied.record)?;
                        visit(&promoted, &record, applied.castle_rights, depth, counts)?;
                    }
                }
                None => visit(
                    &applied.board,
                    &applied.record,
                    applied.castle_rights,
                    depth,
                    counts,
                )?,
            }
        }
    }
    Ok(())
}

fn visit(
    board: &Board,
    record: &MoveRecord,
    castle_rights: CastleRights,
    depth: u8,
    counts: &mut PerftCounts,
) -> ChessResult<()> {
    let next_turn = record.piece.shade.opposite();

    if depth > 1 {
        return perft_node(board, next_turn, Some(record), castle_rights, depth - 1, counts);
    }

    counts.nodes += 1;
    if record.capture.is_some() {
        counts.captures += 1;
    }
    if record.is_en_passant() {
        counts.en_passant += 1;
    }
    if record.is_castle() {
        counts.castles += 1;
    }
    if record.promotion.is_some() {
        counts.promotions += 1;
    }
    if is_king_in_check(board, next_turn, Some(record), castle_rights) {
        counts.checks += 1;
    }
    Ok(())
}
