//! Legal move generation.
//!
//! Reach is computed per piece, then each candidate is run through the
//! simulate-and-check filter. Results are keyed by origin square; origins
//! whose every destination is filtered out are left out of the map.

use std::collections::BTreeMap;

use crate::game_state::board::Board;
use crate::game_state::castle_rights::CastleRights;
use crate::game_state::chess_types::{Shade, Square};
use crate::game_state::move_record::MoveRecord;
use crate::game_state::square_set::SquareSet;
use crate::move_generation::legal_move_filter::leaves_king_attacked;
use crate::moves::reach::{piece_reach, ReachContext};

/// Legal destinations keyed by origin square.
pub type LegalMoveMap = BTreeMap<Square, SquareSet>;

/// Reach split into legal moves and the moves that would expose the king.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveSurvey {
    pub legal: LegalMoveMap,
    pub self_checking: LegalMoveMap,
}

impl MoveSurvey {
    pub fn legal_count(&self) -> usize {
        count_legal_moves(&self.legal)
    }
}

pub fn legal_moves(
    board: &Board,
    turn: Shade,
    last_move: Option<&MoveRecord>,
    castle_rights: CastleRights,
) -> LegalMoveMap {
    survey_moves(board, turn, last_move, castle_rights).legal
}

/// Legal destinations for the piece on `origin`. Empty when the square does
/// not hold a piece of `turn`.
pub fn legal_moves_from(
    board: &Board,
    turn: Shade,
    last_move: Option<&MoveRecord>,
    castle_rights: CastleRights,
    origin: Square,
) -> SquareSet {
    let ctx = ReachContext::new(board, turn, last_move, castle_rights);
    split_reach(&ctx, origin).0
}

/// Full reach of `turn`, partitioned by whether each move is legal.
pub fn survey_moves(
    board: &Board,
    turn: Shade,
    last_move: Option<&MoveRecord>,
    castle_rights: CastleRights,
) -> MoveSurvey {
    let ctx = ReachContext::new(board, turn, last_move, castle_rights);
    let mut survey = MoveSurvey::default();

    for (origin, _) in board.pieces_of(turn) {
        let (legal, self_checking) = split_reach(&ctx, origin);
        if !legal.is_empty() {
            survey.legal.insert(origin, legal);
        }
        if !self_checking.is_empty() {
            survey.self_checking.insert(origin, self_checking);
        }
    }

    survey
}

#[inline]
pub fn count_legal_moves(moves: &LegalMoveMap) -> usize {
    moves.values().map(|set| set.len()).sum()
}

fn split_reach(ctx: &ReachContext<'_>, origin: Square) -> (SquareSet, SquareSet) {
    let mut legal = SquareSet::EMPTY;
    let mut self_checking = SquareSet::EMPTY;

    for destination in piece_reach(ctx, origin) {
        if leaves_king_attacked(
            ctx.board,
            ctx.shade,
            origin,
            destination,
            ctx.last_move,
            ctx.castle_rights,
        ) {
            self_checking.insert(destination);
        } else {
            legal.insert(destination);
        }
    }

    (legal, self_checking)
}
