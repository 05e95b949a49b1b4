//! Game status evaluation: check, checkmate, stalemate and dead positions.

use std::fmt;

use crate::game_state::board::Board;
use crate::game_state::castle_rights::CastleRights;
use crate::game_state::chess_types::{PieceKind, Shade};
use crate::game_state::game_state::EnginePhase;
use crate::game_state::move_record::MoveRecord;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::legal_moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate { winner: Shade },
    Stalemate,
    DeadPosition,
}

impl GameStatus {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate { .. } | GameStatus::Stalemate | GameStatus::DeadPosition
        )
    }

    #[inline]
    pub const fn winner(self) -> Option<Shade> {
        match self {
            GameStatus::Checkmate { winner } => Some(winner),
            _ => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => f.write_str("ongoing"),
            GameStatus::Check => f.write_str("check"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            GameStatus::Stalemate => f.write_str("stalemate"),
            GameStatus::DeadPosition => f.write_str("dead position"),
        }
    }
}

/// Status of the position for the side to move.
///
/// Running out of moves is checked first, so a mate delivered with the last
/// minor piece still counts as mate. Dead positions are checked before a
/// plain check is reported.
pub fn game_status(
    board: &Board,
    turn: Shade,
    last_move: Option<&MoveRecord>,
    castle_rights: CastleRights,
) -> GameStatus {
    let in_check = is_king_in_check(board, turn, last_move, castle_rights);

    if legal_moves(board, turn, last_move, castle_rights).is_empty() {
        return if in_check {
            GameStatus::Checkmate {
                winner: turn.opposite(),
            }
        } else {
            GameStatus::Stalemate
        };
    }

    if is_dead_position(board) {
        return GameStatus::DeadPosition;
    }

    if in_check {
        GameStatus::Check
    } else {
        GameStatus::Ongoing
    }
}

/// Insufficient material for either side to ever mate.
///
/// Dead when only kings and minor pieces remain and either at most one minor
/// piece is left, or every minor piece is a bishop and they all share a
/// square colour.
pub fn is_dead_position(board: &Board) -> bool {
    let mut minors = 0usize;
    let mut knights = 0usize;
    let mut light_bishops = 0usize;
    let mut dark_bishops = 0usize;

    for (square, piece) in board.pieces() {
        match piece.kind {
            PieceKind::King => {}
            PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return false,
            PieceKind::Knight => {
                minors += 1;
                knights += 1;
            }
            PieceKind::Bishop => {
                minors += 1;
                if square.is_light() {
                    light_bishops += 1;
                } else {
                    dark_bishops += 1;
                }
            }
        }
    }

    minors <= 1 || (knights == 0 && (light_bishops == 0 || dark_bishops == 0))
}

pub(crate) fn phase_for(
    board: &Board,
    turn: Shade,
    last_move: Option<&MoveRecord>,
    castle_rights: CastleRights,
) -> EnginePhase {
    let status = game_status(board, turn, last_move, castle_rights);
    if status.is_terminal() {
        EnginePhase::Finished(status)
    } else {
        EnginePhase::AwaitingMove(status)
    }
}
