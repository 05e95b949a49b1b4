//! Reach dispatch: the squares a piece could move to by its movement rule,
//! ignoring whether the move would expose its own king.
//!
//! Castling needs the opponent's attack set, and the attack set is built
//! from reach. `CastlingConsideration` breaks that cycle: attack-set
//! computation always asks for `Ignore`.

use crate::game_state::board::Board;
use crate::game_state::castle_rights::CastleRights;
use crate::game_state::chess_types::{PieceKind, Shade, Square};
use crate::game_state::move_record::MoveRecord;
use crate::game_state::square_set::SquareSet;
use crate::moves::bishop_moves::bishop_reach;
use crate::moves::king_moves::king_reach;
use crate::moves::knight_moves::knight_reach;
use crate::moves::pawn_moves::pawn_reach;
use crate::moves::queen_moves::queen_reach;
use crate::moves::rook_moves::rook_reach;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastlingConsideration {
    Consider,
    Ignore,
}

/// Everything a reach generator may look at.
#[derive(Debug, Clone, Copy)]
pub struct ReachContext<'a> {
    pub board: &'a Board,
    pub shade: Shade,
    pub last_move: Option<&'a MoveRecord>,
    pub castle_rights: CastleRights,
    pub castling: CastlingConsideration,
}

impl<'a> ReachContext<'a> {
    pub fn new(
        board: &'a Board,
        shade: Shade,
        last_move: Option<&'a MoveRecord>,
        castle_rights: CastleRights,
    ) -> Self {
        Self {
            board,
            shade,
            last_move,
            castle_rights,
            castling: CastlingConsideration::Consider,
        }
    }

    pub fn without_castling(self) -> Self {
        Self {
            castling: CastlingConsideration::Ignore,
            ..self
        }
    }
}

/// Reach of the piece on `from`. Empty when the square is empty or holds a
/// piece of the other side.
pub fn piece_reach(ctx: &ReachContext<'_>, from: Square) -> SquareSet {
    let Some(piece) = ctx.board.tile(from) else {
        return SquareSet::EMPTY;
    };
    if piece.shade != ctx.shade {
        return SquareSet::EMPTY;
    }

    match piece.kind {
        PieceKind::Pawn => pawn_reach(ctx.board, ctx.shade, from, ctx.last_move),
        PieceKind::Knight => knight_reach(ctx.board, ctx.shade, from),
        PieceKind::Bishop => bishop_reach(ctx.board, ctx.shade, from),
        PieceKind::Rook => rook_reach(ctx.board, ctx.shade, from),
        PieceKind::Queen => queen_reach(ctx.board, ctx.shade, from),
        PieceKind::King => king_reach(ctx, from),
    }
}

#[cfg(test)]
mod tests {
    use super::{piece_reach, ReachContext};
    use crate::game_state::board::Board;
    use crate::game_state::castle_rights::CastleRights;
    use crate::game_state::chess_types::{Shade, Square};

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).expect("test square should be on the board")
    }

    #[test]
    fn empty_and_enemy_squares_have_no_reach() {
        let board = Board::standard();
        let ctx = ReachContext::new(&board, Shade::Light, None, CastleRights::ALL);
        assert!(piece_reach(&ctx, sq(4, 4)).is_empty());
        assert!(piece_reach(&ctx, sq(1, 4)).is_empty());
        assert_eq!(piece_reach(&ctx, sq(6, 4)).len(), 2);
    }

    #[test]
    fn opening_reach_totals_twenty() {
        let board = Board::standard();
        let ctx = ReachContext::new(&board, Shade::Dark, None, CastleRights::ALL);
        let total: usize = board
            .pieces_of(Shade::Dark)
            .map(|(square, _)| piece_reach(&ctx, square).len())
            .sum();
        assert_eq!(total, 20);
    }
}
