//! Attack sets and check detection.
//!
//! The attack set of a side is recomputed from scratch on every call. Pawns
//! contribute the diagonals they threaten; every other piece contributes its
//! reach with castling ignored.

use crate::game_state::board::Board;
use crate::game_state::castle_rights::CastleRights;
use crate::game_state::chess_types::{PieceKind, Shade, Square};
use crate::game_state::move_record::MoveRecord;
use crate::game_state::square_set::SquareSet;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::reach::{piece_reach, ReachContext};

/// All squares `attacker` threatens on `board`.
pub fn attack_set(
    board: &Board,
    attacker: Shade,
    last_move: Option<&MoveRecord>,
    castle_rights: CastleRights,
) -> SquareSet {
    let ctx = ReachContext::new(board, attacker, last_move, castle_rights).without_castling();

    let mut attacks = SquareSet::EMPTY;
    for (square, piece) in board.pieces_of(attacker) {
        attacks |= match piece.kind {
            PieceKind::Pawn => pawn_attacks(attacker, square),
            _ => piece_reach(&ctx, square),
        };
    }
    attacks
}

#[inline]
pub fn is_square_attacked(
    board: &Board,
    square: Square,
    attacker: Shade,
    last_move: Option<&MoveRecord>,
    castle_rights: CastleRights,
) -> bool {
    attack_set(board, attacker, last_move, castle_rights).contains(square)
}

/// A side without a king on the board is never reported in check.
pub fn is_king_in_check(
    board: &Board,
    shade: Shade,
    last_move: Option<&MoveRecord>,
    castle_rights: CastleRights,
) -> bool {
    let Some(king_sq) = board.king_square(shade) else {
        return false;
    };
    is_square_attacked(board, king_sq, shade.opposite(), last_move, castle_rights)
}

#[cfg(test)]
mod tests {
    use super::{attack_set, is_king_in_check, is_square_attacked};
    use crate::game_state::board::Board;
    use crate::game_state::castle_rights::CastleRights;
    use crate::game_state::chess_types::{Shade, Square};
    use crate::utils::fen_parser::parse_fen;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).expect("test square should be on the board")
    }

    #[test]
    fn pawns_threaten_diagonals_not_pushes() {
        let game = parse_fen("4k3/8/8/8/3p4/8/8/4K3 w - - 0 1").expect("test FEN should parse");
        let attacks = attack_set(&game.board, Shade::Dark, None, CastleRights::NONE);
        assert!(attacks.contains(sq(5, 2)));
        assert!(attacks.contains(sq(5, 4)));
        assert!(!attacks.contains(sq(5, 3)));
    }

    #[test]
    fn opening_attack_set_is_the_third_rank() {
        let board = Board::standard();
        let attacks = attack_set(&board, Shade::Light, None, CastleRights::ALL);
        for col in 0..8 {
            assert!(attacks.contains(sq(5, col)));
        }
        assert!(!attacks.contains(sq(4, 4)));
        assert!(!attacks.contains(sq(6, 4)));
    }

    #[test]
    fn blocked_slider_does_not_attack_through_pieces() {
        let game = parse_fen("4k3/4r3/8/8/8/8/4P3/4K3 w - - 0 1").expect("test FEN should parse");
        assert!(!is_king_in_check(&game.board, Shade::Light, None, CastleRights::NONE));
        assert!(is_square_attacked(
            &game.board,
            sq(6, 4),
            Shade::Dark,
            None,
            CastleRights::NONE
        ));
    }

    #[test]
    fn check_is_detected_and_missing_king_is_never_in_check() {
        let game = parse_fen("4k3/8/8/8/8/8/8/4R1K1 b - - 0 1").expect("test FEN should parse");
        assert!(is_king_in_check(&game.board, Shade::Dark, None, CastleRights::NONE));
        assert!(!is_king_in_check(&game.board, Shade::Light, None, CastleRights::NONE));
        assert!(!is_king_in_check(&Board::empty(), Shade::Light, None, CastleRights::NONE));
    }
}
