//! Pawn reach, pawn threats and the en-passant window.
//!
//! En passant depends on nothing but the previous half-move: the capture is
//! offered only while that record shows an enemy pawn's two-square advance
//! landing directly behind the destination.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceKind, Shade, Square};
use crate::game_state::move_record::MoveRecord;
use crate::game_state::square_set::SquareSet;

pub fn pawn_reach(
    board: &Board,
    shade: Shade,
    from: Square,
    last_move: Option<&MoveRecord>,
) -> SquareSet {
    let mut reach = SquareSet::EMPTY;
    let forward = shade.forward();

    if let Some(one_step) = from.offset(forward, 0) {
        if board.is_empty(one_step) {
            reach.insert(one_step);

            if from.row() == shade.pawn_start_row() {
                if let Some(two_step) = from.offset(2 * forward, 0) {
                    if board.is_empty(two_step) {
                        reach.insert(two_step);
                    }
                }
            }
        }
    }

    for target in pawn_attacks(shade, from) {
        match board.tile(target) {
            Some(piece) if piece.shade != shade => reach.insert(target),
            None if is_en_passant_target(board, shade, target, last_move) => reach.insert(target),
            _ => {}
        }
    }

    reach
}

/// Diagonal-forward squares a pawn threatens, occupied or not.
pub fn pawn_attacks(shade: Shade, from: Square) -> SquareSet {
    let forward = shade.forward();
    [-1i8, 1i8]
        .into_iter()
        .filter_map(|d_col| from.offset(forward, d_col))
        .collect()
}

/// True when a pawn of `shade` moving diagonally onto `target` would capture
/// en passant, given the immediately preceding half-move.
pub fn is_en_passant_target(
    board: &Board,
    shade: Shade,
    target: Square,
    last_move: Option<&MoveRecord>,
) -> bool {
    let Some(last) = last_move else {
        return false;
    };

    board.is_empty(target)
        && last.piece.kind == PieceKind::Pawn
        && last.piece.shade != shade
        && last.is_double_pawn_advance()
        && target.offset(-shade.forward(), 0) == Some(last.destination)
}

#[cfg(test)]
mod tests {
    use super::{is_en_passant_target, pawn_attacks, pawn_reach};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Piece, PieceKind, Shade, Square};
    use crate::game_state::move_record::MoveRecord;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).expect("test square should be on the board")
    }

    fn pawn(shade: Shade) -> Piece {
        Piece::new(PieceKind::Pawn, shade)
    }

    #[test]
    fn pawn_on_start_row_has_single_and_double_step() {
        let board = Board::standard();
        let reach = pawn_reach(&board, Shade::Light, sq(6, 4), None);
        assert_eq!(reach.len(), 2);
        assert!(reach.contains(sq(5, 4)));
        assert!(reach.contains(sq(4, 4)));

        let reach = pawn_reach(&board, Shade::Dark, sq(1, 2), None);
        assert!(reach.contains(sq(2, 2)));
        assert!(reach.contains(sq(3, 2)));
    }

    #[test]
    fn blocked_pawn_cannot_advance_or_capture_straight_ahead() {
        let mut board = Board::empty();
        board.place(sq(6, 4), pawn(Shade::Light));
        board.place(sq(5, 4), pawn(Shade::Dark));
        assert!(pawn_reach(&board, Shade::Light, sq(6, 4), None).is_empty());

        board.clear(sq(5, 4));
        board.place(sq(4, 4), pawn(Shade::Dark));
        let reach = pawn_reach(&board, Shade::Light, sq(6, 4), None);
        assert_eq!(reach.len(), 1);
        assert!(reach.contains(sq(5, 4)));
    }

    #[test]
    fn pawn_captures_only_enemies_diagonally() {
        let mut board = Board::empty();
        board.place(sq(4, 4), pawn(Shade::Light));
        board.place(sq(3, 3), Piece::new(PieceKind::Knight, Shade::Dark));
        board.place(sq(3, 5), Piece::new(PieceKind::Knight, Shade::Light));
        let reach = pawn_reach(&board, Shade::Light, sq(4, 4), None);

        assert!(reach.contains(sq(3, 3)));
        assert!(!reach.contains(sq(3, 5)));
        assert!(reach.contains(sq(3, 4)));
        assert!(!reach.contains(sq(2, 4)));
    }

    #[test]
    fn en_passant_follows_a_double_advance_only() {
        let mut board = Board::empty();
        board.place(sq(3, 4), pawn(Shade::Light));
        board.place(sq(3, 3), pawn(Shade::Dark));

        let double = MoveRecord::new(pawn(Shade::Dark), sq(1, 3), sq(3, 3));
        let single = MoveRecord::new(pawn(Shade::Dark), sq(2, 3), sq(3, 3));

        assert!(is_en_passant_target(&board, Shade::Light, sq(2, 3), Some(&double)));
        assert!(pawn_reach(&board, Shade::Light, sq(3, 4), Some(&double)).contains(sq(2, 3)));
        assert!(!pawn_reach(&board, Shade::Light, sq(3, 4), Some(&single)).contains(sq(2, 3)));
        assert!(!pawn_reach(&board, Shade::Light, sq(3, 4), None).contains(sq(2, 3)));
        assert!(!is_en_passant_target(&board, Shade::Light, sq(2, 5), Some(&double)));
    }

    #[test]
    fn en_passant_window_belongs_to_the_opponent() {
        let mut board = Board::empty();
        board.place(sq(4, 4), pawn(Shade::Light));
        let advance = MoveRecord::new(pawn(Shade::Light), sq(6, 4), sq(4, 4));
        assert!(!is_en_passant_target(&board, Shade::Light, sq(5, 4), Some(&advance)));
        assert!(is_en_passant_target(&board, Shade::Dark, sq(5, 4), Some(&advance)));
    }

    #[test]
    fn edge_pawn_threatens_one_square() {
        assert_eq!(pawn_attacks(Shade::Dark, sq(1, 0)).len(), 1);
        assert!(pawn_attacks(Shade::Light, sq(0, 3)).is_empty());
    }
}
