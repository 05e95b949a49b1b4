use crate::game_state::board::Board;
use crate::game_state::chess_types::{Shade, Square};
use crate::game_state::square_set::SquareSet;
use crate::moves::bishop_moves::bishop_reach;
use crate::moves::rook_moves::rook_reach;

#[inline]
pub fn queen_reach(board: &Board, shade: Shade, from: Square) -> SquareSet {
    bishop_reach(board, shade, from) | rook_reach(board, shade, from)
}

#[cfg(test)]
mod tests {
    use super::queen_reach;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Piece, PieceKind, Shade, Square};

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).expect("test square should be on the board")
    }

    #[test]
    fn queen_on_open_board_reaches_twenty_seven_squares() {
        let board = Board::empty();
        assert_eq!(queen_reach(&board, Shade::Dark, sq(4, 3)).len(), 27);
    }

    #[test]
    fn queen_reach_is_union_of_rook_and_bishop() {
        let mut board = Board::empty();
        board.place(sq(2, 3), Piece::new(PieceKind::Pawn, Shade::Light));
        board.place(sq(3, 4), Piece::new(PieceKind::Pawn, Shade::Dark));
        let reach = queen_reach(&board, Shade::Dark, sq(4, 3));

        assert!(reach.contains(sq(2, 3)));
        assert!(!reach.contains(sq(1, 3)));
        assert!(!reach.contains(sq(3, 4)));
        assert!(!reach.contains(sq(2, 5)));
    }
}
