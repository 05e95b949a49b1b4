//! FEN-to-GameState parser.
//!
//! Reads board layout, side to move, castling field and en-passant field.
//! The en-passant square is turned into a synthetic record of the double
//! pawn advance that created it, because legality only ever looks at the
//! last move. Clock fields are validated and then dropped.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::castle_rights::{CastleRights, CastleWing};
use crate::game_state::chess_types::{Piece, PieceKind, Shade, Square};
use crate::game_state::game_state::GameState;
use crate::game_state::move_record::MoveRecord;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side-to-move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en-passant square"))?;
    let halfmove_part = parts.next().ok_or_else(|| invalid("missing halfmove clock"))?;
    let fullmove_part = parts.next().ok_or_else(|| invalid("missing fullmove number"))?;

    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let board = parse_board(board_part)?;
    for shade in [Shade::Light, Shade::Dark] {
        if board.king_square(shade).is_none() {
            return Err(ChessErrors::MissingKing(shade));
        }
    }
    let turn = parse_side_to_move(side_part)?;
    let castle_rights = parse_castling_rights(castling_part)?;
    let last_move = parse_en_passant(en_passant_part, &board, turn)?;

    halfmove_part
        .parse::<u16>()
        .map_err(|_| invalid(&format!("invalid halfmove clock: {halfmove_part}")))?;
    fullmove_part
        .parse::<u16>()
        .map_err(|_| invalid(&format!("invalid fullmove number: {fullmove_part}")))?;

    Ok(GameState::from_position(board, turn, castle_rights, last_move))
}

fn invalid(msg: &str) -> ChessErrors {
    ChessErrors::InvalidFen(msg.to_owned())
}

fn parse_board(board_part: &str) -> ChessResult<Board> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    let mut board = Board::empty();

    // First FEN rank is rank 8, which is row 0.
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(&format!("invalid empty-square count '{ch}'")));
                }
                col += empty_count as usize;
                continue;
            }

            let piece = piece_from_fen_char(ch)
                .ok_or_else(|| invalid(&format!("invalid piece character '{ch}'")))?;

            let square = Square::new(row as u8, col as u8)
                .ok_or_else(|| invalid(&format!("rank {} has too many files", 8 - row)))?;
            board.place(square, piece);
            col += 1;
        }

        if col != 8 {
            return Err(invalid(&format!("rank {} does not sum to 8 files", 8 - row)));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Shade> {
    match side_part {
        "w" => Ok(Shade::Light),
        "b" => Ok(Shade::Dark),
        _ => Err(invalid(&format!("invalid side-to-move field: {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastleRights> {
    let mut rights = CastleRights::NONE;
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => rights.grant(Shade::Light, CastleWing::Kingside),
            'Q' => rights.grant(Shade::Light, CastleWing::Queenside),
            'k' => rights.grant(Shade::Dark, CastleWing::Kingside),
            'q' => rights.grant(Shade::Dark, CastleWing::Queenside),
            _ => return Err(invalid(&format!("invalid castling rights character: {ch}"))),
        }
    }

    Ok(rights)
}

/// The en-passant square sits behind a pawn of the side that just moved.
/// That pawn is recorded as having advanced two rows past the square.
fn parse_en_passant(en_passant_part: &str, board: &Board, turn: Shade) -> ChessResult<Option<MoveRecord>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let target = algebraic_to_square(en_passant_part)?;
    let mover = turn.opposite();
    let expected_row = (mover.pawn_start_row() as i8 + mover.forward()) as u8;
    if target.row() != expected_row {
        return Err(invalid(&format!(
            "en-passant square {en_passant_part} is not on the {mover} skip row"
        )));
    }

    let (Some(origin), Some(destination)) = (
        target.offset(-mover.forward(), 0),
        target.offset(mover.forward(), 0),
    ) else {
        return Err(invalid(&format!("en-passant square {en_passant_part} is off the board")));
    };

    let pawn = Piece::new(PieceKind::Pawn, mover);
    if board.tile(destination) != Some(pawn) {
        return Err(invalid(&format!(
            "en-passant square {en_passant_part} has no {mover} pawn in front of it"
        )));
    }

    Ok(Some(MoveRecord::new(pawn, origin, destination)))
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let shade = if ch.is_ascii_uppercase() {
        Shade::Light
    } else if ch.is_ascii_lowercase() {
        Shade::Dark
    } else {
        return None;
    };

    PieceKind::from_letter(ch).map(|kind| Piece::new(kind, shade))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::chess_errors::ChessErrors;
    use crate::game_state::board::Board;
    use crate::game_state::castle_rights::{CastleRights, CastleWing};
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::{Piece, PieceKind, Shade, Square};
    use crate::game_state::game_state::GameState;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).expect("test square should be on the board")
    }

    #[test]
    fn starting_fen_matches_new_game() {
        let game = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert_eq!(game.board, Board::standard());
        assert_eq!(game.turn, Shade::Light);
        assert_eq!(game.castle_rights, CastleRights::ALL);
        assert_eq!(game.last_move, None);
        assert_eq!(game, GameState::new_game());
    }

    #[test]
    fn rank_eight_is_row_zero() {
        let game = parse_fen("r3k3/8/8/8/8/8/8/4K2R b Kq - 3 20").expect("FEN should parse");
        assert_eq!(game.board.tile(sq(0, 0)), Some(Piece::new(PieceKind::Rook, Shade::Dark)));
        assert_eq!(game.board.tile(sq(7, 7)), Some(Piece::new(PieceKind::Rook, Shade::Light)));
        assert_eq!(game.turn, Shade::Dark);
        assert!(game.castle_rights.has(Shade::Light, CastleWing::Kingside));
        assert!(game.castle_rights.has(Shade::Dark, CastleWing::Queenside));
        assert!(!game.castle_rights.has(Shade::Light, CastleWing::Queenside));
    }

    #[test]
    fn en_passant_field_becomes_last_move() {
        let game = parse_fen("rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 2")
            .expect("FEN should parse");
        let last = game.last_move.expect("en-passant field should yield a record");
        assert_eq!(last.piece, Piece::new(PieceKind::Pawn, Shade::Dark));
        assert_eq!(last.origin, sq(1, 4));
        assert_eq!(last.destination, sq(3, 4));
        assert!(last.is_double_pawn_advance());

        let game = parse_fen("4k3/8/8/8/4P3/8/8/4K3 b - e3 0 1").expect("FEN should parse");
        let last = game.last_move.expect("en-passant field should yield a record");
        assert_eq!(last.origin, sq(6, 4));
        assert_eq!(last.destination, sq(4, 4));
    }

    #[test]
    fn rejects_inconsistent_en_passant() {
        assert!(matches!(
            parse_fen("4k3/8/8/8/8/8/8/4K3 w - e6 0 1"),
            Err(ChessErrors::InvalidFen(_))
        ));
        assert!(matches!(
            parse_fen("4k3/8/8/4p3/8/8/8/4K3 w - e3 0 1"),
            Err(ChessErrors::InvalidFen(_))
        ));
    }

    #[test]
    fn both_kings_are_required() {
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/4K3 w - - 0 1"),
            Err(ChessErrors::MissingKing(Shade::Dark))
        );
        assert_eq!(
            parse_fen("4k3/8/8/8/8/8/8/8 b - - 0 1"),
            Err(ChessErrors::MissingKing(Shade::Light))
        );
    }

    #[test]
    fn rejects_malformed_fields() {
        for fen in [
            "",
            "8/8/8/8/8/8/8 w - - 0 1",
            "9/8/8/8/8/8/8/8 w - - 0 1",
            "4k3/8/8/8/8/8/8/4KX2 w - - 0 1",
            "4k3/8/8/8/8/8/8/4K3 x - - 0 1",
            "4k3/8/8/8/8/8/8/4K3 w Z - 0 1",
            "4k3/8/8/8/8/8/8/4K3 w - - a 1",
            "4k3/8/8/8/8/8/8/4K3 w - - 0 1 extra",
            "4k3/8/8/8/8/8/8/4K4 w - - 0 1",
        ] {
            assert!(parse_fen(fen).is_err(), "{fen:?} should be rejected");
        }
    }
}
