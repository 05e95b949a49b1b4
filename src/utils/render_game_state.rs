//! Terminal-oriented Unicode board renderer.
//!
//! Row 0 (rank 8) is printed first so light sits at the bottom.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, PieceKind, Shade, Square};
use crate::game_state::game_state::{EnginePhase, GameState};

/// Render the board to a Unicode string for terminal output.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..8u8 {
        let rank = char::from(b'8' - row);
        out.push(rank);
        out.push(' ');

        for col in 0..8u8 {
            match board.tile(Square::new_unchecked(row, col)) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }

            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

/// Board plus a one-line summary of turn, rights and phase.
pub fn render_game_state(game_state: &GameState) -> String {
    let phase = match game_state.phase {
        EnginePhase::AwaitingMove(status) => format!("{status}"),
        EnginePhase::AwaitingPromotion { square } => format!("promotion pending on {square}"),
        EnginePhase::Finished(status) => format!("finished: {status}"),
    };
    format!(
        "{}\n{} to move | castling {} | {}",
        render_board(&game_state.board),
        game_state.turn,
        game_state.castle_rights,
        phase
    )
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.shade, piece.kind) {
        (Shade::Light, PieceKind::Pawn) => '♙',
        (Shade::Light, PieceKind::Knight) => '♘',
        (Shade::Light, PieceKind::Bishop) => '♗',
        (Shade::Light, PieceKind::Rook) => '♖',
        (Shade::Light, PieceKind::Queen) => '♕',
        (Shade::Light, PieceKind::King) => '♔',
        (Shade::Dark, PieceKind::Pawn) => '♟',
        (Shade::Dark, PieceKind::Knight) => '♞',
        (Shade::Dark, PieceKind::Bishop) => '♝',
        (Shade::Dark, PieceKind::Rook) => '♜',
        (Shade::Dark, PieceKind::Queen) => '♛',
        (Shade::Dark, PieceKind::King) => '♚',
    }
}
