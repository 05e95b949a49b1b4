//! Immutable description of one executed half-move.
//!
//! The record is needed because en passant and promotion cannot be read back
//! from the board alone. Only the most recent record matters for legality.

use crate::game_state::chess_types::{Piece, PieceKind, Square};

/// A captured piece and the square it was taken from. For en passant the
/// square is not the mover's destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Capture {
    pub piece: Piece,
    pub square: Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveRecord {
    pub piece: Piece,
    pub origin: Square,
    pub destination: Square,
    pub capture: Option<Capture>,
    /// Filled in once a promotion choice resolves the move.
    pub promotion: Option<Piece>,
}

impl MoveRecord {
    pub fn new(piece: Piece, origin: Square, destination: Square) -> Self {
        Self {
            piece,
            origin,
            destination,
            capture: None,
            promotion: None,
        }
    }

    #[inline]
    pub fn is_double_pawn_advance(&self) -> bool {
        self.piece.kind == PieceKind::Pawn
            && self.origin.col() == self.destination.col()
            && self.origin.row().abs_diff(self.destination.row()) == 2
    }

    #[inline]
    pub fn is_castle(&self) -> bool {
        self.piece.kind == PieceKind::King
            && self.origin.col().abs_diff(self.destination.col()) == 2
    }

    #[inline]
    pub fn is_en_passant(&self) -> bool {
        matches!(self.capture, Some(capture) if capture.square != self.destination)
    }

    /// Piece left standing on the destination.
    #[inline]
    pub fn resulting_piece(&self) -> Piece {
        self.promotion.unwrap_or(self.piece)
    }

    pub fn with_promotion(self, promoted: Piece) -> Self {
        Self {
            promotion: Some(promoted),
            ..self
        }
    }
}
