//! 8×8 grid of tiles.
//!
//! The board is plain `Copy` data. Legality simulation works on a copy, so
//! nothing here needs undo support.

use crate::game_state::chess_rules::BACK_RANK_LAYOUT;
use crate::game_state::chess_types::{Piece, PieceKind, Shade, Square, Tile};
use crate::game_state::square_set::SquareSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    tiles: [[Tile; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            tiles: [[None; 8]; 8],
        }
    }

    /// Standard starting layout: dark on rows 0-1, light on rows 6-7.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
            let col = col as u8;
            for shade in [Shade::Light, Shade::Dark] {
                board.place(
                    Square::new_unchecked(shade.back_rank(), col),
                    Piece::new(*kind, shade),
                );
                board.place(
                    Square::new_unchecked(shade.pawn_start_row(), col),
                    Piece::new(PieceKind::Pawn, shade),
                );
            }
        }
        board
    }

    #[inline]
    pub fn tile(&self, square: Square) -> Tile {
        self.tiles[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub fn set_tile(&mut self, square: Square, tile: Tile) {
        self.tiles[square.row() as usize][square.col() as usize] = tile;
    }

    #[inline]
    pub fn place(&mut self, square: Square, piece: Piece) {
        self.set_tile(square, Some(piece));
    }

    /// Empties the square and returns what was there.
    #[inline]
    pub fn clear(&mut self, square: Square) -> Tile {
        let previous = self.tile(square);
        self.set_tile(square, None);
        previous
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.tile(square).is_none()
    }

    /// True when the square holds a piece of `shade`.
    #[inline]
    pub fn holds(&self, square: Square, shade: Shade) -> bool {
        matches!(self.tile(square), Some(piece) if piece.shade == shade)
    }

    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| self.tile(square).map(|piece| (square, piece)))
    }

    pub fn pieces_of(&self, shade: Shade) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.shade == shade)
    }

    pub fn king_square(&self, shade: Shade) -> Option<Square> {
        self.pieces_of(shade)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(square, _)| square)
    }

    pub fn occupancy(&self, shade: Shade) -> SquareSet {
        self.pieces_of(shade).map(|(square, _)| square).collect()
    }
}
