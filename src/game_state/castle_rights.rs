//! Castling rights bookkeeping.
//!
//! Four independent flags, one per side and wing. Rights only ever go from
//! granted to revoked: a king or rook leaving its home square, or any piece
//! landing on a rook's home square, clears the matching flags for good.

use std::fmt;

use crate::game_state::chess_rules::{king_home, rook_home};
use crate::game_state::chess_types::{Shade, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleWing {
    Kingside,
    Queenside,
}

impl CastleWing {
    pub const BOTH: [CastleWing; 2] = [CastleWing::Kingside, CastleWing::Queenside];

    #[inline]
    pub const fn rook_home_col(self) -> u8 {
        match self {
            CastleWing::Kingside => 7,
            CastleWing::Queenside => 0,
        }
    }

    /// Column the king lands on.
    #[inline]
    pub const fn king_target_col(self) -> u8 {
        match self {
            CastleWing::Kingside => 6,
            CastleWing::Queenside => 2,
        }
    }

    /// Column the rook lands on, which is also the square the king crosses.
    #[inline]
    pub const fn rook_target_col(self) -> u8 {
        match self {
            CastleWing::Kingside => 5,
            CastleWing::Queenside => 3,
        }
    }

    /// Columns strictly between king and rook; all must be empty.
    #[inline]
    pub const fn between_cols(self) -> &'static [u8] {
        match self {
            CastleWing::Kingside => &[5, 6],
            CastleWing::Queenside => &[1, 2, 3],
        }
    }

    /// Wing selected by a two-column king move ending on `king_target_col`.
    #[inline]
    pub const fn from_king_target(col: u8) -> Self {
        if col > 4 {
            CastleWing::Kingside
        } else {
            CastleWing::Queenside
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRights {
    pub light_kingside: bool,
    pub light_queenside: bool,
    pub dark_kingside: bool,
    pub dark_queenside: bool,
}

impl Default for CastleRights {
    fn default() -> Self {
        Self::ALL
    }
}

impl CastleRights {
    pub const ALL: CastleRights = CastleRights {
        light_kingside: true,
        light_queenside: true,
        dark_kingside: true,
        dark_queenside: true,
    };

    pub const NONE: CastleRights = CastleRights {
        light_kingside: false,
        light_queenside: false,
        dark_kingside: false,
        dark_queenside: false,
    };

    #[inline]
    pub const fn has(self, shade: Shade, wing: CastleWing) -> bool {
        match (shade, wing) {
            (Shade::Light, CastleWing::Kingside) => self.light_kingside,
            (Shade::Light, CastleWing::Queenside) => self.light_queenside,
            (Shade::Dark, CastleWing::Kingside) => self.dark_kingside,
            (Shade::Dark, CastleWing::Queenside) => self.dark_queenside,
        }
    }

    #[inline]
    pub const fn any(self, shade: Shade) -> bool {
        self.has(shade, CastleWing::Kingside) || self.has(shade, CastleWing::Queenside)
    }

    pub fn grant(&mut self, shade: Shade, wing: CastleWing) {
        *self.flag_mut(shade, wing) = true;
    }

    pub fn revoke(&mut self, shade: Shade, wing: CastleWing) {
        *self.flag_mut(shade, wing) = false;
    }

    pub fn revoke_shade(&mut self, shade: Shade) {
        self.revoke(shade, CastleWing::Kingside);
        self.revoke(shade, CastleWing::Queenside);
    }

    /// Clears every right tied to `square`: a king home square clears both
    /// wings of that side, a rook home square clears its wing.
    pub fn revoke_touching(&mut self, square: Square) {
        for shade in [Shade::Light, Shade::Dark] {
            if square == king_home(shade) {
                self.revoke_shade(shade);
            }
            for wing in CastleWing::BOTH {
                if square == rook_home(shade, wing) {
                    self.revoke(shade, wing);
                }
            }
        }
    }

    fn flag_mut(&mut self, shade: Shade, wing: CastleWing) -> &mut bool {
        match (shade, wing) {
            (Shade::Light, CastleWing::Kingside) => &mut self.light_kingside,
            (Shade::Light, CastleWing::Queenside) => &mut self.light_queenside,
            (Shade::Dark, CastleWing::Kingside) => &mut self.dark_kingside,
            (Shade::Dark, CastleWing::Queenside) => &mut self.dark_queenside,
        }
    }
}

/// FEN castling field, `KQkq` or `-`.
impl fmt::Display for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut field = String::new();
        if self.light_kingside {
            field.push('K');
        }
        if self.light_queenside {
            field.push('Q');
        }
        if self.dark_kingside {
            field.push('k');
        }
        if self.dark_queenside {
            field.push('q');
        }
        if field.is_empty() {
            field.push('-');
        }
        f.write_str(&field)
    }
}
