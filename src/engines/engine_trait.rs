//! Engine abstraction layer.
//!
//! An engine is just another caller of the rules pipeline: it reads the
//! legal move map of a `GameState` and answers with one entry from it,
//! plus a promotion choice when the move needs one.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::{PieceKind, Square};
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChosenMove {
    pub origin: Square,
    pub destination: Square,
    /// Piece to promote to when the move lands a pawn on its last row.
    pub promotion: Option<PieceKind>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<ChosenMove>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn set_option(&mut self, _name: &str, _value: &str) -> ChessResult<()> {
        Ok(())
    }

    /// `best_move` is `None` only when the position has no legal move.
    fn choose_move(&mut self, game_state: &GameState) -> ChessResult<EngineOutput>;
}
