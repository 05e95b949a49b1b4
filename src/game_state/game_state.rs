//! Whole-game value: board, rights, last move, turn, phase and history.
//!
//! `GameState` is immutable in use. `apply_move` and `promote` return a new
//! state and leave `self` alone, so a rejected input never disturbs the game
//! the caller is holding.

use crate::chess_errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::castle_rights::CastleRights;
use crate::game_state::chess_types::{Piece, PieceKind, Shade, Square};
use crate::game_state::move_record::MoveRecord;
use crate::game_state::square_set::SquareSet;
use crate::move_generation::game_status::{phase_for, GameStatus};
use crate::move_generation::legal_move_apply::{apply_move, apply_promotion};
use crate::move_generation::legal_move_generator::{self, LegalMoveMap};
use crate::utils::fen_parser::parse_fen;

/// What the game is waiting for next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnginePhase {
    /// The side to move may submit a move. Status is never terminal here.
    AwaitingMove(GameStatus),
    /// A pawn on `square` reached its last row; the same side must choose a
    /// promotion piece before anything else happens.
    AwaitingPromotion { square: Square },
    /// Terminal status. No further input is accepted.
    Finished(GameStatus),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub castle_rights: CastleRights,
    pub last_move: Option<MoveRecord>,
    pub turn: Shade,
    pub phase: EnginePhase,
    pub history: Vec<MoveRecord>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard starting position, light to move, all rights held.
    pub fn new_game() -> Self {
        Self::from_position(Board::standard(), Shade::Light, CastleRights::ALL, None)
    }

    /// Builds a state from raw parts and evaluates its phase.
    pub fn from_position(
        board: Board,
        turn: Shade,
        castle_rights: CastleRights,
        last_move: Option<MoveRecord>,
    ) -> Self {
        let phase = phase_for(&board, turn, last_move.as_ref(), castle_rights);
        Self {
            board,
            castle_rights,
            last_move,
            turn,
            phase,
            history: Vec::new(),
        }
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    /// Current status, or `None` while a promotion choice is pending.
    pub fn status(&self) -> Option<GameStatus> {
        match self.phase {
            EnginePhase::AwaitingMove(status) | EnginePhase::Finished(status) => Some(status),
            EnginePhase::AwaitingPromotion { .. } => None,
        }
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        matches!(self.phase, EnginePhase::Finished(_))
    }

    #[inline]
    pub fn pending_promotion(&self) -> Option<Square> {
        match self.phase {
            EnginePhase::AwaitingPromotion { square } => Some(square),
            _ => None,
        }
    }

    /// Legal moves for the side to move. Empty unless the game is waiting
    /// for a move.
    pub fn legal_moves(&self) -> LegalMoveMap {
        if !matches!(self.phase, EnginePhase::AwaitingMove(_)) {
            return LegalMoveMap::new();
        }
        legal_move_generator::legal_moves(
            &self.board,
            self.turn,
            self.last_move.as_ref(),
            self.castle_rights,
        )
    }

    pub fn legal_moves_from(&self, origin: Square) -> SquareSet {
        if !matches!(self.phase, EnginePhase::AwaitingMove(_)) {
            return SquareSet::EMPTY;
        }
        legal_move_generator::legal_moves_from(
            &self.board,
            self.turn,
            self.last_move.as_ref(),
            self.castle_rights,
            origin,
        )
    }

    #[inline]
    pub fn apply_move(&self, origin: Square, destination: Square) -> ChessResult<GameState> {
        apply_move(self, origin, destination)
    }

    #[inline]
    pub fn promote(&self, kind: PieceKind, square: Square) -> ChessResult<GameState> {
        apply_promotion(self, kind, square)
    }

    /// Pieces `captor` has taken so far, in capture order.
    pub fn captured_pieces(&self, captor: Shade) -> Vec<Piece> {
        self.history
            .iter()
            .filter(|record| record.piece.shade == captor)
            .filter_map(|record| record.capture.map(|capture| capture.piece))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{EnginePhase, GameState};
    use crate::chess_errors::ChessErrors;
    use crate::game_state::castle_rights::CastleWing;
    use crate::game_state::chess_types::{Piece, PieceKind, Shade, Square};
    use crate::move_generation::game_status::GameStatus;
    use crate::move_generation::legal_move_generator::count_legal_moves;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).expect("test square should be on the board")
    }

    fn play(state: &GameState, moves: &[((u8, u8), (u8, u8))]) -> GameState {
        moves.iter().fold(state.clone(), |game, &((r0, c0), (r1, c1))| {
            game.apply_move(sq(r0, c0), sq(r1, c1))
                .expect("scripted move should be legal")
        })
    }

    #[test]
    fn new_game_waits_for_light() {
        let game = GameState::new_game();
        assert_eq!(game.turn, Shade::Light);
        assert_eq!(game.phase, EnginePhase::AwaitingMove(GameStatus::Ongoing));
        assert_eq!(count_legal_moves(&game.legal_moves()), 20);
        assert!(game.history.is_empty());
    }

    #[test]
    fn applying_a_move_hands_over_the_turn() {
        let game = GameState::new_game();
        let next = game.apply_move(sq(6, 4), sq(4, 4)).expect("e2e4 should be legal");
        assert_eq!(next.turn, Shade::Dark);
        assert_eq!(next.history.len(), 1);
        assert_eq!(game.turn, Shade::Light);
        assert!(game.board.tile(sq(6, 4)).is_some());
    }

    #[test]
    fn rejected_move_is_reported() {
        let game = GameState::new_game();
        assert_eq!(
            game.apply_move(sq(6, 4), sq(3, 4)),
            Err(ChessErrors::IllegalDestination {
                origin: sq(6, 4),
                destination: sq(3, 4),
            })
        );
        assert_eq!(
            game.apply_move(sq(1, 4), sq(3, 4)),
            Err(ChessErrors::InvalidSelection(sq(1, 4)))
        );
    }

    #[test]
    fn en_passant_window_closes_after_one_half_move() {
        // e2e4 a7a6 e4e5 d7d5
        let game = play(
            &GameState::new_game(),
            &[((6, 4), (4, 4)), ((1, 0), (2, 0)), ((4, 4), (3, 4)), ((1, 3), (3, 3))],
        );
        assert!(game.legal_moves_from(sq(3, 4)).contains(sq(2, 3)));

        // g1f3 a6a5
        let later = play(&game, &[((7, 6), (5, 5)), ((2, 0), (3, 0))]);
        assert!(!later.legal_moves_from(sq(3, 4)).contains(sq(2, 3)));
    }

    #[test]
    fn fools_mate_finishes_the_game() {
        // f2f3 e7e5 g2g4 d8h4
        let game = play(
            &GameState::new_game(),
            &[((6, 5), (5, 5)), ((1, 4), (3, 4)), ((6, 6), (4, 6)), ((0, 3), (4, 7))],
        );
        let mate = GameStatus::Checkmate { winner: Shade::Dark };
        assert_eq!(game.phase, EnginePhase::Finished(mate));
        assert!(game.is_over());
        assert!(game.legal_moves().is_empty());
        assert_eq!(
            game.apply_move(sq(6, 0), sq(5, 0)),
            Err(ChessErrors::GameAlreadyOver(mate))
        );
    }

    #[test]
    fn castling_through_game_state() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1").expect("test FEN should parse");
        let king_moves = game.legal_moves_from(sq(7, 4));
        assert!(king_moves.contains(sq(7, 2)));
        assert!(king_moves.contains(sq(7, 6)));

        let next = game.apply_move(sq(7, 4), sq(7, 6)).expect("castling should be legal");
        assert_eq!(next.board.tile(sq(7, 5)), Some(Piece::new(PieceKind::Rook, Shade::Light)));
        assert!(next.board.is_empty(sq(7, 7)));
        assert!(!next.castle_rights.has(Shade::Light, CastleWing::Queenside));
    }

    #[test]
    fn rook_move_forfeits_castling_on_its_wing() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1").expect("test FEN should parse");
        // h1h2, e8d8, h2h1, d8e8: the rook is home again but the right is gone.
        let game = play(
            &game,
            &[((7, 7), (6, 7)), ((0, 4), (0, 3)), ((6, 7), (7, 7)), ((0, 3), (0, 4))],
        );
        let king_moves = game.legal_moves_from(sq(7, 4));
        assert!(!king_moves.contains(sq(7, 6)));
        assert!(king_moves.contains(sq(7, 2)));
    }

    #[test]
    fn king_walk_forfeits_castling_on_both_wings() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1").expect("test FEN should parse");
        // e1d1, e8d8, d1e1, d8e8: king and rooks are home, both rights are gone.
        let game = play(
            &game,
            &[((7, 4), (7, 3)), ((0, 4), (0, 3)), ((7, 3), (7, 4)), ((0, 3), (0, 4))],
        );
        assert!(!game.castle_rights.has(Shade::Light, CastleWing::Kingside));
        assert!(!game.castle_rights.has(Shade::Light, CastleWing::Queenside));
        let king_moves = game.legal_moves_from(sq(7, 4));
        assert!(!king_moves.contains(sq(7, 2)));
        assert!(!king_moves.contains(sq(7, 6)));
        assert!(king_moves.contains(sq(7, 5)));
    }

    #[test]
    fn promotion_holds_the_turn_until_resolved() {
        let game = GameState::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1").expect("test FEN should parse");
        let waiting = game.apply_move(sq(1, 0), sq(0, 0)).expect("push should be legal");

        assert_eq!(waiting.phase, EnginePhase::AwaitingPromotion { square: sq(0, 0) });
        assert_eq!(waiting.turn, Shade::Light);
        assert_eq!(waiting.status(), None);
        assert!(waiting.legal_moves().is_empty());
        assert_eq!(
            waiting.apply_move(sq(7, 0), sq(6, 0)),
            Err(ChessErrors::PromotionPending(sq(0, 0)))
        );
        assert_eq!(
            waiting.promote(PieceKind::Pawn, sq(0, 0)),
            Err(ChessErrors::InvalidPromotionKind(PieceKind::Pawn))
        );
        assert_eq!(
            waiting.promote(PieceKind::Queen, sq(0, 1)),
            Err(ChessErrors::PromotionSquareMismatch {
                expected: sq(0, 0),
                found: sq(0, 1),
            })
        );

        let queened = waiting.promote(PieceKind::Queen, sq(0, 0)).expect("queen promotion");
        assert_eq!(queened.turn, Shade::Dark);
        assert_eq!(queened.status(), Some(GameStatus::Ongoing));
        let queen = Piece::new(PieceKind::Queen, Shade::Light);
        assert_eq!(queened.board.tile(sq(0, 0)), Some(queen));
        assert_eq!(queened.history.last().and_then(|r| r.promotion), Some(queen));
        assert_eq!(queened.history.len(), 1);
    }

    #[test]
    fn minor_promotion_can_leave_a_dead_position() {
        let game = GameState::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1").expect("test FEN should parse");
        let waiting = game.apply_move(sq(1, 0), sq(0, 0)).expect("push should be legal");
        let knighted = waiting.promote(PieceKind::Knight, sq(0, 0)).expect("knight promotion");
        assert_eq!(knighted.phase, EnginePhase::Finished(GameStatus::DeadPosition));
    }

    #[test]
    fn promote_without_a_pending_pawn_is_rejected() {
        let game = GameState::new_game();
        assert_eq!(
            game.promote(PieceKind::Queen, sq(0, 0)),
            Err(ChessErrors::NoPromotionPending)
        );
    }

    #[test]
    fn captures_are_tallied_per_side() {
        // e2e4 d7d5 e4xd5
        let game = play(
            &GameState::new_game(),
            &[((6, 4), (4, 4)), ((1, 3), (3, 3)), ((4, 4), (3, 3))],
        );
        assert_eq!(
            game.captured_pieces(Shade::Light),
            vec![Piece::new(PieceKind::Pawn, Shade::Dark)]
        );
        assert!(game.captured_pieces(Shade::Dark).is_empty());
    }
}
