//! Errors used throughout the rules engine.
//!
//! `ChessErrors` is the single error type returned by move execution,
//! promotion handling, parsing utilities and engines. Every rejection is a
//! local, recoverable report: the state passed in is never modified when an
//! operation fails, so callers may surface the error and carry on with the
//! value they already hold.
//!
//! Usage guidelines:
//! - Selection and destination variants mean the caller submitted something
//!   that was not drawn from the latest legal move map.
//! - Promotion variants mean the caller is out of step with the
//!   awaiting-promotion phase.
//! - `GameAlreadyOver` means the game reached a terminal status and must be
//!   replaced with a new game before play continues.
//! - Parse variants carry the offending input for user-facing messages.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{PieceKind, Shade, Square};
use crate::move_generation::game_status::GameStatus;

pub type ChessResult<T> = Result<T, ChessErrors>;

/// Unified error type for the rules engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// The origin square does not hold a piece of the side to move.
    InvalidSelection(Square),

    /// The destination is not in the legal set for the origin.
    IllegalDestination { origin: Square, destination: Square },

    /// A move was submitted while a pawn on the given square waits for its
    /// promotion choice.
    PromotionPending(Square),

    /// A promotion choice was submitted but no pawn is waiting for one.
    NoPromotionPending,

    /// The promotion choice named a different square than the waiting pawn.
    PromotionSquareMismatch { expected: Square, found: Square },

    /// Pawns cannot promote to pawns or kings.
    InvalidPromotionKind(PieceKind),

    /// The game has reached a terminal status; no further input is accepted.
    GameAlreadyOver(GameStatus),

    /// The board has no king for the given side.
    MissingKing(Shade),

    /// A FEN string could not be parsed. Payload describes the problem.
    InvalidFen(String),

    /// A square or move in algebraic notation could not be parsed.
    InvalidAlgebraic(String),

    /// An engine failed to produce a move.
    EngineFailure(String),
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::InvalidSelection(square) => {
                write!(f, "no piece of the side to move on {square}")
            }
            ChessErrors::IllegalDestination {
                origin,
                destination,
            } => write!(f, "illegal move {origin}{destination}"),
            ChessErrors::PromotionPending(square) => {
                write!(f, "pawn on {square} is awaiting a promotion choice")
            }
            ChessErrors::NoPromotionPending => write!(f, "no promotion is pending"),
            ChessErrors::PromotionSquareMismatch { expected, found } => write!(
                f,
                "promotion pending on {expected}, but choice was given for {found}"
            ),
            ChessErrors::InvalidPromotionKind(kind) => {
                write!(f, "cannot promote to {kind:?}")
            }
            ChessErrors::GameAlreadyOver(status) => write!(f, "game is over: {status}"),
            ChessErrors::MissingKing(shade) => write!(f, "board has no {shade} king"),
            ChessErrors::InvalidFen(msg) => write!(f, "invalid FEN: {msg}"),
            ChessErrors::InvalidAlgebraic(msg) => write!(f, "invalid algebraic notation: {msg}"),
            ChessErrors::EngineFailure(msg) => write!(f, "engine failure: {msg}"),
        }
    }
}

impl Error for ChessErrors {}
