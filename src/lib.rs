//! Crate root module declarations for the Shade Chess rules engine.
//!
//! The engine is a pure-function pipeline: board state goes in, legal move
//! maps, executed move records and game status come out. Submodules cover the
//! board model, per-piece reach generation, legality filtering and move
//! execution, a random engine, and text utilities (FEN, algebraic notation,
//! board rendering, engine matches).

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod castle_rights;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod move_record;
    pub mod square_set;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_patterns;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod reach;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod game_status;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_filter;
    pub mod legal_move_generator;
    pub mod perft;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod engine_match_harness;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod render_game_state;
}
