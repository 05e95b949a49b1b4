//! Minimal head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other through the public
//! `GameState` interface. Every move an engine returns goes through the same
//! validation as a human move, so an engine bug surfaces as an error rather
//! than a corrupt game.

use chrono::{DateTime, Utc};
use std::time::Instant;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::Shade;
use crate::game_state::game_state::{EnginePhase, GameState};
use crate::move_generation::game_status::GameStatus;
use crate::utils::long_algebraic::move_record_to_long_algebraic;
use crate::utils::render_game_state::render_game_state;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    LightWinCheckmate,
    DarkWinCheckmate,
    DrawStalemate,
    DrawDeadPosition,
    DrawMaxPlies,
}

impl MatchOutcome {
    fn from_status(status: GameStatus) -> Option<Self> {
        match status {
            GameStatus::Checkmate {
                winner: Shade::Light,
            } => Some(MatchOutcome::LightWinCheckmate),
            GameStatus::Checkmate {
                winner: Shade::Dark,
            } => Some(MatchOutcome::DarkWinCheckmate),
            GameStatus::Stalemate => Some(MatchOutcome::DrawStalemate),
            GameStatus::DeadPosition => Some(MatchOutcome::DrawDeadPosition),
            GameStatus::Ongoing | GameStatus::Check => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    /// Start from this FEN instead of the standard position.
    pub starting_fen: Option<String>,
    /// Print every move and the final board.
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            starting_fen: None,
            verbose: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: GameState,
    pub played_moves_lan: Vec<String>,
    pub started_at: DateTime<Utc>,
    pub light_move_count: u32,
    pub dark_move_count: u32,
    pub light_total_time_ns: u128,
    pub dark_total_time_ns: u128,
}

impl MatchResult {
    pub fn report(&self) -> String {
        format!(
            "started={} outcome={:?} plies={} light_avg_ms={:.3} dark_avg_ms={:.3}",
            self.started_at.format("%Y-%m-%d %H:%M:%S UTC"),
            self.outcome,
            self.played_moves_lan.len(),
            average_ms(self.light_total_time_ns, self.light_move_count),
            average_ms(self.dark_total_time_ns, self.dark_move_count),
        )
    }
}

fn average_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        total_ns as f64 / f64::from(moves) / 1_000_000.0
    }
}

/// Play a single engine-vs-engine match. `engine_light` moves first from the
/// standard position.
pub fn play_engine_match(
    engine_light: &mut dyn Engine,
    engine_dark: &mut dyn Engine,
    config: &MatchConfig,
) -> ChessResult<MatchResult> {
    let mut state = match &config.starting_fen {
        Some(fen) => GameState::from_fen(fen)?,
        None => GameState::new_game(),
    };
    let started_at = Utc::now();

    engine_light.new_game();
    engine_dark.new_game();

    if config.verbose {
        println!(
            "[match] {} (light) vs {} (dark) started {}",
            engine_light.name(),
            engine_dark.name(),
            started_at.to_rfc3339()
        );
    }

    let mut result = MatchResult {
        outcome: MatchOutcome::DrawMaxPlies,
        final_state: state.clone(),
        played_moves_lan: Vec::new(),
        started_at,
        light_move_count: 0,
        dark_move_count: 0,
        light_total_time_ns: 0,
        dark_total_time_ns: 0,
    };

    for _ in 0..config.max_plies {
        if let EnginePhase::Finished(status) = state.phase {
            if let Some(outcome) = MatchOutcome::from_status(status) {
                result.outcome = outcome;
            }
            break;
        }

        let mover = state.turn;
        let started = Instant::now();
        let out = match mover {
            Shade::Light => engine_light.choose_move(&state)?,
            Shade::Dark => engine_dark.choose_move(&state)?,
        };
        let elapsed_ns = started.elapsed().as_nanos();

        match mover {
            Shade::Light => {
                result.light_move_count = result.light_move_count.saturating_add(1);
                result.light_total_time_ns = result.light_total_time_ns.saturating_add(elapsed_ns);
            }
            Shade::Dark => {
                result.dark_move_count = result.dark_move_count.saturating_add(1);
                result.dark_total_time_ns = result.dark_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        let chosen = out.best_move.ok_or_else(|| {
            ChessErrors::EngineFailure(format!("{mover} engine returned no move"))
        })?;

        let mut next = state.apply_move(chosen.origin, chosen.destination)?;
        if let Some(square) = next.pending_promotion() {
            let kind = chosen.promotion.ok_or_else(|| {
                ChessErrors::EngineFailure(format!("{mover} engine gave no promotion piece"))
            })?;
            next = next.promote(kind, square)?;
        }

        if let Some(record) = next.last_move {
            let lan = move_record_to_long_algebraic(&record);
            if config.verbose {
                println!("[match] ply {} {mover}: {lan}", result.played_moves_lan.len() + 1);
                for line in &out.info_lines {
                    println!("[match]   {line}");
                }
            }
            result.played_moves_lan.push(lan);
        }
        state = next;
    }

    // The last ply may have ended the game.
    if let EnginePhase::Finished(status) = state.phase {
        if let Some(outcome) = MatchOutcome::from_status(status) {
            result.outcome = outcome;
        }
    }

    if config.verbose {
        println!("{}", render_game_state(&state));
    }

    result.final_state = state;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::{play_engine_match, MatchConfig, MatchOutcome};
    use crate::engines::engine_random::RandomEngine;
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_checks::is_king_in_check;
    use crate::utils::long_algebraic::apply_long_algebraic;

    #[test]
    fn seeded_random_self_play_stays_legal() {
        let mut light = RandomEngine::with_seed(11);
        let mut dark = RandomEngine::with_seed(29);
        let config = MatchConfig {
            max_plies: 120,
            ..MatchConfig::default()
        };
        let result = play_engine_match(&mut light, &mut dark, &config).expect("match should run");

        assert!(result.played_moves_lan.len() <= 120);
        assert_eq!(result.final_state.history.len(), result.played_moves_lan.len());

        // Replaying the move list reproduces the game, and no mover is ever
        // left in check.
        let mut replay = GameState::new_game();
        for lan in &result.played_moves_lan {
            let mover = replay.turn;
            replay = apply_long_algebraic(&replay, lan).expect("recorded move should replay");
            assert!(!is_king_in_check(
                &replay.board,
                mover,
                replay.last_move.as_ref(),
                replay.castle_rights
            ));
        }
        assert_eq!(replay.board, result.final_state.board);

        if result.outcome == MatchOutcome::DrawMaxPlies {
            assert!(!result.final_state.is_over());
        } else {
            assert!(result.final_state.is_over());
        }
        assert!(result.report().contains("outcome="));
    }

    #[test]
    fn finished_start_position_plays_no_moves() {
        let mut light = RandomEngine::with_seed(1);
        let mut dark = RandomEngine::with_seed(2);
        let config = MatchConfig {
            starting_fen: Some("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1".to_owned()),
            ..MatchConfig::default()
        };
        let result = play_engine_match(&mut light, &mut dark, &config).expect("match should run");
        assert_eq!(result.outcome, MatchOutcome::DrawStalemate);
        assert!(result.played_moves_lan.is_empty());
    }

    #[test]
    fn zero_ply_budget_is_a_max_plies_draw() {
        let mut light = RandomEngine::with_seed(1);
        let mut dark = RandomEngine::with_seed(2);
        let config = MatchConfig {
            max_plies: 0,
            ..MatchConfig::default()
        };
        let result = play_engine_match(&mut light, &mut dark, &config).expect("match should run");
        assert_eq!(result.outcome, MatchOutcome::DrawMaxPlies);
        assert_eq!(result.final_state, GameState::new_game());
    }
}
