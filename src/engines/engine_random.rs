//! Random-move engine.
//!
//! Picks uniformly among every legal (origin, destination) pair. Used for
//! self-play diagnostics and as a stand-in opponent.
//!
//! Options:
//! - `Seed`: u64, reseeds the generator for reproducible games.
//! - `PromotionPiece`: `q`, `r`, `b`, `n`, or `random`.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::engines::engine_trait::{ChosenMove, Engine, EngineOutput};
use crate::game_state::chess_rules::PROMOTION_CHOICES;
use crate::game_state::chess_types::{PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::count_legal_moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromotionPolicy {
    Fixed(PieceKind),
    Random,
}

pub struct RandomEngine {
    rng: StdRng,
    promotion: PromotionPolicy,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
            promotion: PromotionPolicy::Fixed(PieceKind::Queen),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            promotion: PromotionPolicy::Fixed(PieceKind::Queen),
        }
    }

    pub fn promotion_policy(&self) -> PromotionPolicy {
        self.promotion
    }

    fn pick_promotion(&mut self) -> ChessResult<PieceKind> {
        match self.promotion {
            PromotionPolicy::Fixed(kind) => Ok(kind),
            PromotionPolicy::Random => PROMOTION_CHOICES
                .choose(&mut self.rng)
                .copied()
                .ok_or_else(|| ChessErrors::EngineFailure("no promotion choices".to_owned())),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "ShadeChess Random"
    }

    fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        match name {
            "Seed" => {
                let seed = value.trim().parse::<u64>().map_err(|_| {
                    ChessErrors::EngineFailure(format!("invalid Seed value: {value}"))
                })?;
                self.rng = StdRng::seed_from_u64(seed);
                Ok(())
            }
            "PromotionPiece" => {
                let value = value.trim();
                self.promotion = if value.eq_ignore_ascii_case("random") {
                    PromotionPolicy::Random
                } else {
                    let mut chars = value.chars();
                    let kind = match (chars.next(), chars.next()) {
                        (Some(ch), None) => PieceKind::from_letter(ch),
                        _ => None,
                    }
                    .filter(|kind| kind.is_promotion_choice())
                    .ok_or_else(|| {
                        ChessErrors::EngineFailure(format!("invalid PromotionPiece value: {value}"))
                    })?;
                    PromotionPolicy::Fixed(kind)
                };
                Ok(())
            }
            _ => Err(ChessErrors::EngineFailure(format!("unknown option: {name}"))),
        }
    }

    fn choose_move(&mut self, game_state: &GameState) -> ChessResult<EngineOutput> {
        let legal_moves = game_state.legal_moves();

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            count_legal_moves(&legal_moves)
        ));

        let candidates: Vec<(Square, Square)> = legal_moves
            .iter()
            .flat_map(|(&origin, destinations)| {
                destinations.iter().map(move |destination| (origin, destination))
            })
            .collect();

        let Some(&(origin, destination)) = candidates.choose(&mut self.rng) else {
            return Ok(out);
        };

        let promotes = game_state
            .board
            .tile(origin)
            .is_some_and(|piece| {
                piece.kind == PieceKind::Pawn && destination.row() == piece.shade.promotion_row()
            });
        let promotion = if promotes {
            Some(self.pick_promotion()?)
        } else {
            None
        };

        out.best_move = Some(ChosenMove {
            origin,
            destination,
            promotion,
        });
        Ok(out)
    }
}
