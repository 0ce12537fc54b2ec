//! Single-move strategies.

use log::debug;

use super::evaluate::Evaluator;
use super::{Strategy, StrategyError};
use crate::core::{GameRng, Move};
use crate::rules::Engine;

// =============================================================================
// Random
// =============================================================================

/// Picks uniformly among the legal moves.
#[derive(Clone, Debug)]
pub struct RandomStrategy {
    rng: GameRng,
}

impl RandomStrategy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &str {
        "RandomStrategy"
    }

    fn choose_move(&mut self, engine: &Engine) -> Result<Move, StrategyError> {
        self.rng
            .choose(engine.legal_moves())
            .copied()
            .ok_or(StrategyError::NoLegalMoves)
    }
}

// =============================================================================
// Greedy
// =============================================================================

/// One-ply search: previews every legal move on a copy and keeps the one
/// whose resulting position scores best for the mover.
///
/// Ties go to the earliest move in generation order.
#[derive(Clone, Debug)]
pub struct GreedyStrategy<V: Evaluator> {
    name: String,
    evaluator: V,
}

impl<V: Evaluator> GreedyStrategy<V> {
    pub fn new(evaluator: V) -> Self {
        Self {
            name: "GreedyStrategy".to_string(),
            evaluator,
        }
    }

    /// Override the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl<V: Evaluator> Strategy for GreedyStrategy<V> {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&mut self, engine: &Engine) -> Result<Move, StrategyError> {
        let player = engine.turn().ok_or(StrategyError::NoLegalMoves)?;

        let mut best: Option<(Move, f64)> = None;
        for mv in engine.legal_moves() {
            let after = engine.preview(mv)?;
            let score = self.evaluator.score_for(&after, player);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((*mv, score));
            }
        }

        let (mv, score) = best.ok_or(StrategyError::NoLegalMoves)?;
        debug!("{} picks {mv} (score {score:.1})", self.name);
        Ok(mv)
    }
}
