//! Whole-turn search.
//!
//! Plays out every ordering of the remaining dice on engine copies and
//! scores the position at the end of the turn. Many orderings reach the same
//! position (8/5 then 5/4 equals 8/7 then 7/4), so positions already seen
//! this search are skipped. A node budget bounds the work on doubles.

use log::debug;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::evaluate::Evaluator;
use super::{Strategy, StrategyError};
use crate::board::Board;
use crate::core::{Dice, Move, Player};
use crate::rules::Engine;

/// Turn search configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TurnSearchConfig {
    /// Maximum engine copies created per decision.
    /// Once spent, unexplored positions are scored as they stand.
    pub max_nodes: usize,
}

impl Default for TurnSearchConfig {
    fn default() -> Self {
        Self { max_nodes: 20_000 }
    }
}

impl TurnSearchConfig {
    /// Create a new config with a custom node budget.
    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = max_nodes;
        self
    }
}

/// Chooses the first move of the best full-turn sequence.
#[derive(Clone, Debug)]
pub struct TurnSearchStrategy<V: Evaluator> {
    evaluator: V,
    config: TurnSearchConfig,
}

/// Per-decision search bookkeeping.
struct SearchContext {
    player: Player,
    seen: FxHashSet<(Board, Dice)>,
    nodes: usize,
}

impl<V: Evaluator> TurnSearchStrategy<V> {
    pub fn new(evaluator: V, config: TurnSearchConfig) -> Self {
        Self { evaluator, config }
    }

    /// Best end-of-turn score reachable from `engine`, or `None` when every
    /// child was a transposition or the budget ran out.
    fn best_continuation(
        &self,
        engine: &Engine,
        ctx: &mut SearchContext,
    ) -> Result<Option<f64>, StrategyError> {
        let mut best: Option<f64> = None;
        for mv in engine.legal_moves() {
            if let Some(score) = self.score_move(engine, mv, ctx)? {
                best = Some(best.map_or(score, |b: f64| b.max(score)));
            }
        }
        Ok(best)
    }

    fn score_move(
        &self,
        engine: &Engine,
        mv: &Move,
        ctx: &mut SearchContext,
    ) -> Result<Option<f64>, StrategyError> {
        if ctx.nodes >= self.config.max_nodes {
            return Ok(None);
        }
        ctx.nodes += 1;

        let after = engine.preview(mv)?;
        let continues =
            !after.is_over() && !after.is_stalled() && after.turn_number() == engine.turn_number();

        let key_dice = if continues { after.dice().clone() } else { Dice::new() };
        if !ctx.seen.insert((after.board().clone(), key_dice)) {
            return Ok(None);
        }

        if continues {
            if let Some(score) = self.best_continuation(&after, ctx)? {
                return Ok(Some(score));
            }
        }
        Ok(Some(self.evaluator.score_for(&after, ctx.player)))
    }
}

impl<V: Evaluator> Strategy for TurnSearchStrategy<V> {
    fn name(&self) -> &str {
        "TurnSearchStrategy"
    }

    fn choose_move(&mut self, engine: &Engine) -> Result<Move, StrategyError> {
        let player = engine.turn().ok_or(StrategyError::NoLegalMoves)?;
        let first = *engine.legal_moves().first().ok_or(StrategyError::NoLegalMoves)?;

        let mut ctx = SearchContext {
            player,
            seen: FxHashSet::default(),
            nodes: 0,
        };

        let mut best: Option<(Move, f64)> = None;
        for mv in engine.legal_moves() {
            let Some(score) = self.score_move(engine, mv, &mut ctx)? else {
                continue;
            };
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((*mv, score));
            }
        }

        let (mv, score) = best.unwrap_or((first, f64::NEG_INFINITY));
        debug!("turn search picks {mv} (score {score:.1}, {} nodes)", ctx.nodes);
        Ok(mv)
    }
}
