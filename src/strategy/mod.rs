//! Move-selection strategies.
//!
//! A strategy looks at a read-only engine and returns one of its legal
//! moves. Strategies never mutate the live engine; to look ahead they work
//! on clones (see [`Engine::preview`]).
//!
//! - `policy`: uniform random and one-ply greedy strategies
//! - `search`: whole-turn search over every ordering of the remaining dice
//! - `evaluate`: board evaluators used by the greedy and search strategies

pub mod evaluate;
pub mod policy;
pub mod search;

use thiserror::Error;

use crate::core::{Move, MoveError};
use crate::rules::Engine;

pub use evaluate::{Evaluator, PipEvaluator, ProgressEvaluator};
pub use policy::{GreedyStrategy, RandomStrategy};
pub use search::{TurnSearchConfig, TurnSearchStrategy};

/// Errors a strategy can report instead of a move.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrategyError {
    /// Asked to choose when nothing is legal (or the game is over).
    #[error("no legal moves to choose from")]
    NoLegalMoves,

    /// A hypothetical move was rejected by an engine copy.
    #[error("lookahead failed: {0}")]
    Lookahead(#[from] MoveError),
}

/// Picks one legal move for the player to move.
pub trait Strategy {
    /// Display name, used in logs and reports.
    fn name(&self) -> &str;

    /// Choose one element of `engine.legal_moves()`.
    ///
    /// Returns `StrategyError::NoLegalMoves` when that list is empty.
    fn choose_move(&mut self, engine: &Engine) -> Result<Move, StrategyError>;
}
