//! # backgammon-engine
//!
//! A two-player backgammon rules engine built for automated play.
//!
//! The engine tracks the board, rolls dice, generates every legal
//! single-checker move for the current dice, applies moves, detects the
//! winner and hands the turn over when no move is possible. Strategies choose
//! among the legal moves; the arbiter plays them against each other.
//!
//! ## Design Principles
//!
//! 1. **Moves are values**: a `Move` is plain data. Legality is decided by
//!    membership in the engine's current legal list, so a move produced on a
//!    copy can be checked against the original.
//!
//! 2. **Cheap copies**: `Engine` is `Clone`. Lookahead strategies explore on
//!    copies and never touch the live game.
//!
//! 3. **Seedable dice**: every source of randomness is a seeded `GameRng`,
//!    or a scripted roll queue for tests.
//!
//! ## Modules
//!
//! - `core`: players, dice, moves, RNG and error types
//! - `board`: points, bars, homes and board rendering
//! - `rules`: legal-move generation and the turn state machine
//! - `strategy`: random, greedy and whole-turn search strategies
//! - `arbiter`: head-to-head simulation and result tallies

pub mod core;
pub mod board;
pub mod rules;
pub mod strategy;
pub mod arbiter;

// Re-export commonly used types
pub use crate::core::{
    Player, PlayerMap, CHECKERS_PER_PLAYER,
    GameRng,
    Dice, RollSource,
    Move,
    BoardError, MoveError,
};

pub use crate::board::{Board, Point, POINT_COUNT};

pub use crate::rules::{Engine, generate_moves, MoveList};

pub use crate::strategy::{
    Strategy, StrategyError,
    Evaluator, PipEvaluator, ProgressEvaluator,
    RandomStrategy, GreedyStrategy,
    TurnSearchConfig, TurnSearchStrategy,
};

pub use crate::arbiter::{
    Arbiter, SimulationConfig, SimulationError,
    SimulationResults, GameSummary, Seat,
};
