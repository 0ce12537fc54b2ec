//! Core engine types: players, dice, moves, RNG and errors.
//!
//! These are the leaf building blocks shared by the board, the rules engine
//! and the strategies.

pub mod player;
pub mod rng;
pub mod dice;
pub mod moves;
pub mod error;

pub use player::{Player, PlayerMap, CHECKERS_PER_PLAYER};
pub use rng::GameRng;
pub use dice::{Dice, RollSource};
pub use moves::Move;
pub use error::{BoardError, MoveError};
