//! Backgammon rules: legal-move generation and the turn state machine.
//!
//! - `movegen`: pure legal-move generation from a board, a mover and dice
//! - `engine`: the `Engine` that applies moves, detects the winner and
//!   advances turns

pub mod engine;
pub mod movegen;

pub use engine::Engine;
pub use movegen::{generate_moves, MoveList};
