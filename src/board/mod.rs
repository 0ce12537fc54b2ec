//! Board model: points, bars and homes.
//!
//! The board only knows how checkers sit and how to move one at a time.
//! Legality lives in `rules`.

pub mod point;
pub mod position;
mod render;

pub use point::Point;
pub use position::{Board, POINT_COUNT};
