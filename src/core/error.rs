//! Recoverable errors reported by the board and the engine.
//!
//! Broken internal invariants (removing from an empty point, consuming a die
//! that was not rolled) are panics, not variants here.

use thiserror::Error;

use super::moves::Move;
use super::player::Player;

/// Errors from board lookups and from loading saved boards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("point index {0} out of range 1..=24")]
    OutOfRange(u8),

    #[error("point with {count} checkers has owner {owner:?}")]
    InconsistentPoint { owner: Option<Player>, count: u8 },

    #[error("{player} has {total} checkers, expected 15")]
    CheckerCount { player: Player, total: u32 },
}

/// Reasons a move was rejected. The engine is unchanged when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("game has not been started")]
    NotStarted,

    #[error("game is already over")]
    GameOver,

    #[error("move {0} is not legal in the current position")]
    Illegal(Move),

    #[error("no legal move from {from} to {to}")]
    NoSuchMove { from: u8, to: u8 },

    #[error("neither player can move")]
    Stalled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            BoardError::OutOfRange(25).to_string(),
            "point index 25 out of range 1..=24"
        );

        let mv = Move::new(Player::White, 1, 3, 2);
        assert_eq!(
            MoveError::Illegal(mv).to_string(),
            "move 1/3 (2) is not legal in the current position"
        );
        assert_eq!(
            MoveError::NoSuchMove { from: 6, to: 1 }.to_string(),
            "no legal move from 6 to 1"
        );
        assert_eq!(
            BoardError::CheckerCount { player: Player::Black, total: 16 }.to_string(),
            "Black has 16 checkers, expected 15"
        );
    }
}
