//! Move representation: one checker relocation.
//!
//! A move is a plain value: the mover, an origin index, a destination
//! index, the die it consumes and whether it hits a blot. It holds no
//! references into a board, so the same value can be offered to a copy of
//! the engine; the copy accepts it only if an equal move is legal there.
//!
//! Indices 0 and 25 are read relative to the mover: as an origin they name
//! the mover's bar, as a destination the mover's home.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// A candidate or applied checker move.
///
/// ```
/// use backgammon_engine::core::{Move, Player};
///
/// let entry = Move::new(Player::White, 0, 3, 3);
/// assert!(entry.is_bar_entry());
/// assert!(!entry.is_bear_off());
///
/// let off = Move::new(Player::Black, 2, 0, 4);
/// assert!(off.is_bear_off());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,

    /// Origin slot (bar index or 1..=24).
    pub from: u8,

    /// Destination slot (1..=24 or home index).
    pub to: u8,

    /// Die value consumed.
    pub die: u8,

    /// Whether the destination held a single opposing checker.
    pub hit: bool,
}

impl Move {
    /// Create a non-hitting move.
    #[must_use]
    pub fn new(player: Player, from: u8, to: u8, die: u8) -> Self {
        Self {
            player,
            from,
            to,
            die,
            hit: false,
        }
    }

    /// Create a hitting move.
    #[must_use]
    pub fn hitting(player: Player, from: u8, to: u8, die: u8) -> Self {
        Self {
            hit: true,
            ..Self::new(player, from, to, die)
        }
    }

    /// Whether this move enters a checker from the bar.
    #[must_use]
    pub fn is_bar_entry(&self) -> bool {
        self.from == self.player.bar_index()
    }

    /// Whether this move bears a checker off.
    #[must_use]
    pub fn is_bear_off(&self) -> bool {
        self.to == self.player.home_index()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let from = if self.is_bar_entry() {
            "bar".to_string()
        } else {
            self.from.to_string()
        };
        let to = if self.is_bear_off() {
            "off".to_string()
        } else {
            self.to.to_string()
        };
        write!(f, "{}/{}", from, to)?;
        if self.hit {
            write!(f, "*")?;
        }
        write!(f, " ({})", self.die)
    }
}
