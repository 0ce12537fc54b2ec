//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! The two backgammon colors. White moves toward higher point indices,
//! Black toward lower ones.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `Player`, used for the bar and home
//! counters on the board.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of checkers each player owns.
pub const CHECKERS_PER_PLAYER: u8 = 15;

/// One of the two colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    White,
    Black,
}

impl Player {
    /// Both players, White first.
    pub const ALL: [Player; 2] = [Player::White, Player::Black];

    /// Get the raw player index (White = 0, Black = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::White => 0,
            Player::Black => 1,
        }
    }

    /// The other color.
    #[must_use]
    pub const fn opponent(self) -> Player {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Step applied to a point index per pip moved.
    #[must_use]
    pub const fn direction(self) -> i8 {
        match self {
            Player::White => 1,
            Player::Black => -1,
        }
    }

    /// Slot index of this player's bar.
    #[must_use]
    pub const fn bar_index(self) -> u8 {
        match self {
            Player::White => 0,
            Player::Black => 25,
        }
    }

    /// Slot index of this player's home (borne-off checkers).
    #[must_use]
    pub const fn home_index(self) -> u8 {
        match self {
            Player::White => 25,
            Player::Black => 0,
        }
    }

    /// Whether `index` is one of the six points of this player's home quadrant.
    #[must_use]
    pub const fn in_home_quadrant(self, index: u8) -> bool {
        match self {
            Player::White => index >= 19 && index <= 24,
            Player::Black => index >= 1 && index <= 6,
        }
    }

    /// Pips a checker on `index` still has to travel to reach home.
    #[must_use]
    pub const fn distance_to_home(self, index: u8) -> u8 {
        match self {
            Player::White => 25 - index,
            Player::Black => index,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            Player::White => "White",
            Player::Black => "Black",
        })
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use backgammon_engine::core::{Player, PlayerMap};
///
/// let mut bar: PlayerMap<u8> = PlayerMap::with_value(0);
/// bar[Player::Black] += 1;
///
/// assert_eq!(bar[Player::White], 0);
/// assert_eq!(bar[Player::Black], 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: [factory(Player::White), factory(Player::Black)],
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs, White first.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}
