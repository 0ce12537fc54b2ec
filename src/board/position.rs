//! The backgammon board: 24 points plus a bar and a home per color.
//!
//! ## Layout
//!
//! Points are numbered 1..=24. White starts near point 1 and bears off
//! past 24; Black starts near 24 and bears off below 1. The bar and home
//! counters are addressed by the slot indices in [`Player::bar_index`] and
//! [`Player::home_index`] (0 and 25), which only mean something together
//! with the player they belong to.
//!
//! ## Conservation
//!
//! Each color has 15 checkers across points, bar and home. `setup()` and the
//! add/remove primitives used by move application preserve that total, and
//! deserialization rejects boards that break it. The `with_*` builders do
//! not check it, so partial positions can be built for analysis.

use serde::{Deserialize, Serialize};

use super::point::Point;
use crate::core::{BoardError, Player, PlayerMap, CHECKERS_PER_PLAYER};

/// Number of playable points.
pub const POINT_COUNT: u8 = 24;

/// Standard opening position: (point, owner, count).
const OPENING: [(u8, Player, u8); 8] = [
    (1, Player::White, 2),
    (6, Player::Black, 5),
    (8, Player::Black, 3),
    (12, Player::White, 5),
    (13, Player::Black, 5),
    (17, Player::White, 3),
    (19, Player::White, 5),
    (24, Player::Black, 2),
];

/// Board state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr")]
pub struct Board {
    points: [Point; POINT_COUNT as usize],
    bar: PlayerMap<u8>,
    home: PlayerMap<u8>,
}

/// Unchecked wire form of [`Board`].
#[derive(Deserialize)]
struct BoardRepr {
    points: [Point; POINT_COUNT as usize],
    bar: PlayerMap<u8>,
    home: PlayerMap<u8>,
}

impl TryFrom<BoardRepr> for Board {
    type Error = BoardError;

    fn try_from(repr: BoardRepr) -> Result<Self, Self::Error> {
        let board = Self {
            points: repr.points,
            bar: repr.bar,
            home: repr.home,
        };
        for player in Player::ALL {
            let total = board.checker_total(player);
            if total != u32::from(CHECKERS_PER_PLAYER) {
                return Err(BoardError::CheckerCount { player, total });
            }
        }
        Ok(board)
    }
}

impl Board {
    /// A board with no checkers anywhere.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// A board in the standard opening position.
    #[must_use]
    pub fn standard() -> Self {
        let mut board = Self::empty();
        board.setup();
        board
    }

    /// Clear everything and place the standard opening position.
    pub fn setup(&mut self) {
        self.clear();
        for (index, owner, count) in OPENING {
            self.points[slot(index)] = Point::with_checkers(owner, count);
        }
    }

    /// Remove every checker from points, bars and homes.
    pub fn clear(&mut self) {
        for point in &mut self.points {
            point.clear();
        }
        self.bar = PlayerMap::with_value(0);
        self.home = PlayerMap::with_value(0);
    }

    // === Position builder ===

    /// Put `count` checkers of `owner` on point `index`, replacing its contents.
    ///
    /// Panics when `index` is outside 1..=24.
    #[must_use]
    pub fn with_checkers(mut self, index: u8, owner: Player, count: u8) -> Self {
        self.points[slot(index)] = Point::with_checkers(owner, count);
        self
    }

    /// Set the number of `player`'s checkers on the bar.
    #[must_use]
    pub fn with_bar(mut self, player: Player, count: u8) -> Self {
        self.bar[player] = count;
        self
    }

    /// Set the number of `player`'s borne-off checkers.
    #[must_use]
    pub fn with_home(mut self, player: Player, count: u8) -> Self {
        self.home[player] = count;
        self
    }

    // === Queries ===

    /// The point at `index` (1..=24).
    pub fn get_point(&self, index: u8) -> Result<&Point, BoardError> {
        if !(1..=POINT_COUNT).contains(&index) {
            return Err(BoardError::OutOfRange(index));
        }
        Ok(&self.points[slot(index)])
    }

    /// The point at `index`, panicking outside 1..=24.
    #[must_use]
    pub fn point(&self, index: u8) -> &Point {
        &self.points[slot(index)]
    }

    /// Iterate over `(index, point)` pairs in ascending index order.
    pub fn points(&self) -> impl DoubleEndedIterator<Item = (u8, &Point)> {
        (1..=POINT_COUNT).zip(self.points.iter())
    }

    /// Checkers `player` has on the bar.
    #[must_use]
    pub fn bar(&self, player: Player) -> u8 {
        self.bar[player]
    }

    /// Checkers `player` has borne off.
    #[must_use]
    pub fn home(&self, player: Player) -> u8 {
        self.home[player]
    }

    /// Slot index of `player`'s checker farthest from home.
    ///
    /// A checker on the bar is the farthest of all. With no checker left
    /// outside home, the home index itself is returned.
    #[must_use]
    pub fn furthest_checker(&self, player: Player) -> u8 {
        if self.bar[player] > 0 {
            return player.bar_index();
        }

        let mut owned = self
            .points()
            .filter(|(_, point)| point.is_owned_by(player))
            .map(|(index, _)| index);

        let furthest = match player {
            Player::White => owned.next(),
            Player::Black => owned.next_back(),
        };
        furthest.unwrap_or_else(|| player.home_index())
    }

    /// Whether every checker `player` has outside home sits in the home quadrant.
    ///
    /// A checker on the bar counts as outside the quadrant.
    #[must_use]
    pub fn all_checkers_home(&self, player: Player) -> bool {
        let furthest = self.furthest_checker(player);
        furthest == player.home_index() || player.in_home_quadrant(furthest)
    }

    /// Total checkers of `player` across points, bar and home.
    #[must_use]
    pub fn checker_total(&self, player: Player) -> u32 {
        let on_points: u32 = self
            .points
            .iter()
            .filter(|point| point.is_owned_by(player))
            .map(|point| u32::from(point.count()))
            .sum();
        on_points + u32::from(self.bar[player]) + u32::from(self.home[player])
    }

    /// Pips `player` needs to bear every checker off. Bar checkers count 25.
    #[must_use]
    pub fn pip_count(&self, player: Player) -> u32 {
        let on_points: u32 = self
            .points()
            .filter(|(_, point)| point.is_owned_by(player))
            .map(|(index, point)| {
                u32::from(player.distance_to_home(index)) * u32::from(point.count())
            })
            .sum();
        on_points + 25 * u32::from(self.bar[player])
    }

    // === Checker primitives ===

    /// Take one of `player`'s checkers off slot `from` (bar index or a point).
    ///
    /// Panics if the slot is empty.
    pub fn remove_checker(&mut self, player: Player, from: u8) {
        if from == player.bar_index() {
            assert!(self.bar[player] > 0, "tried to remove a checker from {player}'s empty bar");
            self.bar[player] -= 1;
        } else {
            let point = &mut self.points[slot(from)];
            debug_assert!(point.is_owned_by(player), "{player} does not own point {from}");
            point.remove_one();
        }
    }

    /// Put one of `player`'s checkers on slot `to` (a point or home index).
    ///
    /// Returns whether a lone opposing checker was displaced. The displaced
    /// checker is not placed on the bar here; see [`Board::send_to_bar`].
    pub fn add_checker(&mut self, player: Player, to: u8) -> bool {
        if to == player.home_index() {
            self.home[player] += 1;
            return false;
        }
        let point = &mut self.points[slot(to)];
        let hit = point.owner().is_some_and(|owner| owner != player);
        point.add_one(player);
        hit
    }

    /// Put one of `player`'s checkers on their bar.
    pub fn send_to_bar(&mut self, player: Player) {
        self.bar[player] += 1;
    }
}

/// Array slot for a point index, panicking outside 1..=24.
fn slot(index: u8) -> usize {
    assert!(
        (1..=POINT_COUNT).contains(&index),
        "point index {index} out of range 1..=24"
    );
    usize::from(index - 1)
}
