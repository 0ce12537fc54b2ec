//! A single board point.

use serde::{Deserialize, Serialize};

use crate::core::{BoardError, Player};

/// One of the 24 playable points.
///
/// Holds checkers of at most one color: `count == 0` exactly when
/// `owner` is `None`. Deserializing a point that breaks this fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PointRepr")]
pub struct Point {
    owner: Option<Player>,
    count: u8,
}

/// Unchecked wire form of [`Point`].
#[derive(Deserialize)]
struct PointRepr {
    owner: Option<Player>,
    count: u8,
}

impl TryFrom<PointRepr> for Point {
    type Error = BoardError;

    fn try_from(repr: PointRepr) -> Result<Self, Self::Error> {
        if repr.owner.is_some() != (repr.count > 0) {
            return Err(BoardError::InconsistentPoint {
                owner: repr.owner,
                count: repr.count,
            });
        }
        Ok(Self {
            owner: repr.owner,
            count: repr.count,
        })
    }
}

impl Point {
    /// An empty point.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            owner: None,
            count: 0,
        }
    }

    /// A point holding `count` checkers of `owner` (empty when `count` is 0).
    #[must_use]
    pub const fn with_checkers(owner: Player, count: u8) -> Self {
        if count == 0 {
            Self::empty()
        } else {
            Self {
                owner: Some(owner),
                count,
            }
        }
    }

    #[must_use]
    pub fn owner(&self) -> Option<Player> {
        self.owner
    }

    #[must_use]
    pub fn count(&self) -> u8 {
        self.count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Whether `player` has checkers here.
    #[must_use]
    pub fn is_owned_by(&self, player: Player) -> bool {
        self.owner == Some(player)
    }

    /// Whether this point is a single checker of `player`.
    #[must_use]
    pub fn is_blot_of(&self, player: Player) -> bool {
        self.is_owned_by(player) && self.count == 1
    }

    /// Whether `player` may land here, and whether landing hits.
    ///
    /// Returns `None` when the point is made (two or more) by the opponent.
    #[must_use]
    pub fn landing(&self, player: Player) -> Option<bool> {
        match self.owner {
            None => Some(false),
            Some(owner) if owner == player => Some(false),
            Some(_) if self.count == 1 => Some(true),
            Some(_) => None,
        }
    }

    /// Take one checker off this point.
    ///
    /// Panics on an empty point.
    pub fn remove_one(&mut self) {
        assert!(self.count > 0, "tried to remove a checker from an empty point");
        self.count -= 1;
        if self.count == 0 {
            self.owner = None;
        }
    }

    /// Put one checker of `owner` on this point.
    ///
    /// A single opposing checker is replaced (the point is re-owned with a
    /// count of 1). Panics when two or more opposing checkers are present.
    pub fn add_one(&mut self, owner: Player) {
        match self.owner {
            None => self.count = 1,
            Some(current) if current == owner => self.count += 1,
            Some(_) => {
                assert!(
                    self.count == 1,
                    "tried to land {owner} on a point held by {} opposing checkers",
                    self.count
                );
                self.count = 1;
            }
        }
        self.owner = Some(owner);
    }

    /// Empty this point.
    pub fn clear(&mut self) {
        *self = Self::empty();
    }
}
