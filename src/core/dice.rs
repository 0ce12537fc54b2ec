//! Dice: the rolled values still available this turn.
//!
//! A roll of two different values leaves two plays; a double leaves four
//! plays of the same value. Values are consumed one at a time as moves are
//! applied and the whole set is replaced by the next roll.
//!
//! Randomness comes from a [`RollSource`], which is either a seeded
//! [`GameRng`] or a scripted list of rolls (for reproducing positions).

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::rng::GameRng;

/// Remaining die values for the current turn.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dice {
    values: SmallVec<[u8; 4]>,
}

impl Dice {
    /// Create an empty set (no roll yet).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create dice holding a specific roll.
    #[must_use]
    pub fn from_roll(a: u8, b: u8) -> Self {
        let mut dice = Self::new();
        dice.set(a, b);
        dice
    }

    /// Roll two dice from the given source, replacing any remaining values.
    pub fn roll(&mut self, source: &mut RollSource) {
        let (a, b) = source.next_roll();
        self.set(a, b);
    }

    /// Load a specific roll. A double expands to four plays.
    pub fn set(&mut self, a: u8, b: u8) {
        assert!(
            (1..=6).contains(&a) && (1..=6).contains(&b),
            "die values must be in 1..=6, got {a} and {b}"
        );

        self.values.clear();
        if a == b {
            self.values.extend_from_slice(&[a; 4]);
        } else {
            self.values.push(a);
            self.values.push(b);
        }
    }

    /// Remove one instance of `value`.
    ///
    /// Panics if `value` is not remaining: legal moves are only ever built
    /// from remaining values, so this is an engine bug.
    pub fn consume(&mut self, value: u8) {
        match self.values.iter().position(|&v| v == value) {
            Some(pos) => {
                self.values.remove(pos);
            }
            None => panic!("consumed die {value} not in remaining dice {:?}", self.values),
        }
    }

    /// Remaining values in roll order.
    #[must_use]
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// Distinct remaining values in first-seen order.
    #[must_use]
    pub fn distinct(&self) -> SmallVec<[u8; 2]> {
        let mut out: SmallVec<[u8; 2]> = SmallVec::new();
        for &v in &self.values {
            if !out.contains(&v) {
                out.push(v);
            }
        }
        out
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl std::fmt::Display for Dice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.values.is_empty() {
            return write!(f, "-");
        }
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// Where rolls come from.
#[derive(Clone, Debug)]
pub enum RollSource {
    /// Uniform rolls from a seeded RNG.
    Random(GameRng),
    /// Fixed rolls replayed in order, then rolls from `fallback`.
    Scripted {
        queue: VecDeque<(u8, u8)>,
        fallback: GameRng,
    },
}

impl RollSource {
    /// Seeded random rolls.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        RollSource::Random(GameRng::new(seed))
    }

    /// Replay `rolls` first, then fall back to rolls seeded with `seed`.
    #[must_use]
    pub fn scripted(rolls: impl IntoIterator<Item = (u8, u8)>, seed: u64) -> Self {
        RollSource::Scripted {
            queue: rolls.into_iter().collect(),
            fallback: GameRng::new(seed),
        }
    }

    /// A source for a lookahead copy: rolls from a branch of this source's
    /// RNG, so the copy cannot see the live game's upcoming rolls. Scripted
    /// rolls are not carried over.
    #[must_use]
    pub fn branch(&self) -> Self {
        match self {
            RollSource::Random(rng) => RollSource::Random(rng.branch()),
            RollSource::Scripted { fallback, .. } => RollSource::Random(fallback.branch()),
        }
    }

    /// Produce the next pair of die values.
    pub fn next_roll(&mut self) -> (u8, u8) {
        match self {
            RollSource::Random(rng) => (rng.roll_die(), rng.roll_die()),
            RollSource::Scripted { queue, fallback } => match queue.pop_front() {
                Some(roll) => roll,
                None => (fallback.roll_die(), fallback.roll_die()),
            },
        }
    }
}
