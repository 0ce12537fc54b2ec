//! Deterministic random number generation for dice and strategies.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical dice sequences
//! - **Forkable**: Derive independent per-game or per-strategy streams
//! - **Branchable**: Lookahead copies roll from a side stream, never the
//!   live game's upcoming dice
//!
//! ```
//! use backgammon_engine::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut game_rng = rng.fork();
//!
//! let die = game_rng.roll_die();
//! assert!((1..=6).contains(&die));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Salt mixed into branch seeds so a branch never equals a fork.
const BRANCH_SALT: u64 = 0x6A09_E667_F3BC_C908;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork this RNG to create an independent stream.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Roll one six-sided die.
    pub fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=6)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// An independent stream derived from the current position of this one.
    ///
    /// Does not advance `self`, so the branch cannot replay the rolls `self`
    /// will produce next. Equal states branch to equal streams.
    #[must_use]
    pub fn branch(&self) -> Self {
        let position = self.inner.get_word_pos() as u64;
        let branch_seed =
            (self.seed ^ BRANCH_SALT).wrapping_add(position.wrapping_mul(0xD1B5_4A32_D192_ED03));
        Self::new(branch_seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.roll_die(), rng2.roll_die());
        }
    }

    #[test]
    fn test_roll_die_range() {
        let mut rng = GameRng::new(7);
        let mut seen = [false; 7];

        for _ in 0..1000 {
            let die = rng.roll_die();
            assert!((1..=6).contains(&die));
            seen[die as usize] = true;
        }

        // Every face shows up in 1000 rolls
        assert!(seen[1..].iter().all(|&s| s));
    }

    #[test]
    fn test_fork_produces_different_sequence() {
        let mut rng = GameRng::new(42);
        let mut forked = rng.fork();

        let seq1: Vec<_> = (0..20).map(|_| rng.roll_die()).collect();
        let seq2: Vec<_> = (0..20).map(|_| forked.roll_die()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        let forked1 = rng1.fork();
        let forked2 = rng2.fork();

        assert_eq!(forked1.seed, forked2.seed);
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(42);
        let items = vec![1, 2, 3, 4, 5];

        let chosen = rng.choose(&items);
        assert!(chosen.is_some());
        assert!(items.contains(chosen.unwrap()));

        let empty: Vec<i32> = vec![];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn test_branch_does_not_replay_parent() {
        let mut rng = GameRng::new(42);
        for _ in 0..10 {
            rng.roll_die();
        }

        let mut branch = rng.branch();
        let parent: Vec<_> = (0..20).map(|_| rng.roll_die()).collect();
        let branched: Vec<_> = (0..20).map(|_| branch.roll_die()).collect();
        assert_ne!(parent, branched);
    }

    #[test]
    fn test_branch_is_deterministic() {
        let mut a = GameRng::new(9);
        let mut b = GameRng::new(9);
        a.roll_die();
        b.roll_die();

        let mut branch_a = a.branch();
        let mut branch_b = b.branch();
        let seq_a: Vec<_> = (0..10).map(|_| branch_a.roll_die()).collect();
        let seq_b: Vec<_> = (0..10).map(|_| branch_b.roll_die()).collect();
        assert_eq!(seq_a, seq_b);
    }
}
