//! Simulation configuration.

use serde::{Deserialize, Serialize};

/// Configuration for a batch of games between two strategies.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of games to play.
    pub games: u32,

    /// Base seed. Each game rolls from its own fork of this seed.
    pub seed: u64,

    /// Alternate which strategy plays White from game to game.
    /// The first strategy plays White in game 0.
    pub swap_colors: bool,

    /// Maximum moves per game (0 = unlimited).
    /// Games cut off at the limit are counted as unfinished.
    pub max_moves: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            games: 100,
            seed: 42,
            swap_colors: true,
            max_moves: 0,
        }
    }
}

impl SimulationConfig {
    /// Create a new simulation config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of games.
    pub fn with_games(mut self, games: u32) -> Self {
        self.games = games;
        self
    }

    /// Set the base seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enable or disable color swapping between games.
    pub fn with_swap_colors(mut self, swap: bool) -> Self {
        self.swap_colors = swap;
        self
    }

    /// Set the per-game move limit.
    pub fn with_max_moves(mut self, max: u32) -> Self {
        self.max_moves = max;
        self
    }
}
