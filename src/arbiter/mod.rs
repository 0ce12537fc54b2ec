//! Head-to-head simulation between two strategies.
//!
//! ## Usage
//!
//! ```rust
//! use backgammon_engine::arbiter::{Arbiter, Seat, SimulationConfig};
//! use backgammon_engine::strategy::{GreedyStrategy, PipEvaluator, RandomStrategy};
//!
//! let config = SimulationConfig::new().with_games(4).with_seed(7);
//! let mut greedy = GreedyStrategy::new(PipEvaluator::default());
//! let mut random = RandomStrategy::new(1);
//!
//! let results = Arbiter::new(config).run(&mut greedy, &mut random).unwrap();
//! assert_eq!(results.games_played(), 4);
//! println!("greedy win rate: {:.2}", results.win_rate(Seat::First));
//! ```

pub mod config;
pub mod runner;
pub mod stats;

pub use config::SimulationConfig;
pub use runner::{Arbiter, SimulationError};
pub use stats::{GameSummary, Seat, SimulationResults};
