//! Runs games between two strategies.

use std::time::Instant;

use log::{debug, info};
use thiserror::Error;

use super::config::SimulationConfig;
use super::stats::{GameSummary, Seat, SimulationResults};
use crate::core::{GameRng, MoveError, RollSource};
use crate::rules::Engine;
use crate::strategy::{Strategy, StrategyError};

/// A strategy broke its contract during a simulation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    #[error("{seat} strategy failed: {source}")]
    Strategy {
        seat: Seat,
        #[source]
        source: StrategyError,
    },

    #[error("{seat} strategy returned a rejected move: {source}")]
    RejectedMove {
        seat: Seat,
        #[source]
        source: MoveError,
    },
}

/// Plays batches of games and tallies the results.
#[derive(Clone, Debug)]
pub struct Arbiter {
    config: SimulationConfig,
}

impl Arbiter {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Play `config.games` games between `first` and `second`.
    pub fn run(
        &self,
        first: &mut dyn Strategy,
        second: &mut dyn Strategy,
    ) -> Result<SimulationResults, SimulationError> {
        let start = Instant::now();
        let mut streams = GameRng::new(self.config.seed);
        let mut results = SimulationResults::new();

        for game in 0..self.config.games {
            let white = if self.config.swap_colors && game % 2 == 1 {
                Seat::Second
            } else {
                Seat::First
            };

            let engine = Engine::with_rolls(RollSource::Random(streams.fork()));
            let summary = self.play_game(engine, white, first, second)?;

            info!(
                "game {}: winner {} ({}), moves {}, hits {}",
                game + 1,
                summary.winning_seat().map_or("none".to_string(), |s| s.to_string()),
                summary.winner.map_or("-".to_string(), |p| p.to_string()),
                summary.moves,
                summary.hits
            );
            results.record(summary);
        }

        results.time_us = start.elapsed().as_micros() as u64;
        info!(
            "{} wins: {}    {} wins: {}    unfinished: {}    time: {:.1} ms",
            first.name(),
            results.first_wins,
            second.name(),
            results.second_wins,
            results.unfinished,
            results.time_ms()
        );
        Ok(results)
    }

    /// Play one game to completion, the move limit, or a stall.
    ///
    /// An unstarted engine is started from the standard position; a started
    /// one is played on from where it stands.
    pub fn play_game(
        &self,
        mut engine: Engine,
        white: Seat,
        first: &mut dyn Strategy,
        second: &mut dyn Strategy,
    ) -> Result<GameSummary, SimulationError> {
        if engine.turn().is_none() {
            engine.start();
        }

        let mut summary = GameSummary {
            white,
            winner: None,
            moves: 0,
            hits: 0,
        };

        while !engine.is_over() {
            if engine.is_stalled() {
                debug!("game stalled after {} moves", summary.moves);
                break;
            }
            if self.config.max_moves > 0 && summary.moves >= self.config.max_moves {
                debug!("game stopped at the {} move limit", self.config.max_moves);
                break;
            }
            let Some(player) = engine.turn() else {
                break;
            };

            let seat = summary.seat_of(player);
            let strategy: &mut dyn Strategy = match seat {
                Seat::First => &mut *first,
                Seat::Second => &mut *second,
            };

            let mv = strategy
                .choose_move(&engine)
                .map_err(|source| SimulationError::Strategy { seat, source })?;
            engine
                .apply(&mv)
                .map_err(|source| SimulationError::RejectedMove { seat, source })?;

            summary.moves += 1;
            if mv.hit {
                summary.hits += 1;
            }
        }

        summary.winner = engine.winner();
        Ok(summary)
    }
}
