//! Board evaluators.
//!
//! Scores are White-positive: higher is better for White, lower is better
//! for Black. [`Evaluator::score_for`] flips the sign for Black.

use crate::core::Player;
use crate::rules::Engine;

/// Static evaluation of a position.
pub trait Evaluator {
    /// White-positive score of `engine`'s position.
    fn evaluate(&self, engine: &Engine) -> f64;

    /// Score from `player`'s point of view.
    fn score_for(&self, engine: &Engine, player: Player) -> f64 {
        let score = self.evaluate(engine);
        match player {
            Player::White => score,
            Player::Black => -score,
        }
    }
}

/// Progress score: how far each checker has travelled.
///
/// A White checker on point `i` is worth `i`, a Black checker `25 - i`
/// (negated). Blots count half. Borne-off checkers are worth 25.
#[derive(Clone, Debug, Default)]
pub struct ProgressEvaluator;

impl Evaluator for ProgressEvaluator {
    fn evaluate(&self, engine: &Engine) -> f64 {
        let board = engine.board();
        let mut score =
            25.0 * (f64::from(board.home(Player::White)) - f64::from(board.home(Player::Black)));

        for (index, point) in board.points() {
            let Some(owner) = point.owner() else {
                continue;
            };
            let travelled =
                f64::from(25 - owner.distance_to_home(index)) * f64::from(point.count());
            let value = if point.count() == 1 { travelled / 2.0 } else { travelled };
            match owner {
                Player::White => score += value,
                Player::Black => score -= value,
            }
        }
        score
    }
}

/// Pip-race score with positional terms.
///
/// Components: pip difference (bar checkers cost 25), 25 per borne-off
/// checker, -1.5 per blot, +0.5 per made point, and a decisive value once
/// the game is won.
#[derive(Clone, Debug)]
pub struct PipEvaluator {
    pub blot_penalty: f64,
    pub made_point_bonus: f64,
}

impl Default for PipEvaluator {
    fn default() -> Self {
        Self {
            blot_penalty: 1.5,
            made_point_bonus: 0.5,
        }
    }
}

/// Score given to a won game.
const WIN_SCORE: f64 = 1e9;

impl Evaluator for PipEvaluator {
    fn evaluate(&self, engine: &Engine) -> f64 {
        match engine.winner() {
            Some(Player::White) => return WIN_SCORE,
            Some(Player::Black) => return -WIN_SCORE,
            None => {}
        }

        let board = engine.board();
        let pips =
            f64::from(board.pip_count(Player::Black)) - f64::from(board.pip_count(Player::White));
        let home =
            25.0 * (f64::from(board.home(Player::White)) - f64::from(board.home(Player::Black)));

        let mut structure = 0.0;
        for (_, point) in board.points() {
            let sign = match point.owner() {
                Some(Player::White) => 1.0,
                Some(Player::Black) => -1.0,
                None => continue,
            };
            if point.count() == 1 {
                structure -= sign * self.blot_penalty;
            } else {
                structure += sign * self.made_point_bonus;
            }
        }

        pips + home + structure
    }
}
