//! Simulation results keyed by strategy seat.

use serde::{Deserialize, Serialize};

use crate::core::Player;

/// Which of the two strategies handed to the arbiter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    /// The other seat.
    #[must_use]
    pub fn other(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::First => write!(f, "first"),
            Seat::Second => write!(f, "second"),
        }
    }
}

/// Outcome of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    /// Seat that played White.
    pub white: Seat,

    /// Winning color, `None` if the game hit the move limit or stalled.
    pub winner: Option<Player>,

    /// Moves applied (single-checker moves, not turns).
    pub moves: u32,

    /// Moves that hit a blot.
    pub hits: u32,
}

impl GameSummary {
    /// Seat controlling `player` in this game.
    #[must_use]
    pub fn seat_of(&self, player: Player) -> Seat {
        match player {
            Player::White => self.white,
            Player::Black => self.white.other(),
        }
    }

    /// Seat that won, if any.
    #[must_use]
    pub fn winning_seat(&self) -> Option<Seat> {
        self.winner.map(|player| self.seat_of(player))
    }
}

/// Aggregated results of a simulation.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SimulationResults {
    /// Games won by the first strategy.
    pub first_wins: u32,

    /// Games won by the second strategy.
    pub second_wins: u32,

    /// Games stopped at the move limit or stalled.
    pub unfinished: u32,

    /// Total moves across all games.
    pub total_moves: u64,

    /// Total hits across all games.
    pub total_hits: u64,

    /// Per-game summaries in play order.
    pub games: Vec<GameSummary>,

    /// Wall time spent (microseconds).
    pub time_us: u64,
}

impl SimulationResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one game's outcome to the tallies.
    pub fn record(&mut self, summary: GameSummary) {
        match summary.winning_seat() {
            Some(Seat::First) => self.first_wins += 1,
            Some(Seat::Second) => self.second_wins += 1,
            None => self.unfinished += 1,
        }
        self.total_moves += u64::from(summary.moves);
        self.total_hits += u64::from(summary.hits);
        self.games.push(summary);
    }

    /// Number of games recorded.
    #[must_use]
    pub fn games_played(&self) -> usize {
        self.games.len()
    }

    /// Wins for a seat.
    #[must_use]
    pub fn wins(&self, seat: Seat) -> u32 {
        match seat {
            Seat::First => self.first_wins,
            Seat::Second => self.second_wins,
        }
    }

    /// Fraction of recorded games won by `seat`.
    #[must_use]
    pub fn win_rate(&self, seat: Seat) -> f64 {
        if self.games.is_empty() {
            0.0
        } else {
            f64::from(self.wins(seat)) / self.games.len() as f64
        }
    }

    /// Average moves per game.
    #[must_use]
    pub fn avg_moves_per_game(&self) -> f64 {
        if self.games.is_empty() {
            0.0
        } else {
            self.total_moves as f64 / self.games.len() as f64
        }
    }

    /// Wall time in milliseconds.
    #[must_use]
    pub fn time_ms(&self) -> f64 {
        self.time_us as f64 / 1_000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(white: Seat, winner: Option<Player>, moves: u32, hits: u32) -> GameSummary {
        GameSummary {
            white,
            winner,
            moves,
            hits,
        }
    }

    #[test]
    fn test_seat_mapping() {
        let game = summary(Seat::Second, Some(Player::Black), 10, 1);
        assert_eq!(game.seat_of(Player::White), Seat::Second);
        assert_eq!(game.seat_of(Player::Black), Seat::First);
        assert_eq!(game.winning_seat(), Some(Seat::First));
    }

    #[test]
    fn test_record_tallies_by_seat() {
        let mut results = SimulationResults::new();
        results.record(summary(Seat::First, Some(Player::White), 100, 3));
        results.record(summary(Seat::Second, Some(Player::White), 80, 1));
        results.record(summary(Seat::First, Some(Player::Black), 90, 0));
        results.record(summary(Seat::Second, None, 30, 2));

        assert_eq!(results.first_wins, 1);
        assert_eq!(results.second_wins, 2);
        assert_eq!(results.unfinished, 1);
        assert_eq!(results.games_played(), 4);
        assert_eq!(results.total_moves, 300);
        assert_eq!(results.total_hits, 6);
        assert!((results.win_rate(Seat::Second) - 0.5).abs() < 1e-9);
        assert!((results.avg_moves_per_game() - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_results() {
        let results = SimulationResults::new();
        assert_eq!(results.win_rate(Seat::First), 0.0);
        assert_eq!(results.avg_moves_per_game(), 0.0);
    }

    #[test]
    fn test_results_serialization() {
        let mut results = SimulationResults::new();
        results.record(summary(Seat::First, Some(Player::White), 12, 1));

        let json = serde_json::to_string(&results).unwrap();
        let deserialized: SimulationResults = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.games, results.games);
        assert_eq!(deserialized.first_wins, 1);
    }
}
