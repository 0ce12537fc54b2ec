//! The rules engine: board + dice + whose turn it is.
//!
//! ## Turn state machine
//!
//! `next_turn` flips the mover, rolls, and regenerates legal moves. When
//! the new mover has nothing to play, the turn passes again until someone
//! can move or no such mover exists. Once `winner` is set nothing rolls or
//! moves any more.
//!
//! A position where neither color can move for any roll (both stuck on the
//! bar behind closed boards, say) is **stalled**: `turn` keeps the last
//! mover and its unplayed roll, `legal_moves` is empty, and `apply` returns
//! `MoveError::Stalled`. Only `start`/`start_from` leave that state.
//!
//! Every handover, passes included, bumps `turn_number`.
//!
//! ## Hypothetical exploration
//!
//! `Clone` gives an independent engine: board and dice are copied by value
//! and the legal moves are rebuilt against the copy. The copy rolls from a
//! branch of the roll source, so it never sees the live game's next rolls. A
//! [`Move`] is a plain value, so a move read from one engine can be offered
//! to a copy; it is accepted only if an equal move is legal there.

use log::{debug, trace};

use super::movegen::{generate_moves, MoveList};
use crate::board::Board;
use crate::core::{Dice, Move, MoveError, Player, RollSource};

/// A backgammon game in progress.
#[derive(Debug)]
pub struct Engine {
    board: Board,
    dice: Dice,
    rolls: RollSource,
    turn: Option<Player>,
    turn_number: u32,
    winner: Option<Player>,
    stalled: bool,
    legal_moves: MoveList,
}

impl Engine {
    /// Create an unstarted engine with seeded random dice.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rolls(RollSource::seeded(seed))
    }

    /// Create an unstarted engine drawing dice from `rolls`.
    #[must_use]
    pub fn with_rolls(rolls: RollSource) -> Self {
        Self {
            board: Board::empty(),
            dice: Dice::new(),
            rolls,
            turn: None,
            turn_number: 0,
            winner: None,
            stalled: false,
            legal_moves: MoveList::new(),
        }
    }

    /// Set up the standard position and give White the first roll.
    pub fn start(&mut self) {
        self.start_from(Board::standard(), Player::White);
    }

    /// Start from an arbitrary position with `first` to roll.
    ///
    /// If `first` cannot move with its roll the turn passes as usual.
    pub fn start_from(&mut self, board: Board, first: Player) {
        self.board = board;
        self.winner = None;
        self.stalled = false;
        self.turn_number = 0;
        self.turn = Some(first.opponent());
        self.next_turn();
    }

    // === Accessors ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn dice(&self) -> &Dice {
        &self.dice
    }

    /// Player to move, `None` before `start()`.
    #[must_use]
    pub fn turn(&self) -> Option<Player> {
        self.turn
    }

    /// Handovers since the last `start`, passed turns included. Two engines
    /// with the same number are in the same turn.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Whether neither color can move for any roll.
    #[must_use]
    pub fn is_stalled(&self) -> bool {
        self.stalled
    }

    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Legal moves for the player to move. Empty once the game is over or
    /// stalled.
    #[must_use]
    pub fn legal_moves(&self) -> &[Move] {
        &self.legal_moves
    }

    // === Moves ===

    /// Apply `mv`, which must be one of the current legal moves.
    ///
    /// On error the engine is unchanged.
    pub fn apply(&mut self, mv: &Move) -> Result<(), MoveError> {
        if self.winner.is_some() {
            return Err(MoveError::GameOver);
        }
        if self.stalled {
            return Err(MoveError::Stalled);
        }
        let Some(player) = self.turn else {
            return Err(MoveError::NotStarted);
        };
        if !self.legal_moves.contains(mv) {
            return Err(MoveError::Illegal(*mv));
        }

        self.board.remove_checker(player, mv.from);
        let displaced = self.board.add_checker(player, mv.to);
        debug_assert_eq!(displaced, mv.hit, "hit flag out of sync with board for {mv}");
        if mv.hit {
            self.board.send_to_bar(player.opponent());
        }
        self.dice.consume(mv.die);
        trace!("{player} plays {mv}, dice left: {}", self.dice);

        if self.board.furthest_checker(player) == player.home_index() {
            debug!("{player} has borne off every checker and wins");
            self.winner = Some(player);
            self.legal_moves.clear();
            return Ok(());
        }

        if self.dice.is_empty() {
            self.next_turn();
        } else {
            self.regenerate();
            if self.legal_moves.is_empty() {
                debug!("{player} cannot use remaining dice {}", self.dice);
                self.next_turn();
            }
        }
        Ok(())
    }

    /// Apply the first legal move going from `from` to `to`.
    pub fn attempt_move(&mut self, from: u8, to: u8) -> Result<Move, MoveError> {
        if self.winner.is_some() {
            return Err(MoveError::GameOver);
        }
        let mv = self
            .legal_moves
            .iter()
            .find(|m| m.from == from && m.to == to)
            .copied()
            .ok_or(MoveError::NoSuchMove { from, to })?;
        self.apply(&mv)?;
        Ok(mv)
    }

    /// The position after `mv`, computed on a copy. `self` is untouched.
    pub fn preview(&self, mv: &Move) -> Result<Engine, MoveError> {
        let mut copy = self.clone();
        copy.apply(mv)?;
        Ok(copy)
    }

    // === Turn advancement ===

    /// Hand the dice to the other player and roll.
    ///
    /// Repeats while the new mover has no legal move, and stops in the
    /// stalled state when neither color could move with any roll. Does
    /// nothing once the game is over or stalled.
    pub fn next_turn(&mut self) {
        while self.winner.is_none() && !self.stalled {
            let mover = self.turn.map_or(Player::White, Player::opponent);
            self.turn = Some(mover);
            self.turn_number += 1;
            self.dice.roll(&mut self.rolls);
            self.regenerate();

            if !self.legal_moves.is_empty() {
                trace!("{mover} to move with {}", self.dice);
                return;
            }
            debug!("{mover} rolled {} and cannot move, turn passes", self.dice);

            if self.is_frozen(mover) && self.is_frozen(mover.opponent()) {
                debug!("neither player can move with any roll, game stalled");
                self.stalled = true;
            }
        }
    }

    /// Whether `player` has no legal move whatever the roll. Moves for a
    /// roll are the union of the moves for each of its values.
    fn is_frozen(&self, player: Player) -> bool {
        (1..=6).all(|die| {
            generate_moves(&self.board, player, &Dice::from_roll(die, die)).is_empty()
        })
    }

    fn regenerate(&mut self) {
        self.legal_moves = match (self.turn, self.winner, self.stalled) {
            (Some(player), None, false) => generate_moves(&self.board, player, &self.dice),
            _ => MoveList::new(),
        };
    }
}

impl Clone for Engine {
    fn clone(&self) -> Self {
        let mut copy = Self {
            board: self.board.clone(),
            dice: self.dice.clone(),
            rolls: self.rolls.branch(),
            turn: self.turn,
            turn_number: self.turn_number,
            winner: self.winner,
            stalled: self.stalled,
            legal_moves: MoveList::new(),
        };
        copy.regenerate();
        copy
    }
}

impl std::fmt::Display for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.board)?;
        match (self.winner, self.turn) {
            (Some(winner), _) => write!(f, "Winner: {winner}"),
            (None, Some(_)) if self.stalled => write!(f, "Stalled"),
            (None, Some(turn)) => write!(f, "Turn: {turn:<8} Dice: {}", self.dice),
            (None, None) => write!(f, "Not started"),
        }
    }
}
