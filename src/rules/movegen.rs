//! Legal-move generation.
//!
//! Moves are always generated from scratch from the board, the mover and
//! the remaining dice; nothing is patched incrementally. Each distinct die
//! value is tried once per origin, so a double yields the same candidates as
//! a single die of that value.
//!
//! Three cases, in priority order:
//!
//! 1. **Bar entry**: with a checker on the bar, only entries are legal.
//! 2. **Point to point**: a destination inside 1..=24 that is empty, owned by
//!    the mover, or a lone opposing checker (a hit).
//! 3. **Bearing off**: once every checker is in the home quadrant, an exact
//!    roll bears off from any point; a larger roll only from the furthest
//!    checker.

use smallvec::SmallVec;

use crate::board::{Board, POINT_COUNT};
use crate::core::{Dice, Move, Player};

/// Buffer for the moves of one position.
pub type MoveList = SmallVec<[Move; 32]>;

/// Generate every legal single-checker move for `player`.
///
/// ```
/// use backgammon_engine::board::Board;
/// use backgammon_engine::core::{Dice, Player};
/// use backgammon_engine::rules::generate_moves;
///
/// let moves = generate_moves(&Board::standard(), Player::White, &Dice::from_roll(3, 1));
/// assert_eq!(moves.len(), 7);
/// ```
#[must_use]
pub fn generate_moves(board: &Board, player: Player, dice: &Dice) -> MoveList {
    let mut moves = MoveList::new();
    let values = dice.distinct();

    if board.bar(player) > 0 {
        let bar = player.bar_index();
        for &die in &values {
            if let Some(to) = on_board(target(bar, die, player)) {
                push_landing(board, player, bar, to, die, &mut moves);
            }
        }
        return moves;
    }

    let bearing_off = board.all_checkers_home(player);
    let furthest = board.furthest_checker(player);
    let home = player.home_index();

    for (from, point) in board.points() {
        if !point.is_owned_by(player) {
            continue;
        }
        for &die in &values {
            let to = target(from, die, player);
            match on_board(to) {
                Some(to) => push_landing(board, player, from, to, die, &mut moves),
                None if bearing_off => {
                    let exact = to == i16::from(home);
                    if exact || from == furthest {
                        moves.push(Move::new(player, from, home, die));
                    }
                }
                None => {}
            }
        }
    }

    moves
}

/// Slot reached from `from` after `die` pips; may fall outside the board.
fn target(from: u8, die: u8, player: Player) -> i16 {
    i16::from(from) + i16::from(die) * i16::from(player.direction())
}

fn on_board(index: i16) -> Option<u8> {
    u8::try_from(index)
        .ok()
        .filter(|index| (1..=POINT_COUNT).contains(index))
}

fn push_landing(board: &Board, player: Player, from: u8, to: u8, die: u8, moves: &mut MoveList) {
    match board.point(to).landing(player) {
        Some(false) => moves.push(Move::new(player, from, to, die)),
        Some(true) => moves.push(Move::hitting(player, from, to, die)),
        None => {}
    }
}
