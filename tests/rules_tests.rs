//! Rules integration tests: setup, entry, hits, bear-off, winning and copies.

use backgammon_engine::board::Board;
use backgammon_engine::core::{MoveError, Player, RollSource};
use backgammon_engine::rules::{generate_moves, Engine};
use backgammon_engine::{Dice, Move};

fn scripted(rolls: &[(u8, u8)]) -> Engine {
    Engine::with_rolls(RollSource::scripted(rolls.iter().copied(), 99))
}

// =============================================================================
// Setup
// =============================================================================

#[test]
fn test_standard_start() {
    let mut board = Board::empty();
    board.setup();

    let expected = [
        (1, Player::White, 2),
        (6, Player::Black, 5),
        (8, Player::Black, 3),
        (12, Player::White, 5),
        (13, Player::Black, 5),
        (17, Player::White, 3),
        (19, Player::White, 5),
        (24, Player::Black, 2),
    ];
    for (index, owner, count) in expected {
        let point = board.get_point(index).unwrap();
        assert_eq!(point.owner(), Some(owner), "owner of point {index}");
        assert_eq!(point.count(), count, "count on point {index}");
    }

    let occupied = board.points().filter(|(_, p)| !p.is_empty()).count();
    assert_eq!(occupied, expected.len());
    for player in Player::ALL {
        assert_eq!(board.bar(player), 0);
        assert_eq!(board.home(player), 0);
        assert_eq!(board.checker_total(player), 15);
    }
}

#[test]
fn test_out_of_range_point_is_an_error() {
    let board = Board::standard();
    assert!(board.get_point(0).is_err());
    assert!(board.get_point(25).is_err());
    assert!(board.get_point(24).is_ok());
}

// =============================================================================
// Bar entry
// =============================================================================

fn closed_home_board() -> Board {
    let mut board = Board::empty()
        .with_bar(Player::White, 1)
        .with_checkers(19, Player::White, 14)
        .with_checkers(13, Player::Black, 3);
    for index in 1..=6 {
        board = board.with_checkers(index, Player::Black, 2);
    }
    board
}

#[test]
fn test_forced_entry_blocked_for_every_roll() {
    for a in 1..=6 {
        for b in 1..=6 {
            let board = closed_home_board();
            assert!(generate_moves(&board, Player::White, &Dice::from_roll(a, b)).is_empty());

            let mut engine = scripted(&[(a, b), (3, 1)]);
            engine.start_from(board, Player::White);

            assert_eq!(engine.turn(), Some(Player::Black), "roll ({a}, {b})");
            assert_eq!(engine.dice().values(), &[3, 1]);
            assert_eq!(engine.board().bar(Player::White), 1);
            assert!(engine.legal_moves().iter().all(|m| m.player == Player::Black));
        }
    }
}

#[test]
fn test_bar_checker_must_enter_first() {
    let board = Board::standard()
        .with_checkers(1, Player::White, 1)
        .with_bar(Player::White, 1);
    let moves = generate_moves(&board, Player::White, &Dice::from_roll(4, 2));

    assert!(!moves.is_empty());
    assert!(moves.iter().all(Move::is_bar_entry));
}

#[test]
fn test_bar_checker_blocks_bear_off() {
    let board = Board::empty()
        .with_bar(Player::White, 1)
        .with_checkers(24, Player::White, 2)
        .with_home(Player::White, 12)
        .with_checkers(12, Player::Black, 15);
    let moves = generate_moves(&board, Player::White, &Dice::from_roll(1, 2));

    assert!(!board.all_checkers_home(Player::White));
    assert!(moves.iter().all(|m| !m.is_bear_off()));
    assert_eq!(moves.len(), 2);
}

// =============================================================================
// Hits
// =============================================================================

#[test]
fn test_hit_sends_blot_to_bar() {
    let board = Board::empty()
        .with_checkers(8, Player::White, 1)
        .with_checkers(19, Player::White, 14)
        .with_checkers(10, Player::Black, 1)
        .with_checkers(2, Player::Black, 14);
    let mut engine = scripted(&[(2, 1)]);
    engine.start_from(board, Player::White);

    let hit = Move::hitting(Player::White, 8, 10, 2);
    assert!(engine.legal_moves().contains(&hit));
    engine.apply(&hit).unwrap();

    let point = engine.board().point(10);
    assert_eq!(point.owner(), Some(Player::White));
    assert_eq!(point.count(), 1);
    assert_eq!(engine.board().bar(Player::Black), 1);
    assert_eq!(engine.board().checker_total(Player::Black), 15);
}

#[test]
fn test_made_point_cannot_be_hit() {
    let board = Board::empty()
        .with_checkers(8, Player::White, 15)
        .with_checkers(10, Player::Black, 2)
        .with_checkers(2, Player::Black, 13);
    let moves = generate_moves(&board, Player::White, &Dice::from_roll(2, 1));

    assert!(moves.iter().all(|m| m.to != 10));
    assert!(moves.iter().all(|m| !m.hit));
}

// =============================================================================
// Winning
// =============================================================================

#[test]
fn test_win_detection() {
    let board = Board::empty()
        .with_checkers(24, Player::White, 1)
        .with_home(Player::White, 14)
        .with_checkers(6, Player::Black, 15);
    let mut engine = scripted(&[(1, 2)]);
    engine.start_from(board, Player::White);

    engine.apply(&Move::new(Player::White, 24, 25, 1)).unwrap();

    assert_eq!(engine.winner(), Some(Player::White));
    assert!(engine.is_over());
    assert!(engine.legal_moves().is_empty());
    assert_eq!(engine.board().home(Player::White), 15);

    let late = Move::new(Player::White, 24, 25, 2);
    assert_eq!(engine.apply(&late), Err(MoveError::GameOver));
    assert_eq!(engine.attempt_move(24, 25), Err(MoveError::GameOver));

    engine.next_turn();
    assert!(engine.legal_moves().is_empty());
    assert_eq!(engine.winner(), Some(Player::White));
}

#[test]
fn test_black_wins_by_bearing_off() {
    let board = Board::empty()
        .with_checkers(2, Player::Black, 1)
        .with_home(Player::Black, 14)
        .with_checkers(20, Player::White, 15);
    let mut engine = scripted(&[(6, 5)]);
    engine.start_from(board, Player::Black);

    // Overshoot from the furthest checker
    let played = engine.attempt_move(2, 0).unwrap();
    assert_eq!(played.die, 6);
    assert_eq!(engine.winner(), Some(Player::Black));
}

// =============================================================================
// Turn flow
// =============================================================================

#[test]
fn test_doubles_give_four_moves() {
    let mut engine = scripted(&[(2, 2), (6, 5)]);
    engine.start();

    for _ in 0..4 {
        assert_eq!(engine.turn(), Some(Player::White));
        let mv = engine.legal_moves()[0];
        assert_eq!(mv.die, 2);
        engine.apply(&mv).unwrap();
    }
    assert_eq!(engine.turn(), Some(Player::Black));
    assert_eq!(engine.dice().values(), &[6, 5]);
}

#[test]
fn test_turn_skip_when_no_moves() {
    // 18 + 6 and 18 + 5 both land on Black's made points
    let board = Board::empty()
        .with_checkers(18, Player::White, 1)
        .with_home(Player::White, 14)
        .with_checkers(24, Player::Black, 3)
        .with_checkers(23, Player::Black, 3)
        .with_checkers(1, Player::Black, 9);
    let mut engine = scripted(&[(6, 5), (4, 2)]);
    engine.start_from(board, Player::White);

    assert_eq!(engine.turn(), Some(Player::Black));
    assert_eq!(engine.dice().values(), &[4, 2]);
}

#[test]
fn test_consecutive_passes_return_turn_with_fresh_roll() {
    // White's 6s from 10 and 11 land on Black's made 16 and 17 points, and
    // Black's bar checker faces White's closed home board.
    let mut board = Board::empty()
        .with_checkers(10, Player::White, 1)
        .with_checkers(11, Player::White, 1)
        .with_home(Player::White, 1)
        .with_bar(Player::Black, 1)
        .with_checkers(16, Player::Black, 2)
        .with_checkers(17, Player::Black, 2)
        .with_checkers(1, Player::Black, 10);
    for index in 19..=24 {
        board = board.with_checkers(index, Player::White, 2);
    }
    let mut engine = scripted(&[(6, 6), (5, 3), (2, 1)]);
    engine.start_from(board.clone(), Player::White);

    assert_eq!(engine.turn(), Some(Player::White));
    assert_eq!(engine.dice().values(), &[2, 1]);
    assert_eq!(engine.turn_number(), 3);
    assert_eq!(engine.board(), &board);
    assert!(!engine.is_stalled());
    assert!(engine.legal_moves().contains(&Move::new(Player::White, 10, 12, 2)));
}

#[test]
fn test_mutual_block_stalls_instead_of_looping() {
    let mut board = Board::empty()
        .with_bar(Player::White, 1)
        .with_checkers(10, Player::White, 2)
        .with_bar(Player::Black, 1)
        .with_checkers(15, Player::Black, 2);
    for index in 1..=6 {
        board = board.with_checkers(index, Player::Black, 2);
    }
    for index in 19..=24 {
        board = board.with_checkers(index, Player::White, 2);
    }
    let mut engine = Engine::new(1);
    engine.start_from(board, Player::White);

    assert!(engine.is_stalled());
    assert_eq!(engine.winner(), None);
    assert!(engine.legal_moves().is_empty());
    assert_eq!(
        engine.apply(&Move::new(Player::White, 0, 3, 3)),
        Err(MoveError::Stalled)
    );
}

// =============================================================================
// Copies
// =============================================================================

#[test]
fn test_clone_is_independent() {
    let mut engine = scripted(&[(3, 1)]);
    engine.start();
    let copy = engine.clone();

    engine.attempt_move(17, 20).unwrap();
    engine.attempt_move(19, 20).unwrap();

    assert_eq!(copy.board(), &Board::standard());
    assert_eq!(copy.turn(), Some(Player::White));
    assert_eq!(copy.dice().values(), &[3, 1]);
    assert_eq!(copy.legal_moves().len(), 7);
}

#[test]
fn test_move_from_original_rejected_on_copy_where_illegal() {
    let mut engine = scripted(&[(3, 1)]);
    engine.start();

    let three = Move::new(Player::White, 1, 4, 3);
    let mut copy = engine.clone();
    copy.apply(&three).unwrap();

    // The 3 is spent on the copy but still legal on the original
    assert_eq!(copy.apply(&three), Err(MoveError::Illegal(three)));
    engine.apply(&three).unwrap();
}
