//! ASCII rendering of a board for debugging and terminal play.
//!
//! Points 12..1 run along the top with Black's bar and White's borne-off
//! count beside them; points 13..24 run along the bottom with White's bar
//! and Black's borne-off count.

use std::fmt::{self, Write};

use super::point::Point;
use super::position::Board;
use crate::core::Player;

const CELL_W: usize = 4;

fn label(owner: Player, count: u8) -> String {
    if count == 0 {
        return ".".to_string();
    }
    let symbol = match owner {
        Player::White => 'W',
        Player::Black => 'B',
    };
    format!("{symbol}{count}")
}

fn point_label(point: &Point) -> String {
    match point.owner() {
        Some(owner) => label(owner, point.count()),
        None => ".".to_string(),
    }
}

fn half(out: &mut String, cells: impl Iterator<Item = String>) -> fmt::Result {
    for cell in cells {
        write!(out, "{:>w$}", cell, w = CELL_W)?;
    }
    Ok(())
}

fn line(
    board: &Board,
    left: [u8; 6],
    right: [u8; 6],
    bar: String,
    off: String,
) -> Result<String, fmt::Error> {
    let mut out = String::from("|");
    half(&mut out, left.iter().map(|&i| point_label(board.point(i))))?;
    write!(out, " | {:>3} |", bar)?;
    half(&mut out, right.iter().map(|&i| point_label(board.point(i))))?;
    write!(out, " | {:>3} |", off)?;
    Ok(out)
}

fn numbers(left: [u8; 6], right: [u8; 6]) -> Result<String, fmt::Error> {
    let mut out = String::from("|");
    half(&mut out, left.iter().map(u8::to_string))?;
    out.push_str(" | BAR |");
    half(&mut out, right.iter().map(u8::to_string))?;
    out.push_str(" | OFF |");
    Ok(out)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let top_left = [12, 11, 10, 9, 8, 7];
        let top_right = [6, 5, 4, 3, 2, 1];
        let bottom_left = [13, 14, 15, 16, 17, 18];
        let bottom_right = [19, 20, 21, 22, 23, 24];

        let header = numbers(top_left, top_right)?;
        let border = "=".repeat(header.len());

        writeln!(f, "{border}")?;
        writeln!(f, "{header}")?;
        writeln!(
            f,
            "{}",
            line(
                self,
                top_left,
                top_right,
                label(Player::Black, self.bar(Player::Black)),
                label(Player::White, self.home(Player::White)),
            )?
        )?;
        writeln!(
            f,
            "{}",
            line(
                self,
                bottom_left,
                bottom_right,
                label(Player::White, self.bar(Player::White)),
                label(Player::Black, self.home(Player::Black)),
            )?
        )?;
        writeln!(f, "{}", numbers(bottom_left, bottom_right)?)?;
        write!(f, "{border}")
    }
}
