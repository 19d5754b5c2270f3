//! Area scoring.
//!
//! Each stone counts one point for its color. Each connected empty region
//! counts for a color only when every stone bordering it is that color;
//! regions touching both colors, or no stones at all, are neutral. White
//! then receives komi.

use std::collections::HashSet;

use crate::board::{Board, Color, Point};
use crate::group::flood_fill;

/// Final tally of a game.
#[derive(Debug, Clone, PartialEq)]
pub struct Score {
    pub winner: Color,
    /// Black's stones plus territory.
    pub black: f64,
    /// White's stones plus territory plus komi.
    pub white: f64,
    /// Points (stones and territory) credited to Black, before komi.
    pub black_area: usize,
    /// Points credited to White, before komi.
    pub white_area: usize,
    /// Empty points owned by neither side.
    pub neutral: usize,
}

/// Score `board`, adding `komi` to White.
pub fn score(board: &Board, komi: f64) -> Score {
    let mut considered: HashSet<Point> = HashSet::new();
    let mut black_area = 0;
    let mut white_area = 0;
    let mut neutral = 0;

    for ((x, y), value) in board.points() {
        if considered.contains(&(x, y)) {
            continue;
        }
        match value.color() {
            Some(Color::Black) => {
                black_area += 1;
                considered.insert((x, y));
            }
            Some(Color::White) => {
                white_area += 1;
                considered.insert((x, y));
            }
            None => {
                let region = flood_fill(board, x, y);
                let owner = region_owner(board, &region);
                match owner {
                    Some(Color::Black) => black_area += region.len(),
                    Some(Color::White) => white_area += region.len(),
                    None => neutral += region.len(),
                }
                considered.extend(region);
            }
        }
    }

    let black = black_area as f64;
    let white = white_area as f64 + komi;
    let winner = if black > white { Color::Black } else { Color::White };

    Score {
        winner,
        black,
        white,
        black_area,
        white_area,
        neutral,
    }
}

/// The single color bordering an empty region, if there is exactly one.
fn region_owner(board: &Board, region: &HashSet<Point>) -> Option<Color> {
    let mut borders = HashSet::new();
    for &(x, y) in region {
        for (nx, ny) in board.neighbors(x, y) {
            if let Some(c) = board.get(nx, ny).and_then(|v| v.color()) {
                borders.insert(c);
            }
        }
    }
    if borders.len() == 1 {
        borders.into_iter().next()
    } else {
        None
    }
}
