//! Connectivity analysis: groups, liberties, and connected regions.
//!
//! Every call explores the board from scratch. Nothing is cached between
//! mutations, since a single capture changes the liberties of every
//! neighbouring group.

use std::collections::HashSet;

use crate::board::{Board, Point};

/// Collect the connected component of points sharing the value at `(x, y)`.
///
/// Works for stones and empty points alike. Returns an empty set for
/// off-board coordinates.
pub fn flood_fill(board: &Board, x: usize, y: usize) -> HashSet<Point> {
    let mut region = HashSet::new();
    let Some(value) = board.get(x, y) else {
        return region;
    };
    let mut stack = vec![(x, y)];

    while let Some(pt) = stack.pop() {
        if !region.insert(pt) {
            continue;
        }
        for n in board.neighbors(pt.0, pt.1) {
            if !region.contains(&n) && board.get(n.0, n.1) == Some(value) {
                stack.push(n);
            }
        }
    }
    region
}

/// The group (maximal same-colored connected stones) containing `(x, y)`.
///
/// Empty or off-board starting points have no group.
pub fn group_of(board: &Board, x: usize, y: usize) -> HashSet<Point> {
    match board.get(x, y) {
        Some(v) if !v.is_empty() => flood_fill(board, x, y),
        _ => HashSet::new(),
    }
}

/// Whether the group containing `(x, y)` touches at least one empty point.
///
/// Returns `None` for off-board coordinates. Stops at the first liberty found.
pub fn has_liberties(board: &Board, x: usize, y: usize) -> Option<bool> {
    let value = board.get(x, y)?;
    let mut visited = HashSet::new();
    let mut stack = vec![(x, y)];

    while let Some(pt) = stack.pop() {
        if !visited.insert(pt) {
            continue;
        }
        for n in board.neighbors(pt.0, pt.1) {
            match board.get(n.0, n.1) {
                Some(c) if c.is_empty() => return Some(true),
                Some(c) if c == value && !visited.contains(&n) => stack.push(n),
                _ => {}
            }
        }
    }
    Some(false)
}

/// Count the distinct liberties of the group containing `(x, y)`.
///
/// Zero for empty or off-board points.
pub fn liberties(board: &Board, x: usize, y: usize) -> usize {
    let mut libs = HashSet::new();
    for (gx, gy) in group_of(board, x, y) {
        for n in board.neighbors(gx, gy) {
            if board.get(n.0, n.1).is_some_and(|c| c.is_empty()) {
                libs.insert(n);
            }
        }
    }
    libs.len()
}
