//! Capture resolution after a stone has been committed to the board.

use tracing::debug;

use crate::board::{Board, Intersection};
use crate::group::{group_of, has_liberties};

/// Remove every stone in the group containing `(x, y)`.
///
/// Returns the number of stones removed.
pub fn remove_group(board: &mut Board, x: usize, y: usize) -> usize {
    let group = group_of(board, x, y);
    for &(gx, gy) in &group {
        board.set(gx, gy, Intersection::Empty);
    }
    group.len()
}

/// Remove opposing groups left without liberties by the stone at `(x, y)`.
///
/// Neighbours are examined in +x, +y, -x, -y order and each dead group is
/// removed independently. Returns the total number of stones captured.
pub fn resolve_captures(board: &mut Board, x: usize, y: usize) -> usize {
    let Some(placed) = board.get(x, y).and_then(Intersection::color) else {
        return 0;
    };
    let opponent = Intersection::stone(placed.opponent());

    let neighbors: Vec<_> = board.neighbors(x, y).collect();
    let mut total = 0;
    for (nx, ny) in neighbors {
        if board.get(nx, ny) != Some(opponent) {
            continue;
        }
        if has_liberties(board, nx, ny) == Some(false) {
            let removed = remove_group(board, nx, ny);
            debug!(x = nx, y = ny, removed, "captured group");
            total += removed;
        }
    }
    total
}
