//! Move legality: occupied points, suicide, and the ko rule.
//!
//! Legality is a pure predicate. Placements are simulated on a scratch copy
//! of the board, so a rejected move never changes any caller-visible state.

use derive_more::{Display, Error};

use crate::board::{Board, Color, Intersection};
use crate::group::has_liberties;

/// Why a placement was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    #[display("illegal move: point is off the board")]
    OutOfBounds,
    #[display("illegal move: point not empty")]
    Occupied,
    #[display("illegal move: retakes ko")]
    Ko,
    #[display("illegal move: suicide")]
    Suicide,
    #[display("illegal move: game is over")]
    GameOver,
}

/// Check whether `color` may place a stone at `(x, y)`.
///
/// `prior` is the board as it stood one ply ago. A capturing move is a ko
/// violation when the board, after lifting the first neighbouring stone left
/// without liberties, equals `prior`. Only that single stone is lifted, not
/// its whole group, so multi-stone captures never match here.
pub fn check_placement(
    board: &Board,
    prior: &Board,
    x: usize,
    y: usize,
    color: Color,
) -> Result<(), MoveError> {
    match board.get(x, y) {
        None => return Err(MoveError::OutOfBounds),
        Some(v) if !v.is_empty() => return Err(MoveError::Occupied),
        Some(_) => {}
    }

    let mut scratch = board.clone();
    let stone = Intersection::stone(color);
    scratch.set(x, y, stone);

    if has_liberties(&scratch, x, y) == Some(true) {
        return Ok(());
    }

    // No liberties of our own: legal only if it captures something.
    let neighbors: Vec<_> = scratch.neighbors(x, y).collect();
    for (nx, ny) in neighbors {
        if scratch.get(nx, ny) == Some(stone) {
            continue;
        }
        if has_liberties(&scratch, nx, ny) == Some(false) {
            scratch.set(nx, ny, Intersection::Empty);
            if scratch == *prior {
                return Err(MoveError::Ko);
            }
            return Ok(());
        }
    }

    Err(MoveError::Suicide)
}

/// Boolean form of [`check_placement`].
pub fn can_place(board: &Board, prior: &Board, x: usize, y: usize, color: Color) -> bool {
    check_placement(board, prior, x, y, color).is_ok()
}
