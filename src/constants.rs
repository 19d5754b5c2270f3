//! Rule constants and fixed orderings shared by the engine.

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board size (NxN) when none is given. Standard sizes are 9, 13, 19.
pub const DEFAULT_SIZE: usize = 9;

/// Largest board size accepted from decoded states and host commands.
pub const MAX_SIZE: usize = 256;

/// Orthogonal neighbour offsets, in scan order: +x, +y, -x, -y.
///
/// Capture resolution visits neighbours in this order.
pub const NEIGHBORHOOD: [(isize, isize); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

// =============================================================================
// Scoring
// =============================================================================

/// Compensation added to White's area score.
pub const KOMI: f64 = 6.5;

// =============================================================================
// State Encoding
// =============================================================================

/// Turn marker for Black to move.
pub const MARKER_BLACK: char = 'b';

/// Turn marker for White to move.
pub const MARKER_WHITE: char = 'w';

/// Base-3 digit for an empty point.
pub const DIGIT_EMPTY: u32 = 0;

/// Base-3 digit for a black stone.
pub const DIGIT_BLACK: u32 = 1;

/// Base-3 digit for a white stone.
pub const DIGIT_WHITE: u32 = 2;
