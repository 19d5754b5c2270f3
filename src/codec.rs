//! Compact text encoding of a board state.
//!
//! An encoded state is the decimal board size, a turn marker (`b` or `w`),
//! and the board packed as a base-3 integer (0 empty, 1 black, 2 white)
//! written in lowercase hex. Points are packed in scan order, x outer and
//! y inner, with the first point as the most significant digit.
//!
//! ```
//! use goban::board::{Board, Color};
//! use goban::codec::{decode, encode};
//!
//! let board = Board::new(9);
//! let state = encode(9, Color::Black, &board).unwrap();
//! assert_eq!(state, "9b0");
//!
//! let decoded = decode(&state).unwrap();
//! assert_eq!(decoded.size, 9);
//! assert_eq!(decoded.turn, Color::Black);
//! assert_eq!(decoded.board, board);
//! ```

use derive_more::{Display, Error};
use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use crate::board::{Board, Color, Intersection};
use crate::constants::{
    DIGIT_BLACK, DIGIT_EMPTY, DIGIT_WHITE, MARKER_BLACK, MARKER_WHITE, MAX_SIZE,
};

/// Errors from encoding or decoding a board state.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum CodecError {
    #[display("size {declared} does not match a {actual}x{actual} board")]
    SizeMismatch { declared: usize, actual: usize },
    #[display("missing turn marker")]
    MissingTurnMarker,
    #[display("invalid board size {_0:?}")]
    InvalidSize(#[error(not(source))] String),
    #[display("invalid board payload {_0:?}")]
    InvalidPayload(#[error(not(source))] String),
    #[display("board payload holds more than {_0} points")]
    PayloadOverflow(#[error(not(source))] usize),
}

/// A decoded board state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedState {
    pub size: usize,
    pub turn: Color,
    pub board: Board,
}

/// Encode `board` with `turn` to move. `size` must match the board.
pub fn encode(size: usize, turn: Color, board: &Board) -> Result<String, CodecError> {
    if size != board.size() {
        return Err(CodecError::SizeMismatch {
            declared: size,
            actual: board.size(),
        });
    }
    Ok(encode_board(turn, board))
}

/// Encode using the board's own size.
pub fn encode_board(turn: Color, board: &Board) -> String {
    let marker = match turn {
        Color::Black => MARKER_BLACK,
        Color::White => MARKER_WHITE,
    };

    let mut packed = BigUint::zero();
    for (_, value) in board.points() {
        packed *= 3u32;
        packed += match value {
            Intersection::Empty => DIGIT_EMPTY,
            Intersection::Black => DIGIT_BLACK,
            Intersection::White => DIGIT_WHITE,
        };
    }

    format!("{}{marker}{}", board.size(), packed.to_str_radix(16))
}

/// Parse an encoded state back into size, turn and board.
pub fn decode(encoded: &str) -> Result<DecodedState, CodecError> {
    let (marker_at, marker) = encoded
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .ok_or(CodecError::MissingTurnMarker)?;

    let turn = match marker {
        MARKER_BLACK => Color::Black,
        MARKER_WHITE => Color::White,
        _ => return Err(CodecError::MissingTurnMarker),
    };

    let size_str = &encoded[..marker_at];
    let size = match size_str.parse::<usize>() {
        Ok(n) if (1..=MAX_SIZE).contains(&n) => n,
        _ => return Err(CodecError::InvalidSize(size_str.to_string())),
    };
    let points = size * size;

    let payload = &encoded[marker_at + marker.len_utf8()..];
    let valid_hex = !payload.is_empty()
        && payload
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
    if !valid_hex {
        return Err(CodecError::InvalidPayload(payload.to_string()));
    }
    if payload.trim_start_matches('0').len() > max_hex_digits(points) {
        return Err(CodecError::PayloadOverflow(points));
    }
    let mut packed = BigUint::parse_bytes(payload.as_bytes(), 16)
        .ok_or_else(|| CodecError::InvalidPayload(payload.to_string()))?;

    let mut board = Board::new(size);
    for x in (0..size).rev() {
        for y in (0..size).rev() {
            let digit = (&packed % 3u32)
                .to_u32()
                .ok_or_else(|| CodecError::InvalidPayload(payload.to_string()))?;
            let value = match digit {
                DIGIT_BLACK => Intersection::Black,
                DIGIT_WHITE => Intersection::White,
                _ => Intersection::Empty,
            };
            board.set(x, y, value);
            packed /= 3u32;
        }
    }

    if !packed.is_zero() {
        return Err(CodecError::PayloadOverflow(points));
    }

    Ok(DecodedState { size, turn, board })
}

/// Upper bound on the significant hex digits of a `points`-digit base-3 number.
fn max_hex_digits(points: usize) -> usize {
    (points as f64 * 3f64.log2() / 4.0).ceil() as usize + 1
}
