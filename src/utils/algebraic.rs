//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and board
//! squares. File letters are accepted in either case.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{col_of, row_of, square_at, Square, BOARD_SQUARES};

/// Convert algebraic notation (for example: "e4" or "E4") to a square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessError::InvalidAlgebraicChar(bytes[0] as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraicChar(rank as char));
    }

    Ok(square_at(rank - b'1', file - b'a'))
}

/// Convert a square index (`0..=63`) to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> ChessResult<String> {
    if square as usize >= BOARD_SQUARES {
        return Err(ChessError::SquareOutOfBounds(square));
    }

    let file_char = char::from(b'a' + col_of(square));
    let rank_char = char::from(b'1' + row_of(square));

    Ok(format!("{file_char}{rank_char}"))
}
